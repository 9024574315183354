//! 設定パネルコンポーネント

use leptos::prelude::*;

#[component]
pub fn SettingsPanel(
    backend_url: ReadSignal<String>,
    set_backend_url: WriteSignal<String>,
    auth_token: ReadSignal<String>,
    set_auth_token: WriteSignal<String>,
    customer_id: ReadSignal<String>,
    set_customer_id: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="settings-panel">
            <div class="settings-grid">
                <div class="form-group">
                    <label for="backend-url">"バックエンドURL"</label>
                    <input
                        type="url"
                        id="backend-url"
                        placeholder="http://localhost:8080"
                        prop:value=move || backend_url.get()
                        on:input=move |ev| {
                            set_backend_url.set(event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="auth-token">"認証トークン"</label>
                    <input
                        type="password"
                        id="auth-token"
                        placeholder="Bearerトークンを入力..."
                        prop:value=move || auth_token.get()
                        on:input=move |ev| {
                            set_auth_token.set(event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="customer-id">"顧客ID"</label>
                    <input
                        type="text"
                        id="customer-id"
                        placeholder="連絡先インポートの取り込み先"
                        prop:value=move || customer_id.get()
                        on:input=move |ev| {
                            set_customer_id.set(event_target_value(&ev));
                        }
                    />
                </div>
            </div>
        </div>
    }
}
