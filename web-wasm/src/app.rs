//! メインアプリケーションコンポーネント

use crate::components::{
    header::Header,
    import_dialog::ImportDialog,
    settings_panel::SettingsPanel,
};
use crm_import_common::{ImportKind, ImportOutcome};
use leptos::prelude::*;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// 直近のインポート結果の要約
fn summarize(kind: ImportKind, outcome: &ImportOutcome) -> String {
    let label = match kind {
        ImportKind::Contact => "連絡先",
        ImportKind::ContactMaster => "連絡先マスタ",
    };
    if outcome.is_clean() {
        format!("{}を{}件インポートしました", label, outcome.imported_count)
    } else {
        format!(
            "{}を{}件インポートしました（失敗 {}件）",
            label, outcome.imported_count, outcome.failed_count
        )
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (backend_url, set_backend_url) = signal(DEFAULT_BACKEND_URL.to_string());
    let (auth_token, set_auth_token) = signal(String::new());
    let (customer_id, set_customer_id) = signal(String::new());

    // 開いているダイアログ（None なら閉じている）
    let (dialog, set_dialog) = signal(None::<ImportKind>);
    let (last_result, set_last_result) = signal(None::<String>);

    let has_customer = move || !customer_id.get().trim().is_empty();

    let open = move |kind: ImportKind| {
        set_dialog.set(Some(kind));
    };

    view! {
        <div class="container">
            <Header backend_url=backend_url />

            <SettingsPanel
                backend_url=backend_url
                set_backend_url=set_backend_url
                auth_token=auth_token
                set_auth_token=set_auth_token
                customer_id=customer_id
                set_customer_id=set_customer_id
            />

            <div class="import-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || !has_customer()
                    on:click=move |_| open(ImportKind::Contact)
                >
                    "連絡先をインポート"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| open(ImportKind::ContactMaster)
                >
                    "連絡先マスタをインポート"
                </button>
            </div>

            <Show
                when=move || last_result.get().is_some()
                fallback=|| view! { <p class="text-muted">"CSVファイルから連絡先を一括登録できます"</p> }
            >
                <p class="status-message">{move || last_result.get().unwrap_or_default()}</p>
            </Show>

            {move || {
                dialog.get().map(|kind| {
                    view! {
                        <ImportDialog
                            kind=kind
                            backend_url=backend_url.get_untracked()
                            auth_token=auth_token
                            customer_id=customer_id.get_untracked()
                            on_close=move || set_dialog.set(None)
                            on_success=move |outcome: ImportOutcome| {
                                set_last_result.try_set(Some(summarize(kind, &outcome)));
                            }
                        />
                    }
                })
            }}
        </div>
    }
}
