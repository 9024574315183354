//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(
    /// 接続先（未設定なら非表示）
    backend_url: ReadSignal<String>,
) -> impl IntoView {
    let target = move || {
        let url = backend_url.get();
        let url = url.trim();
        (!url.is_empty()).then(|| format!("接続先: {}", url))
    };

    view! {
        <header class="header">
            <h1>"顧客管理 - 連絡先インポート"</h1>
            <p class="header-target">{target}</p>
        </header>
    }
}
