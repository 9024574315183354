//! 疑似プログレス表示
//!
//! 値はサーバーの進捗ではなく経過時間による推定。応答が届くまで90%で止まる。

use leptos::prelude::*;

#[component]
pub fn ProgressBar(progress: Signal<u8>) -> impl IntoView {
    let label = move || match progress.get() {
        100 => "完了しました".to_string(),
        p => format!("インポート中... {}%", p),
    };

    view! {
        <div
            class="progress-container"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || progress.get().to_string()
        >
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", progress.get())
                />
            </div>
            <p class="progress-text">{label}</p>
        </div>
    }
}
