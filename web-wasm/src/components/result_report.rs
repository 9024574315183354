//! インポート結果コンポーネント

use crm_import_common::ImportOutcome;
use leptos::prelude::*;

#[component]
pub fn ResultReport(outcome: ImportOutcome) -> impl IntoView {
    let (status_class, headline) = if outcome.is_clean() {
        ("result-status success", "インポート完了")
    } else {
        ("result-status partial", "インポート完了（一部エラーあり）")
    };

    let errors = outcome
        .visible_errors()
        .iter()
        .map(|e| {
            let line = format!("{}行目: {}", e.line_number, e.message);
            view! { <li>{line}</li> }
        })
        .collect_view();

    let hidden = outcome.hidden_error_count();
    let has_errors = !outcome.errors.is_empty();

    view! {
        <div class="result-report">
            <p class=status_class>{headline}</p>
            <dl class="result-counts">
                <dt>"成功"</dt>
                <dd>{format!("{}件", outcome.imported_count)}</dd>
                <dt>"失敗"</dt>
                <dd>{format!("{}件", outcome.failed_count)}</dd>
            </dl>
            <Show when=move || has_errors>
                <p class="result-errors-title">"エラー詳細"</p>
            </Show>
            <ul class="result-errors">
                {errors}
            </ul>
            <Show when=move || { hidden > 0 }>
                <p class="text-muted">{format!("他 {} 件のエラー", hidden)}</p>
            </Show>
        </div>
    }
}
