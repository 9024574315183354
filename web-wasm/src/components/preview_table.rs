//! プレビューテーブルコンポーネント

use crm_import_common::PreviewView;
use leptos::prelude::*;

#[component]
pub fn PreviewTable(preview: PreviewView) -> impl IntoView {
    let summary = if preview.is_truncated() {
        format!(
            "全{}件中、先頭{}件を表示しています",
            preview.total_row_count,
            preview.sample_rows.len()
        )
    } else {
        format!("全{}件", preview.total_row_count)
    };

    let header_cells = preview
        .headers
        .iter()
        .map(|header| view! { <th>{header.clone()}</th> })
        .collect_view();

    let rows = preview
        .sample_rows
        .into_iter()
        .map(|row| {
            let cells = row
                .into_iter()
                .map(|cell| view! { <td>{cell}</td> })
                .collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="preview">
            <p class="preview-summary">{summary}</p>
            <div class="preview-table-wrapper">
                <table class="preview-table">
                    <thead>
                        <tr>{header_cells}</tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>
    }
}
