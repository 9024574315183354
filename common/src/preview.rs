//! プレビュー生成

use crate::csv::ParsedDocument;
use serde::Serialize;

/// プレビュー表示する最大行数
pub const PREVIEW_ROW_LIMIT: usize = 10;

/// 画面表示用のプレビュー
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewView {
    pub headers: Vec<String>,
    pub sample_rows: Vec<Vec<String>>,
    pub total_row_count: usize,
}

impl PreviewView {
    /// 全件を表示しきれていないか
    pub fn is_truncated(&self) -> bool {
        self.total_row_count > self.sample_rows.len()
    }
}

/// 先頭 `limit` 行だけを切り出したプレビューを作る
///
/// 元のドキュメントは変更しない。`total_row_count` は切り出し前の件数。
pub fn build_preview(doc: &ParsedDocument, limit: usize) -> PreviewView {
    PreviewView {
        headers: doc.headers.clone(),
        sample_rows: doc.rows.iter().take(limit).cloned().collect(),
        total_row_count: doc.total_row_count,
    }
}
