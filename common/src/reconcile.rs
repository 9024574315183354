//! インポート結果の正規化
//!
//! バックエンドはフィールド名を snake_case / camelCase のどちらでも返しうる。
//! レスポンス形状の差異はこのモジュールだけで吸収する。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 結果画面に表示するエラー件数の上限
pub const ERROR_DISPLAY_LIMIT: usize = 10;

/// 行単位のインポート失敗
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRowError {
    /// CSV上の行番号（不明な場合は0）
    pub line_number: u32,
    pub message: String,
}

/// インポート結果
///
/// `errors.len()` は `failed_count` より少ないことがある。
/// サーバーの件数をそのまま信頼し、不足分の詳細は補わない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    pub imported_count: u64,
    pub failed_count: u64,
    pub errors: Vec<ImportRowError>,
}

impl ImportOutcome {
    /// 失敗なしで完了したか
    pub fn is_clean(&self) -> bool {
        self.failed_count == 0
    }

    /// 一部の行が失敗したか
    pub fn is_partial(&self) -> bool {
        self.failed_count > 0
    }

    /// 表示対象のエラー（先頭から最大10件）
    pub fn visible_errors(&self) -> &[ImportRowError] {
        &self.errors[..self.errors.len().min(ERROR_DISPLAY_LIMIT)]
    }

    /// 表示しきれないエラー件数
    pub fn hidden_error_count(&self) -> usize {
        self.errors.len().saturating_sub(ERROR_DISPLAY_LIMIT)
    }
}

/// レスポンスJSONを `ImportOutcome` に変換
///
/// 各フィールドは snake_case を先に、次に camelCase を探す。
/// 件数がなければ0、エラー一覧がなければ空とする。
pub fn reconcile(raw: &Value) -> ImportOutcome {
    let errors = probe(raw, &["errors"])
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(reconcile_row_error).collect())
        .unwrap_or_default();

    ImportOutcome {
        imported_count: probe_count(raw, &["imported_count", "importedCount"]),
        failed_count: probe_count(raw, &["failed_count", "failedCount"]),
        errors,
    }
}

fn reconcile_row_error(entry: &Value) -> ImportRowError {
    let line_number = probe_count(entry, &["line_number", "lineNumber"]);
    let message = probe(entry, &["error_message", "errorMessage", "message"])
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    ImportRowError {
        line_number: u32::try_from(line_number).unwrap_or(u32::MAX),
        message,
    }
}

/// 候補キーのうち最初に存在する（nullでない）値
fn probe<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find(|value| !value.is_null())
}

/// 件数を取得（protobuf JSONのint64は文字列で来る）
fn probe_count(raw: &Value, keys: &[&str]) -> u64 {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find_map(as_count)
        .unwrap_or(0)
}

fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reconcile_naming_conventions_agree() {
        let snake = json!({
            "imported_count": 8,
            "failed_count": 2,
            "errors": [{"line_number": 3, "error_message": "invalid phone"}]
        });
        let camel = json!({
            "importedCount": 8,
            "failedCount": 2,
            "errors": [{"lineNumber": 3, "errorMessage": "invalid phone"}]
        });

        let outcome = reconcile(&snake);
        assert_eq!(outcome, reconcile(&camel));
        assert_eq!(outcome.imported_count, 8);
        assert_eq!(outcome.failed_count, 2);
        assert_eq!(
            outcome.errors,
            vec![ImportRowError {
                line_number: 3,
                message: "invalid phone".to_string(),
            }]
        );
    }

    #[test]
    fn test_reconcile_defaults() {
        let outcome = reconcile(&json!({}));
        assert_eq!(outcome, ImportOutcome::default());
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_reconcile_prefers_snake_case() {
        let outcome = reconcile(&json!({"imported_count": 5, "importedCount": 9}));
        assert_eq!(outcome.imported_count, 5);
    }

    #[test]
    fn test_reconcile_falls_back_when_snake_is_null() {
        let outcome = reconcile(&json!({"imported_count": null, "importedCount": 9}));
        assert_eq!(outcome.imported_count, 9);
    }

    #[test]
    fn test_reconcile_string_counts() {
        let outcome = reconcile(&json!({"importedCount": "120", "failedCount": "0"}));
        assert_eq!(outcome.imported_count, 120);
        assert_eq!(outcome.failed_count, 0);
    }

    #[test]
    fn test_reconcile_does_not_fabricate_errors() {
        let outcome = reconcile(&json!({
            "failedCount": 5,
            "errors": [{"lineNumber": 2, "errorMessage": "bad"}]
        }));
        assert_eq!(outcome.failed_count, 5);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.is_partial());
    }

    #[test]
    fn test_reconcile_row_error_fallbacks() {
        let outcome = reconcile(&json!({
            "errors": [
                {"message": "generic"},
                {"line_number": "7"},
                "not an object"
            ]
        }));
        assert_eq!(outcome.errors[0], ImportRowError { line_number: 0, message: "generic".into() });
        assert_eq!(outcome.errors[1], ImportRowError { line_number: 7, message: String::new() });
        assert_eq!(outcome.errors[2], ImportRowError::default());
    }

    #[test]
    fn test_reconcile_ignores_non_array_errors() {
        let outcome = reconcile(&json!({"importedCount": 1, "errors": "oops"}));
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_visible_and_hidden_errors() {
        let errors: Vec<_> = (1..=13)
            .map(|i| json!({"lineNumber": i, "errorMessage": format!("e{}", i)}))
            .collect();
        let outcome = reconcile(&json!({"failedCount": 13, "errors": errors}));
        assert_eq!(outcome.visible_errors().len(), 10);
        assert_eq!(outcome.visible_errors()[9].line_number, 10);
        assert_eq!(outcome.hidden_error_count(), 3);
    }

    #[test]
    fn test_outcome_serializes_camel_case() {
        let outcome = reconcile(&json!({"imported_count": 1}));
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"importedCount\":1"));
        assert!(json.contains("\"failedCount\":0"));
    }
}
