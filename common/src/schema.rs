//! カラムスキーマ検証

use crate::error::{ImportError, Result};
use serde::{Deserialize, Serialize};

/// 連絡先CSVで扱うカラム（必須チェックはしない）
pub const CONTACT_COLUMNS: &[&str] = &["name", "sex", "phone", "mail", "fax"];

/// 必須・任意カラム定義
///
/// カラム名は小文字で保持する。`optional` は表示用の案内のみで検証には使わない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

impl ColumnSchema {
    pub fn new<R, O>(required: R, optional: O) -> Self
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        O: IntoIterator,
        O::Item: AsRef<str>,
    {
        Self {
            required: required.into_iter().map(|c| c.as_ref().to_lowercase()).collect(),
            optional: optional.into_iter().map(|c| c.as_ref().to_lowercase()).collect(),
        }
    }

    /// 連絡先インポート用（必須カラムなし）
    pub fn contact() -> Self {
        Self::new(std::iter::empty::<&str>(), CONTACT_COLUMNS)
    }

    /// 連絡先マスタインポート用（`customer_id` 必須）
    pub fn contact_master() -> Self {
        Self::new(["customer_id"], CONTACT_COLUMNS)
    }

    /// ヘッダーに必須カラムがすべて含まれるか検証
    ///
    /// 大文字・小文字は区別しない。不足時は不足カラムを
    /// スキーマ定義順ですべて列挙した `MissingColumns` を返す。
    pub fn validate<S: AsRef<str>>(&self, headers: &[S]) -> Result<()> {
        let lower_headers: Vec<String> = headers
            .iter()
            .map(|h| h.as_ref().to_lowercase())
            .collect();

        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|col| !lower_headers.iter().any(|h| h == &col.to_lowercase()))
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            tracing::debug!(?missing, "必須カラム不足");
            Err(ImportError::MissingColumns(missing))
        }
    }

    /// 選択画面に表示するカラムの案内
    ///
    /// 必須カラムがなければ全カラムを1行で、あれば必須・任意を分けて示す。
    pub fn describe(&self) -> String {
        if self.required.is_empty() {
            format!("カラム: {}", self.optional.join(", "))
        } else if self.optional.is_empty() {
            format!("必須カラム: {}", self.required.join(", "))
        } else {
            format!(
                "必須カラム: {} / 任意カラム: {}",
                self.required.join(", "),
                self.optional.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_missing_required() {
        let schema = ColumnSchema::new(["customer_id"], std::iter::empty::<&str>());
        let result = schema.validate(&["name", "phone"]);
        assert_eq!(
            result,
            Err(ImportError::MissingColumns(vec!["customer_id".to_string()]))
        );
    }

    #[test]
    fn test_validate_case_insensitive() {
        let schema = ColumnSchema::contact_master();
        assert!(schema.validate(&["Customer_ID", "Name"]).is_ok());
        assert!(schema.validate(&["CUSTOMER_ID"]).is_ok());
    }

    #[test]
    fn test_validate_lists_all_missing_in_schema_order() {
        let schema = ColumnSchema::new(["customer_id", "name", "phone"], ["fax"]);
        let result = schema.validate(&["NAME", "mail"]);
        assert_eq!(
            result,
            Err(ImportError::MissingColumns(vec![
                "customer_id".to_string(),
                "phone".to_string(),
            ]))
        );
    }

    #[test]
    fn test_validate_ignores_optional_and_extra_columns() {
        let schema = ColumnSchema::contact_master();
        assert!(schema.validate(&["customer_id", "unknown_column"]).is_ok());
    }

    #[test]
    fn test_contact_schema_accepts_anything() {
        let schema = ColumnSchema::contact();
        assert!(schema.validate::<&str>(&[]).is_ok());
        assert!(schema.validate(&["whatever"]).is_ok());
    }

    #[test]
    fn test_new_lowercases_names() {
        let schema = ColumnSchema::new(["Customer_Id"], ["NAME"]);
        assert_eq!(schema.required, vec!["customer_id"]);
        assert_eq!(schema.optional, vec!["name"]);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            ColumnSchema::contact_master().describe(),
            "必須カラム: customer_id / 任意カラム: name, sex, phone, mail, fax"
        );
        assert_eq!(ColumnSchema::contact().describe(), "カラム: name, sex, phone, mail, fax");
        assert_eq!(
            ColumnSchema::new(["customer_id"], std::iter::empty::<&str>()).describe(),
            "必須カラム: customer_id"
        );
    }
}
