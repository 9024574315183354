//! インポート種別
//!
//! 連絡先インポートと連絡先マスタインポートは、
//! スキーマ・エンドポイント・エンコード方式だけが異なる。

use crate::schema::ColumnSchema;
use crate::transport::EncodingMode;
use serde::{Deserialize, Serialize};

pub const CONTACT_IMPORT_ENDPOINT: &str = "/contact.v1.ContactService/ImportContact";
pub const CONTACT_MASTER_IMPORT_ENDPOINT: &str =
    "/contact.v1.ContactService/ImportContactWithCustomer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportKind {
    /// 特定顧客への連絡先インポート
    Contact,
    /// 各行の `customer_id` で顧客を指定するマスタインポート
    ContactMaster,
}

/// セッションの設定値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportVariant {
    pub kind: ImportKind,
    pub schema: ColumnSchema,
    pub endpoint: String,
    pub encoding: EncodingMode,
    /// 取り込み先の顧客ID（Contactのみ）
    pub owner_id: Option<String>,
}

impl ImportVariant {
    pub fn contact(customer_id: impl Into<String>) -> Self {
        Self {
            kind: ImportKind::Contact,
            schema: ColumnSchema::contact(),
            endpoint: CONTACT_IMPORT_ENDPOINT.to_string(),
            encoding: EncodingMode::ByteSafe,
            owner_id: Some(customer_id.into()),
        }
    }

    pub fn contact_master() -> Self {
        Self {
            kind: ImportKind::ContactMaster,
            schema: ColumnSchema::contact_master(),
            endpoint: CONTACT_MASTER_IMPORT_ENDPOINT.to_string(),
            encoding: EncodingMode::RawText,
            owner_id: None,
        }
    }

    /// フォーマット説明用のサンプル
    pub fn sample_csv(&self) -> &'static str {
        match self.kind {
            ImportKind::Contact => "name,sex,phone,mail,fax\n山田太郎,男,03-1234-5678,yamada@example.com,03-1234-5679",
            ImportKind::ContactMaster => "customer_id,name,sex,phone,mail,fax\n550e8400-e29b-41d4-a716-446655440000,山田太郎,男,03-1234-5678,yamada@example.com,03-1234-5679",
        }
    }
}
