//! 送信ペイロードのエンコード
//!
//! エンドポイントごとに受け付けるフィールドが異なるため、
//! エンコード方式はファイル内容ではなくインポート種別で決まる。

use crate::file::decode_text;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// ペイロードのエンコード方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingMode {
    /// デコード済みテキストをそのまま `csv_data` に入れる
    RawText,
    /// 生バイトをBase64にして `file_content` に入れる（非UTF-8のCSVにも対応）
    ByteSafe,
}

/// エンコード済みペイロード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportPayload {
    Text(String),
    Base64(String),
}

/// ファイル内容を指定方式でエンコード
pub fn encode(bytes: &[u8], mode: EncodingMode) -> TransportPayload {
    match mode {
        EncodingMode::RawText => TransportPayload::Text(decode_text(bytes)),
        EncodingMode::ByteSafe => TransportPayload::Base64(STANDARD.encode(bytes)),
    }
}
