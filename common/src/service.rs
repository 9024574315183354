//! 外部協調者とのインターフェース
//!
//! 認証トークン取得・インポートRPC・タイマーを注入可能にし、
//! セッション本体をブラウザでもCLIでも同じコードで動かす。
//! ブラウザのFutureは `Send` でないため `?Send` を付ける。

use crate::error::Result;
use crate::transport::TransportPayload;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// RPCに送るリクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    /// `/contact.v1.ContactService/ImportContact` 形式のパス
    pub endpoint: String,
    pub body: ImportRequestBody,
}

/// リクエストボディ（JSON）
///
/// エンコード方式ごとに使うフィールドが決まっている。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_data: Option<String>,
}

impl ImportRequestBody {
    pub fn new(payload: TransportPayload, file_name: &str, owner_id: Option<&str>) -> Self {
        let customer_id = owner_id.map(str::to_string);
        match payload {
            TransportPayload::Text(text) => Self {
                customer_id,
                csv_data: Some(text),
                ..Default::default()
            },
            TransportPayload::Base64(content) => Self {
                customer_id,
                file_name: Some(file_name.to_string()),
                file_content: Some(content),
                ..Default::default()
            },
        }
    }
}

/// 認証トークン取得
#[async_trait(?Send)]
pub trait AuthTokenProvider {
    async fn auth_token(&self) -> Result<String>;
}

/// インポートRPC
///
/// 成功時はレスポンスJSONをそのまま返す（形状の解釈は `reconcile` が行う）。
/// 非2xxは本文テキストを `ImportError::Network` に入れて返す。
#[async_trait(?Send)]
pub trait ImportService {
    async fn send(&self, request: &ImportRequest, token: &str) -> Result<serde_json::Value>;
}

/// 疑似プログレス用のタイマー
#[async_trait(?Send)]
pub trait Ticker {
    /// `period` だけ待つ
    async fn tick(&self, period: Duration);
}

/// 固定トークンを返すプロバイダ
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[async_trait(?Send)]
impl AuthTokenProvider for StaticToken {
    async fn auth_token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
