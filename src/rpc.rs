//! インポートRPCクライアント（reqwest）

use crate::config::Config;
use crate::error::{CrmImportError, Result};
use async_trait::async_trait;
use crm_import_common::{ImportError, ImportRequest, ImportService};
use std::time::Duration;

/// Connect形式（JSON POST）でインポートRPCを呼び出す
#[derive(Debug, Clone)]
pub struct HttpImportService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpImportService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CrmImportError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.backend_url(), config.timeout())
    }

    pub fn url_for(&self, request: &ImportRequest) -> String {
        format!("{}{}", self.base_url, request.endpoint)
    }
}

#[async_trait(?Send)]
impl ImportService for HttpImportService {
    async fn send(
        &self,
        request: &ImportRequest,
        token: &str,
    ) -> crm_import_common::Result<serde_json::Value> {
        let url = self.url_for(request);
        tracing::debug!(%url, "インポートRPC送信");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&request.body)
            .send()
            .await
            .map_err(|e| ImportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "インポートRPCエラー");
            // 本文はそのまま表示する（構造化エラーとしては解釈しない）
            let body = response
                .text()
                .await
                .map_err(|e| ImportError::Network(e.to_string()))?;
            let detail = if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body
            };
            return Err(ImportError::Network(detail));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ImportError::Json(e.to_string()))
    }
}
