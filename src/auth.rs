use crate::config::Config;
use async_trait::async_trait;
use crm_import_common::{AuthTokenProvider, ImportError};

/// 設定ファイル・環境変数から認証トークンを取得する
///
/// トークンはインポート確定時に解決する（プレビューだけなら不要）。
#[derive(Debug, Clone)]
pub struct ConfigTokenProvider {
    config: Config,
}

impl ConfigTokenProvider {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl AuthTokenProvider for ConfigTokenProvider {
    async fn auth_token(&self) -> crm_import_common::Result<String> {
        self.config
            .get_auth_token()
            .map_err(|e| ImportError::Auth(e.to_string()))
    }
}
