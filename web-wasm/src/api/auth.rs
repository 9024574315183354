//! 設定パネルのトークンを認証プロバイダとして使う

use async_trait::async_trait;
use crm_import_common::{AuthTokenProvider, ImportError, Result};
use leptos::prelude::*;

/// 確定時点の入力値を読む（ダイアログを開いた後の変更も反映される）
#[derive(Clone, Copy)]
pub struct SignalToken(pub ReadSignal<String>);

#[async_trait(?Send)]
impl AuthTokenProvider for SignalToken {
    async fn auth_token(&self) -> Result<String> {
        let token = self.0.try_get_untracked().unwrap_or_default();
        let token = token.trim();
        if token.is_empty() {
            return Err(ImportError::Auth("認証トークンが設定されていません".to_string()));
        }
        Ok(token.to_string())
    }
}
