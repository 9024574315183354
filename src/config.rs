use crate::error::{CrmImportError, Result};
use crm_import_common::ProgressPlan;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const BACKEND_URL_ENV: &str = "CRM_BACKEND_URL";
const AUTH_TOKEN_ENV: &str = "CRM_AUTH_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend_url: String,
    pub auth_token: Option<String>,
    pub timeout_seconds: u64,
    pub progress_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8082".into(),
            auth_token: None,
            timeout_seconds: 120,
            progress_interval_ms: 200,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CrmImportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("crm-import").join("config.json"))
    }

    /// バックエンドURL（環境変数を優先、末尾のスラッシュは除去）
    pub fn backend_url(&self) -> String {
        let url = std::env::var(BACKEND_URL_ENV).unwrap_or_else(|_| self.backend_url.clone());
        url.trim_end_matches('/').to_string()
    }

    pub fn get_auth_token(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(token) = std::env::var(AUTH_TOKEN_ENV) {
            if !token.trim().is_empty() {
                return Ok(token);
            }
        }

        self.auth_token.clone().ok_or(CrmImportError::MissingAuthToken)
    }

    pub fn set_auth_token(&mut self, token: String) -> Result<()> {
        self.auth_token = Some(token);
        self.save()
    }

    pub fn set_backend_url(&mut self, url: String) -> Result<()> {
        self.backend_url = url;
        self.save()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn progress_plan(&self) -> ProgressPlan {
        ProgressPlan {
            interval: Duration::from_millis(self.progress_interval_ms.max(1)),
            ..ProgressPlan::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend_url, "http://localhost:8082");
        assert!(config.auth_token.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(120));
        assert_eq!(config.progress_plan().interval, Duration::from_millis(200));
    }

    #[test]
    fn test_config_path_under_home_dot_config() {
        let path = Config::config_path().unwrap();
        assert!(path.ends_with(".config/crm-import/config.json"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"backend_url": "https://crm.example.com/"}"#).unwrap();
        assert_eq!(config.backend_url, "https://crm.example.com/");
        assert_eq!(config.timeout_seconds, 120);
    }

    #[test]
    fn test_progress_interval_never_zero() {
        let config = Config {
            progress_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.progress_plan().interval, Duration::from_millis(1));
    }
}
