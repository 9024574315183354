use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrmImportError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("認証トークンが設定されていません。`crm-import config --set-token YOUR_TOKEN` で設定してください")]
    MissingAuthToken,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("顧客IDが必要です（--customer-id）")]
    MissingCustomerId,

    #[error("HTTPクライアントエラー: {0}")]
    Http(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("インポートを中止しました")]
    Aborted,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Import(#[from] crm_import_common::ImportError),
}

pub type Result<T> = std::result::Result<T, CrmImportError>;
