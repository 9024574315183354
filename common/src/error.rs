//! エラー型定義
//!
//! ファイル検査・CSV解析・カラム検証・通信の各段階で発生するエラー。
//! 行単位のインポート失敗（`ImportRowError`）はエラーではなく
//! `ImportOutcome` に含まれるデータとして扱う。

use thiserror::Error;

/// インポート処理の共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("CSVファイルのみアップロード可能です: {0}")]
    FileType(String),

    #[error("ファイルサイズは10MB以下にしてください（{size} bytes）")]
    FileSize { size: u64, limit: u64 },

    #[error("ファイルの読み込みに失敗しました: {0}")]
    FileRead(String),

    #[error("CSVファイルが空です")]
    EmptyDocument,

    #[error("必須カラムがありません: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("認証トークンを取得できません: {0}")]
    Auth(String),

    #[error("インポートに失敗しました: {0}")]
    Network(String),

    #[error("レスポンスの解析に失敗しました: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ImportError {
    fn from(e: serde_json::Error) -> Self {
        ImportError::Json(e.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, ImportError>;
