//! CRM Import Common Library
//!
//! CLIとWeb(WASM)で共有される連絡先CSVインポート処理

pub mod csv;
pub mod schema;
pub mod preview;
pub mod file;
pub mod transport;
pub mod progress;
pub mod reconcile;
pub mod service;
pub mod variant;
pub mod session;
pub mod controller;
pub mod error;

pub use csv::{tokenize, ParsedDocument};
pub use schema::ColumnSchema;
pub use preview::{build_preview, PreviewView, PREVIEW_ROW_LIMIT};
pub use file::{check_file, SelectedFile, MAX_FILE_SIZE};
pub use transport::{encode, EncodingMode, TransportPayload};
pub use progress::{ProgressEstimator, ProgressPlan};
pub use reconcile::{reconcile, ImportOutcome, ImportRowError, ERROR_DISPLAY_LIMIT};
pub use service::{AuthTokenProvider, ImportRequest, ImportRequestBody, ImportService, StaticToken, Ticker};
pub use variant::{ImportKind, ImportVariant};
pub use session::{ImportSession, Phase, SessionView};
pub use controller::ImportController;
pub use error::{ImportError, Result};
