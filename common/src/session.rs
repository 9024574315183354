//! インポートセッション（状態機械）
//!
//! `Selecting → Previewing → Importing → Reporting` の4状態。
//! 通信やタイマーは持たず、遷移と保持データだけを管理する。
//! 非同期の駆動は `controller` が行う。

use crate::csv::tokenize;
use crate::error::{ImportError, Result};
use crate::file::{check_file, SelectedFile};
use crate::preview::{build_preview, PreviewView, PREVIEW_ROW_LIMIT};
use crate::progress::{ProgressEstimator, ProgressPlan};
use crate::reconcile::{reconcile, ImportOutcome};
use crate::service::{ImportRequest, ImportRequestBody};
use crate::transport::encode;
use crate::variant::ImportVariant;
use serde::Serialize;

/// セッションの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Selecting,
    Previewing,
    Importing,
    Reporting,
}

impl Phase {
    pub fn title(&self) -> &'static str {
        match self {
            Phase::Selecting => "連絡先CSVインポート",
            Phase::Previewing => "インポート内容の確認",
            Phase::Importing => "インポート処理",
            Phase::Reporting => "インポート結果",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Phase::Selecting => "連絡先データをCSVファイルからインポートします",
            Phase::Previewing => "インポートする内容を確認してください",
            Phase::Importing => "しばらくお待ちください...",
            Phase::Reporting => "インポート処理が完了しました",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Selecting => "selecting",
            Phase::Previewing => "previewing",
            Phase::Importing => "importing",
            Phase::Reporting => "reporting",
        }
    }
}

/// 画面描画用のスナップショット（ファイル本体は含まない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub phase: Phase,
    pub file_name: Option<String>,
    pub preview: Option<PreviewView>,
    pub error: Option<String>,
    pub progress: u8,
    pub outcome: Option<ImportOutcome>,
}

/// 1回のダイアログ表示に対応するセッション
#[derive(Debug, Clone)]
pub struct ImportSession {
    variant: ImportVariant,
    phase: Phase,
    file: Option<SelectedFile>,
    preview: Option<PreviewView>,
    error: Option<ImportError>,
    progress: ProgressEstimator,
    outcome: Option<ImportOutcome>,
}

impl ImportSession {
    pub fn new(variant: ImportVariant) -> Self {
        Self::with_plan(variant, ProgressPlan::default())
    }

    pub fn with_plan(variant: ImportVariant, plan: ProgressPlan) -> Self {
        Self {
            variant,
            phase: Phase::Selecting,
            file: None,
            preview: None,
            error: None,
            progress: ProgressEstimator::new(plan),
            outcome: None,
        }
    }

    pub fn variant(&self) -> &ImportVariant {
        &self.variant
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewView> {
        self.preview.as_ref()
    }

    pub fn error(&self) -> Option<&ImportError> {
        self.error.as_ref()
    }

    pub fn progress(&self) -> u8 {
        self.progress.value()
    }

    pub fn progress_plan(&self) -> ProgressPlan {
        self.progress.plan()
    }

    pub fn outcome(&self) -> Option<&ImportOutcome> {
        self.outcome.as_ref()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            file_name: self.file.as_ref().map(|f| f.name.clone()),
            preview: self.preview.clone(),
            error: self.error.as_ref().map(ToString::to_string),
            progress: self.progress.value(),
            outcome: self.outcome.clone(),
        }
    }

    /// ファイル選択
    ///
    /// 拡張子・サイズ検査 → トークナイズ → カラム検証を同期的に行う（通信なし）。
    /// 成功すれば `Previewing`、失敗すれば `Selecting` のままエラーを保持し、
    /// ファイルは保持しない。`Selecting` 以外では何もしない。
    pub fn select_file(&mut self, file: SelectedFile) -> Result<()> {
        if self.phase != Phase::Selecting {
            tracing::debug!(phase = self.phase.as_str(), "ファイル選択を無視");
            return Ok(());
        }

        match self.load(&file) {
            Ok(preview) => {
                tracing::debug!(file = %file.name, rows = preview.total_row_count, "プレビューへ遷移");
                self.file = Some(file);
                self.preview = Some(preview);
                self.error = None;
                self.phase = Phase::Previewing;
                Ok(())
            }
            Err(e) => {
                tracing::debug!(file = %file.name, error = %e, "ファイルを受け付けない");
                self.file = None;
                self.preview = None;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// 読み込み前の拡張子・サイズ検査
    ///
    /// 大きなファイルを読み込む前に弾くためのもの。失敗時はエラーを保持する。
    pub fn precheck(&mut self, name: &str, size: u64) -> Result<()> {
        check_file(name, size).inspect_err(|e| self.reject_file(e.clone()))
    }

    /// ファイルを受け付けなかったことを記録（`Selecting` のみ）
    pub fn reject_file(&mut self, error: ImportError) {
        if self.phase != Phase::Selecting {
            return;
        }
        self.file = None;
        self.preview = None;
        self.error = Some(error);
    }

    fn load(&self, file: &SelectedFile) -> Result<PreviewView> {
        check_file(&file.name, file.size())?;
        let doc = tokenize(&file.text())?;
        self.variant.schema.validate(&doc.headers)?;
        Ok(build_preview(&doc, PREVIEW_ROW_LIMIT))
    }

    /// インポート開始
    ///
    /// `Previewing` のときだけ `Importing` に遷移し、送信リクエストを返す。
    /// それ以外（インポート中の二重確定を含む）は `None`。
    pub fn begin_import(&mut self) -> Option<ImportRequest> {
        if self.phase != Phase::Previewing {
            return None;
        }
        let file = self.file.as_ref()?;

        let payload = encode(&file.bytes, self.variant.encoding);
        let request = ImportRequest {
            endpoint: self.variant.endpoint.clone(),
            body: ImportRequestBody::new(payload, &file.name, self.variant.owner_id.as_deref()),
        };

        self.error = None;
        self.progress = ProgressEstimator::new(self.progress.plan());
        self.progress.start();
        self.phase = Phase::Importing;
        tracing::info!(file = %file.name, endpoint = %request.endpoint, "インポート開始");
        Some(request)
    }

    /// 疑似プログレスを1ティック進める（`Importing` 中のみ）
    pub fn tick(&mut self) -> u8 {
        if self.phase == Phase::Importing {
            self.progress.tick();
        }
        self.progress.value()
    }

    /// 応答受信
    ///
    /// 成功なら結果を正規化して `Reporting`。失敗なら `Previewing` に戻り、
    /// ファイルを保持したままエラーを表示する。どちらも進捗は100にする。
    pub fn complete(&mut self, response: Result<serde_json::Value>) {
        if self.phase != Phase::Importing {
            return;
        }
        self.progress.finish();

        match response {
            Ok(raw) => {
                let outcome = reconcile(&raw);
                tracing::info!(
                    imported = outcome.imported_count,
                    failed = outcome.failed_count,
                    "インポート完了"
                );
                self.outcome = Some(outcome);
                self.phase = Phase::Reporting;
            }
            Err(e) => {
                tracing::warn!(error = %e, "インポート失敗");
                self.error = Some(e);
                self.phase = Phase::Previewing;
            }
        }
    }

    /// 最初の状態に戻す（インポート中は不可）
    pub fn reset(&mut self) -> bool {
        if self.phase == Phase::Importing {
            return false;
        }
        let plan = self.progress.plan();
        *self = Self::with_plan(self.variant.clone(), plan);
        true
    }
}
