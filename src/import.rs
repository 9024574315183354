//! CLIのインポート処理
//!
//! 読み込み → プレビュー → 確認 → 送信（疑似プログレス表示）→ 結果

use crate::auth::ConfigTokenProvider;
use crate::config::Config;
use crate::error::{CrmImportError, Result};
use crate::loader::load_selected_file;
use crate::report;
use crate::rpc::HttpImportService;
use crate::ticker::TokioTicker;
use crm_import_common::{
    build_preview, tokenize, ImportController, ImportOutcome, ImportVariant, Phase, PreviewView,
};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// 確認プロンプトを出さない（失敗時も再試行しない）
    pub assume_yes: bool,
    /// 人間向けの表示を抑える
    pub quiet: bool,
}

/// ファイルを検証してプレビューを返す（送信しない）
pub fn preview_file(path: &Path, variant: &ImportVariant, rows: usize) -> Result<(String, PreviewView)> {
    let file = load_selected_file(path)?;
    let doc = tokenize(&file.text())?;
    variant.schema.validate(&doc.headers)?;
    Ok((file.name, build_preview(&doc, rows)))
}

/// インポートを実行
pub async fn run_import(
    path: &Path,
    variant: ImportVariant,
    config: &Config,
    options: ImportOptions,
) -> Result<ImportOutcome> {
    let file = load_selected_file(path)?;
    let service = HttpImportService::from_config(config)?;

    let bar = ProgressBar::hidden();
    bar.set_length(100);
    bar.set_style(
        ProgressStyle::with_template("インポート中... [{bar:40.cyan/blue}] {pos}%")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let bar_handle = bar.clone();

    let controller = ImportController::new(
        variant,
        ConfigTokenProvider::new(config.clone()),
        service,
        TokioTicker,
    )
    .with_plan(config.progress_plan())
    .on_change(move |session| {
        if session.phase() == Phase::Importing {
            bar_handle.set_position(u64::from(session.progress()));
        }
    });

    controller.select_file(file)?;

    if !options.quiet {
        let view = controller.snapshot();
        if let (Some(name), Some(preview)) = (view.file_name.as_deref(), view.preview.as_ref()) {
            println!("{}", report::render_preview(name, preview));
        }
    }

    loop {
        if !options.assume_yes && !prompt("インポートを開始しますか?")? {
            controller.close();
            return Err(CrmImportError::Aborted);
        }

        if !options.quiet {
            bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        }
        bar.set_position(0);

        match controller.confirm().await {
            Ok(Some(outcome)) => {
                bar.finish_and_clear();
                return Ok(outcome);
            }
            Ok(None) => {
                bar.finish_and_clear();
                return Err(CrmImportError::Aborted);
            }
            Err(e) => {
                bar.abandon();
                eprintln!("✖ {}", e);
                if options.assume_yes || !prompt("同じファイルで再試行しますか?")? {
                    return Err(e.into());
                }
            }
        }
    }
}

fn prompt(message: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()
        .map_err(|e| CrmImportError::Prompt(e.to_string()))
}
