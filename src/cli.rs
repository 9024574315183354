use clap::{Parser, Subcommand, ValueEnum};
use crate::error::{CrmImportError, Result};
use crm_import_common::ImportVariant;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crm-import")]
#[command(about = "顧客管理 連絡先CSVインポートツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// `RUST_LOG` 未設定時のログレベル
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSVを検証してプレビューを表示（送信しない）
    Preview {
        /// CSVファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// インポート種別 (contact/master)
        #[arg(long, value_enum, default_value = "master")]
        variant: VariantArg,

        /// 取り込み先の顧客ID（contactのみ）
        #[arg(short, long)]
        customer_id: Option<String>,

        /// 表示する行数
        #[arg(short, long, default_value = "10")]
        rows: usize,
    },

    /// CSVをインポート
    Import {
        /// CSVファイルのパス
        #[arg(required = true)]
        file: PathBuf,

        /// インポート種別 (contact/master)
        #[arg(long, value_enum, default_value = "master")]
        variant: VariantArg,

        /// 取り込み先の顧客ID（contactのみ）
        #[arg(short, long)]
        customer_id: Option<String>,

        /// 確認せずに実行
        #[arg(short, long)]
        yes: bool,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 認証トークンを設定
        #[arg(long)]
        set_token: Option<String>,

        /// バックエンドURLを設定
        #[arg(long)]
        set_backend_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// インポート種別
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// 顧客を指定して連絡先を取り込む
    Contact,
    /// 各行の customer_id で顧客を指定する
    Master,
}

impl VariantArg {
    pub fn to_variant(self, customer_id: Option<&str>) -> Result<ImportVariant> {
        match self {
            VariantArg::Contact => {
                let customer_id = customer_id
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .ok_or(CrmImportError::MissingCustomerId)?;
                Ok(ImportVariant::contact(customer_id))
            }
            VariantArg::Master => Ok(ImportVariant::contact_master()),
        }
    }
}
