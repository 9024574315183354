use clap::Parser;
use crm_import::{cli, config, error, import, report};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = cli.default_log_level();
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("ログの初期化に失敗しました: {}", e);
    }

    let config = Config::load()?;

    match cli.command {
        Commands::Preview { file, variant, customer_id, rows } => {
            println!("🔍 crm-import - プレビュー\n");

            let variant = variant.to_variant(customer_id.as_deref())?;
            print!("{}", report::render_format_hint(&variant));
            println!();

            let (name, preview) = import::preview_file(&file, &variant, rows)?;
            print!("{}", report::render_preview(&name, &preview));

            println!("\n✔ 検証OK（送信は行っていません）");
        }

        Commands::Import { file, variant, customer_id, yes, json } => {
            let variant = variant.to_variant(customer_id.as_deref())?;

            if !json {
                println!("📤 crm-import - 連絡先CSVインポート\n");
                print!("{}", report::render_format_hint(&variant));
                println!();
            }

            let options = import::ImportOptions {
                assume_yes: yes,
                quiet: json,
            };
            let outcome = import::run_import(&file, variant, &config, options).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print!("\n{}", report::render_outcome(&outcome));
            }
        }

        Commands::Config { set_token, set_backend_url, show } => {
            let mut config = config;

            if let Some(token) = set_token {
                config.set_auth_token(token)?;
                println!("✔ 認証トークンを設定しました");
            }

            if let Some(url) = set_backend_url {
                config.set_backend_url(url)?;
                println!("✔ バックエンドURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  バックエンドURL: {}", config.backend_url());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  進捗更新間隔: {}ms", config.progress_interval_ms);
                println!(
                    "  認証トークン: {}",
                    if config.get_auth_token().is_ok() { "設定済み" } else { "未設定" }
                );
            }
        }
    }

    Ok(())
}
