use clap::Parser;
use dialoguer::{Confirm, Password};
use samurai_admin::admin::{Admin, SettingsChanges};
use samurai_admin::{cli, config, error, transport};
use cli::{Cli, Commands, ItemsAction, SettingsAction};
use config::{Config, ENV_PASSWORD};
use error::{AdminError, Result};
use samurai_admin_common::LocalClock;
use tracing_subscriber::{fmt, EnvFilter};
use transport::ReqwestTransport;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 確認プロンプト（`--yes` 指定時は省略）
fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

fn read_password() -> Result<String> {
    if let Ok(password) = std::env::var(ENV_PASSWORD) {
        if !password.is_empty() {
            return Ok(password);
        }
    }
    Ok(Password::new().with_prompt("パスワード").interact()?)
}

/// `samurai config`
///
/// 環境変数の上書きを保存しないよう、ファイルの内容から編集する
fn configure(
    effective: &Config,
    set_api_url: Option<String>,
    set_user: Option<String>,
    show: bool,
) -> Result<()> {
    let mut stored = Config::load()?;
    let changed = set_api_url.is_some() || set_user.is_some();

    if let Some(url) = set_api_url {
        stored.set_api_url(url)?;
        println!("✔ APIのURLを設定しました");
    }
    if let Some(user) = set_user {
        stored.set_user_id(user)?;
        println!("✔ ユーザーIDを設定しました");
    }
    if changed {
        stored.save()?;
    }

    if show || !changed {
        let shown = if changed { &stored } else { effective };
        println!("設定:");
        println!("  ファイル: {}", Config::config_path()?.display());
        println!("  API URL: {}", shown.api_url);
        println!("  ユーザーID: {}", shown.user_id.as_deref().unwrap_or("未設定"));
        println!("  ログ取得件数: {}", shown.logs_limit);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load()?.with_env();
    if let Some(user) = cli.user.clone() {
        config.set_user_id(user)?;
    }

    let command = match cli.command {
        Commands::Config { set_api_url, set_user, show } => {
            return configure(&config, set_api_url, set_user, show);
        }
        command => command,
    };

    let user_id = config.user_id()?.to_string();
    let password = read_password()?;
    let transport = ReqwestTransport::new(config.request_timeout())?;
    let admin = Admin::new(transport, LocalClock, config.client_config());
    let session = admin.login(&user_id, &password).await?;
    println!("🗡  {} でログイン中\n", session.display_name());

    match command {
        Commands::Status => {
            print!("{}", admin.status().await?);
        }

        Commands::Settings { action } => match action {
            SettingsAction::Show => print!("{}", admin.settings_show().await?),
            SettingsAction::Set {
                mode,
                dry_run,
                max_items,
                notify_slack,
                notify_email,
            } => {
                let changes = SettingsChanges {
                    mode,
                    dry_run,
                    max_items,
                    notify_slack,
                    notify_email,
                };
                if changes.is_empty() {
                    return Err(AdminError::Input("変更する項目を指定してください".into()));
                }
                print!("{}", admin.settings_set(&changes).await?);
            }
        },

        Commands::Events => {
            print!("{}", admin.events().await?);
        }

        Commands::Items { action } => match action {
            ItemsAction::List => print!("{}", admin.items_list().await?),
            ItemsAction::Add { numbers, yes } => {
                let input = numbers.join("\n");
                let count = samurai_admin_common::view::count_item_numbers(&input);
                if !confirm(&format!("{}件を対象商品に追加しますか？", count), yes)? {
                    println!("中止しました");
                    return Ok(());
                }
                println!("✔ {}\n", admin.items_add(&input).await?);
                print!("{}", admin.items_list().await?);
            }
            ItemsAction::Delete { item, yes } => {
                let row = admin.find_item(&item).await?;
                let prompt = format!("{} を対象商品から削除しますか？", row.item_manage_number);
                if !confirm(&prompt, yes)? {
                    println!("中止しました");
                    return Ok(());
                }
                println!("✔ {}\n", admin.items_delete(&row).await?);
                print!("{}", admin.items_list().await?);
            }
        },

        Commands::Logs { limit } => {
            print!("{}", admin.logs(limit).await?);
        }

        Commands::Run { yes } => {
            if !confirm("手動実行しますか？", yes)? {
                println!("中止しました");
                return Ok(());
            }
            println!("⏳ 実行中...");
            println!("✔ {}", admin.run().await?);
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}
