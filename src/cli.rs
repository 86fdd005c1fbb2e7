use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "samurai")]
#[command(about = "商品名自動修正侍 管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ログインするユーザーID（設定ファイルより優先）
    #[arg(short, long, global = true)]
    pub user: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ステータスカード（件数・モード・次回イベント・有効期限）を表示
    Status,

    /// 実行設定の表示/変更
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// イベント一覧を表示
    Events,

    /// 対象商品の管理
    Items {
        #[command(subcommand)]
        action: ItemsAction,
    },

    /// 処理ログを表示
    Logs {
        /// 取得件数（省略時は設定値）
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// 手動実行
    Run {
        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIのURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// ユーザーIDを設定
        #[arg(long)]
        set_user: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// 現在の設定を表示
    Show,

    /// 設定を変更（指定した項目のみ）
    Set {
        /// 動作モード
        #[arg(long)]
        mode: Option<String>,

        /// DryRun (true/false)
        #[arg(long)]
        dry_run: Option<bool>,

        /// 1回の最大処理件数
        #[arg(long)]
        max_items: Option<String>,

        /// Slack通知 (true/false)
        #[arg(long)]
        notify_slack: Option<bool>,

        /// メール通知 (true/false)
        #[arg(long)]
        notify_email: Option<bool>,
    },
}

#[derive(Subcommand)]
pub enum ItemsAction {
    /// 対象商品一覧を表示
    List,

    /// 商品管理番号を一括追加（カンマ・改行区切り）
    Add {
        /// 商品管理番号
        #[arg(required = true)]
        numbers: Vec<String>,

        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,
    },

    /// 対象商品を削除
    Delete {
        /// 商品管理番号
        #[arg(required = true)]
        item: String,

        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,
    },
}
