//! Web APIとやり取りする型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Session: ログイン応答と保存されるセッション
//! - Settings: 自動修正の実行設定
//! - EventInfo / TargetItem / LogEntry: 一覧表示用のレコード

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// シート由来の値を文字列として読む（null は空文字、数値や真偽値は文字列化）
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

/// 行位置は数値・数値文字列どちらでも受け付け、読めなければ 0
fn lenient_row_index<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let index = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(index.and_then(|i| u32::try_from(i).ok()).unwrap_or(0))
}

/// ログインセッション
///
/// ログイン応答の `data` とセッションストレージの保存内容は同じ形
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// 有効期限（表示専用、クライアント側では検証しない）
    #[serde(default)]
    pub expiry: Option<String>,
}

impl Session {
    /// トークンとユーザーIDが揃っていれば有効とみなす
    pub fn is_active(&self) -> bool {
        !self.token.is_empty() && !self.user_id.is_empty()
    }

    /// ヘッダー表示名（店舗名がなければユーザーID）
    pub fn display_name(&self) -> &str {
        match self.shop_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.user_id,
        }
    }
}

/// 実行モード
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    /// 対象リストに登録された商品のみ
    #[default]
    TargetList,
    /// サーバーが返した未知のモード（そのまま書き戻す）
    Other(String),
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::TargetList => "TARGET_LIST",
            Mode::Other(value) => value,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Mode::TargetList => "対象リスト",
            Mode::Other(value) => value,
        }
    }
}

impl From<String> for Mode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "TARGET_LIST" | "" => Mode::TargetList,
            _ => Mode::Other(value),
        }
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}

/// 実行設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub mode: Mode,
    pub dry_run: bool,
    pub max_items_per_run: u32,
    pub notify_slack: bool,
    pub notify_email: bool,
}

/// 1回の実行で処理する最大件数の既定値
pub const DEFAULT_MAX_ITEMS_PER_RUN: u32 = 500;

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::TargetList,
            dry_run: false,
            max_items_per_run: DEFAULT_MAX_ITEMS_PER_RUN,
            notify_slack: false,
            notify_email: false,
        }
    }
}

/// `getSettings` の応答データ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsData {
    pub settings: Settings,
    pub target_items_count: u64,
}

/// セールイベント
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub event_key: String,
    #[serde(deserialize_with = "lenient_string")]
    pub prefix_long: String,
    #[serde(deserialize_with = "lenient_string")]
    pub start_datetime: String,
    #[serde(deserialize_with = "lenient_string")]
    pub end_datetime: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsData {
    pub events: Vec<EventInfo>,
}

/// 監視対象の商品
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TargetItem {
    #[serde(deserialize_with = "lenient_string")]
    pub item_manage_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub current_title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub base_title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_updated: String,
    /// 削除時に使うシート上の行位置
    #[serde(deserialize_with = "lenient_row_index")]
    pub row_index: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetItemsData {
    pub items: Vec<TargetItem>,
}

/// 実行ログ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub timestamp: String,
    #[serde(deserialize_with = "lenient_string")]
    pub item_manage_number: String,
    #[serde(deserialize_with = "lenient_string")]
    pub action: String,
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(deserialize_with = "lenient_string")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogsData {
    pub logs: Vec<LogEntry>,
}
