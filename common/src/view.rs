//! 表示用モデル
//!
//! API応答を画面の行・バッジ・ステータスカードに変換する。
//! DOMに依存しないのでCLIとWeb(WASM)の両方から使う。

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::time::{format_date, format_datetime, parse_datetime, Clock};
use crate::types::{EventInfo, LogEntry, Mode, Session, Settings, SettingsData, TargetItem};

/// 一覧領域の表示状態
///
/// 取得のたびに `Loading` から作り直すので、失敗時に古い内容は残らない
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for Region<T> {
    fn default() -> Self {
        Region::Idle
    }
}

impl<T> Region<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Region::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Region::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// イベントの開催状況
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Active,
    Past,
    Upcoming,
}

impl EventStatus {
    /// `start ≤ now ≤ end` なら開催中、`now > end` なら終了、それ以外は予定
    ///
    /// 日時が解釈できない場合は比較が成立しないので予定扱いになる
    pub fn classify(
        now: NaiveDateTime,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Self {
        match (start, end) {
            (Some(start), Some(end)) if start <= now && now <= end => EventStatus::Active,
            (_, Some(end)) if now > end => EventStatus::Past,
            _ => EventStatus::Upcoming,
        }
    }

    pub fn badge(self) -> Badge {
        match self {
            EventStatus::Active => Badge::new("開催中", "badge-active"),
            EventStatus::Past => Badge::new("終了", "badge-info"),
            EventStatus::Upcoming => Badge::new("予定", "badge-success"),
        }
    }
}

/// ステータス表示用のタグ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    /// 追加のCSSクラス（未知のステータスは None）
    pub class: Option<&'static str>,
}

impl Badge {
    fn new(label: &str, class: &'static str) -> Self {
        Self {
            label: label.to_string(),
            class: Some(class),
        }
    }

    fn generic(label: &str) -> Self {
        Self {
            label: label.to_string(),
            class: None,
        }
    }
}

/// ログ・対象商品のステータスをバッジに変換
///
/// 未知の値はそのまま汎用バッジで表示する
pub fn status_badge(status: &str) -> Badge {
    match status {
        "SUCCESS" => Badge::new("成功", "badge-success"),
        "FAILED" => Badge::new("失敗", "badge-error"),
        "DRY_RUN" => Badge::new("DryRun", "badge-info"),
        "SKIPPED" => Badge::new("スキップ", "badge-warning"),
        "MANUAL_CHANGE" => Badge::new("手動変更", "badge-warning"),
        "新規" => Badge::new("新規", "badge-info"),
        other => Badge::generic(other),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub event_key: String,
    pub prefix_long: String,
    pub start: String,
    pub end: String,
    pub status: EventStatus,
}

/// イベント一覧の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsView {
    pub rows: Vec<EventRow>,
    /// 次回イベント（なければ "-"）
    pub next_event: String,
}

/// 応答順で最初に `start > now` を満たすイベント（並べ替えはしない）
pub fn next_event<'a>(
    events: &'a [EventInfo],
    now: NaiveDateTime,
    clock: &impl Clock,
) -> Option<&'a EventInfo> {
    events.iter().find(|event| {
        parse_datetime(&event.start_datetime, clock).is_some_and(|start| start > now)
    })
}

impl EventsView {
    pub fn build(events: &[EventInfo], clock: &impl Clock) -> Self {
        let now = clock.now();
        let rows = events
            .iter()
            .map(|event| {
                let start = parse_datetime(&event.start_datetime, clock);
                let end = parse_datetime(&event.end_datetime, clock);
                EventRow {
                    event_key: event.event_key.clone(),
                    prefix_long: event.prefix_long.clone(),
                    start: format_datetime(start),
                    end: format_datetime(end),
                    status: EventStatus::classify(now, start, end),
                }
            })
            .collect();

        let next_event = next_event(events, now, clock).map_or_else(
            || "-".to_string(),
            |event| {
                let start = parse_datetime(&event.start_datetime, clock);
                format!("{} ({})", event.prefix_long, format_date(start))
            },
        );

        Self { rows, next_event }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub item_manage_number: String,
    pub current_title: String,
    pub base_title: String,
    pub badge: Badge,
    pub last_updated: String,
    pub row_index: u32,
}

impl ItemRow {
    pub fn build(item: &TargetItem, clock: &impl Clock) -> Self {
        Self {
            item_manage_number: item.item_manage_number.clone(),
            current_title: or_dash(&item.current_title),
            base_title: or_dash(&item.base_title),
            badge: status_badge(&item.status),
            last_updated: format_datetime(parse_datetime(&item.last_updated, clock)),
            row_index: item.row_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub timestamp: String,
    pub item_manage_number: String,
    pub action: String,
    pub badge: Badge,
    pub message: String,
}

impl LogRow {
    pub fn build(entry: &LogEntry, clock: &impl Clock) -> Self {
        Self {
            timestamp: format_datetime(parse_datetime(&entry.timestamp, clock)),
            item_manage_number: or_dash(&entry.item_manage_number),
            action: or_dash(&entry.action),
            badge: status_badge(&entry.status),
            message: or_dash(&entry.message),
        }
    }
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// ダッシュボード上部のステータスカード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCards {
    pub target_items_count: String,
    pub current_mode: String,
    pub next_event: String,
    pub expiry: String,
}

impl Default for StatusCards {
    fn default() -> Self {
        Self {
            target_items_count: "-".to_string(),
            current_mode: "-".to_string(),
            next_event: "-".to_string(),
            expiry: "-".to_string(),
        }
    }
}

impl StatusCards {
    /// 件数はサーバー応答の `targetItemsCount` を使う（ローカルの件数ではない）
    pub fn apply_settings(&mut self, data: &SettingsData) {
        self.target_items_count = format!("{}件", data.target_items_count);
        self.current_mode = mode_label(data.settings.dry_run).to_string();
    }

    pub fn apply_events(&mut self, view: &EventsView) {
        self.next_event = view.next_event.clone();
    }

    pub fn apply_session(&mut self, session: Option<&Session>, clock: &impl Clock) {
        self.expiry = match session.and_then(|s| s.expiry.as_deref()) {
            Some(expiry) if !expiry.is_empty() => format_date(parse_datetime(expiry, clock)),
            _ => "無期限".to_string(),
        };
    }
}

pub fn mode_label(dry_run: bool) -> &'static str {
    if dry_run {
        "DryRun"
    } else {
        "本番"
    }
}

/// 設定フォームの編集中の値
///
/// 画面の入力欄と1対1で対応し、保存時に `Settings` へ変換する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub mode: String,
    pub dry_run: bool,
    pub max_items_per_run: String,
    pub notify_slack: bool,
    pub notify_email: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl SettingsForm {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            mode: settings.mode.as_str().to_string(),
            dry_run: settings.dry_run,
            max_items_per_run: settings.max_items_per_run.to_string(),
            notify_slack: settings.notify_slack,
            notify_email: settings.notify_email,
        }
    }

    pub fn to_settings(&self) -> Result<Settings> {
        let max_items_per_run = self
            .max_items_per_run
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                Error::Validation("1回の最大処理件数には1以上の数値を入力してください".to_string())
            })?;

        Ok(Settings {
            mode: Mode::from(self.mode.clone()),
            dry_run: self.dry_run,
            max_items_per_run,
            notify_slack: self.notify_slack,
            notify_email: self.notify_email,
        })
    }
}

/// 改行またはカンマで区切られた商品管理番号（空要素は除く）
pub fn parse_item_numbers(input: &str) -> Vec<&str> {
    input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// 送信前の件数プレビュー
pub fn count_item_numbers(input: &str) -> usize {
    parse_item_numbers(input).len()
}
