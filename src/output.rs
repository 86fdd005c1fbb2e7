//! 端末向けのテキスト表示

use samurai_admin_common::render::{NO_EVENTS, NO_ITEMS, NO_LOGS};
use samurai_admin_common::view::{EventsView, ItemRow, LogRow};
use samurai_admin_common::{SettingsForm, StatusCards};
use std::fmt::Write;

fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}

pub fn format_cards(cards: &StatusCards) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "対象商品数: {}", cards.target_items_count);
    let _ = writeln!(out, "現在のモード: {}", cards.current_mode);
    let _ = writeln!(out, "次回イベント: {}", cards.next_event);
    let _ = writeln!(out, "有効期限: {}", cards.expiry);
    out
}

pub fn format_settings(form: &SettingsForm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "設定:");
    let _ = writeln!(out, "  モード: {}", form.mode);
    let _ = writeln!(out, "  DryRun: {}", on_off(form.dry_run));
    let _ = writeln!(out, "  1回の最大処理件数: {}", form.max_items_per_run);
    let _ = writeln!(out, "  Slack通知: {}", on_off(form.notify_slack));
    let _ = writeln!(out, "  メール通知: {}", on_off(form.notify_email));
    out
}

pub fn format_events(view: &EventsView) -> String {
    if view.rows.is_empty() {
        return format!("{}\n", NO_EVENTS);
    }
    let mut out = String::new();
    for row in &view.rows {
        let _ = writeln!(
            out,
            "[{}] {}  {}  {} 〜 {}",
            row.status.badge().label,
            row.event_key,
            row.prefix_long,
            row.start,
            row.end
        );
    }
    out
}

pub fn format_items(rows: &[ItemRow]) -> String {
    if rows.is_empty() {
        return format!("{}\n", NO_ITEMS);
    }
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{}  [{}]  更新: {}",
            row.item_manage_number, row.badge.label, row.last_updated
        );
        let _ = writeln!(out, "    現在: {}", row.current_title);
        let _ = writeln!(out, "    ベース: {}", row.base_title);
    }
    let _ = writeln!(out, "合計 {}件", rows.len());
    out
}

pub fn format_logs(rows: &[LogRow]) -> String {
    if rows.is_empty() {
        return format!("{}\n", NO_LOGS);
    }
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{}  {}  {}  [{}]  {}",
            row.timestamp, row.item_manage_number, row.action, row.badge.label, row.message
        );
    }
    out
}
