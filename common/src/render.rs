//! 一覧テーブルのHTML生成
//!
//! 文字列はすべて挿入前にエスケープする。
//! 生成したHTMLは `<tbody>` の中身としてそのまま差し込む。

use std::fmt::Write;

use crate::view::{Badge, EventRow, EventsView, ItemRow, LogRow, Region};

pub const EVENTS_COLUMNS: usize = 5;
pub const ITEMS_COLUMNS: usize = 6;
pub const LOGS_COLUMNS: usize = 5;

pub const LOADING_TEXT: &str = "読み込み中...";
pub const NO_EVENTS: &str = "イベントがありません";
pub const NO_ITEMS: &str = "対象商品がありません";
pub const NO_LOGS: &str = "ログがありません";

/// `& < > " '` を文字参照に置き換える
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn badge_html(badge: &Badge) -> String {
    match badge.class {
        Some(class) => format!(
            r#"<span class="badge {}">{}</span>"#,
            class,
            escape_html(&badge.label)
        ),
        None => format!(r#"<span class="badge">{}</span>"#, escape_html(&badge.label)),
    }
}

/// 1行だけの案内（読み込み中・空・エラー）
pub fn placeholder_row(colspan: usize, text: &str, class: &str) -> String {
    format!(
        r#"<tr><td colspan="{}" class="{}">{}</td></tr>"#,
        colspan,
        class,
        escape_html(text)
    )
}

pub fn loading_row(colspan: usize) -> String {
    placeholder_row(colspan, LOADING_TEXT, "loading")
}

pub fn empty_row(colspan: usize, text: &str) -> String {
    placeholder_row(colspan, text, "loading")
}

pub fn error_row(colspan: usize, message: &str) -> String {
    placeholder_row(colspan, message, "error")
}

pub fn event_rows(rows: &[EventRow]) -> String {
    if rows.is_empty() {
        return empty_row(EVENTS_COLUMNS, NO_EVENTS);
    }
    let mut html = String::new();
    for row in rows {
        let _ = write!(
            html,
            "<tr><td><strong>{}</strong></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&row.event_key),
            escape_html(&row.prefix_long),
            escape_html(&row.start),
            escape_html(&row.end),
            badge_html(&row.status.badge()),
        );
    }
    html
}

/// 削除ボタンは `data-item` / `data-row` を持ち、tbody側のクリックで拾う
pub fn item_rows(rows: &[ItemRow]) -> String {
    if rows.is_empty() {
        return empty_row(ITEMS_COLUMNS, NO_ITEMS);
    }
    let mut html = String::new();
    for row in rows {
        let number = escape_html(&row.item_manage_number);
        let _ = write!(
            html,
            concat!(
                "<tr><td><strong>{number}</strong></td><td>{current}</td><td>{base}</td>",
                "<td>{badge}</td><td>{updated}</td>",
                r#"<td><button type="button" class="btn btn-small btn-danger" data-action="delete" data-item="{number}" data-row="{row}">削除</button></td></tr>"#
            ),
            number = number,
            current = escape_html(&row.current_title),
            base = escape_html(&row.base_title),
            badge = badge_html(&row.badge),
            updated = escape_html(&row.last_updated),
            row = row.row_index,
        );
    }
    html
}

pub fn log_rows(rows: &[LogRow]) -> String {
    if rows.is_empty() {
        return empty_row(LOGS_COLUMNS, NO_LOGS);
    }
    let mut html = String::new();
    for row in rows {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&row.timestamp),
            escape_html(&row.item_manage_number),
            escape_html(&row.action),
            badge_html(&row.badge),
            escape_html(&row.message),
        );
    }
    html
}

fn region_body<T>(
    region: &Region<T>,
    colspan: usize,
    rows: impl FnOnce(&T) -> String,
) -> String {
    match region {
        Region::Idle => String::new(),
        Region::Loading => loading_row(colspan),
        Region::Loaded(value) => rows(value),
        Region::Failed(message) => error_row(colspan, message),
    }
}

pub fn events_body(region: &Region<EventsView>) -> String {
    region_body(region, EVENTS_COLUMNS, |view| event_rows(&view.rows))
}

pub fn items_body(region: &Region<Vec<ItemRow>>) -> String {
    region_body(region, ITEMS_COLUMNS, |rows| item_rows(rows))
}

pub fn logs_body(region: &Region<Vec<LogRow>>) -> String {
    region_body(region, LOGS_COLUMNS, |rows| log_rows(rows))
}
