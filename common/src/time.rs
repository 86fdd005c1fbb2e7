//! 日時の解釈と表示
//!
//! サーバーの日時文字列は ISO 8601（タイムゾーン付き/なし）を想定。
//! タイムゾーン付きは表示側のローカル時刻に変換し、なしはローカル時刻として扱う。

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};

/// 現在時刻とローカル時刻への変換
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
    fn localize(&self, instant: &DateTime<FixedOffset>) -> NaiveDateTime;
}

/// 実行環境のローカルタイムゾーン
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn localize(&self, instant: &DateTime<FixedOffset>) -> NaiveDateTime {
        instant.with_timezone(&Local).naive_local()
    }
}

/// 固定の現在時刻と時差（テスト用途など）
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: NaiveDateTime,
    pub offset: FixedOffset,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime, offset: FixedOffset) -> Self {
        Self { now, offset }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn localize(&self, instant: &DateTime<FixedOffset>) -> NaiveDateTime {
        instant.with_timezone(&self.offset).naive_local()
    }
}

const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// 日時文字列をローカル時刻に変換。解釈できなければ None
pub fn parse_datetime(value: &str, clock: &impl Clock) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(clock.localize(&instant));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive);
        }
    }
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// YYYY/MM/DD
pub fn format_date(value: Option<NaiveDateTime>) -> String {
    value.map_or_else(|| "-".to_string(), |dt| dt.format("%Y/%m/%d").to_string())
}

/// YYYY/MM/DD HH:MM
pub fn format_datetime(value: Option<NaiveDateTime>) -> String {
    value.map_or_else(
        || "-".to_string(),
        |dt| dt.format("%Y/%m/%d %H:%M").to_string(),
    )
}
