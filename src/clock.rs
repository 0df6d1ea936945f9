// src/clock.rs

use chrono::{DateTime, Utc};

/// 当前 UTC 时间，格式 HH:MM:SS
pub fn current_utc_time() -> String {
    format_time(Utc::now())
}

/// 当前 UTC 日期，格式 YYYY-MM-DD
pub fn current_utc_date() -> String {
    format_date(Utc::now())
}

pub fn format_time(at: DateTime<Utc>) -> String {
    at.format("%H:%M:%S").to_string()
}

pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}
