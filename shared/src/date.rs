//! 时间展示模块
//!
//! 服务端以字符串形式返回时间（RFC 3339 或 `YYYY-MM-DD`），
//! 这里统一解析并生成页面上使用的几种展示格式：
//! - `relative_time`: 通知列表的相对时间（"5m ago"）
//! - `day_label`: 仪表盘的 "Today" / "Yesterday"
//! - `DateParts`: 考勤列表左侧的日期块

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

/// 解析服务端时间字符串
///
/// 依次尝试 RFC 3339、无时区的 ISO 日期时间、纯日期；全部失败返回 None。
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// 短日期，如 "Mar 1"
pub fn short_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d").to_string()
}

/// 相对时间
///
/// 不足 1 分钟（包括未来时间）为 "Just now"，一周以上退回短日期。
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now - ts;
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        short_date(ts)
    }
}

/// 相对于 `today` 的日期标签
pub fn day_label(ts: DateTime<Utc>, today: NaiveDate) -> String {
    let day = ts.date_naive();
    if day == today {
        "Today".to_string()
    } else if today.checked_sub_signed(Duration::days(1)) == Some(day) {
        "Yesterday".to_string()
    } else {
        short_date(ts)
    }
}

/// 字符串版本的 `relative_time`，解析失败时原样返回
pub fn relative_time_str(raw: &str, now: DateTime<Utc>) -> String {
    parse_timestamp(raw)
        .map(|ts| relative_time(ts, now))
        .unwrap_or_else(|| raw.to_string())
}

/// 字符串版本的 `day_label`，解析失败时原样返回
pub fn day_label_str(raw: &str, today: NaiveDate) -> String {
    parse_timestamp(raw)
        .map(|ts| day_label(ts, today))
        .unwrap_or_else(|| raw.to_string())
}

/// 日期块的三个组成部分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    pub day: u32,
    pub month: String,
    pub weekday: String,
}

impl DateParts {
    pub fn from_timestamp(ts: DateTime<Utc>) -> Self {
        Self {
            day: ts.day(),
            month: ts.format("%b").to_string(),
            weekday: ts.format("%a").to_string(),
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        parse_timestamp(raw).map(Self::from_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn parses_all_server_formats() {
        assert_eq!(
            parse_timestamp("2024-03-01T08:30:00Z"),
            Some(at(2024, 3, 1, 8, 30))
        );
        assert_eq!(
            parse_timestamp("2024-03-01T08:30:00+02:00"),
            Some(at(2024, 3, 1, 6, 30))
        );
        assert_eq!(
            parse_timestamp("2024-03-01T08:30:00.000"),
            Some(at(2024, 3, 1, 8, 30))
        );
        assert_eq!(parse_timestamp("2024-03-01"), Some(at(2024, 3, 1, 0, 0)));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn relative_time_buckets() {
        let now = at(2024, 3, 10, 12, 0);
        assert_eq!(relative_time(at(2024, 3, 10, 11, 59), now), "1m ago");
        assert_eq!(relative_time(now, now), "Just now");
        assert_eq!(relative_time(at(2024, 3, 10, 13, 0), now), "Just now");
        assert_eq!(relative_time(at(2024, 3, 10, 9, 0), now), "3h ago");
        assert_eq!(relative_time(at(2024, 3, 8, 12, 0), now), "2d ago");
        assert_eq!(relative_time(at(2024, 2, 1, 12, 0), now), "Feb 1");
    }

    #[test]
    fn day_labels() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(day_label(at(2024, 3, 10, 7, 0), today), "Today");
        assert_eq!(day_label(at(2024, 3, 9, 23, 0), today), "Yesterday");
        assert_eq!(day_label(at(2024, 3, 5, 7, 0), today), "Mar 5");
    }

    #[test]
    fn unparseable_strings_pass_through() {
        let now = at(2024, 3, 10, 12, 0);
        assert_eq!(relative_time_str("soon", now), "soon");
        assert_eq!(day_label_str("n/a", now.date_naive()), "n/a");
    }

    #[test]
    fn date_parts() {
        let parts = DateParts::parse("2024-03-01").unwrap();
        assert_eq!(parts.day, 1);
        assert_eq!(parts.month, "Mar");
        assert_eq!(parts.weekday, "Fri");
    }
}
