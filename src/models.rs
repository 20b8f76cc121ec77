// src/models.rs

use crate::error::{DiaryError, Result};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use std::fmt;

/// 条目时间戳的固定格式，例如 `Tue Jan 07 14:32:05 2025`
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// 解析时忽略星期字段，只看月、日、时间和年份
const PARSE_FORMAT: &str = "%b %d %H:%M:%S %Y";

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// 将存储的时间戳文本解析为结构化时间
///
/// 连续空白会被折叠，因此 `Jan  7` 和 `Jan 07` 都能解析。
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let normalized = text.split_whitespace().skip(1).collect::<Vec<_>>().join(" ");
    NaiveDateTime::parse_from_str(&normalized, PARSE_FORMAT).ok()
}

fn check_single_line(content: &str) -> Result<()> {
    if content.contains(['\n', '\r']) {
        return Err(DiaryError::InvalidContent);
    }
    Ok(())
}

/// 一条日记记录：创建时间 + 单行文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    timestamp: String, // 存储为固定格式文本，创建后不再改变
    recorded_at: Option<NaiveDateTime>,
    content: String,
}

impl Entry {
    /// 以当前本地时间创建新条目
    pub fn new(content: impl Into<String>) -> Result<Self> {
        let content = content.into();
        check_single_line(&content)?;
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        Ok(Self::from_parts(timestamp, content))
    }

    /// 从存储中重建条目，时间戳按原样保留
    pub fn from_parts(timestamp: impl Into<String>, content: impl Into<String>) -> Self {
        let timestamp = timestamp.into();
        let recorded_at = parse_timestamp(&timestamp);
        if recorded_at.is_none() {
            tracing::warn!(%timestamp, "stored timestamp could not be parsed");
        }
        Entry {
            timestamp,
            recorded_at,
            content: content.into(),
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        self.recorded_at
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.recorded_at.map(|dt| dt.date())
    }

    /// 替换内容，时间戳保持不变
    pub fn set_content(&mut self, content: impl Into<String>) -> Result<()> {
        let content = content.into();
        check_single_line(&content)?;
        self.content = content;
        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date: {}", self.timestamp)?;
        write!(f, "Content: {}", self.content)
    }
}

/// 按 "日 月 年" 查询的日期，例如 `07 Jan 2025`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateQuery {
    raw: String,
    day: u32,
    month: u32,
    year: i32,
}

impl DateQuery {
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || DiaryError::InvalidDateQuery(input.trim().to_string());
        let parts: Vec<&str> = input.split_whitespace().collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(invalid());
        };

        let day: u32 = day.parse().map_err(|_| invalid())?;
        if !(1..=31).contains(&day) {
            return Err(invalid());
        }
        // 月份缩写区分大小写
        let month = MONTHS
            .iter()
            .position(|m| m == month)
            .ok_or_else(invalid)? as u32
            + 1;
        let year: i32 = year.parse().map_err(|_| invalid())?;

        Ok(DateQuery {
            raw: parts.join(" "),
            day,
            month,
            year,
        })
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        date.day() == self.day && date.month() == self.month && date.year() == self.year
    }
}

impl fmt::Display for DateQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn new_entry_gets_parseable_timestamp() {
        let entry = Entry::new("Hello").unwrap();
        assert_eq!(entry.content(), "Hello");
        assert!(!entry.timestamp().is_empty());
        assert!(entry.recorded_at().is_some());
        // 重新解析得到同一个条目
        assert_eq!(entry, Entry::from_parts(entry.timestamp(), "Hello"));
    }

    #[test]
    fn rejects_line_breaks() {
        assert!(matches!(Entry::new("a\nb"), Err(DiaryError::InvalidContent)));
        assert!(matches!(Entry::new("a\rb"), Err(DiaryError::InvalidContent)));

        let mut entry = Entry::from_parts("Tue Jan 07 14:32:05 2025", "ok");
        assert!(entry.set_content("x\ny").is_err());
        assert_eq!(entry.content(), "ok");
    }

    #[test]
    fn set_content_keeps_timestamp() {
        let mut entry = Entry::from_parts("Tue Jan 07 14:32:05 2025", "old");
        entry.set_content("new").unwrap();
        assert_eq!(entry.timestamp(), "Tue Jan 07 14:32:05 2025");
        assert_eq!(entry.content(), "new");
    }

    #[test]
    fn parses_zero_and_space_padded_days() {
        let padded = parse_timestamp("Tue Jan 07 14:32:05 2025").unwrap();
        let spaced = parse_timestamp("Tue Jan  7 14:32:05 2025").unwrap();
        assert_eq!(padded, spaced);
        assert_eq!(padded.date(), NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
        assert_eq!(padded.hour(), 14);
        assert!(parse_timestamp("not a date").is_none());
    }

    #[test]
    fn date_query_matches_structurally() {
        let query = DateQuery::parse("07 Jan 2025").unwrap();
        assert!(query.matches(NaiveDate::from_ymd_opt(2025, 1, 7).unwrap()));
        assert!(!query.matches(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()));
        assert!(DateQuery::parse("7 Jan 2025").unwrap().matches(NaiveDate::from_ymd_opt(2025, 1, 7).unwrap()));
        assert_eq!(query.to_string(), "07 Jan 2025");
    }

    #[test]
    fn date_query_rejects_malformed_input() {
        for bad in ["", "07 Jan", "07 jan 2025", "32 Jan 2025", "07 January 2025", "x Jan 2025"] {
            assert!(
                matches!(DateQuery::parse(bad), Err(DiaryError::InvalidDateQuery(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
