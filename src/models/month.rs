//! Calendar month key
//!
//! A `MonthKey` identifies one calendar month and round-trips through the
//! canonical `YYYY-MM` string form used across the CLI and stored records.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month (year + month), e.g. "2024-03"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Create a month key; fails on an out-of-range month
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing today's date
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// The month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of this month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap())
    }

    /// Last day of this month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_month.unwrap() - Duration::days(1)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Parse the canonical `YYYY-MM` form
    ///
    /// Parsing is strict: exactly four year digits, a dash, and two month
    /// digits. Anything else is rejected rather than normalized, so "2024-3"
    /// and "03-2024" are errors, not guesses.
    pub fn parse(s: &str) -> Result<Self, MonthKeyParseError> {
        let s = s.trim();

        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| MonthKeyParseError::InvalidFormat(s.to_string()))?;

        if year_str.len() != 4
            || month_str.len() != 2
            || !year_str.chars().all(|c| c.is_ascii_digit())
            || !month_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(MonthKeyParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year_str
            .parse()
            .map_err(|_| MonthKeyParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| MonthKeyParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Month keys cross every boundary (files, report payloads) in the canonical
// "YYYY-MM" string form, so serde goes through Display/parse.

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        MonthKey::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthKeyParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthKeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKeyParseError::InvalidFormat(s) => {
                write!(f, "Invalid month key (expected YYYY-MM): {}", s)
            }
            MonthKeyParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthKeyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let key = MonthKey::parse("2024-03").unwrap();
        assert_eq!(key, MonthKey::new(2024, 3).unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(MonthKey::parse("2024-3").is_err());
        assert!(MonthKey::parse("24-03").is_err());
        assert!(MonthKey::parse("2024/03").is_err());
        assert!(MonthKey::parse("2024-13").is_err());
        assert!(MonthKey::parse("2024-00").is_err());
        assert!(MonthKey::parse("march").is_err());
        assert!(MonthKey::parse("").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let key = MonthKey::new(2024, 3).unwrap();
        assert_eq!(key.to_string(), "2024-03");
        assert_eq!(MonthKey::parse(&key.to_string()).unwrap(), key);
    }

    #[test]
    fn test_date_range() {
        let key = MonthKey::new(2024, 2).unwrap();
        assert_eq!(
            key.start_date(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
        );
        // 2024 is a leap year
        assert_eq!(key.end_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_contains() {
        let key = MonthKey::new(2024, 3).unwrap();
        assert!(key.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(key.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
    }

    #[test]
    fn test_navigation() {
        let dec = MonthKey::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthKey::new(2025, 1).unwrap());

        let jan = MonthKey::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), dec);
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 19).unwrap();
        assert_eq!(MonthKey::from_date(date), MonthKey::new(2024, 7).unwrap());
    }

    #[test]
    fn test_ordering() {
        let a = MonthKey::new(2024, 12).unwrap();
        let b = MonthKey::new(2025, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serialization_uses_canonical_string() {
        let key = MonthKey::new(2024, 3).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-03\"");

        let deserialized: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, deserialized);

        // Malformed keys are rejected at deserialization too
        assert!(serde_json::from_str::<MonthKey>("\"2024-3\"").is_err());
    }
}
