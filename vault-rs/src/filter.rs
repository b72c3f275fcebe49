//! Date range filtering
//!
//! Inclusive optional start/end bounds, both normalized to midnight UTC.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::{Result, VaultError};

/// Inclusive date range; either bound may be open
#[derive(Debug, Clone, Default)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Build a range from the CLI argument pair.
    ///
    /// Supplying only one of the two dates is a usage error; supplying
    /// neither yields an unbounded range.
    pub fn from_args(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self {
                start: Some(parse_date_arg(start)?),
                end: Some(parse_date_arg(end)?),
            }),
            (None, None) => Ok(Self::default()),
            _ => Err(VaultError::PartialDateRange),
        }
    }

    /// Check whether a message date falls within the range
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start.map_or(true, |start| date >= start)
            && self.end.map_or(true, |end| date <= end)
    }
}

/// Parse a DD.MM.YYYY date argument to midnight UTC
pub fn parse_date_arg(arg: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(arg.trim(), "%d.%m.%Y")
        .map_err(|e| VaultError::InvalidDate(format!("{}: {}", arg, e)))?;

    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_arg() {
        let date = parse_date_arg("15.06.2024").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_date_arg_malformed() {
        assert!(parse_date_arg("2024-06-15").is_err());
        assert!(parse_date_arg("31.02.2024").is_err());
        assert!(parse_date_arg("nonsense").is_err());
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let range = DateRange::from_args(Some("01.01.2024"), Some("31.12.2024")).unwrap();

        assert!(range.contains(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()));
        // Start bound is inclusive
        assert!(range.contains(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        // End bound is midnight of the end day, inclusive
        assert!(range.contains(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()));
        assert!(!range.contains(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()));
        assert!(!range.contains(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_range_unbounded() {
        let range = DateRange::from_args(None, None).unwrap();
        assert!(range.contains(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap()));
        assert!(range.contains(Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_range_partial_args_rejected() {
        assert!(matches!(
            DateRange::from_args(Some("01.01.2024"), None),
            Err(VaultError::PartialDateRange)
        ));
        assert!(matches!(
            DateRange::from_args(None, Some("31.12.2024")),
            Err(VaultError::PartialDateRange)
        ));
    }
}
