//! Exchange-rate date selection.
//!
//! Turns the caller's date intent into a concrete calendar date in the
//! provider's `YYYY-MM-DD` format, or into a marker deferring to the
//! "most recent available" discovery step in the settlement service.

use chrono::{Days, NaiveDate};

use crate::error::DomainError;

/// Date format the provider expects in its queries.
pub const PROVIDER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats an explicit date may arrive in, tried in order.
const ACCEPTED_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",  // 2018-06-03
    "%Y/%m/%d",  // 2018/06/03
    "%m/%d/%Y",  // 06/03/2018
    "%d %B %Y",  // 3 June 2018
    "%B %d, %Y", // June 3, 2018
    "%d-%b-%Y",  // 03-Jun-2018
];

/// Which exchange-rate date the caller wants.
///
/// Exactly one variant is active per request. When assembled from CLI
/// flags the precedence is `Explicit` > `Today` > `DaysAgo` >
/// `MostRecent` (the default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateIntent {
    /// A caller-supplied date string in any of the accepted formats.
    Explicit(String),
    /// Today's rates. May fail later if the day's rates are not yet published.
    Today,
    /// N calendar days before the injected current date. Zero is allowed;
    /// negative counts are a caller contract violation.
    DaysAgo(i64),
    /// Defer to the settlement service's latest-available-date discovery.
    MostRecent,
}

/// Outcome of resolving a [`DateIntent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedDate {
    /// A concrete calendar date to query rates for.
    On(NaiveDate),
    /// No concrete date; the service must discover the most recent one.
    Latest,
}

/// Resolves an intent against the injected current date.
///
/// Pure function of its inputs; `today` is never read globally.
pub fn resolve(intent: &DateIntent, today: NaiveDate) -> Result<ResolvedDate, DomainError> {
    match intent {
        DateIntent::Explicit(raw) => parse_date(raw).map(ResolvedDate::On),
        DateIntent::Today => n_days_ago(today, 0).map(ResolvedDate::On),
        DateIntent::DaysAgo(days) => n_days_ago(today, *days).map(ResolvedDate::On),
        DateIntent::MostRecent => Ok(ResolvedDate::Latest),
    }
}

/// Parses a human-readable date string under the accepted formats.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = raw.trim();
    ACCEPTED_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| DomainError::InvalidDateFormat(raw.to_string()))
}

/// The date `days` calendar days before `today`. `days` must be >= 0.
pub fn n_days_ago(today: NaiveDate, days: i64) -> Result<NaiveDate, DomainError> {
    if days < 0 {
        return Err(DomainError::InvalidArgument(format!(
            "days-ago count must be non-negative, got {days}"
        )));
    }
    today
        .checked_sub_days(Days::new(days as u64))
        .ok_or_else(|| {
            DomainError::InvalidArgument(format!("{days} days before {today} is out of range"))
        })
}

/// Formats a date the way the provider expects it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(PROVIDER_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_explicit_date_accepted_formats() {
        let expected = ResolvedDate::On(day(2018, 6, 3));
        for raw in [
            "2018-06-03",
            "2018/06/03",
            "06/03/2018",
            "3 June 2018",
            "June 3, 2018",
            "03-Jun-2018",
        ] {
            let intent = DateIntent::Explicit(raw.to_string());
            assert_eq!(resolve(&intent, day(2024, 1, 1)).unwrap(), expected, "{raw}");
        }
    }

    #[test]
    fn test_explicit_date_resolution_is_idempotent() {
        let first = parse_date("3 June 2018").unwrap();
        let second = parse_date(&format_date(first)).unwrap();
        assert_eq!(format_date(first), "2018-06-03");
        assert_eq!(first, second);
    }

    #[test]
    fn test_explicit_date_unparseable() {
        let result = resolve(&DateIntent::Explicit("not a date".into()), day(2024, 1, 1));
        assert!(matches!(result, Err(DomainError::InvalidDateFormat(_))));
    }

    #[test]
    fn test_today_equals_zero_days_ago() {
        let today = day(2018, 6, 3);
        assert_eq!(
            resolve(&DateIntent::Today, today).unwrap(),
            resolve(&DateIntent::DaysAgo(0), today).unwrap(),
        );
    }

    #[test]
    fn test_days_ago_crosses_month_boundary() {
        let resolved = resolve(&DateIntent::DaysAgo(3), day(2018, 6, 1)).unwrap();
        assert_eq!(resolved, ResolvedDate::On(day(2018, 5, 29)));
    }

    #[test]
    fn test_negative_days_ago_rejected() {
        let result = resolve(&DateIntent::DaysAgo(-1), day(2018, 6, 3));
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn test_most_recent_defers() {
        let resolved = resolve(&DateIntent::MostRecent, day(2018, 6, 3)).unwrap();
        assert_eq!(resolved, ResolvedDate::Latest);
    }

    #[test]
    fn test_format_date_pads() {
        assert_eq!(format_date(day(2018, 6, 3)), "2018-06-03");
    }
}
