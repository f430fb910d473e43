//! Validation of primitive field values
//!
//! Amounts, budget limits, dates, record indexes, month filters, and export
//! file names. Each validator reports exactly one failure kind, so callers
//! can tell "not a number" from "infinite" and "not a date" from "no such
//! day" without string matching.

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::models::YearMonth;

/// Whether a date field may lie after the current day.
///
/// Record creation and modification pass [`DatePolicy::RejectFuture`]; the
/// permissive variant is kept for call sites that track planned entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePolicy {
    AllowFuture,
    RejectFuture,
}

/// The current calendar day in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn parse_finite(token: &str) -> TallyResult<f64> {
    let value: f64 = token
        .parse()
        .map_err(|_| TallyError::MalformedNumber(token.to_string()))?;
    if !value.is_finite() {
        return Err(TallyError::NonFiniteNumber(token.to_string()));
    }
    Ok(value)
}

/// A record amount: finite and strictly positive
pub fn parse_amount(token: &str) -> TallyResult<f64> {
    let value = parse_finite(token)?;
    if value <= 0.0 {
        return Err(TallyError::NonPositiveAmount(token.to_string()));
    }
    Ok(value)
}

/// A budget limit: finite and not negative (zero is a valid limit)
pub fn parse_limit(token: &str) -> TallyResult<f64> {
    let value = parse_finite(token)?;
    if value < 0.0 {
        return Err(TallyError::NegativeLimit(token.to_string()));
    }
    Ok(value)
}

/// A calendar date in strict YYYY-MM-DD form
pub fn parse_date(token: &str, today: NaiveDate, policy: DatePolicy) -> TallyResult<NaiveDate> {
    let (year, month, day) =
        split_date(token).ok_or_else(|| TallyError::MalformedDate(token.to_string()))?;
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| TallyError::InvalidCalendarDate(token.to_string()))?;
    if policy == DatePolicy::RejectFuture && date > today {
        return Err(TallyError::FutureDate(date));
    }
    Ok(date)
}

fn split_date(token: &str) -> Option<(i32, u32, u32)> {
    let mut parts = token.split('-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    if ![year, month, day]
        .iter()
        .all(|p| p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    Some((year.parse().ok()?, month.parse().ok()?, day.parse().ok()?))
}

/// A 1-based record index.
///
/// Distinguishes three failures: not an integer at all, an integer below 1,
/// and an integer beyond what this platform can index.
pub fn parse_index(token: &str) -> TallyResult<usize> {
    let bytes = token.as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TallyError::MalformedIndex(token.to_string()));
    }
    if negative {
        return Err(TallyError::IndexTooSmall(token.to_string()));
    }
    match digits.parse::<usize>() {
        Ok(0) => Err(TallyError::IndexTooSmall(token.to_string())),
        Ok(value) => Ok(value),
        // all-digit input that fails to parse has overflowed usize
        Err(_) => Err(TallyError::IndexTooLarge(token.to_string())),
    }
}

/// An optional month filter in YYYY-MM form
pub fn parse_month(token: &str) -> TallyResult<YearMonth> {
    let mut parts = token.split('-');
    let (year, month) = match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), None) if y.len() == 4 && m.len() == 2 => (y, m),
        _ => return Err(TallyError::MalformedDate(token.to_string())),
    };
    if !year.bytes().all(|b| b.is_ascii_digit()) || !month.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TallyError::MalformedDate(token.to_string()));
    }
    let year: i32 = year
        .parse()
        .map_err(|_| TallyError::MalformedDate(token.to_string()))?;
    let month: u32 = month
        .parse()
        .map_err(|_| TallyError::MalformedDate(token.to_string()))?;
    if !(1..=12).contains(&month) {
        return Err(TallyError::InvalidCalendarDate(token.to_string()));
    }
    Ok(YearMonth::new(year, month))
}

/// An export file name token: plain names only, `.csv` appended when the
/// token carries no extension.
pub fn parse_filename(token: &str) -> TallyResult<String> {
    let acceptable = !token.is_empty()
        && !token.starts_with('.')
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if !acceptable {
        return Err(TallyError::InvalidFilename(token.to_string()));
    }
    if token.contains('.') {
        Ok(token.to_string())
    } else {
        Ok(format!("{token}.csv"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_amount_accepts_positive_decimals() {
        assert_eq!(parse_amount("10").unwrap(), 10.0);
        assert_eq!(parse_amount("12.50").unwrap(), 12.5);
        assert_eq!(parse_amount("0.01").unwrap(), 0.01);
    }

    #[test]
    fn test_amount_rejects_zero_and_negative() {
        assert_eq!(
            parse_amount("0").unwrap_err(),
            TallyError::NonPositiveAmount("0".into())
        );
        assert_eq!(
            parse_amount("-3.5").unwrap_err(),
            TallyError::NonPositiveAmount("-3.5".into())
        );
    }

    #[test]
    fn test_non_finite_is_not_malformed() {
        for token in ["nan", "NaN", "inf", "-inf", "infinity"] {
            assert_eq!(
                parse_amount(token).unwrap_err(),
                TallyError::NonFiniteNumber(token.into()),
                "token: {token}"
            );
        }
    }

    #[test]
    fn test_malformed_number() {
        assert_eq!(
            parse_amount("ten").unwrap_err(),
            TallyError::MalformedNumber("ten".into())
        );
        assert_eq!(
            parse_amount("1.2.3").unwrap_err(),
            TallyError::MalformedNumber("1.2.3".into())
        );
    }

    #[test]
    fn test_limit_allows_zero_rejects_negative() {
        assert_eq!(parse_limit("0").unwrap(), 0.0);
        assert_eq!(parse_limit("100").unwrap(), 100.0);
        assert_eq!(
            parse_limit("-1").unwrap_err(),
            TallyError::NegativeLimit("-1".into())
        );
    }

    #[test]
    fn test_date_strict_shape() {
        let today = date(2025, 10, 15);
        assert_eq!(
            parse_date("2025-10-10", today, DatePolicy::RejectFuture).unwrap(),
            date(2025, 10, 10)
        );
        for token in ["2025-1-01", "25-01-01", "2025/01/01", "2025-01-01-01", "october"] {
            assert_eq!(
                parse_date(token, today, DatePolicy::RejectFuture).unwrap_err(),
                TallyError::MalformedDate(token.into()),
                "token: {token}"
            );
        }
    }

    #[test]
    fn test_date_nonexistent_day() {
        let today = date(2025, 10, 15);
        for token in ["2025-02-30", "2025-13-01", "2025-04-31", "2025-00-10"] {
            assert_eq!(
                parse_date(token, today, DatePolicy::RejectFuture).unwrap_err(),
                TallyError::InvalidCalendarDate(token.into()),
                "token: {token}"
            );
        }
        // leap day is real in a leap year
        assert!(parse_date("2024-02-29", today, DatePolicy::RejectFuture).is_ok());
    }

    #[test]
    fn test_date_future_policy() {
        let today = date(2025, 10, 15);
        assert_eq!(
            parse_date("2025-10-16", today, DatePolicy::RejectFuture).unwrap_err(),
            TallyError::FutureDate(date(2025, 10, 16))
        );
        assert_eq!(
            parse_date("2025-10-16", today, DatePolicy::AllowFuture).unwrap(),
            date(2025, 10, 16)
        );
        // today itself is not future
        assert!(parse_date("2025-10-15", today, DatePolicy::RejectFuture).is_ok());
    }

    #[test]
    fn test_index_three_failure_kinds() {
        assert_eq!(parse_index("3").unwrap(), 3);
        assert_eq!(parse_index("+3").unwrap(), 3);
        assert_eq!(
            parse_index("two").unwrap_err(),
            TallyError::MalformedIndex("two".into())
        );
        assert_eq!(
            parse_index("3.5").unwrap_err(),
            TallyError::MalformedIndex("3.5".into())
        );
        assert_eq!(
            parse_index("0").unwrap_err(),
            TallyError::IndexTooSmall("0".into())
        );
        assert_eq!(
            parse_index("-2").unwrap_err(),
            TallyError::IndexTooSmall("-2".into())
        );
        let huge = "99999999999999999999999999";
        assert_eq!(
            parse_index(huge).unwrap_err(),
            TallyError::IndexTooLarge(huge.into())
        );
    }

    #[test]
    fn test_month_filter() {
        assert_eq!(parse_month("2025-09").unwrap(), YearMonth::new(2025, 9));
        assert_eq!(
            parse_month("2025-9").unwrap_err(),
            TallyError::MalformedDate("2025-9".into())
        );
        assert_eq!(
            parse_month("2025-13").unwrap_err(),
            TallyError::InvalidCalendarDate("2025-13".into())
        );
        assert_eq!(
            parse_month("sept").unwrap_err(),
            TallyError::MalformedDate("sept".into())
        );
    }

    #[test]
    fn test_filename_sanitizing() {
        assert_eq!(parse_filename("report").unwrap(), "report.csv");
        assert_eq!(parse_filename("report.csv").unwrap(), "report.csv");
        assert_eq!(parse_filename("my-report_2").unwrap(), "my-report_2.csv");
        for token in ["", "../etc", "a b", "dir/file", ".hidden"] {
            assert_eq!(
                parse_filename(token).unwrap_err(),
                TallyError::InvalidFilename(token.into()),
                "token: {token}"
            );
        }
    }
}
