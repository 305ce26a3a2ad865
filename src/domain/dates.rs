//! Date parsing and period helpers.
//!
//! All user-facing dates use the `DD-MM-YYYY` form; the relative keywords
//! `hoje` (today) and `ontem` (yesterday) are accepted wherever a date is.

use chrono::{Datelike, Duration, NaiveDate};

/// User-facing date format.
pub const USER_DATE_FMT: &str = "%d-%m-%Y";

/// Format a date for display in replies.
pub fn format_user_date(date: NaiveDate) -> String {
    date.format(USER_DATE_FMT).to_string()
}

/// Parse a user-supplied date token relative to `today`.
///
/// Returns `None` for anything that is neither a keyword nor a strictly
/// valid `DD-MM-YYYY` date (e.g. `31-13-2025`).
pub fn parse_user_date(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    match token.to_lowercase().as_str() {
        "hoje" => Some(today),
        "ontem" => Some(today - Duration::days(1)),
        other => NaiveDate::parse_from_str(other, USER_DATE_FMT).ok(),
    }
}

/// Start of the trailing week window ending at `today` inclusive.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(7)
}

/// First day of the month `today` falls in.
pub fn month_start(today: NaiveDate) -> NaiveDate {
    // with_day(1) only fails for out-of-range days, which 1 never is
    today.with_day(1).unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
    }

    #[test]
    fn parses_strict_date() {
        let today = d(2025, 3, 20);
        assert_eq!(parse_user_date("15-03-2025", today), Some(d(2025, 3, 15)));
    }

    #[test]
    fn parses_relative_keywords() {
        let today = d(2025, 3, 20);
        assert_eq!(parse_user_date("hoje", today), Some(today));
        assert_eq!(parse_user_date("Hoje", today), Some(today));
        assert_eq!(parse_user_date("ontem", today), Some(d(2025, 3, 19)));
    }

    #[test]
    fn rejects_invalid_dates() {
        let today = d(2025, 3, 20);
        assert_eq!(parse_user_date("31-13-2025", today), None);
        assert_eq!(parse_user_date("2025-03-15", today), None);
        assert_eq!(parse_user_date("amanha", today), None);
    }

    #[test]
    fn period_helpers() {
        let today = d(2025, 3, 20);
        assert_eq!(week_start(today), d(2025, 3, 13));
        assert_eq!(month_start(today), d(2025, 3, 1));
    }

    #[test]
    fn week_start_crosses_month_boundary() {
        assert_eq!(week_start(d(2025, 3, 3)), d(2025, 2, 24));
    }
}
