//! Ordered date and time checks for the birth form.
//!
//! Each group stops at its first failing check, so a group reports at most one
//! error even when several sub-checks would fail.

use chrono::{Datelike, NaiveDate, NaiveTime};
use thiserror::Error;

/// Earliest birth year accepted by the form.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Coarse category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingField,
    OutOfRange,
    FutureDate,
}

/// A single validation failure. The `Display` text is the message shown
/// next to the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("생년월일을 모두 입력해주세요")]
    MissingDate,
    #[error("년도는 1900년부터 {max_year}년까지 입력 가능합니다")]
    YearOutOfRange { max_year: i32 },
    #[error("월은 1월부터 12월까지 입력 가능합니다")]
    MonthOutOfRange,
    #[error("{month}월은 1일부터 {max_day}일까지 입력 가능합니다")]
    DayOutOfRange { month: u32, max_day: u32 },
    #[error("미래 날짜는 입력할 수 없습니다")]
    FutureDate,
    #[error("생시를 모두 입력해주세요")]
    MissingTime,
    #[error("시간은 0시부터 23시까지 입력 가능합니다")]
    HourOutOfRange,
    #[error("분은 0분부터 59분까지 입력 가능합니다")]
    MinuteOutOfRange,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::MissingDate | ValidationError::MissingTime => {
                ValidationErrorKind::MissingField
            }
            ValidationError::FutureDate => ValidationErrorKind::FutureDate,
            ValidationError::YearOutOfRange { .. }
            | ValidationError::MonthOutOfRange
            | ValidationError::DayOutOfRange { .. }
            | ValidationError::HourOutOfRange
            | ValidationError::MinuteOutOfRange => ValidationErrorKind::OutOfRange,
        }
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Parse a decimal digit string; anything else yields `None`.
pub(crate) fn parse_number(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Validate year/month/day against `today` (day granularity).
pub fn validate_date(
    year: &str,
    month: &str,
    day: &str,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    if year.is_empty() || month.is_empty() || day.is_empty() {
        return Err(ValidationError::MissingDate);
    }

    let current_year = today.year();
    let year_num = parse_number(year)
        .and_then(|y| i32::try_from(y).ok())
        .filter(|y| (MIN_BIRTH_YEAR..=current_year).contains(y))
        .ok_or(ValidationError::YearOutOfRange {
            max_year: current_year,
        })?;

    let month_num = parse_number(month)
        .filter(|m| (1..=12).contains(m))
        .ok_or(ValidationError::MonthOutOfRange)?;

    let max_day = days_in_month(year_num, month_num);
    let out_of_range = ValidationError::DayOutOfRange {
        month: month_num,
        max_day,
    };
    let day_num = parse_number(day)
        .filter(|d| (1..=max_day).contains(d))
        .ok_or_else(|| out_of_range.clone())?;

    let date = NaiveDate::from_ymd_opt(year_num, month_num, day_num).ok_or(out_of_range)?;
    if date > today {
        return Err(ValidationError::FutureDate);
    }

    Ok(date)
}

/// Validate hour/minute.
pub fn validate_time(hour: &str, minute: &str) -> Result<NaiveTime, ValidationError> {
    if hour.is_empty() || minute.is_empty() {
        return Err(ValidationError::MissingTime);
    }

    let hour_num = parse_number(hour)
        .filter(|h| *h <= 23)
        .ok_or(ValidationError::HourOutOfRange)?;
    let minute_num = parse_number(minute)
        .filter(|m| *m <= 59)
        .ok_or(ValidationError::MinuteOutOfRange)?;

    NaiveTime::from_hms_opt(hour_num, minute_num, 0).ok_or(ValidationError::MinuteOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_february_29() {
        assert!(validate_date("2000", "02", "29", today()).is_ok());
        assert!(validate_date("2024", "02", "29", today()).is_ok());
        assert_eq!(
            validate_date("1900", "02", "29", today()),
            Err(ValidationError::DayOutOfRange { month: 2, max_day: 28 })
        );
        assert_eq!(
            validate_date("2023", "02", "29", today()),
            Err(ValidationError::DayOutOfRange { month: 2, max_day: 28 })
        );
    }

    #[test]
    fn test_day_beyond_month_length() {
        for (month, max_day) in [(1, 31), (4, 30), (6, 30), (9, 30), (11, 30), (12, 31)] {
            let over = (max_day + 1).to_string();
            let err = validate_date("1999", &month.to_string(), &over, today()).unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::OutOfRange);
            assert!(validate_date("1999", &month.to_string(), &max_day.to_string(), today()).is_ok());
        }
        assert_eq!(
            validate_date("1999", "05", "0", today()),
            Err(ValidationError::DayOutOfRange { month: 5, max_day: 31 })
        );
    }

    #[test]
    fn test_missing_date_field_short_circuits() {
        assert_eq!(
            validate_date("", "13", "40", today()),
            Err(ValidationError::MissingDate)
        );
        assert_eq!(
            validate_date("1990", "05", "", today()).unwrap_err().kind(),
            ValidationErrorKind::MissingField
        );
    }

    #[test]
    fn test_year_range() {
        assert_eq!(
            validate_date("1899", "12", "31", today()),
            Err(ValidationError::YearOutOfRange { max_year: 2024 })
        );
        assert_eq!(
            validate_date("2025", "01", "01", today()),
            Err(ValidationError::YearOutOfRange { max_year: 2024 })
        );
        assert!(validate_date("1900", "01", "01", today()).is_ok());
        assert_eq!(
            validate_date("19x0", "01", "01", today()),
            Err(ValidationError::YearOutOfRange { max_year: 2024 })
        );
    }

    #[test]
    fn test_month_checked_before_day() {
        assert_eq!(
            validate_date("1990", "13", "45", today()),
            Err(ValidationError::MonthOutOfRange)
        );
        assert_eq!(
            validate_date("1990", "0", "1", today()),
            Err(ValidationError::MonthOutOfRange)
        );
    }

    #[test]
    fn test_today_boundary() {
        assert_eq!(validate_date("2024", "06", "15", today()), Ok(today()));
        assert_eq!(
            validate_date("2024", "06", "16", today()),
            Err(ValidationError::FutureDate)
        );
        assert_eq!(
            validate_date("2024", "12", "01", today()).unwrap_err().kind(),
            ValidationErrorKind::FutureDate
        );
    }

    #[test]
    fn test_unpadded_values_accepted() {
        assert_eq!(
            validate_date("1990", "5", "3", today()),
            Ok(NaiveDate::from_ymd_opt(1990, 5, 3).unwrap())
        );
    }

    #[test]
    fn test_time_full_range() {
        for hour in 0..=23 {
            for minute in 0..=59 {
                let result = validate_time(&format!("{:02}", hour), &format!("{:02}", minute));
                assert!(result.is_ok(), "{hour}:{minute} should be valid");
            }
        }
    }

    #[test]
    fn test_time_out_of_range() {
        assert_eq!(validate_time("24", "00"), Err(ValidationError::HourOutOfRange));
        assert_eq!(validate_time("12", "60"), Err(ValidationError::MinuteOutOfRange));
        assert_eq!(validate_time("24", "60"), Err(ValidationError::HourOutOfRange));
        assert_eq!(validate_time("", "30"), Err(ValidationError::MissingTime));
        assert_eq!(validate_time("ab", "30"), Err(ValidationError::HourOutOfRange));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::MissingDate.to_string(), "생년월일을 모두 입력해주세요");
        assert_eq!(
            ValidationError::YearOutOfRange { max_year: 2024 }.to_string(),
            "년도는 1900년부터 2024년까지 입력 가능합니다"
        );
        assert_eq!(
            ValidationError::DayOutOfRange { month: 2, max_day: 29 }.to_string(),
            "2월은 1일부터 29일까지 입력 가능합니다"
        );
        assert_eq!(ValidationError::MissingTime.to_string(), "생시를 모두 입력해주세요");
    }
}
