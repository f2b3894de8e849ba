use chrono::{Months, NaiveDate};

use crate::errors::{PlannerError, Result};

/// add calendar months to a date
///
/// Days past the end of the target month clamp to its last day, so
/// 2024-01-31 plus one month is 2024-02-29.
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| PlannerError::CalculationError {
            message: format!("due date out of range: {date} + {months} months"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_month_steps() {
        assert_eq!(add_months(ymd(2024, 1, 15), 1).unwrap(), ymd(2024, 2, 15));
        assert_eq!(add_months(ymd(2024, 11, 15), 3).unwrap(), ymd(2025, 2, 15));
        assert_eq!(add_months(ymd(2024, 1, 15), 0).unwrap(), ymd(2024, 1, 15));
    }

    #[test]
    fn test_month_end_clamps() {
        assert_eq!(add_months(ymd(2024, 1, 31), 1).unwrap(), ymd(2024, 2, 29));
        assert_eq!(add_months(ymd(2023, 1, 31), 1).unwrap(), ymd(2023, 2, 28));
        assert_eq!(add_months(ymd(2024, 1, 31), 2).unwrap(), ymd(2024, 3, 31));
    }

    #[test]
    fn test_out_of_range() {
        let err = add_months(NaiveDate::MAX, 1).unwrap_err();
        assert!(matches!(err, PlannerError::CalculationError { .. }));
    }
}
