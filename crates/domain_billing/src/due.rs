//! Due-date status evaluation
//!
//! Status is a display bucket recomputed on every read from `today` and the
//! current period's end date; nothing here is persisted and there are no
//! stored transitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::period::BillingPeriod;

/// Number of days before the due date at which a payment shows as due soon
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

/// Display bucket for a student's payment standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    /// Paid up; due date comfortably ahead
    Ok,
    /// Due within the next seven days
    DueSoon,
    /// Due date reached or passed
    Overdue,
}

/// Result of evaluating a due date against today
///
/// Pure and total: `days_until_due` may be negative, in which case its
/// magnitude is the number of days overdue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueAssessment {
    pub due_date: NaiveDate,
    pub days_until_due: i64,
    pub status: DueStatus,
}

impl DueAssessment {
    /// Evaluates a due date (a current period's end) against `today`
    pub fn evaluate(due_date: NaiveDate, today: NaiveDate) -> Self {
        let days_until_due = (due_date - today).num_days();
        Self {
            due_date,
            days_until_due,
            status: DueStatus::from_days(days_until_due),
        }
    }

    /// Evaluates the current billing period's end as the due date
    pub fn for_period(period: &BillingPeriod, today: NaiveDate) -> Self {
        Self::evaluate(period.end, today)
    }

    /// Days overdue, for display; zero when not overdue
    pub fn days_overdue(&self) -> i64 {
        if self.days_until_due < 0 {
            self.days_until_due.abs()
        } else {
            0
        }
    }
}

impl DueStatus {
    /// Buckets a day count: `<= 0` overdue, `1..=7` due soon, otherwise ok
    pub fn from_days(days_until_due: i64) -> Self {
        if days_until_due <= 0 {
            DueStatus::Overdue
        } else if days_until_due <= DUE_SOON_WINDOW_DAYS {
            DueStatus::DueSoon
        } else {
            DueStatus::Ok
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_due() {
        let assessment = DueAssessment::evaluate(date(2024, 1, 31), date(2024, 1, 20));
        assert_eq!(assessment.days_until_due, 11);
        assert_eq!(assessment.status, DueStatus::Ok);
    }

    #[test]
    fn test_zero_days_is_overdue() {
        assert_eq!(DueStatus::from_days(0), DueStatus::Overdue);
    }

    #[test]
    fn test_seven_days_is_due_soon() {
        assert_eq!(DueStatus::from_days(7), DueStatus::DueSoon);
        assert_eq!(DueStatus::from_days(1), DueStatus::DueSoon);
    }

    #[test]
    fn test_eight_days_is_not_due_soon() {
        assert_eq!(DueStatus::from_days(8), DueStatus::Ok);
    }

    #[test]
    fn test_overdue_magnitude() {
        let assessment = DueAssessment::evaluate(date(2024, 3, 1), date(2024, 3, 6));
        assert_eq!(assessment.days_until_due, -5);
        assert_eq!(assessment.status, DueStatus::Overdue);
        assert_eq!(assessment.days_overdue(), 5);
    }

    #[test]
    fn test_not_overdue_has_zero_days_overdue() {
        let assessment = DueAssessment::evaluate(date(2024, 3, 10), date(2024, 3, 1));
        assert_eq!(assessment.days_overdue(), 0);
    }
}
