//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities across the hostel system.
//! Fixtures are consistent and predictable so unit tests can assert on
//! exact values.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{BedId, Currency, Money, StudentId};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard monthly rent
    pub fn rent() -> Money {
        Money::rupees(10000)
    }

    /// Standard security deposit (half of rent)
    pub fn deposit() -> Money {
        Money::rupees(5000)
    }

    /// A partial rent instalment
    pub fn partial_rent() -> Money {
        Money::rupees(4000)
    }

    /// A small extra charge (fine, laundry, damages)
    pub fn fine() -> Money {
        Money::rupees(500)
    }

    /// Zero rupees
    pub fn zero() -> Money {
        Money::zero(Currency::NPR)
    }

    /// An INR amount for currency mismatch tests
    pub fn inr_100() -> Money {
        Money::new(dec!(100), Currency::INR)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard admission date (Jan 1, 2024)
    pub fn admission() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// End of the first 30-day cycle from [`Self::admission`]
    pub fn first_cycle_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    /// A date inside the first cycle
    pub fn mid_first_cycle() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    /// A date after the first cycle has lapsed unpaid
    pub fn past_first_cycle() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// A fresh student id
    pub fn student_id() -> StudentId {
        StudentId::new()
    }

    /// A fresh bed id
    pub fn bed_id() -> BedId {
        BedId::new()
    }
}
