//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use core_kernel::{Currency, Money};

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::NPR),
        Just(Currency::INR),
        Just(Currency::USD),
    ]
}

/// Strategy for generating positive amounts in paisa
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating positive rupee amounts
pub fn rupee_strategy() -> impl Strategy<Value = Money> {
    (1i64..1_000_000i64).prop_map(Money::rupees)
}

/// Strategy for generating positive Money in any supported currency
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (positive_amount_minor_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for generating realistic monthly rents (Rs. 3000 to 30000)
pub fn rent_strategy() -> impl Strategy<Value = Money> {
    (3000i64..=30000i64).prop_map(Money::rupees)
}

/// Strategy for generating dates within the supported planning horizon
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    // Offsets from 2020-01-01 spanning roughly a decade
    (0u64..3650u64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .expect("valid epoch date")
            + Days::new(offset)
    })
}

/// Strategy for generating (admission, today) pairs with today on or
/// after admission
pub fn admission_and_today_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 0u64..400u64)
        .prop_map(|(admission, elapsed)| (admission, admission + Days::new(elapsed)))
}
