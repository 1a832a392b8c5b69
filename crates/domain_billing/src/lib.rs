//! Billing Domain - 30-Day Billing Cycles and Payment Reconciliation
//!
//! This crate implements the rent-billing core of the hostel management
//! system: deriving billing periods from a student's stay, allocating
//! payments against them, and evaluating due status.
//!
//! # Billing model
//!
//! - A billing period is a fixed 30-day window `[start, start + 30d)`.
//! - The current period starts at the anchor: `last_payment_date` if any
//!   rent payment exists, else `admission_date`.
//! - Settling a period's rent advances the anchor by 30 days; partial and
//!   extra payments leave it where it is.
//! - Everything here is a pure function over its inputs plus an injected
//!   "today"; fetching and persisting data belongs to the REST collaborator
//!   behind [`ports::BillingApi`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{BillingPeriodCalculator, DueAssessment};
//!
//! let calc = BillingPeriodCalculator::new(Some(admission), None, rent);
//! let periods = calc.periods(&payments, today);
//! let due = DueAssessment::for_period(&periods[0], today);
//! ```

pub mod allocation;
pub mod balance;
pub mod due;
pub mod error;
pub mod payment;
pub mod period;
pub mod ports;

pub use allocation::{PaymentAllocator, PeriodSelection};
pub use balance::OutstandingBalance;
pub use due::{DueAssessment, DueStatus, DUE_SOON_WINDOW_DAYS};
pub use error::BillingError;
pub use payment::{Payment, PaymentMethod, PaymentType};
pub use period::{
    advance_anchor, resolve_periods, BillingPeriod, BillingPeriodCalculator, BILLING_CYCLE_DAYS,
};
pub use ports::{
    ApiError, AvailablePeriod, BillingApi, BillingStatusResponse, CompletePaymentRequest,
    ExtraPaymentRequest, MonthlyPaymentRequest,
};
