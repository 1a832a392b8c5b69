//! Billing domain errors

use core_kernel::MoneyError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the billing domain
///
/// All variants are local, synchronous, and recoverable: the caller
/// re-prompts for corrected input. None are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// Payment amount is zero or negative
    #[error("Invalid amount: payment must be greater than zero, got {amount}")]
    InvalidAmount { amount: Decimal },

    /// Extra payment submitted without a reason
    #[error("A reason/description is required for an extra payment")]
    MissingReason,

    /// Completion payment exceeds the remaining initial balance
    #[error("Amount {amount} exceeds remaining balance of {remaining}")]
    AmountExceedsBalance { amount: Decimal, remaining: Decimal },

    /// Monthly payment with no resolvable billing period
    #[error("A billing period start date is required for a monthly payment")]
    MissingPeriodStart,

    /// Money arithmetic failure (currency mismatch)
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
