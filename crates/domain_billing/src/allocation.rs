//! Payment allocation
//!
//! Classifies a requested payment as monthly or extra, binds monthly
//! payments to a billing period, and validates the bounded
//! "complete payment" path used to clear an initial admission shortfall.

use chrono::NaiveDate;

use core_kernel::{DateRange, Money, StudentId};

use crate::error::BillingError;
use crate::payment::{Payment, PaymentMethod, PaymentType};
use crate::period::BILLING_CYCLE_DAYS;

/// How the billing period for a monthly payment was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodSelection {
    /// A period picked from the calculator's (or server's) list
    Listed(DateRange),
    /// Explicit custom dates; a missing end defaults to `start + 30d`
    Custom {
        start: NaiveDate,
        end: Option<NaiveDate>,
    },
}

impl PeriodSelection {
    fn resolve(self) -> DateRange {
        match self {
            PeriodSelection::Listed(range) => range,
            PeriodSelection::Custom { start, end } => match end {
                Some(end) => DateRange { start, end },
                None => DateRange::from_start(start, BILLING_CYCLE_DAYS),
            },
        }
    }
}

/// Builds validated payment records for one student
///
/// The allocator never clamps a monthly amount to the period's remaining:
/// overpaying (pre-payment for a future period) and underpaying (partial
/// payment) are both valid. The only bounded path is the completion
/// payment, which must not exceed the remaining initial balance.
#[derive(Debug, Clone, Copy)]
pub struct PaymentAllocator {
    student_id: StudentId,
}

impl PaymentAllocator {
    pub fn new(student_id: StudentId) -> Self {
        Self { student_id }
    }

    /// Allocates a monthly rent payment against a billing period
    ///
    /// # Errors
    ///
    /// * [`BillingError::InvalidAmount`] when `amount <= 0`
    /// * [`BillingError::MissingPeriodStart`] when no period was selected
    pub fn monthly(
        &self,
        amount: Money,
        period: Option<PeriodSelection>,
        method: PaymentMethod,
        paid_date: NaiveDate,
    ) -> Result<Payment, BillingError> {
        self.require_positive(amount)?;
        let range = period.ok_or(BillingError::MissingPeriodStart)?.resolve();

        tracing::debug!(student = %self.student_id, %amount, start = %range.start, "allocating monthly payment");

        Ok(Payment::new(
            self.student_id,
            amount,
            PaymentType::Rent,
            method,
            paid_date,
        )
        .with_period(range.start, range.end)
        .with_description("Monthly rent payment"))
    }

    /// Allocates an extra payment (fine, service fee, misc charge)
    ///
    /// Extra payments carry no billing period and never affect the anchor
    /// or the due date.
    ///
    /// # Errors
    ///
    /// * [`BillingError::InvalidAmount`] when `amount <= 0`
    /// * [`BillingError::MissingReason`] when the description is blank
    pub fn extra(
        &self,
        amount: Money,
        description: &str,
        method: PaymentMethod,
        paid_date: NaiveDate,
    ) -> Result<Payment, BillingError> {
        self.require_positive(amount)?;
        let description = description.trim();
        if description.is_empty() {
            return Err(BillingError::MissingReason);
        }

        Ok(Payment::new(
            self.student_id,
            amount,
            PaymentType::Extra,
            method,
            paid_date,
        )
        .with_description(description))
    }

    /// Allocates a completion payment against the initial admission balance
    ///
    /// # Errors
    ///
    /// * [`BillingError::InvalidAmount`] when `amount <= 0`
    /// * [`BillingError::AmountExceedsBalance`] when `amount > remaining_balance`
    pub fn complete(
        &self,
        amount: Money,
        remaining_balance: Money,
        method: PaymentMethod,
        paid_date: NaiveDate,
    ) -> Result<Payment, BillingError> {
        self.require_positive(amount)?;
        let excess = amount.checked_sub(&remaining_balance)?;
        if excess.is_positive() {
            return Err(BillingError::AmountExceedsBalance {
                amount: amount.amount(),
                remaining: remaining_balance.amount(),
            });
        }

        Ok(Payment::new(
            self.student_id,
            amount,
            PaymentType::Registration,
            method,
            paid_date,
        )
        .with_description("Remaining balance payment"))
    }

    fn require_positive(&self, amount: Money) -> Result<(), BillingError> {
        if !amount.is_positive() {
            return Err(BillingError::InvalidAmount {
                amount: amount.amount(),
            });
        }
        Ok(())
    }
}
