//! Outstanding balance tracking
//!
//! Derived totals over a student's payment history: what is owed, what has
//! been paid, and what remains. Recomputed on demand, never stored.

use serde::{Deserialize, Serialize};

use core_kernel::{Money, MoneyError};

use crate::payment::Payment;
use crate::period::BillingPeriod;

/// A student's running paid/pending totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutstandingBalance {
    /// Total owed
    pub total_due: Money,
    /// Sum of all payments recorded
    pub total_paid: Money,
    /// Amount still owed, clamped at zero
    pub remaining: Money,
}

impl OutstandingBalance {
    /// Balance at first admission: one month's rent plus the security deposit
    ///
    /// # Arguments
    ///
    /// * `monthly_rent` - Rent for the first cycle
    /// * `security_deposit` - Refundable deposit collected at admission
    /// * `payments` - Payments recorded so far (typically the registration payment)
    pub fn at_admission(
        monthly_rent: Money,
        security_deposit: Money,
        payments: &[Payment],
    ) -> Result<Self, MoneyError> {
        let total_due = monthly_rent.checked_add(&security_deposit)?;
        Self::against(total_due, payments)
    }

    /// Balance after admission: the sum of all rent-period remainings
    ///
    /// # Arguments
    ///
    /// * `periods` - Derived billing periods for the stay
    /// * `payments` - Full payment history
    pub fn from_periods(periods: &[BillingPeriod], payments: &[Payment]) -> Result<Self, MoneyError> {
        let currency = periods
            .first()
            .map(|p| p.remaining.currency())
            .or_else(|| payments.first().map(|p| p.amount.currency()))
            .unwrap_or(core_kernel::Currency::NPR);

        let mut total_due = Money::zero(currency);
        for period in periods {
            total_due = total_due.checked_add(&period.remaining)?;
        }
        Self::against(total_due, payments)
    }

    fn against(total_due: Money, payments: &[Payment]) -> Result<Self, MoneyError> {
        let mut total_paid = Money::zero(total_due.currency());
        for payment in payments {
            total_paid = total_paid.checked_add(&payment.amount)?;
        }
        let remaining = total_due.saturating_sub(&total_paid)?;

        Ok(Self {
            total_due,
            total_paid,
            remaining,
        })
    }

    /// Returns true if nothing is owed
    pub fn is_settled(&self) -> bool {
        self.remaining.is_zero()
    }
}
