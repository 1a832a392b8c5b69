//! Billing period derivation
//!
//! A billing period is a fixed 30-day window against which one month's rent
//! is tracked as paid/remaining. Periods are never persisted by this crate;
//! they are recomputed on demand from the student's anchor date and payment
//! history.
//!
//! # Anchor rule
//!
//! The current period always starts at the anchor: `last_payment_date` if
//! any rent payment has been recorded, else `admission_date`. A rent payment
//! that settles a period moves the anchor to `period.start + 30d`; a missed
//! payment moves nothing, so the same period stays current (and eventually
//! overdue) until it is paid.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::{Clock, DateRange, Money};

use crate::payment::Payment;

/// Length of one billing cycle in days
///
/// Deliberately a literal 30 days rather than a calendar month; see the
/// product decision recorded in DESIGN.md.
pub const BILLING_CYCLE_DAYS: u64 = 30;

/// A derived billing period with its payment aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingPeriod {
    /// First day of the period (inclusive)
    pub start: NaiveDate,
    /// Day after the last day of the period (exclusive)
    pub end: NaiveDate,
    /// Human-readable range, e.g. "Nov 1 – Nov 30, 2024"
    pub label: String,
    /// True if today falls within `[start, end)`
    pub is_current: bool,
    /// Sum of rent payments recorded against this period
    pub paid: Money,
    /// Rent still owed for this period, clamped at zero
    pub remaining: Money,
}

impl BillingPeriod {
    /// The period's date range
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.start,
            end: self.end,
        }
    }

    /// Returns true if nothing is owed for this period
    pub fn is_settled(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Formats a period range for display, showing the last covered day
    ///
    /// The range is half-open, so the label ends one day before `end`:
    /// `[Nov 1, Dec 1)` reads "Nov 1 – Nov 30, 2024".
    pub fn format_label(start: NaiveDate, end: NaiveDate) -> String {
        let last_day = end.pred_opt().unwrap_or(end);
        if start.year() == last_day.year() {
            format!(
                "{} – {}, {}",
                start.format("%b %-d"),
                last_day.format("%b %-d"),
                start.year()
            )
        } else {
            format!(
                "{}, {} – {}, {}",
                start.format("%b %-d"),
                start.year(),
                last_day.format("%b %-d"),
                last_day.year()
            )
        }
    }
}

/// Derives the ordered sequence of billing periods for a student
///
/// Pure over its inputs: the same admission/payment data and `today` always
/// produce the same sequence. I/O (fetching payments, persisting anything)
/// is the caller's concern.
#[derive(Debug, Clone)]
pub struct BillingPeriodCalculator {
    admission_date: Option<NaiveDate>,
    last_payment_date: Option<NaiveDate>,
    monthly_rent: Money,
}

impl BillingPeriodCalculator {
    /// Creates a calculator for one student's stay
    ///
    /// # Arguments
    ///
    /// * `admission_date` - Start of tenancy; `None` yields an empty sequence
    /// * `last_payment_date` - Anchor left by the most recent settled rent payment
    /// * `monthly_rent` - Rent owed per 30-day cycle
    pub fn new(
        admission_date: Option<NaiveDate>,
        last_payment_date: Option<NaiveDate>,
        monthly_rent: Money,
    ) -> Self {
        Self {
            admission_date,
            last_payment_date,
            monthly_rent,
        }
    }

    /// The date the current billing period starts from
    pub fn anchor(&self) -> Option<NaiveDate> {
        self.last_payment_date.or(self.admission_date)
    }

    /// Generates the period sequence up to and one period past `today`
    ///
    /// Periods are contiguous and non-overlapping: each period's start is
    /// the previous period's end, beginning at the anchor. The sequence
    /// always includes one period starting after `today`, so a "next"
    /// unpaid period is visible even when the current one is settled.
    ///
    /// Rent payments are aggregated into the period whose start equals
    /// their `billing_period_start`; payments with unaligned custom ranges
    /// are ignored here (they do not corrupt totals, but are not shown
    /// against any period either).
    pub fn periods(&self, payments: &[Payment], today: NaiveDate) -> Vec<BillingPeriod> {
        let Some(anchor) = self.anchor() else {
            return Vec::new();
        };

        tracing::debug!(%anchor, %today, "deriving billing periods");

        let mut periods = Vec::new();
        let mut range = DateRange::from_start(anchor, BILLING_CYCLE_DAYS);

        loop {
            periods.push(self.build_period(range, payments, today));
            if range.start > today {
                break;
            }
            range = DateRange::from_start(range.end, BILLING_CYCLE_DAYS);
        }

        periods
    }

    /// The period containing `today`, if the anchor is not in the future
    pub fn current_period(&self, payments: &[Payment], today: NaiveDate) -> Option<BillingPeriod> {
        self.periods(payments, today)
            .into_iter()
            .find(|p| p.is_current)
    }

    /// Generates the period sequence as of the clock's current date
    ///
    /// Production callers pass a `SystemClock`; tests pin a `FixedClock`.
    pub fn periods_as_of(&self, payments: &[Payment], clock: &dyn Clock) -> Vec<BillingPeriod> {
        self.periods(payments, clock.today())
    }

    /// The current period as of the clock's current date
    pub fn current_period_as_of(
        &self,
        payments: &[Payment],
        clock: &dyn Clock,
    ) -> Option<BillingPeriod> {
        self.current_period(payments, clock.today())
    }

    fn build_period(&self, range: DateRange, payments: &[Payment], today: NaiveDate) -> BillingPeriod {
        let paid = self.paid_in(payments, range.start);
        // Zero rent means no due obligation; remaining clamps to zero either way.
        let remaining = self
            .monthly_rent
            .saturating_sub(&paid)
            .unwrap_or_else(|_| Money::zero(self.monthly_rent.currency()));

        BillingPeriod {
            start: range.start,
            end: range.end,
            label: BillingPeriod::format_label(range.start, range.end),
            is_current: range.contains(today),
            paid,
            remaining,
        }
    }

    /// Sum of rent payments bound to the period starting at `period_start`
    fn paid_in(&self, payments: &[Payment], period_start: NaiveDate) -> Money {
        let currency = self.monthly_rent.currency();
        payments
            .iter()
            .filter(|p| p.is_period_bound())
            .filter(|p| p.billing_period_start == Some(period_start))
            .filter(|p| p.amount.currency() == currency)
            .fold(Money::zero(currency), |acc, p| acc + p.amount)
    }
}

/// Applies the anchor-advancement rule after a payment is recorded
///
/// Only a rent payment bound to a period can move the anchor, and only once
/// that period's remaining reaches zero; the anchor then becomes
/// `period.start + 30d`. Extra payments never advance the anchor.
///
/// # Arguments
///
/// * `last_payment_date` - The student's anchor before this payment
/// * `payment` - The payment just recorded
/// * `monthly_rent` - Rent owed per cycle
/// * `previously_paid` - Rent already recorded against the same period
///
/// # Returns
///
/// The anchor after the payment (unchanged when the rule does not apply)
pub fn advance_anchor(
    last_payment_date: Option<NaiveDate>,
    payment: &Payment,
    monthly_rent: Money,
    previously_paid: Money,
) -> Option<NaiveDate> {
    let Some(period_start) = payment.billing_period_start else {
        return last_payment_date;
    };
    if !payment.is_period_bound() {
        return last_payment_date;
    }

    let total = match previously_paid.checked_add(&payment.amount) {
        Ok(total) => total,
        Err(_) => return last_payment_date,
    };
    let settled = match monthly_rent.saturating_sub(&total) {
        Ok(remaining) => remaining.is_zero(),
        Err(_) => false,
    };

    if settled {
        Some(period_start + Days::new(BILLING_CYCLE_DAYS))
    } else {
        last_payment_date
    }
}

/// Resolves the authoritative period list for display and selection
///
/// When the server supplies precomputed periods they take precedence; local
/// generation is only the fallback for an empty or unavailable list.
pub fn resolve_periods(
    available: &[BillingPeriod],
    calculator: &BillingPeriodCalculator,
    payments: &[Payment],
    today: NaiveDate,
) -> Vec<BillingPeriod> {
    if !available.is_empty() {
        return available.to_vec();
    }
    calculator.periods(payments, today)
}
