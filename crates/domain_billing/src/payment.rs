//! Payment records
//!
//! Payments are append-only from this crate's perspective: the core folds
//! them into period aggregates and running totals but never mutates or
//! deletes them once recorded.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Money, PaymentId, StudentId};

/// What a payment is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Monthly rent against a billing period
    Rent,
    /// Fine, service fee, or other charge outside the billing cycle
    Extra,
    /// Initial admission payment (first rent + deposit baseline)
    Registration,
    /// Payment made to reactivate a suspended stay
    Reactivation,
    /// Refundable security deposit
    SecurityDeposit,
}

/// How a payment was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    Esewa,
    Khalti,
    Fonepay,
}

/// A payment recorded against a student
///
/// `billing_period_start`/`end` are populated for rent payments bound to a
/// billing cycle and left empty for extra payments, which are deliberately
/// decoupled from due-date accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Student this payment belongs to
    pub student_id: StudentId,
    /// Payment amount
    pub amount: Money,
    /// Payment classification
    pub payment_type: PaymentType,
    /// Billing period start (rent payments only)
    pub billing_period_start: Option<NaiveDate>,
    /// Billing period end (rent payments only)
    pub billing_period_end: Option<NaiveDate>,
    /// Payment method
    pub method: PaymentMethod,
    /// Date the payment was made
    pub paid_date: NaiveDate,
    /// Description
    pub description: Option<String>,
    /// Free-form remarks
    pub notes: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a new payment record
    ///
    /// # Arguments
    ///
    /// * `student_id` - Student being charged
    /// * `amount` - Payment amount
    /// * `payment_type` - Classification
    /// * `method` - Payment method
    /// * `paid_date` - Date the payment was made
    pub fn new(
        student_id: StudentId,
        amount: Money,
        payment_type: PaymentType,
        method: PaymentMethod,
        paid_date: NaiveDate,
    ) -> Self {
        Self {
            id: PaymentId::new_v7(),
            student_id,
            amount,
            payment_type,
            billing_period_start: None,
            billing_period_end: None,
            method,
            paid_date,
            description: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// Binds the payment to a billing period
    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.billing_period_start = Some(start);
        self.billing_period_end = Some(end);
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the remarks
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns true if this payment counts against a billing period
    pub fn is_period_bound(&self) -> bool {
        self.payment_type == PaymentType::Rent && self.billing_period_start.is_some()
    }
}
