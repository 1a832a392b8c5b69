//! REST boundary for billing operations
//!
//! The server owns persistence, authorization, and the authoritative state
//! machine; this crate only shapes requests and interprets responses. The
//! port trait below is the seam an HTTP adapter implements — the domain
//! logic itself performs no I/O and has no retry policy, so transport
//! failures surface here as opaque [`ApiError`]s for the caller to retry
//! or abandon.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::{Currency, Money, StudentId};

use crate::payment::{Payment, PaymentMethod};
use crate::period::BillingPeriod;

/// Error type for billing API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport failure
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Session expired or credentials rejected
    #[error("Unauthorized")]
    Unauthorized,

    /// The student or resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server rejected the request
    #[error("Rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// `GET /students/{id}/billing-status` response
///
/// When `available_periods` is non-empty it is authoritative and local
/// period generation is bypassed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingStatusResponse {
    pub monthly_rent: Decimal,
    #[serde(default)]
    pub available_periods: Vec<AvailablePeriod>,
}

/// One server-computed billing period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailablePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
    pub is_current: bool,
    pub paid: Decimal,
    pub remaining: Decimal,
}

impl AvailablePeriod {
    /// Converts the wire shape into a domain period
    pub fn into_period(self, currency: Currency) -> BillingPeriod {
        BillingPeriod {
            start: self.start,
            end: self.end,
            label: self.label,
            is_current: self.is_current,
            paid: Money::new(self.paid, currency),
            remaining: Money::new(self.remaining, currency),
        }
    }
}

impl BillingStatusResponse {
    /// Converts all server periods into domain periods
    pub fn periods(self, currency: Currency) -> Vec<BillingPeriod> {
        self.available_periods
            .into_iter()
            .map(|p| p.into_period(currency))
            .collect()
    }
}

/// `POST /students/{id}/payments/monthly` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPaymentRequest {
    pub amount: Decimal,
    pub billing_period_start: NaiveDate,
    pub billing_period_end: NaiveDate,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// `POST /students/{id}/payments/extra` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraPaymentRequest {
    pub amount: Decimal,
    pub description: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents_data: Vec<String>,
}

/// `POST /students/{id}/payments/complete` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletePaymentRequest {
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MonthlyPaymentRequest {
    /// Builds the wire body from an allocated payment
    ///
    /// Returns `None` if the payment is not bound to a billing period;
    /// allocated monthly payments always are.
    pub fn from_payment(payment: &Payment) -> Option<Self> {
        Some(Self {
            amount: payment.amount.amount(),
            billing_period_start: payment.billing_period_start?,
            billing_period_end: payment.billing_period_end?,
            payment_method: payment.method,
            description: payment.description.clone(),
            notes: payment.notes.clone(),
        })
    }
}

impl ExtraPaymentRequest {
    /// Builds the wire body from an allocated extra payment
    pub fn from_payment(payment: &Payment, documents_data: Vec<String>) -> Self {
        Self {
            amount: payment.amount.amount(),
            description: payment.description.clone().unwrap_or_default(),
            payment_method: payment.method,
            notes: payment.notes.clone(),
            documents_data,
        }
    }
}

impl CompletePaymentRequest {
    /// Builds the wire body from an allocated completion payment
    pub fn from_payment(payment: &Payment) -> Self {
        Self {
            amount: payment.amount.amount(),
            payment_method: payment.method,
            description: payment.description.clone(),
            notes: payment.notes.clone(),
        }
    }
}

/// Port to the billing endpoints of the server
///
/// Implemented by an HTTP adapter outside this crate; test doubles
/// implement it in-memory.
#[async_trait]
pub trait BillingApi: Send + Sync {
    /// Fetches rent and the authoritative period list for a student
    async fn billing_status(&self, student: StudentId) -> Result<BillingStatusResponse, ApiError>;

    /// Records a monthly rent payment
    async fn record_monthly(
        &self,
        student: StudentId,
        request: MonthlyPaymentRequest,
    ) -> Result<(), ApiError>;

    /// Records an extra payment
    async fn record_extra(
        &self,
        student: StudentId,
        request: ExtraPaymentRequest,
    ) -> Result<(), ApiError>;

    /// Records a completion payment against the initial balance
    async fn record_complete(
        &self,
        student: StudentId,
        request: CompletePaymentRequest,
    ) -> Result<(), ApiError>;

    /// Lists the student's full payment history
    async fn payments(&self, student: StudentId) -> Result<Vec<Payment>, ApiError>;
}
