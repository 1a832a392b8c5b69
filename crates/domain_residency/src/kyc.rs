//! KYC (Know Your Customer) documents collected from students

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{DocumentId, StudentId};

/// KYC verification status for a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KycStatus {
    Pending,
    Verified,
    Expired,
}

/// Identity document type accepted at registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    CitizenshipCard,
    Passport,
    NationalId,
    StudentIdCard,
    Other(String),
}

/// An identity document submitted by a student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KycDocument {
    pub id: DocumentId,
    pub student_id: StudentId,
    pub document_type: DocumentType,
    pub document_number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub verified_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl KycDocument {
    /// Creates a new unverified document
    pub fn new(student_id: StudentId, document_type: DocumentType) -> Self {
        Self {
            id: DocumentId::new(),
            student_id,
            document_type,
            document_number: None,
            issue_date: None,
            expiry_date: None,
            verified: false,
            verified_at: None,
            verified_by: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the document number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.document_number = Some(number.into());
        self
    }

    /// Sets issue and expiry dates
    pub fn with_validity(mut self, issue: NaiveDate, expiry: Option<NaiveDate>) -> Self {
        self.issue_date = Some(issue);
        self.expiry_date = expiry;
        self
    }

    /// Marks the document as verified
    pub fn verify(&mut self, verifier: &str) {
        self.verified = true;
        self.verified_at = Some(Utc::now());
        self.verified_by = Some(verifier.to_string());
    }

    /// Checks whether the document has expired as of `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date.map_or(false, |exp| exp < today)
    }

    /// Effective status as of `today`
    pub fn status(&self, today: NaiveDate) -> KycStatus {
        if self.is_expired(today) {
            KycStatus::Expired
        } else if self.verified {
            KycStatus::Verified
        } else {
            KycStatus::Pending
        }
    }
}

/// Rolls up a student's documents into one status
///
/// Verified as soon as any current document is verified; Expired when
/// everything on file has lapsed; Pending otherwise (including no
/// documents at all).
pub fn kyc_status<'a>(
    documents: impl IntoIterator<Item = &'a KycDocument>,
    today: NaiveDate,
) -> KycStatus {
    let mut saw_any = false;
    let mut all_expired = true;
    for doc in documents {
        saw_any = true;
        match doc.status(today) {
            KycStatus::Verified => return KycStatus::Verified,
            KycStatus::Expired => {}
            KycStatus::Pending => all_expired = false,
        }
    }
    if saw_any && all_expired {
        KycStatus::Expired
    } else {
        KycStatus::Pending
    }
}
