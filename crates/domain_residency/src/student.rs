//! Student records and stay lifecycle

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{BedId, Money, StudentId};

use crate::error::ResidencyError;

/// Student stay status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentStatus {
    /// Registration started but admission payment not settled
    PendingAdmission,
    /// Currently staying
    Active,
    /// Stay paused (e.g. unpaid dues); requires reactivation
    Suspended,
    /// Stay ended
    CheckedOut,
}

/// Dietary preference collected at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    Veg,
    NonVeg,
}

/// A student staying (or registered to stay) at the hostel
///
/// `admission_date` is immutable once set; `last_payment_date` is the
/// billing anchor, moved forward by the server each time a rent payment
/// settles a period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier
    pub id: StudentId,
    /// Full name
    pub full_name: String,
    /// Contact phone
    pub phone: String,
    /// Contact email
    pub email: Option<String>,
    /// Date of birth
    pub date_of_birth: Option<NaiveDate>,
    /// Dietary preference
    pub dietary_preference: DietaryPreference,
    /// Assigned bed
    pub bed_id: Option<BedId>,
    /// Start of tenancy
    pub admission_date: Option<NaiveDate>,
    /// Billing anchor left by the most recent settled rent payment
    pub last_payment_date: Option<NaiveDate>,
    /// Rent per 30-day cycle (bed override applied at assignment)
    pub monthly_rent: Money,
    /// Refundable deposit collected at admission
    pub security_deposit: Money,
    /// Stay status
    pub status: StudentStatus,
    /// Set when the student is temporarily away from the hostel
    pub expected_return_date: Option<NaiveDate>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Creates a student in PENDING_ADMISSION with registration biodata
    ///
    /// # Arguments
    ///
    /// * `full_name` - Student's full name (required)
    /// * `phone` - Contact phone (required)
    /// * `monthly_rent` - Agreed rent per cycle
    /// * `security_deposit` - Deposit to collect at admission
    pub fn register(
        full_name: impl Into<String>,
        phone: impl Into<String>,
        monthly_rent: Money,
        security_deposit: Money,
    ) -> Result<Self, ResidencyError> {
        let full_name = full_name.into();
        let phone = phone.into();
        if full_name.trim().is_empty() {
            return Err(ResidencyError::MissingField("full_name"));
        }
        if phone.trim().is_empty() {
            return Err(ResidencyError::MissingField("phone"));
        }

        Ok(Self {
            id: StudentId::new_v7(),
            full_name,
            phone,
            email: None,
            date_of_birth: None,
            dietary_preference: DietaryPreference::Veg,
            bed_id: None,
            admission_date: None,
            last_payment_date: None,
            monthly_rent,
            security_deposit,
            status: StudentStatus::PendingAdmission,
            expected_return_date: None,
            created_at: Utc::now(),
        })
    }

    /// Sets the contact email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the date of birth
    pub fn with_date_of_birth(mut self, dob: NaiveDate) -> Self {
        self.date_of_birth = Some(dob);
        self
    }

    /// Sets the dietary preference
    pub fn with_dietary_preference(mut self, preference: DietaryPreference) -> Self {
        self.dietary_preference = preference;
        self
    }

    /// Admits the student: assigns the bed and starts the tenancy
    ///
    /// Only valid from PENDING_ADMISSION. A bed-specific rent override, if
    /// any, replaces the agreed rent.
    pub fn admit(
        &mut self,
        bed_id: BedId,
        admission_date: NaiveDate,
        rent_override: Option<Money>,
    ) -> Result<(), ResidencyError> {
        if self.status != StudentStatus::PendingAdmission {
            return Err(ResidencyError::InvalidTransition(format!(
                "cannot admit from {:?}",
                self.status
            )));
        }

        tracing::info!(student = %self.id, bed = %bed_id, %admission_date, "admitting student");

        self.bed_id = Some(bed_id);
        self.admission_date = Some(admission_date);
        if let Some(rent) = rent_override {
            self.monthly_rent = rent;
        }
        self.status = StudentStatus::Active;
        Ok(())
    }

    /// Suspends an active stay
    pub fn suspend(&mut self) -> Result<(), ResidencyError> {
        if self.status != StudentStatus::Active {
            return Err(ResidencyError::InvalidTransition(format!(
                "cannot suspend from {:?}",
                self.status
            )));
        }
        self.status = StudentStatus::Suspended;
        Ok(())
    }

    /// Reactivates a suspended stay
    pub fn reactivate(&mut self) -> Result<(), ResidencyError> {
        if self.status != StudentStatus::Suspended {
            return Err(ResidencyError::InvalidTransition(format!(
                "cannot reactivate from {:?}",
                self.status
            )));
        }
        self.status = StudentStatus::Active;
        Ok(())
    }

    /// Ends the stay and releases the bed
    pub fn check_out(&mut self) -> Result<(), ResidencyError> {
        match self.status {
            StudentStatus::Active | StudentStatus::Suspended => {
                self.status = StudentStatus::CheckedOut;
                self.bed_id = None;
                self.expected_return_date = None;
                Ok(())
            }
            _ => Err(ResidencyError::InvalidTransition(format!(
                "cannot check out from {:?}",
                self.status
            ))),
        }
    }

    /// Marks the student temporarily away until `expected_return`
    pub fn mark_away(&mut self, expected_return: NaiveDate) -> Result<(), ResidencyError> {
        if self.status != StudentStatus::Active {
            return Err(ResidencyError::InvalidTransition(
                "only an active student can be marked away".to_string(),
            ));
        }
        self.expected_return_date = Some(expected_return);
        Ok(())
    }

    /// Clears the away marker
    pub fn mark_returned(&mut self) {
        self.expected_return_date = None;
    }

    /// Returns true if the student currently occupies a bed
    pub fn is_resident(&self) -> bool {
        matches!(
            self.status,
            StudentStatus::Active | StudentStatus::Suspended
        ) && self.bed_id.is_some()
    }
}
