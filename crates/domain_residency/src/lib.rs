//! Residency Domain
//!
//! This crate manages everything about who lives where: student records
//! and their stay lifecycle, the building/floor/room/bed inventory, and
//! KYC documents collected at registration.
//!
//! Billing-facing state lives on [`Student`]: `admission_date` starts the
//! tenancy and `last_payment_date` carries the billing anchor that the
//! billing domain derives 30-day periods from.
//!
//! # Examples
//!
//! ```rust
//! use domain_residency::{Student, Bed, Building, Floor, Room};
//! use core_kernel::Money;
//! use chrono::NaiveDate;
//!
//! let building = Building::new("Main Block");
//! let floor = Floor::new(building.id, "Ground Floor");
//! let room = Room::new(floor.id, "101");
//! let mut bed = Bed::new(room.id, "A").with_monthly_rent(Money::rupees(12000));
//!
//! let mut student = Student::register(
//!     "Ramesh Thapa",
//!     "9841000000",
//!     Money::rupees(10000),
//!     Money::rupees(5000),
//! )
//! .unwrap();
//!
//! bed.assign(student.id).unwrap();
//! student
//!     .admit(
//!         bed.id,
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         bed.monthly_rent,
//!     )
//!     .unwrap();
//!
//! // The bed override replaces the agreed rent
//! assert_eq!(student.monthly_rent, Money::rupees(12000));
//! ```

pub mod error;
pub mod inventory;
pub mod kyc;
pub mod student;

pub use error::ResidencyError;
pub use inventory::{Bed, BedStatus, Building, Floor, OccupancySummary, Room};
pub use kyc::{kyc_status, DocumentType, KycDocument, KycStatus};
pub use student::{DietaryPreference, Student, StudentStatus};
