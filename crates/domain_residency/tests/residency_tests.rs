//! End-to-end residency scenarios

use chrono::NaiveDate;

use core_kernel::Money;
use domain_residency::{
    kyc_status, Bed, BedStatus, Building, DocumentType, Floor, KycDocument, KycStatus,
    OccupancySummary, ResidencyError, Room, Student, StudentStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn one_bed() -> Bed {
    let building = Building::new("Annapurna Block").with_address("Lakeside, Pokhara");
    let floor = Floor::new(building.id, "Second Floor");
    let room = Room::new(floor.id, "201");
    Bed::new(room.id, "B")
}

// ============================================================================
// Scenario: registration through admission
// ============================================================================

#[test]
fn admission_takes_bed_and_applies_rent_override() {
    let mut bed = one_bed().with_monthly_rent(Money::rupees(11000));
    let mut student = Student::register(
        "Sita Gurung",
        "9806000000",
        Money::rupees(10000),
        Money::rupees(5000),
    )
    .unwrap()
    .with_email("sita@example.com");

    bed.assign(student.id).unwrap();
    student
        .admit(bed.id, date(2024, 1, 1), bed.monthly_rent)
        .unwrap();

    assert_eq!(student.status, StudentStatus::Active);
    assert_eq!(student.monthly_rent, Money::rupees(11000));
    assert_eq!(bed.status, BedStatus::Occupied);
    assert_eq!(bed.occupant, Some(student.id));
}

// ============================================================================
// Scenario: a taken bed cannot be double-assigned or deleted
// ============================================================================

#[test]
fn occupied_bed_is_locked_until_checkout() {
    let mut bed = one_bed();
    let mut student = Student::register(
        "Hari Shrestha",
        "9851000000",
        Money::rupees(9000),
        Money::rupees(4500),
    )
    .unwrap();

    bed.assign(student.id).unwrap();
    student.admit(bed.id, date(2024, 3, 15), None).unwrap();

    let other = Student::register(
        "Bikash Rai",
        "9862000000",
        Money::rupees(9000),
        Money::rupees(4500),
    )
    .unwrap();
    assert!(matches!(
        bed.assign(other.id),
        Err(ResidencyError::BedNotVacant(_))
    ));
    assert!(matches!(
        bed.ensure_removable(),
        Err(ResidencyError::BedOccupied(_))
    ));

    student.check_out().unwrap();
    bed.release();

    assert!(bed.ensure_removable().is_ok());
    assert!(bed.assign(other.id).is_ok());
}

// ============================================================================
// Scenario: occupancy dashboard numbers
// ============================================================================

#[test]
fn occupancy_summary_tracks_statuses() {
    let mut beds: Vec<Bed> = (0..5).map(|_| one_bed()).collect();
    let student = Student::register(
        "Anita Lama",
        "9813000000",
        Money::rupees(8000),
        Money::rupees(4000),
    )
    .unwrap();

    beds[0].assign(student.id).unwrap();
    beds[1].status = BedStatus::Maintenance;
    beds[2].status = BedStatus::Reserved;

    let summary = OccupancySummary::from_beds(&beds);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.occupied, 1);
    assert_eq!(summary.maintenance, 1);
    assert_eq!(summary.reserved, 1);
    assert_eq!(summary.vacant, 2);
}

// ============================================================================
// Scenario: KYC rollup over a student's documents
// ============================================================================

#[test]
fn kyc_rollup_across_documents() {
    let student = Student::register(
        "Prakash KC",
        "9845000000",
        Money::rupees(10000),
        Money::rupees(5000),
    )
    .unwrap();
    let today = date(2024, 6, 1);

    let citizenship = KycDocument::new(student.id, DocumentType::CitizenshipCard)
        .with_number("28-01-70-04567");
    assert_eq!(kyc_status([&citizenship], today), KycStatus::Pending);

    let mut passport = KycDocument::new(student.id, DocumentType::Passport)
        .with_validity(date(2014, 5, 1), Some(date(2024, 5, 1)));
    passport.verify("warden");
    assert_eq!(kyc_status([&passport], today), KycStatus::Expired);

    // One pending plus one expired leaves the student pending overall
    assert_eq!(kyc_status([&citizenship, &passport], today), KycStatus::Pending);

    let mut verified = citizenship.clone();
    verified.verify("warden");
    assert_eq!(
        kyc_status([&verified, &passport], today),
        KycStatus::Verified
    );
}

// ============================================================================
// Scenario: suspension keeps the bed, checkout frees it
// ============================================================================

#[test]
fn suspension_retains_residency() {
    let mut bed = one_bed();
    let mut student = Student::register(
        "Mina Tamang",
        "9808000000",
        Money::rupees(7500),
        Money::rupees(3750),
    )
    .unwrap();

    bed.assign(student.id).unwrap();
    student.admit(bed.id, date(2024, 2, 1), None).unwrap();

    student.suspend().unwrap();
    assert!(student.is_resident());
    assert_eq!(bed.status, BedStatus::Occupied);

    student.reactivate().unwrap();
    student.mark_away(date(2024, 4, 10)).unwrap();
    student.mark_returned();

    student.check_out().unwrap();
    bed.release();
    assert!(!student.is_resident());
    assert_eq!(bed.status, BedStatus::Vacant);
}
