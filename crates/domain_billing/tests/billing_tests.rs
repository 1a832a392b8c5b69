//! End-to-end billing scenarios for domain_billing

use chrono::{Days, NaiveDate};
use rust_decimal_macros::dec;

use core_kernel::{DateRange, Money, StudentId};

use domain_billing::{
    advance_anchor, BillingError, BillingPeriodCalculator, DueAssessment, DueStatus,
    OutstandingBalance, Payment, PaymentAllocator, PaymentMethod, PaymentType, PeriodSelection,
    BILLING_CYCLE_DAYS,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rent_payment(student: StudentId, amount: i64, period_start: NaiveDate) -> Payment {
    Payment::new(
        student,
        Money::rupees(amount),
        PaymentType::Rent,
        PaymentMethod::Cash,
        period_start,
    )
    .with_period(period_start, period_start + Days::new(BILLING_CYCLE_DAYS))
}

// ============================================================================
// Scenario: fresh admission, no payments yet
// ============================================================================

#[test]
fn fresh_admission_mid_period() {
    // Admission 2024-01-01, rent 10000, no payments, today 2024-01-20
    let calc = BillingPeriodCalculator::new(Some(date(2024, 1, 1)), None, Money::rupees(10000));
    let today = date(2024, 1, 20);

    let periods = calc.periods(&[], today);
    let current = calc.current_period(&[], today).unwrap();

    assert_eq!(current.start, date(2024, 1, 1));
    assert_eq!(current.end, date(2024, 1, 31));
    assert_eq!(current.remaining.amount(), dec!(10000));
    assert_eq!(periods[0], current);

    let due = DueAssessment::for_period(&current, today);
    assert_eq!(due.days_until_due, 11);
    assert_eq!(due.status, DueStatus::Ok);
}

// ============================================================================
// Scenario: one full rent payment advances the anchor
// ============================================================================

#[test]
fn settled_period_advances_anchor_and_goes_overdue() {
    let student = StudentId::new();
    let rent = Money::rupees(10000);

    // One rent payment of 10000 against billing_period_start 2024-01-01
    let payment = rent_payment(student, 10000, date(2024, 1, 1));
    let anchor = advance_anchor(None, &payment, rent, Money::rupees(0));
    assert_eq!(anchor, Some(date(2024, 1, 31)));

    // Today 2024-02-05: current period [2024-01-31, 2024-03-01), fully unpaid
    let calc = BillingPeriodCalculator::new(Some(date(2024, 1, 1)), anchor, rent);
    let today = date(2024, 2, 5);
    let history = vec![payment];

    let current = calc.current_period(&history, today).unwrap();
    assert_eq!(current.start, date(2024, 1, 31));
    assert_eq!(current.end, date(2024, 3, 1));
    assert_eq!(current.remaining.amount(), dec!(10000));

    // Due date is the period end; far enough out to be Ok today, overdue after
    let due_after_end = DueAssessment::for_period(&current, date(2024, 3, 6));
    assert!(due_after_end.days_until_due < 0);
    assert_eq!(due_after_end.status, DueStatus::Overdue);
    assert_eq!(due_after_end.days_overdue(), 5);
}

// ============================================================================
// Scenario: an extra payment changes nothing about the cycle
// ============================================================================

#[test]
fn extra_payment_leaves_anchor_and_periods_unchanged() {
    let student = StudentId::new();
    let rent = Money::rupees(10000);
    let allocator = PaymentAllocator::new(student);

    let rent_pmt = rent_payment(student, 10000, date(2024, 1, 1));
    let anchor = advance_anchor(None, &rent_pmt, rent, Money::rupees(0));

    // Extra fine recorded between rent payments
    let fine = allocator
        .extra(
            Money::rupees(500),
            "late fine",
            PaymentMethod::Cash,
            date(2024, 2, 1),
        )
        .unwrap();
    let anchor_after_fine = advance_anchor(anchor, &fine, rent, Money::rupees(0));
    assert_eq!(anchor_after_fine, anchor);

    let calc = BillingPeriodCalculator::new(Some(date(2024, 1, 1)), anchor_after_fine, rent);
    let today = date(2024, 2, 5);

    let with_fine = calc.periods(&[rent_pmt.clone(), fine], today);
    let without_fine = calc.periods(&[rent_pmt], today);
    assert_eq!(with_fine, without_fine);
}

// ============================================================================
// Scenario: partial payments accumulate until the period settles
// ============================================================================

#[test]
fn partial_payments_settle_a_period_incrementally() {
    let student = StudentId::new();
    let rent = Money::rupees(10000);
    let calc = BillingPeriodCalculator::new(Some(date(2024, 1, 1)), None, rent);
    let today = date(2024, 1, 20);

    let first = rent_payment(student, 4000, date(2024, 1, 1));
    let anchor = advance_anchor(None, &first, rent, Money::rupees(0));
    assert_eq!(anchor, None);

    let current = calc.current_period(std::slice::from_ref(&first), today).unwrap();
    assert_eq!(current.paid.amount(), dec!(4000));
    assert_eq!(current.remaining.amount(), dec!(6000));
    assert!(!current.is_settled());

    let second = rent_payment(student, 6000, date(2024, 1, 1));
    let anchor = advance_anchor(anchor, &second, rent, current.paid);
    assert_eq!(anchor, Some(date(2024, 1, 31)));

    let history = vec![first, second];
    let settled = calc.current_period(&history, today).unwrap();
    assert!(settled.is_settled());
}

// ============================================================================
// Scenario: pre-payment for a future period
// ============================================================================

#[test]
fn prepayment_binds_to_a_future_period() {
    let student = StudentId::new();
    let allocator = PaymentAllocator::new(student);
    let calc = BillingPeriodCalculator::new(Some(date(2024, 1, 1)), None, Money::rupees(10000));
    let today = date(2024, 1, 20);

    // The generated sequence always exposes the next period
    let periods = calc.periods(&[], today);
    let next = &periods[1];
    assert!(next.start > today);

    let prepayment = allocator
        .monthly(
            Money::rupees(10000),
            Some(PeriodSelection::Listed(DateRange {
                start: next.start,
                end: next.end,
            })),
            PaymentMethod::BankTransfer,
            today,
        )
        .unwrap();

    let refreshed = calc.periods(std::slice::from_ref(&prepayment), today);
    assert!(refreshed[1].is_settled());
    assert_eq!(refreshed[0].remaining.amount(), dec!(10000));
}

// ============================================================================
// Scenario: completion payment bounded by the initial balance
// ============================================================================

#[test]
fn completion_payment_cannot_exceed_remaining_balance() {
    let student = StudentId::new();
    let allocator = PaymentAllocator::new(student);

    let balance = OutstandingBalance::at_admission(
        Money::rupees(10000),
        Money::rupees(5000),
        &[Payment::new(
            student,
            Money::rupees(12000),
            PaymentType::Registration,
            PaymentMethod::Cash,
            date(2024, 1, 1),
        )],
    )
    .unwrap();
    assert_eq!(balance.remaining.amount(), dec!(3000));

    // One rupee over the remaining balance is rejected
    let rejected = allocator.complete(
        Money::rupees(3001),
        balance.remaining,
        PaymentMethod::Cash,
        date(2024, 1, 10),
    );
    assert!(matches!(
        rejected,
        Err(BillingError::AmountExceedsBalance { .. })
    ));

    // The exact remaining balance settles it
    let accepted = allocator
        .complete(
            Money::rupees(3000),
            balance.remaining,
            PaymentMethod::Cash,
            date(2024, 1, 10),
        )
        .unwrap();
    assert_eq!(accepted.payment_type, PaymentType::Registration);
}

// ============================================================================
// Due-status thresholds
// ============================================================================

#[test]
fn due_status_bucket_boundaries() {
    let end = date(2024, 3, 1);

    assert_eq!(
        DueAssessment::evaluate(end, date(2024, 3, 1)).status,
        DueStatus::Overdue
    );
    assert_eq!(
        DueAssessment::evaluate(end, date(2024, 2, 23)).status,
        DueStatus::DueSoon
    );
    assert_eq!(
        DueAssessment::evaluate(end, date(2024, 2, 22)).status,
        DueStatus::Ok
    );
}
