//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::{Days, NaiveDate};

use core_kernel::{BedId, Money, StudentId};
use domain_billing::{Payment, PaymentMethod, PaymentType, BILLING_CYCLE_DAYS};
use domain_residency::Student;

use crate::fixtures::{IdFixtures, MoneyFixtures, TemporalFixtures};

/// Builder for an admitted test student
pub struct TestStudentBuilder {
    full_name: String,
    phone: String,
    monthly_rent: Money,
    security_deposit: Money,
    bed_id: BedId,
    admission_date: Option<NaiveDate>,
    last_payment_date: Option<NaiveDate>,
}

impl Default for TestStudentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStudentBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            full_name: "Ramesh Thapa".to_string(),
            phone: "9841000000".to_string(),
            monthly_rent: MoneyFixtures::rent(),
            security_deposit: MoneyFixtures::deposit(),
            bed_id: IdFixtures::bed_id(),
            admission_date: Some(TemporalFixtures::admission()),
            last_payment_date: None,
        }
    }

    /// Sets the full name
    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = name.into();
        self
    }

    /// Sets the monthly rent
    pub fn with_monthly_rent(mut self, rent: Money) -> Self {
        self.monthly_rent = rent;
        self
    }

    /// Sets the security deposit
    pub fn with_security_deposit(mut self, deposit: Money) -> Self {
        self.security_deposit = deposit;
        self
    }

    /// Sets the admission date; `None` leaves the student unadmitted
    pub fn with_admission_date(mut self, date: Option<NaiveDate>) -> Self {
        self.admission_date = date;
        self
    }

    /// Sets the billing anchor
    pub fn with_last_payment_date(mut self, date: NaiveDate) -> Self {
        self.last_payment_date = Some(date);
        self
    }

    /// Builds the student, admitted when an admission date is set
    pub fn build(self) -> Student {
        let mut student = Student::register(
            self.full_name,
            self.phone,
            self.monthly_rent,
            self.security_deposit,
        )
        .expect("builder defaults are valid");

        if let Some(admission) = self.admission_date {
            student
                .admit(self.bed_id, admission, None)
                .expect("freshly registered student admits cleanly");
        }
        student.last_payment_date = self.last_payment_date;
        student
    }
}

/// Builder for test payments
pub struct TestPaymentBuilder {
    student_id: StudentId,
    amount: Money,
    payment_type: PaymentType,
    method: PaymentMethod,
    paid_date: NaiveDate,
    period_start: Option<NaiveDate>,
}

impl Default for TestPaymentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPaymentBuilder {
    /// Creates a builder for a full rent payment against the first cycle
    pub fn new() -> Self {
        Self {
            student_id: IdFixtures::student_id(),
            amount: MoneyFixtures::rent(),
            payment_type: PaymentType::Rent,
            method: PaymentMethod::Cash,
            paid_date: TemporalFixtures::mid_first_cycle(),
            period_start: Some(TemporalFixtures::admission()),
        }
    }

    /// Sets the paying student
    pub fn with_student(mut self, student_id: StudentId) -> Self {
        self.student_id = student_id;
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the payment type
    pub fn with_payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = payment_type;
        self
    }

    /// Sets the payment method
    pub fn with_method(mut self, method: PaymentMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the paid date
    pub fn with_paid_date(mut self, date: NaiveDate) -> Self {
        self.paid_date = date;
        self
    }

    /// Binds the payment to the period starting at `start`
    pub fn with_period_start(mut self, start: NaiveDate) -> Self {
        self.period_start = Some(start);
        self
    }

    /// Leaves the payment unbound to any period
    pub fn without_period(mut self) -> Self {
        self.period_start = None;
        self
    }

    /// Builds the payment
    pub fn build(self) -> Payment {
        let payment = Payment::new(
            self.student_id,
            self.amount,
            self.payment_type,
            self.method,
            self.paid_date,
        );
        match self.period_start {
            Some(start) => payment.with_period(start, start + Days::new(BILLING_CYCLE_DAYS)),
            None => payment,
        }
    }
}
