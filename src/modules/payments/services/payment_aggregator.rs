use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::payments::models::{PaymentRecord, RegistrationFeeKind};

/// Per-component view of a student's total obligation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    #[serde(with = "rust_decimal::serde::float")]
    pub course_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub student_registration: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub course_registration: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub confirmation_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub registration_total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_final_payment: Decimal,
}

/// Totals across many payment records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub count: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub course_fees: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub registration_fees: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_final_payment: Decimal,
}

impl Default for PaymentSummary {
    fn default() -> Self {
        Self {
            count: 0,
            course_fees: Decimal::ZERO,
            registration_fees: Decimal::ZERO,
            total_final_payment: Decimal::ZERO,
        }
    }
}

/// PaymentAggregator computes what a student owes from a payment record
///
/// total = finalPayment + studentRegistration.amount
///       + courseRegistration.amount + confirmationFee.amount
///
/// Every missing level contributes zero. Sums saturate at the `Decimal`
/// bounds, so aggregation is total over any decodable record.
pub struct PaymentAggregator;

impl PaymentAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Total final payment for one record
    pub fn compute_total(&self, record: &PaymentRecord) -> Decimal {
        RegistrationFeeKind::ALL
            .iter()
            .map(|kind| record.registration_fee(*kind))
            .fold(record.course_fee(), Decimal::saturating_add)
    }

    /// Component amounts alongside the total
    pub fn breakdown(&self, record: &PaymentRecord) -> PaymentBreakdown {
        let student_registration =
            record.registration_fee(RegistrationFeeKind::StudentRegistration);
        let course_registration = record.registration_fee(RegistrationFeeKind::CourseRegistration);
        let confirmation_fee = record.registration_fee(RegistrationFeeKind::ConfirmationFee);

        let registration_total = student_registration
            .saturating_add(course_registration)
            .saturating_add(confirmation_fee);

        PaymentBreakdown {
            course_fee: record.course_fee(),
            student_registration,
            course_registration,
            confirmation_fee,
            registration_total,
            total_final_payment: self.compute_total(record),
        }
    }

    /// Fold many records into collection-wide totals
    pub fn summarize<'a, I>(&self, records: I) -> PaymentSummary
    where
        I: IntoIterator<Item = &'a PaymentRecord>,
    {
        records
            .into_iter()
            .fold(PaymentSummary::default(), |summary, record| {
                self.accumulate(summary, record)
            })
    }

    /// Add one record to a running summary
    pub fn accumulate(&self, summary: PaymentSummary, record: &PaymentRecord) -> PaymentSummary {
        let breakdown = self.breakdown(record);
        PaymentSummary {
            count: summary.count + 1,
            course_fees: summary.course_fees.saturating_add(breakdown.course_fee),
            registration_fees: summary
                .registration_fees
                .saturating_add(breakdown.registration_total),
            total_final_payment: summary
                .total_final_payment
                .saturating_add(breakdown.total_final_payment),
        }
    }
}

impl Default for PaymentAggregator {
    fn default() -> Self {
        Self::new()
    }
}
