// Payment record document
//
// A student's raw financial data: the base course fee plus itemized one-time
// registration fees. Every monetary field is optional; absence at any level
// counts as zero. Fields the service does not know about are kept verbatim
// in `extra` so records round-trip through the API unchanged.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{AppError, Result};
use crate::store::StoredDocument;

/// One itemized registration fee entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeEntry {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::float_option::serialize",
        deserialize_with = "crate::core::amount::deserialize_option"
    )]
    pub amount: Option<Decimal>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeeEntry {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: Some(amount),
            extra: Map::new(),
        }
    }
}

/// The one-time fee categories tracked apart from the course fee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationFeeKind {
    StudentRegistration,
    CourseRegistration,
    ConfirmationFee,
}

impl RegistrationFeeKind {
    pub const ALL: [RegistrationFeeKind; 3] = [
        RegistrationFeeKind::StudentRegistration,
        RegistrationFeeKind::CourseRegistration,
        RegistrationFeeKind::ConfirmationFee,
    ];

    /// JSON key of this fee inside `registrationFees`
    pub fn key(&self) -> &'static str {
        match self {
            RegistrationFeeKind::StudentRegistration => "studentRegistration",
            RegistrationFeeKind::CourseRegistration => "courseRegistration",
            RegistrationFeeKind::ConfirmationFee => "confirmationFee",
        }
    }
}

impl std::fmt::Display for RegistrationFeeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Itemized registration fees; each entry may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFees {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_registration: Option<FeeEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_registration: Option<FeeEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_fee: Option<FeeEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegistrationFees {
    pub fn entry(&self, kind: RegistrationFeeKind) -> Option<&FeeEntry> {
        match kind {
            RegistrationFeeKind::StudentRegistration => self.student_registration.as_ref(),
            RegistrationFeeKind::CourseRegistration => self.course_registration.as_ref(),
            RegistrationFeeKind::ConfirmationFee => self.confirmation_fee.as_ref(),
        }
    }

    pub fn set(&mut self, kind: RegistrationFeeKind, entry: FeeEntry) {
        let slot = match kind {
            RegistrationFeeKind::StudentRegistration => &mut self.student_registration,
            RegistrationFeeKind::CourseRegistration => &mut self.course_registration,
            RegistrationFeeKind::ConfirmationFee => &mut self.confirmation_fee,
        };
        *slot = Some(entry);
    }
}

/// A student's payment document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,

    /// Base course fee owed
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::float_option::serialize",
        deserialize_with = "crate::core::amount::deserialize_option"
    )]
    pub final_payment: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_fees: Option<RegistrationFees>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PaymentRecord {
    /// Record with only a course fee
    pub fn with_course_fee(final_payment: Decimal) -> Self {
        Self {
            final_payment: Some(final_payment),
            ..Default::default()
        }
    }

    /// Builder-style setter for one registration fee
    pub fn with_registration_fee(mut self, kind: RegistrationFeeKind, amount: Decimal) -> Self {
        self.registration_fees
            .get_or_insert_with(RegistrationFees::default)
            .set(kind, FeeEntry::new(amount));
        self
    }

    /// Base course fee, zero when absent
    pub fn course_fee(&self) -> Decimal {
        self.final_payment.unwrap_or(Decimal::ZERO)
    }

    /// One registration fee amount, zero when any level is absent
    pub fn registration_fee(&self, kind: RegistrationFeeKind) -> Decimal {
        self.registration_fees
            .as_ref()
            .and_then(|fees| fees.entry(kind))
            .and_then(|entry| entry.amount)
            .unwrap_or(Decimal::ZERO)
    }

    /// Reject negative amounts on write
    pub fn validate(&self) -> Result<()> {
        if self.course_fee() < Decimal::ZERO {
            return Err(AppError::validation("finalPayment cannot be negative"));
        }

        for kind in RegistrationFeeKind::ALL {
            if self.registration_fee(kind) < Decimal::ZERO {
                return Err(AppError::validation(format!(
                    "registrationFees.{}.amount cannot be negative",
                    kind
                )));
            }
        }

        if let Some(student_id) = &self.student_id {
            if student_id.trim().is_empty() {
                return Err(AppError::validation("studentId cannot be blank"));
            }
        }

        Ok(())
    }
}

impl StoredDocument for PaymentRecord {
    const COLLECTION: &'static str = "payments";
    const KIND: &'static str = "Payment";

    fn assign_metadata(&mut self, id: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.id = Some(id);
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
    }
}
