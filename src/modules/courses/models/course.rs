use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{AppError, Result};
use crate::store::StoredDocument;

const MAX_TITLE_LENGTH: usize = 255;

/// Course document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form duration label, e.g. "6 months"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Listed course fee
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::float_option::serialize",
        deserialize_with = "crate::core::amount::deserialize_option"
    )]
    pub fee: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Course {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation("Course title is required"));
        }

        if self.title.len() > MAX_TITLE_LENGTH {
            return Err(AppError::validation(format!(
                "Course title cannot exceed {} characters",
                MAX_TITLE_LENGTH
            )));
        }

        if matches!(self.fee, Some(fee) if fee < Decimal::ZERO) {
            return Err(AppError::validation("Course fee cannot be negative"));
        }

        Ok(())
    }
}

impl StoredDocument for Course {
    const COLLECTION: &'static str = "courses";
    const KIND: &'static str = "Course";

    fn assign_metadata(&mut self, id: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.id = Some(id);
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
    }
}
