use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{AppError, Result};
use crate::store::StoredDocument;

const MAX_NAME_LENGTH: usize = 255;

/// Student document
///
/// Only the fields the API validates are typed; anything else the client
/// sends is kept in `extra` and returned as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Course the student is enrolled in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Student name is required"));
        }

        if self.name.len() > MAX_NAME_LENGTH {
            return Err(AppError::validation(format!(
                "Student name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }

        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(AppError::validation(format!(
                    "Invalid email address '{}'",
                    email
                )));
            }
        }

        Ok(())
    }
}

impl StoredDocument for Student {
    const COLLECTION: &'static str = "students";
    const KIND: &'static str = "Student";

    fn assign_metadata(&mut self, id: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.id = Some(id);
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
    }
}
