use serde::Deserialize;

use crate::core::{AppError, Result};

/// Upper bound for a single page of documents
pub const MAX_PAGE_SIZE: u32 = 500;

/// Query parameters shared by every collection listing
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

fn default_limit() -> u32 {
    50
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl ListQuery {
    /// Reject empty or oversized pages
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(AppError::validation("limit must be greater than 0"));
        }

        if self.limit > MAX_PAGE_SIZE {
            return Err(AppError::validation(format!(
                "limit cannot exceed {}",
                MAX_PAGE_SIZE
            )));
        }

        Ok(())
    }
}
