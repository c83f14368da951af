use serde::Deserialize;

use crate::errors::AppError;

/// Pagination helper for list queries (1-based pages)
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.page < 1 {
            return Err(AppError::BadRequest("Page must be at least 1".into()));
        }
        if self.per_page < 1 {
            return Err(AppError::BadRequest("Per-page must be at least 1".into()));
        }
        Ok(())
    }

    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * (self.per_page as usize)
    }

    /// Number of pages needed for `total` items; 0 when there are none.
    pub fn total_pages(&self, total: usize) -> i64 {
        (total as i64 + self.per_page - 1) / self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}
