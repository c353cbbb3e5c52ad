use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_LIMIT: u64 = 100;

/// Offsets and limits are bound as signed 64-bit integers by the driver.
const MAX_BOUND: u64 = i64::MAX as u64;

#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Number of products to skip, default 0
    pub skip: Option<u64>,
    /// Maximum number of products to return, default 100
    pub limit: Option<u64>,
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive substring of the name or description
    pub search: Option<String>,
}

impl ProductQuery {
    /// Returns `(offset, limit)` with defaults applied, clamped to what the
    /// store accepts.
    pub fn normalize(&self) -> (u64, u64) {
        (
            self.skip.unwrap_or(0).min(MAX_BOUND),
            self.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_BOUND),
        )
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}
