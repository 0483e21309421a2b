//! Pagination primitives

use serde::{Deserialize, Serialize};

/// Page request parameters (1-based)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default = "Pagination::default_page")]
    pub page: u32,
    #[serde(default = "Pagination::default_per_page")]
    pub per_page: u32,
}

impl Pagination {
    const MAX_PER_PAGE: u32 = 200;

    fn default_page() -> u32 {
        1
    }

    fn default_per_page() -> u32 {
        50
    }

    /// Clamp to sane bounds (page ≥ 1, 1 ≤ per_page ≤ 200)
    pub fn clamped(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, Self::MAX_PER_PAGE),
        }
    }

    /// SQL OFFSET for this page
    pub fn offset(&self) -> i64 {
        let p = self.clamped();
        ((p.page - 1) as i64) * (p.per_page as i64)
    }

    /// SQL LIMIT for this page
    pub fn limit(&self) -> i64 {
        self.clamped().per_page as i64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Self::default_page(),
            per_page: Self::default_per_page(),
        }
    }
}

/// Paginated response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: i64, pagination: Pagination) -> Self {
        let p = pagination.clamped();
        Self {
            items,
            total,
            page: p.page,
            per_page: p.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let p = Pagination { page: 3, per_page: 20 };
        assert_eq!(p.offset(), 40);
        assert_eq!(p.limit(), 20);
    }

    #[test]
    fn test_clamping() {
        let p = Pagination { page: 0, per_page: 100_000 }.clamped();
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 200);
    }
}
