use crate::filter::FilterError;
use crate::record::Record;

/// 1-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Result<Self, FilterError> {
        if page == 0 {
            return Err(FilterError::ZeroPagination { name: "page" });
        }
        if per_page == 0 {
            return Err(FilterError::ZeroPagination { name: "per_page" });
        }
        Ok(Self { page, per_page })
    }

    /// A single page holding every match.
    pub fn everything() -> Self {
        Self {
            page: 1,
            per_page: usize::MAX,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages for `total` matches; at least 1 even when empty.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page).max(1)
    }

    /// Half-open `[start, end)` slice bounds, clamped to `total`.
    pub fn bounds(&self, total: usize) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.per_page).min(total);
        let end = start.saturating_add(self.per_page).min(total);
        (start, end)
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    pub entries: Vec<Record>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}
