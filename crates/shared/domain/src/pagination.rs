//! Paging parameters for product listings.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_PAGE_SIZE, SORT_ASC, SORT_DESC};
use crate::error::{DomainError, DomainResult};

/// Sort direction for paged listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a sort parameter. Only the exact strings `"asc"` and `"desc"`
    /// are recognised; anything else falls back to ascending.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(SORT_DESC) => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => SORT_ASC,
            SortOrder::Desc => SORT_DESC,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated page request. `page_number` is 1-indexed and both numbers
/// are at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u64,
    page_size: u64,
    offset: u64,
    sort: SortOrder,
}

impl PageRequest {
    /// Validate raw paging input.
    ///
    /// Non-positive page numbers or sizes are rejected; sizes above
    /// [`MAX_PAGE_SIZE`] are capped. The offset must fit in a signed
    /// 64-bit SQL `OFFSET`.
    pub fn new(page_number: i64, page_size: i64, sort: SortOrder) -> DomainResult<Self> {
        if page_number < 1 {
            return Err(DomainError::validation("page number must be at least 1"));
        }
        if page_size < 1 {
            return Err(DomainError::validation("page size must be at least 1"));
        }

        let page_number = page_number as u64;
        let page_size = (page_size as u64).min(MAX_PAGE_SIZE);
        let offset = (page_number - 1)
            .checked_mul(page_size)
            .filter(|offset| *offset <= i64::MAX as u64)
            .ok_or_else(|| DomainError::validation("page number out of range"))?;

        Ok(Self {
            page_number,
            page_size,
            offset,
            sort,
        })
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Rows to skip before the page starts
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Maximum rows in the page
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}
