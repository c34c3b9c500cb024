use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use super::todo::Todo;
use crate::{Error, Result};

/// Which records pass the completion filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn accepts(self, completed: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !completed,
            StatusFilter::Completed => completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(Error::UnknownVariant {
                kind: "status filter",
                value: other.to_string(),
            }),
        }
    }
}

/// Order of the filtered records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Highest id (most recently created) first
    #[default]
    NewestFirst,
    /// Lowest id first
    OldestFirst,
    /// Text in collation order
    TextAscending,
    /// Text in reverse collation order
    TextDescending,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::NewestFirst => "newest_first",
            SortKey::OldestFirst => "oldest_first",
            SortKey::TextAscending => "text_ascending",
            SortKey::TextDescending => "text_descending",
        }
    }

    /// Same key, opposite direction
    pub fn reversed(self) -> Self {
        match self {
            SortKey::NewestFirst => SortKey::OldestFirst,
            SortKey::OldestFirst => SortKey::NewestFirst,
            SortKey::TextAscending => SortKey::TextDescending,
            SortKey::TextDescending => SortKey::TextAscending,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "newest_first" => Ok(SortKey::NewestFirst),
            "oldest_first" => Ok(SortKey::OldestFirst),
            "text_ascending" => Ok(SortKey::TextAscending),
            "text_descending" => Ok(SortKey::TextDescending),
            other => Err(Error::UnknownVariant {
                kind: "sort key",
                value: other.to_string(),
            }),
        }
    }
}

/// Number of records per page, always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub const DEFAULT: PageSize = PageSize(NonZeroUsize::new(5).unwrap());

    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(Error::InvalidPageSize(size))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(NonZeroUsize::MIN);

    pub fn new(page: usize) -> Result<Self> {
        NonZeroUsize::new(page)
            .map(Self)
            .ok_or(Error::InvalidPageNumber(page))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Previous page, staying on the first page
    pub fn prev(self) -> Self {
        NonZeroUsize::new(self.0.get() - 1)
            .map(Self)
            .unwrap_or(Self::FIRST)
    }

    /// Clamp to `max(1, total_pages)`
    pub fn clamp_to(self, total_pages: usize) -> Self {
        let last = NonZeroUsize::new(total_pages).unwrap_or(NonZeroUsize::MIN);
        Self(self.0.min(last))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<usize> for PageNumber {
    type Error = Error;

    fn try_from(page: usize) -> Result<Self> {
        Self::new(page)
    }
}

impl From<PageNumber> for usize {
    fn from(page: PageNumber) -> Self {
        page.get()
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Filter, sort and pagination configuration for the derived view
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewParams {
    /// Case-insensitive substring to search for; empty matches everything
    pub search: String,
    pub status: StatusFilter,
    pub sort: SortKey,
    pub page: PageNumber,
    pub page_size: PageSize,
}

impl ViewParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: PageNumber) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Number of pages needed for `total_items` matching records
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size.get())
    }
}

/// One page of the derived view plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewResult {
    pub items: Vec<Todo>,
    pub total_pages: usize,
    /// Matching records before pagination
    pub total_items: usize,
    /// Requested page, echoed back (may exceed `total_pages`)
    pub page: usize,
}

impl ViewResult {
    pub fn is_past_end(&self) -> bool {
        self.page > self.total_pages.max(1)
    }
}
