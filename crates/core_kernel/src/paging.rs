//! Paged listings
//!
//! Every listing endpoint of the downstream services answers with the same
//! envelope: a page of items plus the page coordinates that produced it.
//! [`PageRequest`] carries the caller's optional coordinates and is resolved
//! against the process-wide [`PaginationDefaults`] when the composite layer
//! needs concrete values.

use serde::{Deserialize, Serialize};

/// A page of items returned by a listing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    /// Items of this page, in backend order
    pub items: Vec<T>,
    /// Zero-based page index
    pub page_number: u32,
    /// Requested page size
    pub page_size: u32,
    /// Total number of matching elements, when the backend reports it
    #[serde(default)]
    pub total_elements: u64,
    /// Total number of pages, when the backend reports it
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Paged<T> {
    /// Creates a page, deriving the totals from the items when nothing else is known
    pub fn new(items: Vec<T>, page_number: u32, page_size: u32) -> Self {
        let total_elements = items.len() as u64;
        Self {
            items,
            page_number,
            page_size,
            total_elements,
            total_pages: u32::from(total_elements > 0),
        }
    }

    /// Sets the totals reported by the backend
    pub fn with_totals(mut self, total_elements: u64, total_pages: u32) -> Self {
        self.total_elements = total_elements;
        self.total_pages = total_pages;
        self
    }

    /// Cuts one page out of a complete, already ordered result set
    pub fn slice(all: Vec<T>, page_number: u32, page_size: u32) -> Self {
        let total_elements = all.len() as u64;
        let total_pages = if page_size == 0 {
            0
        } else {
            total_elements.div_ceil(u64::from(page_size)) as u32
        };
        let skip = page_number as usize * page_size as usize;
        let items = all.into_iter().skip(skip).take(page_size as usize).collect();

        Self {
            items,
            page_number,
            page_size,
            total_elements,
            total_pages,
        }
    }

    /// An empty page at the given coordinates
    pub fn empty(page_number: u32, page_size: u32) -> Self {
        Self::new(Vec::new(), page_number, page_size)
    }

    /// Transforms every item while keeping order and page metadata
    pub fn map<U, F>(self, f: F) -> Paged<U>
    where
        F: FnMut(T) -> U,
    {
        Paged {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }

    /// Returns true when the page holds no more items than its size allows
    pub fn is_consistent(&self) -> bool {
        self.items.len() as u64 <= u64::from(self.page_size)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Process-wide default page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationDefaults {
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: 10,
        }
    }
}

/// Optional page coordinates supplied by a caller
///
/// A `None` coordinate is never sent downstream, letting the backend apply
/// its own default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageRequest {
    pub fn new(page_number: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// A request with both coordinates set
    pub fn of(page_number: u32, page_size: u32) -> Self {
        Self::new(Some(page_number), Some(page_size))
    }

    /// Fills missing coordinates from the defaults; explicit values win
    pub fn resolve(self, defaults: &PaginationDefaults) -> PageRequest {
        PageRequest {
            page_number: Some(self.page_number.unwrap_or(defaults.page_number)),
            page_size: Some(self.page_size.unwrap_or(defaults.page_size)),
        }
    }

    /// Query-string pairs for the coordinates that are set
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(number) = self.page_number {
            pairs.push(("pageNumber", number.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("pageSize", size.to_string()));
        }
        pairs
    }
}
