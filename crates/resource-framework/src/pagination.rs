//! Pagination for resource listings.
//!
//! The page size is process-wide configuration handed to [`PaginatedLister::new`];
//! callers only choose which page they want. Page numbers are 1-based and anything
//! below 1 reads as the first page.
//!
//! ```rust
//! use resource_framework::pagination::Page;
//!
//! let page = Page::from_slice(vec!['a', 'b', 'c', 'd', 'e'], 2, 2);
//! assert_eq!(page.items, vec!['c', 'd']);
//! assert_eq!(page.total, 5);
//! assert_eq!(page.last_page, 3);
//! ```

use crate::entity::CatalogEntity;
use crate::store::{ListFilter, ResourceStore};
use serde::Serialize;
use tracing::debug;

/// One page of a listing plus the metadata needed to walk the rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub last_page: u64,
}

impl<T> Page<T> {
    /// Cut page `page` out of the full, already ordered result set.
    pub fn from_slice(all: Vec<T>, page: u64, page_size: u64) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total = all.len() as u64;
        let offset = (page - 1).saturating_mul(page_size);
        let items = all
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(page_size).unwrap_or(usize::MAX))
            .collect();
        Self {
            items,
            total,
            page,
            page_size,
            last_page: total.div_ceil(page_size).max(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            last_page: self.last_page,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginatedLister {
    page_size: u64,
}

impl PaginatedLister {
    pub fn new(page_size: u64) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Filter, order by `created` descending, then cut the requested page.
    /// An empty page is a valid answer here; callers decide what it means.
    pub fn list<T: CatalogEntity>(
        &self,
        store: &ResourceStore<T>,
        filter: &ListFilter,
        page: u64,
    ) -> Page<T> {
        // cut the page from borrowed rows; only its items are cloned
        let page = Page::from_slice(store.find_all_by_filter(filter), page, self.page_size)
            .map(T::clone);
        debug!(
            entity_type = T::KIND,
            lang = %filter.lang,
            total = page.total,
            page = page.page,
            "List"
        );
        page
    }
}
