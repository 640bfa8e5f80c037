//! Client-side pagination over an in-memory list.
//!
//! The caller hands over a list that is already searched and filtered; the
//! paginator only decides which slice of it is on screen. Everything the
//! pager shows (page count, "Showing X to Y of Z") is derived on read from
//! the list, the current page and the page size, so it can never go stale.

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not pick one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Snapshot of the paging metadata a table view displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Current page number (1-based).
    pub current_page: usize,
    /// Total number of pages, 0 for an empty list.
    pub total_pages: usize,
    /// Number of items shown per page.
    pub items_per_page: usize,
    /// 1-based position of the first item on the page.
    pub start_index: usize,
    /// 1-based position of the last item on the page.
    pub end_index: usize,
    /// Length of the whole list.
    pub total_items: usize,
}

/// Pagination state for one list view.
///
/// Invariant: `1 <= current_page <= max(total_pages, 1)` after every
/// mutation. Out-of-range requests are clamped, never rejected.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    current_page: usize,
    items_per_page: usize,
}

impl<T> Paginator<T> {
    /// Create a paginator on page 1 with the default page size.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_items_per_page(items, DEFAULT_ITEMS_PER_PAGE)
    }

    /// Create a paginator on page 1 with the given page size.
    ///
    /// A page size of 0 is clamped to 1.
    pub fn with_items_per_page(items: Vec<T>, items_per_page: usize) -> Self {
        Self {
            items,
            current_page: 1,
            items_per_page: clamp_page_size(items_per_page),
        }
    }

    /// The full list being paged.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the list, e.g. after the search term changed.
    ///
    /// The current page is kept when it still exists and reset to 1
    /// otherwise.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if self.current_page > self.last_valid_page() {
            tracing::debug!(
                page = self.current_page,
                total_pages = self.total_pages(),
                "list shrank below current page, resetting to page 1"
            );
            self.current_page = 1;
        }
    }

    /// Current page number (1-based).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Number of pages; 0 when the list is empty.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.items_per_page)
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// The slice of items on the current page.
    pub fn current_items(&self) -> &[T] {
        let start = self.offset().min(self.items.len());
        let end = self.end_index();
        self.items.get(start..end).unwrap_or(&[])
    }

    /// 1-based position of the first item on the current page.
    ///
    /// For an empty list this is 1 while `end_index` is 0.
    pub fn start_index(&self) -> usize {
        self.offset() + 1
    }

    /// 1-based position of the last item on the current page.
    pub fn end_index(&self) -> usize {
        self.current_page
            .saturating_mul(self.items_per_page)
            .min(self.items.len())
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Jump to a page, clamping the request into `[1, total_pages]`.
    ///
    /// With no pages at all the paginator stays on page 1.
    pub fn go_to_page(&mut self, page: i64) {
        let last = i64::try_from(self.last_valid_page()).unwrap_or(i64::MAX);
        let clamped = page.clamp(1, last);
        if clamped != page {
            tracing::debug!(requested = page, clamped, "page request out of range");
        }
        self.current_page = usize::try_from(clamped).unwrap_or(1);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page_as_i64().saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page_as_i64().saturating_sub(1));
    }

    /// Change the page size and go back to page 1.
    ///
    /// A page size of 0 is clamped to 1.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        if items_per_page == 0 {
            tracing::debug!("page size 0 requested, using 1");
        }
        self.items_per_page = clamp_page_size(items_per_page);
        self.current_page = 1;
    }

    /// Snapshot of the current paging metadata.
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            current_page: self.current_page,
            total_pages: self.total_pages(),
            items_per_page: self.items_per_page,
            start_index: self.start_index(),
            end_index: self.end_index(),
            total_items: self.total_items(),
        }
    }

    fn offset(&self) -> usize {
        (self.current_page - 1).saturating_mul(self.items_per_page)
    }

    fn last_valid_page(&self) -> usize {
        self.total_pages().max(1)
    }

    fn page_as_i64(&self) -> i64 {
        i64::try_from(self.current_page).unwrap_or(i64::MAX)
    }
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn clamp_page_size(items_per_page: usize) -> usize {
    items_per_page.max(1)
}
