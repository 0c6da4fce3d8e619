//! Page results with the totals a client needs to render page controls.

use crate::PageRequest;

/// Number of pages needed to show `total_items` records `limit` at a time.
///
/// A zero `limit` yields zero pages rather than dividing by zero.
///
/// # Examples
/// ```
/// use pagination::total_pages;
///
/// assert_eq!(total_pages(0, 5), 0);
/// assert_eq!(total_pages(5, 5), 1);
/// assert_eq!(total_pages(6, 5), 2);
/// ```
#[must_use]
pub const fn total_pages(total_items: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_items.div_ceil(limit)
}

/// One window of records plus collection totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    current_page: u64,
    total_pages: u64,
    total_items: u64,
}

impl<T> Page<T> {
    /// Assemble a page for `request` from the records in its window and the
    /// total size of the collection.
    #[must_use]
    pub fn new(request: PageRequest, items: Vec<T>, total_items: u64) -> Self {
        Self {
            items,
            current_page: request.page(),
            total_pages: total_pages(total_items, request.limit()),
            total_items,
        }
    }

    /// Records in the window, in store order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page, returning its records.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Requested 1-based page number.
    #[must_use]
    pub const fn current_page(&self) -> u64 {
        self.current_page
    }

    /// `ceil(total_items / limit)`.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Size of the whole collection.
    #[must_use]
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Convert every record while keeping the totals.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}
