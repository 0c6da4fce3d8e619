//! Validated page requests and the offset windows they resolve to.

use thiserror::Error;

/// Page number used when the client does not supply one.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the client does not supply one.
pub const DEFAULT_LIMIT: i64 = 5;

/// Reasons a `(page, limit)` pair cannot be turned into a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The page number is zero or negative.
    #[error("page must be at least 1, got {page}")]
    PageBelowOne {
        /// Rejected page number.
        page: i64,
    },
    /// The page size is zero or negative.
    #[error("limit must be at least 1, got {limit}")]
    LimitBelowOne {
        /// Rejected page size.
        limit: i64,
    },
    /// `(page - 1) * limit` does not fit a signed 64-bit offset.
    #[error("page {page} with limit {limit} is out of range")]
    WindowOverflow {
        /// Requested page number.
        page: i64,
        /// Requested page size.
        limit: i64,
    },
}

/// A 1-based page number and page size, both at least 1.
///
/// The skip offset `(page - 1) * limit` is checked at construction so every
/// request converts to a [`PageWindow`] that fits signed 64-bit SQL offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u64,
    limit: u64,
    offset: u64,
}

impl PageRequest {
    /// Validate a page number and page size.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError`] when either value is below 1 or the offset
    /// overflows.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, PageRequestError};
    ///
    /// assert!(PageRequest::new(1, 5).is_ok());
    /// assert_eq!(
    ///     PageRequest::new(0, 5),
    ///     Err(PageRequestError::PageBelowOne { page: 0 })
    /// );
    /// ```
    pub fn new(page: i64, limit: i64) -> Result<Self, PageRequestError> {
        if page < 1 {
            return Err(PageRequestError::PageBelowOne { page });
        }
        if limit < 1 {
            return Err(PageRequestError::LimitBelowOne { limit });
        }
        let offset = (page - 1)
            .checked_mul(limit)
            .ok_or(PageRequestError::WindowOverflow { page, limit })?;

        Ok(Self {
            page: page.unsigned_abs(),
            limit: limit.unsigned_abs(),
            offset: offset.unsigned_abs(),
        })
    }

    /// Validate optional inputs, substituting [`DEFAULT_PAGE`] and
    /// [`DEFAULT_LIMIT`] for missing values.
    ///
    /// # Errors
    ///
    /// Same as [`PageRequest::new`].
    pub fn with_defaults(page: Option<i64>, limit: Option<i64>) -> Result<Self, PageRequestError> {
        Self::new(page.unwrap_or(DEFAULT_PAGE), limit.unwrap_or(DEFAULT_LIMIT))
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Maximum number of records on the page.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Offset window the request selects.
    #[must_use]
    pub const fn window(&self) -> PageWindow {
        PageWindow {
            offset: self.offset,
            limit: self.limit,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE.unsigned_abs(),
            limit: DEFAULT_LIMIT.unsigned_abs(),
            offset: 0,
        }
    }
}

/// Contiguous `[offset, offset + limit)` slice of a store's native order.
///
/// Both values never exceed `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    offset: u64,
    limit: u64,
}

impl PageWindow {
    /// Number of records skipped before the window starts.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Maximum number of records inside the window.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Offset as a signed SQL value.
    #[must_use]
    pub fn offset_i64(&self) -> i64 {
        i64::try_from(self.offset).unwrap_or(i64::MAX)
    }

    /// Limit as a signed SQL value.
    #[must_use]
    pub fn limit_i64(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    //! Window arithmetic coverage.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 5, 0)]
    #[case(2, 5, 5)]
    #[case(3, 10, 20)]
    #[case(7, 1, 6)]
    fn window_offset_is_page_minus_one_times_limit(
        #[case] page: i64,
        #[case] limit: i64,
        #[case] offset: u64,
    ) {
        let request = PageRequest::new(page, limit).expect("valid request");
        assert_eq!(request.window().offset(), offset);
        assert_eq!(request.window().limit(), limit.unsigned_abs());
    }

    #[rstest]
    #[case(0, 5, PageRequestError::PageBelowOne { page: 0 })]
    #[case(-3, 5, PageRequestError::PageBelowOne { page: -3 })]
    #[case(1, 0, PageRequestError::LimitBelowOne { limit: 0 })]
    #[case(1, -1, PageRequestError::LimitBelowOne { limit: -1 })]
    fn rejects_values_below_one(
        #[case] page: i64,
        #[case] limit: i64,
        #[case] expected: PageRequestError,
    ) {
        assert_eq!(PageRequest::new(page, limit), Err(expected));
    }

    #[rstest]
    fn rejects_overflowing_offsets() {
        let err = PageRequest::new(i64::MAX, 2).expect_err("overflow");
        assert_eq!(
            err,
            PageRequestError::WindowOverflow {
                page: i64::MAX,
                limit: 2
            }
        );
    }

    #[rstest]
    fn defaults_apply_to_missing_values() {
        let request = PageRequest::with_defaults(None, None).expect("defaults valid");
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), 5);

        let only_page = PageRequest::with_defaults(Some(3), None).expect("valid");
        assert_eq!(only_page.window().offset(), 10);
    }

    #[rstest]
    fn large_windows_stay_within_signed_range() {
        let request = PageRequest::new(2, i64::MAX).expect("offset fits");
        assert_eq!(request.window().offset_i64(), i64::MAX);
        assert_eq!(request.window().limit_i64(), i64::MAX);
    }
}
