//! Offset pagination primitives shared by the contact store and service.
//!
//! A [`PageRequest`] is the validated `(page, limit)` pair received from a
//! client. It resolves to a [`PageWindow`] (`offset`, `limit`) that storage
//! adapters use to slice their records, and the results come back as a
//! [`Page`] carrying the totals needed to render page controls.
//!
//! # Example
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::new(2, 5).expect("valid request");
//! assert_eq!(request.window().offset(), 5);
//!
//! let page = Page::new(request, vec!["f", "g"], 7);
//! assert_eq!(page.total_pages(), 2);
//! assert_eq!(page.current_page(), 2);
//! ```

mod page;
mod request;

pub use page::{Page, total_pages};
pub use request::{DEFAULT_LIMIT, DEFAULT_PAGE, PageRequest, PageRequestError, PageWindow};
