//! Listing extraction and pagination.
//!
//! # Architecture
//!
//! ```text
//! Collector ─(page URL)→ Fetcher ─(markup)→ Extractor ─→ Vec<Book>
//! ```
//!
//! [`Extractor`] turns one fetched page into zero or more [`Book`]s,
//! applying the promotional-offer inclusion filter. [`Collector`] drives
//! the fetcher across all result pages, detecting the last page once on
//! page 1 and accumulating records until termination.
//!
//! [`Book`]: crate::domain::Book

mod extractor;
mod pagination;

pub use extractor::Extractor;
pub use pagination::{last_page_number, next_is_disabled, Collector};
