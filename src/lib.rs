//! # Bookrake
//!
//! Scrapes the Amazon Kindle free-books listing and publishes the result as
//! a daily Blogger post.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Extractor → Store → Renderer → Publisher
//! ```
//!
//! - [`fetcher`]: sequential HTTP fetching with flat retries and a
//!   run-stable user-agent identity
//! - [`scrape`]: record extraction from listing markup plus the pagination
//!   loop that drives the fetcher across all result pages
//! - [`store`]: CSV persistence of scraped records
//! - [`render`]: turns the persisted records into the daily HTML document
//! - [`publisher`]: Blogger `posts.insert` boundary behind an auth seam
//!
//! ## Quick Start
//!
//! ```bash
//! # Scrape the listing into the record store
//! bookrake scrape
//!
//! # Render the store into the output HTML document
//! bookrake render
//!
//! # Publish the document to Blogger
//! bookrake publish
//!
//! # All three stages in order (the daily job)
//! bookrake run
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all components:
/// fetcher, store, publisher.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `scrape` - Collect qualifying books into the record store
/// - `render` - Render the store into the output document
/// - `publish` - Publish the rendered document to Blogger
/// - `run` - Run all three stages sequentially
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/bookrake/config.toml`, covering the listing URL,
/// extraction marker, retry policy, file paths and publish settings.
pub mod config;

/// Core domain model.
///
/// - [`Book`](domain::Book): one qualifying listing record
pub mod domain;

/// HTTP fetching with retry-on-failure.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for page fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based
///   implementation with a run-stable user agent
pub mod fetcher;

/// Listing extraction and pagination.
///
/// - [`Extractor`](scrape::Extractor): per-page record extraction
/// - [`Collector`](scrape::Collector): pagination loop and accumulator
pub mod scrape;

/// CSV persistence layer.
///
/// - [`Store`](store::Store): trait defining storage operations
/// - [`CsvStore`](store::CsvStore): tabular-file implementation
pub mod store;

/// HTML document rendering.
///
/// Pure function from the record collection to the daily post body.
pub mod render;

/// Publish boundary.
///
/// - [`Publisher`](publisher::Publisher): async trait for publishing
/// - [`Authenticator`](publisher::Authenticator): credential seam
/// - [`BloggerPublisher`](publisher::blogger::BloggerPublisher): Blogger v3
pub mod publisher;
