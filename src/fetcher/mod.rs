pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;

/// Fetches one listing page and returns its raw markup.
///
/// Implementations retry transient failures internally; an `Err` from
/// [`fetch`](Fetcher::fetch) is terminal for the page and aborts the run.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}
