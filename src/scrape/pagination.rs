use std::sync::Arc;

use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::app::Result;
use crate::config::ScrapeConfig;
use crate::domain::Book;
use crate::fetcher::Fetcher;
use crate::scrape::Extractor;

/// Scan the pagination strip for the highest integer page label.
///
/// Non-numeric labels ("Next", ellipses) are ignored. A page without a
/// pagination strip is a single-page result set.
pub fn last_page_number(doc: &Html) -> u32 {
    let strip = Selector::parse("span.s-pagination-strip").unwrap();
    let item = Selector::parse("span.s-pagination-item").unwrap();

    match doc.select(&strip).next() {
        Some(strip_el) => strip_el
            .select(&item)
            .filter_map(|el| el.text().collect::<String>().trim().parse::<u32>().ok())
            .fold(1, u32::max),
        None => 1,
    }
}

/// Whether the "Next" pagination control is present and marked disabled.
pub fn next_is_disabled(doc: &Html) -> bool {
    let next = Selector::parse("li.s-pagination-next").unwrap();
    doc.select(&next)
        .next()
        .map(|el| el.value().classes().any(|c| c == "s-pagination-disabled"))
        .unwrap_or(false)
}

/// Everything the collector needs from one parsed page.
struct PageScan {
    books: Vec<Book>,
    last_page: Option<u32>,
    next_disabled: bool,
}

/// Drives the fetcher across every page of the result set.
///
/// Pages are fetched strictly one at a time in increasing order. The
/// accumulated record collection is owned by the collector for the run
/// and handed off by value; a fatal fetch error discards the run.
pub struct Collector {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    extractor: Extractor,
    base_url: String,
}

impl Collector {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, config: &ScrapeConfig) -> Self {
        Self {
            fetcher,
            extractor: Extractor::new(config),
            base_url: config.base_url.clone(),
        }
    }

    fn page_url(&self, page: u32) -> String {
        format!("{}&page={}", self.base_url, page)
    }

    /// Collect qualifying records from all pages of the result set.
    ///
    /// The last-page count is computed exactly once, from page 1, and held
    /// for the remainder of the run. Termination is checked after each
    /// page, in order: current page reached the last page, then a disabled
    /// "Next" control.
    pub async fn collect_all(&self) -> Result<Vec<Book>> {
        let mut books = Vec::new();
        let mut page = 1u32;
        let mut last_page = 1u32;

        loop {
            let url = self.page_url(page);
            debug!(page, %url, "fetching listing page");

            let html = self.fetcher.fetch(&url).await?;
            let scan = scan_page(&self.extractor, &html, page == 1);

            if let Some(n) = scan.last_page {
                last_page = n;
                info!(last_page, "pagination detected");
            }

            debug!(page, records = scan.books.len(), "page extracted");
            books.extend(scan.books);

            if page >= last_page {
                info!(page, "reached the last page");
                break;
            }
            if scan.next_disabled {
                info!(page, "next control disabled, stopping");
                break;
            }
            page += 1;
        }

        Ok(books)
    }
}

// Parsed DOM handles are not Send; keep them out of the async loop.
fn scan_page(extractor: &Extractor, html: &str, first: bool) -> PageScan {
    let doc = Html::parse_document(html);
    PageScan {
        books: extractor.extract_from(&doc),
        last_page: first.then(|| last_page_number(&doc)),
        next_disabled: next_is_disabled(&doc),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::app::BookrakeError;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    fn strip(labels: &[&str]) -> String {
        let items: String = labels
            .iter()
            .map(|l| format!(r#"<span class="s-pagination-item">{l}</span>"#))
            .collect();
        format!(r#"<span class="s-pagination-strip">{items}</span>"#)
    }

    fn book_container(title: &str) -> String {
        format!(
            r#"<div data-component-type="s-search-result">
                 <h2 class="a-size-medium">{title}</h2>
                 <div data-cy="secondary-offer-recipe">Or ₹0 to buy</div>
               </div>"#
        )
    }

    #[test]
    fn test_last_page_ignores_non_numeric_labels() {
        let html = strip(&["1", "2", "…", "7", "Next"]);
        assert_eq!(last_page_number(&parse(&html)), 7);
    }

    #[test]
    fn test_last_page_defaults_to_one_without_strip() {
        assert_eq!(last_page_number(&parse("<html><body></body></html>")), 1);
    }

    #[test]
    fn test_last_page_all_non_numeric_defaults_to_one() {
        let html = strip(&["Previous", "Next"]);
        assert_eq!(last_page_number(&parse(&html)), 1);
    }

    #[test]
    fn test_next_disabled_detection() {
        let disabled = r#"<li class="s-pagination-item s-pagination-next s-pagination-disabled">Next</li>"#;
        let enabled = r#"<li class="s-pagination-item s-pagination-next">Next</li>"#;
        assert!(next_is_disabled(&parse(disabled)));
        assert!(!next_is_disabled(&parse(enabled)));
        assert!(!next_is_disabled(&parse("<p>no pagination</p>")));
    }

    /// Serves canned pages by URL and counts requests.
    struct MockFetcher {
        pages: HashMap<String, String>,
        requests: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        fn new(pages: Vec<(String, String)>) -> Self {
            Self {
                pages: pages.into_iter().collect(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.requests.lock().unwrap().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| BookrakeError::FatalFetch {
                    url: url.to_string(),
                    attempts: 3,
                })
        }
    }

    fn test_config() -> ScrapeConfig {
        ScrapeConfig {
            base_url: "https://example.com/s?i=digital-text".to_string(),
            ..ScrapeConfig::default()
        }
    }

    fn page_url(n: u32) -> String {
        format!("https://example.com/s?i=digital-text&page={n}")
    }

    #[tokio::test]
    async fn test_collects_across_all_pages() {
        let enabled_next = r#"<li class="s-pagination-next">Next</li>"#;
        let fetcher = Arc::new(MockFetcher::new(vec![
            (
                page_url(1),
                format!("{}{}{}", book_container("Book 1"), strip(&["1", "2", "3"]), enabled_next),
            ),
            (
                page_url(2),
                format!("{}{}", book_container("Book 2"), enabled_next),
            ),
            (
                page_url(3),
                format!("{}{}", book_container("Book 3"), enabled_next),
            ),
        ]));

        let collector = Collector::new(fetcher.clone(), &test_config());
        let books = collector.collect_all().await.unwrap();

        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Book 1", "Book 2", "Book 3"]);
        // Page 3 is the last page: the run stops there even though the
        // next control is still enabled.
        assert_eq!(fetcher.requested(), vec![page_url(1), page_url(2), page_url(3)]);
    }

    #[tokio::test]
    async fn test_single_page_without_pagination() {
        let fetcher = Arc::new(MockFetcher::new(vec![(
            page_url(1),
            book_container("Only Book"),
        )]));

        let collector = Collector::new(fetcher.clone(), &test_config());
        let books = collector.collect_all().await.unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(fetcher.requested(), vec![page_url(1)]);
    }

    #[tokio::test]
    async fn test_disabled_next_stops_before_last_page() {
        let disabled_next = r#"<li class="s-pagination-next s-pagination-disabled">Next</li>"#;
        let fetcher = Arc::new(MockFetcher::new(vec![
            (
                page_url(1),
                format!("{}{}", book_container("Book 1"), strip(&["1", "2", "5"])),
            ),
            (
                page_url(2),
                format!("{}{}", book_container("Book 2"), disabled_next),
            ),
        ]));

        let collector = Collector::new(fetcher.clone(), &test_config());
        let books = collector.collect_all().await.unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(fetcher.requested(), vec![page_url(1), page_url(2)]);
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts_run() {
        // Page 2 is missing from the canned set: the fetch fails and the
        // whole run propagates the error.
        let fetcher = Arc::new(MockFetcher::new(vec![(
            page_url(1),
            format!("{}{}", book_container("Book 1"), strip(&["1", "2"])),
        )]));

        let collector = Collector::new(fetcher, &test_config());
        let err = collector.collect_all().await.unwrap_err();
        assert!(matches!(err, BookrakeError::FatalFetch { .. }));
    }

    #[tokio::test]
    async fn test_end_to_end_single_page_record() {
        let container = r#"
            <div data-component-type="s-search-result">
              <h2 class="a-size-medium">Book A</h2>
              <div data-cy="secondary-offer-recipe">Or ₹0 to buy</div>
              <a class="a-link-normal" href="/dp/XYZ">Book A</a>
              <img class="s-image" src="img.jpg">
            </div>
        "#;
        let fetcher = Arc::new(MockFetcher::new(vec![(
            page_url(1),
            format!("{container}{}", strip(&["1"])),
        )]));

        let collector = Collector::new(fetcher, &ScrapeConfig {
            base_url: "https://example.com/s?i=digital-text".to_string(),
            ..ScrapeConfig::default()
        });
        let books = collector.collect_all().await.unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Book A");
        assert_eq!(books[0].price, "Free");
        assert_eq!(
            books[0].link.as_deref(),
            Some("https://www.amazon.in/dp/XYZ&tag=receiver06-21")
        );
        assert_eq!(books[0].image_url.as_deref(), Some("img.jpg"));
    }
}
