use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::ScrapeConfig;
use crate::domain::{book::FREE_PRICE, Book};

struct Selectors {
    container: Selector,
    offer: Selector,
    title: Selector,
    price: Selector,
    link: Selector,
    image: Selector,
}

impl Selectors {
    fn new() -> Self {
        // Static selector strings, parse cannot fail.
        Self {
            container: Selector::parse(r#"div[data-component-type="s-search-result"]"#).unwrap(),
            offer: Selector::parse(r#"div[data-cy="secondary-offer-recipe"]"#).unwrap(),
            title: Selector::parse("h2.a-size-medium").unwrap(),
            price: Selector::parse("span.a-price-whole").unwrap(),
            link: Selector::parse("a.a-link-normal[href]").unwrap(),
            image: Selector::parse("img.s-image").unwrap(),
        }
    }
}

/// Extracts qualifying [`Book`]s from one listing page.
///
/// A result container is included only when its promotional-offer block
/// exists and contains the configured marker text; everything else is
/// silently skipped. This is the entire business filter of the system.
pub struct Extractor {
    marker: String,
    site_origin: String,
    affiliate_tag: String,
    selectors: Selectors,
}

impl Extractor {
    pub fn new(config: &ScrapeConfig) -> Self {
        Self {
            marker: config.marker.clone(),
            site_origin: config.site_origin.clone(),
            affiliate_tag: config.affiliate_tag.clone(),
            selectors: Selectors::new(),
        }
    }

    /// Parse one raw page and extract its qualifying records.
    pub fn extract(&self, html: &str) -> Vec<Book> {
        let doc = Html::parse_document(html);
        self.extract_from(&doc)
    }

    pub(crate) fn extract_from(&self, doc: &Html) -> Vec<Book> {
        let containers: Vec<ElementRef> = doc.select(&self.selectors.container).collect();
        debug!(containers = containers.len(), "result containers on page");

        containers
            .into_iter()
            .filter_map(|container| self.extract_container(container))
            .collect()
    }

    fn extract_container(&self, container: ElementRef) -> Option<Book> {
        let offer_text: String = container
            .select(&self.selectors.offer)
            .next()?
            .text()
            .collect();
        if !offer_text.contains(&self.marker) {
            return None;
        }

        // Title is mandatory; a container without one produces no record.
        let title = container
            .select(&self.selectors.title)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())?;

        let price = container
            .select(&self.selectors.price)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_else(|| FREE_PRICE.to_string());

        // The affiliate tag is only appended to a link that exists.
        let link = container
            .select(&self.selectors.link)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(|href| format!("{}{}{}", self.site_origin, href, self.affiliate_tag));

        let image_url = container
            .select(&self.selectors.image)
            .next()
            .and_then(|el| el.value().attr("src"))
            .map(String::from);

        Some(Book {
            title,
            price,
            link,
            image_url,
        })
    }
}
