use std::sync::Arc;
use std::time::Duration;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::publisher::blogger::BloggerPublisher;
use crate::publisher::{EnvAuthenticator, Publisher};
use crate::store::csv_store::CsvStore;
use crate::store::Store;

pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub store: Arc<dyn Store + Send + Sync>,
    pub publisher: Arc<dyn Publisher>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        // Fail early on a malformed listing URL rather than mid-run.
        url::Url::parse(&config.scrape.base_url)?;

        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(
            config.scrape.max_attempts,
            Duration::from_secs(config.scrape.retry_delay_secs),
            &config.scrape.user_agents,
        )?);
        let store: Arc<dyn Store + Send + Sync> =
            Arc::new(CsvStore::new(config.paths.store.clone()));
        let auth = EnvAuthenticator::new(config.publish.token_env.clone());
        let publisher: Arc<dyn Publisher> = Arc::new(BloggerPublisher::new(
            config.publish.blog_id.clone(),
            Box::new(auth),
        )?);

        Ok(Self {
            config,
            fetcher,
            store,
            publisher,
        })
    }
}
