use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::app::{BookrakeError, Result};
use crate::fetcher::Fetcher;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const FALLBACK_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

/// Sequential page fetcher with a flat retry policy.
///
/// One user agent is picked from the configured pool when the fetcher is
/// constructed and reused for every request of the run. Keeping the
/// identity stable across a run is an anti-detection measure.
pub struct HttpFetcher {
    client: Client,
    max_attempts: u32,
    retry_delay: Duration,
}

impl HttpFetcher {
    pub fn new(max_attempts: u32, retry_delay: Duration, user_agents: &[String]) -> Result<Self> {
        let user_agent = Self::choose_user_agent(user_agents);
        debug!(user_agent = %user_agent, "identity selected for this run");

        // The identity is baked into the client once; every request of the
        // run reuses it.
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .brotli(true)
            .user_agent(&user_agent)
            .build()?;

        Ok(Self {
            client,
            max_attempts: max_attempts.max(1),
            retry_delay,
        })
    }

    fn choose_user_agent(user_agents: &[String]) -> String {
        user_agents
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(|| FALLBACK_USER_AGENT.to_string())
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        for attempt in 1..=self.max_attempts {
            match self.client.get(url).send().await {
                // Success is exactly 200; redirects already followed by reqwest.
                // The body read can still fail mid-transfer, which counts as
                // a failure for this attempt like any other transport error.
                Ok(response) if response.status() == StatusCode::OK => {
                    match response.text().await {
                        Ok(body) => {
                            debug!(url, attempt, "page fetched");
                            return Ok(body);
                        }
                        Err(e) => {
                            warn!(url, error = %e, attempt, max_attempts = self.max_attempts, "body read failed");
                        }
                    }
                }
                Ok(response) => {
                    warn!(
                        url,
                        status = %response.status(),
                        attempt,
                        max_attempts = self.max_attempts,
                        "unexpected status"
                    );
                }
                Err(e) => {
                    warn!(url, error = %e, attempt, max_attempts = self.max_attempts, "request failed");
                }
            }

            if attempt < self.max_attempts {
                tokio::time::sleep(self.retry_delay).await;
            }
        }

        Err(BookrakeError::FatalFetch {
            url: url.to_string(),
            attempts: self.max_attempts,
        })
    }
}
