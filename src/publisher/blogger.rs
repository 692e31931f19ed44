use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::json;
use tracing::{debug, info};

use crate::app::{BookrakeError, Result};
use crate::publisher::{Authenticator, Publisher};

const API_BASE: &str = "https://www.googleapis.com/blogger/v3";

/// Publishes rendered documents as posts via the Blogger v3 API.
///
/// Credential lifecycle lives entirely behind the [`Authenticator`] seam;
/// a credential failure is fatal for the run and never retried here.
pub struct BloggerPublisher {
    client: Client,
    blog_id: String,
    auth: Box<dyn Authenticator>,
}

impl BloggerPublisher {
    pub fn new(blog_id: String, auth: Box<dyn Authenticator>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            blog_id,
            auth,
        })
    }

    fn posts_url(&self) -> String {
        format!("{API_BASE}/blogs/{}/posts", self.blog_id)
    }
}

#[async_trait]
impl Publisher for BloggerPublisher {
    async fn publish(&self, title: &str, content: &str, labels: &[String]) -> Result<String> {
        let credential = self.auth.authenticate().await?;

        let mut body = json!({
            "kind": "blogger#post",
            "blog": { "id": self.blog_id },
            "title": title,
            "content": content,
        });
        if !labels.is_empty() {
            body["labels"] = json!(labels);
        }

        debug!(blog_id = %self.blog_id, title, "inserting post");

        let response = self
            .client
            .post(self.posts_url())
            .bearer_auth(&credential.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(BookrakeError::Auth(format!(
                "publish rejected with {status}"
            )));
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(BookrakeError::Publish(format!("{status}: {detail}")));
        }

        let post: serde_json::Value = response.json().await?;
        let url = post
            .get("url")
            .and_then(|u| u.as_str())
            .unwrap_or_default()
            .to_string();

        info!(%url, "post published");
        Ok(url)
    }
}
