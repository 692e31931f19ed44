//! Configuration management for Bookrake.
//!
//! Configuration is read from `~/.config/bookrake/config.toml` at startup,
//! or from an explicit `--config` path. If the default file doesn't exist,
//! a commented default configuration is created.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::app::{BookrakeError, Result};

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub scrape: ScrapeConfig,
    pub paths: PathsConfig,
    pub publish: PublishConfig,
}

/// Scrape-stage settings: listing URL, inclusion marker, retry policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Listing base URL; `&page=N` is appended per request.
    pub base_url: String,

    /// Offer text that qualifies a container for extraction.
    pub marker: String,

    /// Origin that relative detail links are resolved against.
    pub site_origin: String,

    /// Affiliate suffix appended to resolved detail links.
    pub affiliate_tag: String,

    /// Total fetch attempts per page before the run is aborted.
    pub max_attempts: u32,

    /// Flat delay between attempts, in seconds.
    pub retry_delay_secs: u64,

    /// Identity pool; one entry is picked per run and reused.
    pub user_agents: Vec<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.amazon.in/s?i=digital-text&bbn=10837929031\
                       &rh=n%3A10837929031%2Cp_36%3A-100&s=date-desc-rank\
                       &language=en_IN&linkCode=ll2\
                       &linkId=f7edd02bf11a81392e4cb3e1a90ece8a\
                       &tag=receiver06-21&ref=as_li_ss_tl"
                .to_string(),
            marker: "Or ₹0 to buy".to_string(),
            site_origin: "https://www.amazon.in".to_string(),
            affiliate_tag: "&tag=receiver06-21".to_string(),
            max_attempts: 3,
            retry_delay_secs: 2,
            user_agents: vec![
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36"
                    .to_string(),
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Firefox/104.0.0.0 Safari/537.36"
                    .to_string(),
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Edge/106.0.1370.47 Safari/537.36"
                    .to_string(),
            ],
        }
    }
}

/// File locations for the record store and the rendered document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub store: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            store: PathBuf::from("kindle_books.csv"),
            output: PathBuf::from("output.html"),
        }
    }
}

/// Publish-stage settings for the Blogger boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    pub blog_id: String,

    /// Post title prefix; the run date (dd-mm-YYYY) is appended.
    pub title_prefix: String,

    pub labels: Vec<String>,

    /// Environment variable the access token is read from.
    pub token_env: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            blog_id: "8223935102652440723".to_string(),
            title_prefix: "Free Kindle Books Tamil Edition".to_string(),
            labels: vec![
                "#FreeKindleBooks".to_string(),
                "Kindle Tamil Free Books".to_string(),
            ],
            token_env: "BLOGGER_ACCESS_TOKEN".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the given path, or from the default path.
    ///
    /// When no explicit path is given and the default file doesn't exist,
    /// a commented default is written and the defaults are returned.
    /// Missing fields in an existing file use default values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = Self::default_config_path()?;
                if !p.exists() {
                    Self::create_default_config(&p)?;
                    return Ok(Self::default());
                }
                p
            }
        };

        let content = fs::read_to_string(&config_path).map_err(|e| {
            BookrakeError::Config(format!("could not read {}: {e}", config_path.display()))
        })?;

        toml::from_str(&content).map_err(|e| {
            BookrakeError::Config(format!("could not parse {}: {e}", config_path.display()))
        })
    }

    /// Get the default config file path: `~/.config/bookrake/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BookrakeError::Config("could not find config directory".into()))?;
        Ok(config_dir.join("bookrake").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(path)?;
        file.write_all(Self::default_config_content().as_bytes())?;
        Ok(())
    }

    fn default_config_content() -> String {
        r##"# Bookrake configuration
#
# All values shown are the defaults; uncomment and edit what you need.

[scrape]
# Listing base URL; `&page=N` is appended per request.
# base_url = "https://www.amazon.in/s?i=digital-text&..."
#
# A container is extracted only when its offer text contains this marker.
# marker = "Or ₹0 to buy"
#
# max_attempts = 3
# retry_delay_secs = 2

[paths]
# store = "kindle_books.csv"
# output = "output.html"

[publish]
# blog_id = "8223935102652440723"
# title_prefix = "Free Kindle Books Tamil Edition"
# labels = ["#FreeKindleBooks", "Kindle Tamil Free Books"]
# token_env = "BLOGGER_ACCESS_TOKEN"
"##
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scrape_values() {
        let config = Config::default();
        assert_eq!(config.scrape.max_attempts, 3);
        assert_eq!(config.scrape.retry_delay_secs, 2);
        assert_eq!(config.scrape.marker, "Or ₹0 to buy");
        assert_eq!(config.scrape.user_agents.len(), 3);
        assert!(config.scrape.base_url.starts_with("https://www.amazon.in/s?"));
        assert_eq!(config.scrape.affiliate_tag, "&tag=receiver06-21");
    }

    #[test]
    fn test_default_paths_and_publish() {
        let config = Config::default();
        assert_eq!(config.paths.store, PathBuf::from("kindle_books.csv"));
        assert_eq!(config.paths.output, PathBuf::from("output.html"));
        assert_eq!(config.publish.labels.len(), 2);
        assert_eq!(config.publish.token_env, "BLOGGER_ACCESS_TOKEN");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scrape]
            max_attempts = 5

            [paths]
            store = "books.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.scrape.max_attempts, 5);
        assert_eq!(config.scrape.retry_delay_secs, 2);
        assert_eq!(config.paths.store, PathBuf::from("books.csv"));
        assert_eq!(config.paths.output, PathBuf::from("output.html"));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[publish]\nblog_id = \"42\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.publish.blog_id, "42");
    }

    #[test]
    fn test_load_missing_explicit_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
