//! Environment-driven configuration, read once per cold start.
//!
//! | Variable         | Default                                   |
//! |------------------|-------------------------------------------|
//! | `NEWS_BUCKET`    | `news-etl-bucket`                         |
//! | `PARAMETER_NAME` | `/news-api-key`                           |
//! | `NEWS_API_URL`   | `https://newsapi.org/v2/top-headlines`    |
//! | `NEWS_COUNTRY`   | `us`                                      |
//! | `DEST_BUCKET`    | `csv-news-etl-bucket`                     |
//! | `SNS_TOPIC_ARN`  | unset: alerts are skipped                 |

use tracing::debug;

pub const DEFAULT_NEWS_BUCKET: &str = "news-etl-bucket";
pub const DEFAULT_PARAMETER_NAME: &str = "/news-api-key";
pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/top-headlines";
pub const DEFAULT_NEWS_COUNTRY: &str = "us";
pub const DEFAULT_DEST_BUCKET: &str = "csv-news-etl-bucket";
pub const DEFAULT_REGION: &str = "eu-north-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsEtlConfig {
    pub bucket: String,
    pub parameter_name: String,
    pub api_url: String,
    pub country: String,
}

impl Default for NewsEtlConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_NEWS_BUCKET.to_string(),
            parameter_name: DEFAULT_PARAMETER_NAME.to_string(),
            api_url: DEFAULT_NEWS_API_URL.to_string(),
            country: DEFAULT_NEWS_COUNTRY.to_string(),
        }
    }
}

impl NewsEtlConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let config = Self {
            bucket: setting(&lookup, "NEWS_BUCKET", DEFAULT_NEWS_BUCKET),
            parameter_name: setting(&lookup, "PARAMETER_NAME", DEFAULT_PARAMETER_NAME),
            api_url: setting(&lookup, "NEWS_API_URL", DEFAULT_NEWS_API_URL),
            country: setting(&lookup, "NEWS_COUNTRY", DEFAULT_NEWS_COUNTRY),
        };
        debug!("News ETL config: {:?}", config);
        config
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvEtlConfig {
    pub dest_bucket: String,
}

impl Default for CsvEtlConfig {
    fn default() -> Self {
        Self {
            dest_bucket: DEFAULT_DEST_BUCKET.to_string(),
        }
    }
}

impl CsvEtlConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let config = Self {
            dest_bucket: setting(&lookup, "DEST_BUCKET", DEFAULT_DEST_BUCKET),
        };
        debug!("CSV ETL config: {:?}", config);
        config
    }
}

/// The alert topic, if one is configured. Blank counts as unset.
pub fn alert_topic_arn() -> Option<String> {
    alert_topic_from_lookup(|name| std::env::var(name).ok())
}

pub fn alert_topic_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup("SNS_TOPIC_ARN").filter(|arn| !arn.trim().is_empty())
}

fn setting(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
