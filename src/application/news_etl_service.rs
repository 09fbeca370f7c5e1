use std::sync::Arc;
use chrono::Utc;
use serde_json::{json, Map};
use tracing::{info, debug, error};
use crate::{
    application::{alerting::report_failure, dedup::dedupe_articles, output_key::ingest_key},
    config::NewsEtlConfig,
    domain::{
        envelope::Envelope,
        error::EtlError,
        models::{Article, NewsApiResponse},
        ports::{HttpFetcher, Notifier, ObjectStore, SecretStore},
    },
};

pub const ALERT_SUBJECT: &str = "News ETL Failure Alert";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub output_key: String,
    pub fetched: usize,
    pub stored: usize,
}

/// Ingest handler: fetch headlines, drop duplicate titles, store the batch
/// as one timestamped JSON object.
pub struct NewsEtlService {
    secrets: Arc<dyn SecretStore>,
    fetcher: Arc<dyn HttpFetcher>,
    store: Arc<dyn ObjectStore>,
    notifier: Option<Arc<dyn Notifier>>,
    config: NewsEtlConfig,
}

impl NewsEtlService {
    pub fn new(
        secrets: Arc<dyn SecretStore>,
        fetcher: Arc<dyn HttpFetcher>,
        store: Arc<dyn ObjectStore>,
        notifier: Option<Arc<dyn Notifier>>,
        config: NewsEtlConfig,
    ) -> Self {
        Self {
            secrets,
            fetcher,
            store,
            notifier,
            config,
        }
    }

    /// Runs one invocation and flattens the outcome into an envelope.
    pub async fn run(&self) -> Envelope {
        match self.ingest().await {
            Ok(report) => {
                let mut extra = Map::new();
                extra.insert("output_key".to_string(), json!(report.output_key));
                extra.insert("article_count".to_string(), json!(report.stored));
                Envelope::success("News ETL completed", extra)
            }
            Err(e) => report_failure(self.notifier.as_ref(), ALERT_SUBJECT, &e).await,
        }
    }

    pub async fn ingest(&self) -> Result<IngestReport, EtlError> {
        info!("Fetching news...");
        let articles = self.fetch_articles().await?;
        let fetched = articles.len();
        info!("Fetched {} articles", fetched);

        info!("Removing duplicates...");
        let unique = dedupe_articles(articles);

        let output_key = ingest_key(Utc::now());
        let body = serde_json::to_vec(&unique)
            .map_err(|e| EtlError::Serialization(e.to_string()))?;

        info!("Uploading to S3...");
        debug!("Writing {} bytes to s3://{}/{}", body.len(), self.config.bucket, output_key);
        self.store
            .write(&self.config.bucket, &output_key, body, "application/json")
            .await
            .map_err(|e| {
                error!("Failed to store news batch {}: {}", output_key, e);
                e
            })?;

        info!("✅ Uploaded {} of {} articles to s3://{}/{}",
            unique.len(), fetched, self.config.bucket, output_key);
        Ok(IngestReport {
            output_key,
            fetched,
            stored: unique.len(),
        })
    }

    async fn fetch_articles(&self) -> Result<Vec<Article>, EtlError> {
        debug!("Reading API key from parameter {}", self.config.parameter_name);
        let api_key = self.secrets.get_secret(&self.config.parameter_name).await?;

        // Never log this: it carries the API key.
        let url = format!(
            "{}?country={}&apiKey={}",
            self.config.api_url, self.config.country, api_key
        );
        debug!("Requesting top headlines from {}", self.config.api_url);
        let response = self.fetcher.get(&url).await?;

        if response.status != 200 {
            error!("News API returned status {}", response.status);
            return Err(EtlError::FetchFailed(response.body));
        }

        let parsed: NewsApiResponse = response
            .json()
            .map_err(|e| EtlError::FetchFailed(format!("unreadable response body: {}", e)))?;

        if parsed.articles.is_empty() {
            return Err(EtlError::FetchFailed("No articles returned".to_string()));
        }
        Ok(parsed.articles)
    }
}
