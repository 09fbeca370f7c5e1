use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use crate::domain::{error::EtlError, models::HttpResponse, ports::HttpFetcher};

pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse, EtlError> {
        // Errors are stripped of their URL: the query string holds credentials.
        let response = self.client
            .get(url)
            .send()
            .await
            .map_err(|e| EtlError::FetchFailed(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| EtlError::FetchFailed(e.without_url().to_string()))?;

        debug!("HTTP {} with {} byte body", status, body.len());
        Ok(HttpResponse { status, body })
    }
}
