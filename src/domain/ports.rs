use async_trait::async_trait;
use crate::domain::{error::EtlError, models::HttpResponse};

#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn get_secret(&self, name: &str) -> Result<String, EtlError>;
}

/// Returns any HTTP status as `Ok`; only transport failures are errors.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, EtlError>;
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn read(&self, bucket: &str, key: &str) -> Result<Vec<u8>, EtlError>;

    async fn write(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), EtlError>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, subject: &str, message: &str) -> Result<(), EtlError>;
}
