use async_trait::async_trait;
use aws_sdk_s3::{error::DisplayErrorContext, primitives::ByteStream, Client};
use tracing::{debug, error};
use crate::domain::{error::EtlError, ports::ObjectStore};

pub struct S3Adapter {
    client: Client,
}

impl S3Adapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Adapter {
    async fn read(&self, bucket: &str, key: &str) -> Result<Vec<u8>, EtlError> {
        let read_error = |reason: String| EtlError::ObjectReadError {
            bucket: bucket.to_string(),
            key: key.to_string(),
            reason,
        };

        debug!("GetObject s3://{}/{}", bucket, key);
        let response = self.client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                error!("GetObject failed for s3://{}/{}: {}", bucket, key, DisplayErrorContext(&e));
                read_error(DisplayErrorContext(&e).to_string())
            })?;

        let data = response.body
            .collect()
            .await
            .map_err(|e| read_error(e.to_string()))?;

        Ok(data.into_bytes().to_vec())
    }

    async fn write(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), EtlError> {
        debug!("PutObject s3://{}/{} ({} bytes, {})", bucket, key, body.len(), content_type);
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                error!("PutObject failed for s3://{}/{}: {}", bucket, key, DisplayErrorContext(&e));
                EtlError::ObjectWriteError {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                    reason: DisplayErrorContext(&e).to_string(),
                }
            })?;

        Ok(())
    }
}
