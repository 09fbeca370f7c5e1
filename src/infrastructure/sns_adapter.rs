use async_trait::async_trait;
use aws_sdk_sns::{error::DisplayErrorContext, Client};
use tracing::{debug, info};
use crate::domain::{error::EtlError, ports::Notifier};

pub struct SnsNotifier {
    client: Client,
    topic_arn: String,
}

impl SnsNotifier {
    pub fn new(client: Client, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn notify(&self, subject: &str, message: &str) -> Result<(), EtlError> {
        debug!("Publishing alert to {}", self.topic_arn);
        let response = self.client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|e| EtlError::NotifierError(DisplayErrorContext(&e).to_string()))?;

        info!("Alert published, message id: {:?}", response.message_id());
        Ok(())
    }
}
