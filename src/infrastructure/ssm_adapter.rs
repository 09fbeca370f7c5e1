use async_trait::async_trait;
use aws_sdk_ssm::{error::DisplayErrorContext, Client};
use tracing::{debug, error};
use crate::domain::{error::EtlError, ports::SecretStore};

/// Reads SecureString parameters from Systems Manager Parameter Store.
pub struct SsmSecretStore {
    client: Client,
}

impl SsmSecretStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretStore for SsmSecretStore {
    async fn get_secret(&self, name: &str) -> Result<String, EtlError> {
        debug!("GetParameter {}", name);
        let response = self.client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| {
                error!("GetParameter failed for {}: {}", name, DisplayErrorContext(&e));
                EtlError::SecretUnavailable(DisplayErrorContext(&e).to_string())
            })?;

        response
            .parameter()
            .and_then(|p| p.value())
            .map(str::to_string)
            .ok_or_else(|| EtlError::SecretUnavailable(format!("parameter {} has no value", name)))
    }
}
