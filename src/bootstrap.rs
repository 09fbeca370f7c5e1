use std::sync::Arc;
use aws_config::{meta::region::RegionProviderChain, BehaviorVersion, SdkConfig};
use tracing::{info, debug};
use crate::{
    application::{csv_etl_service::CsvEtlService, news_etl_service::NewsEtlService},
    config::{alert_topic_arn, CsvEtlConfig, NewsEtlConfig, DEFAULT_REGION},
    domain::ports::Notifier,
    infrastructure::{
        http_adapter::ReqwestFetcher,
        s3_adapter::S3Adapter,
        sns_adapter::SnsNotifier,
        ssm_adapter::SsmSecretStore,
    },
};

/// Loads the shared AWS configuration. `AWS_ENDPOINT_URL` redirects every
/// client (LocalStack); the region falls back to `eu-north-1`.
pub async fn load_aws_config() -> SdkConfig {
    debug!("Loading AWS configuration");
    let region = RegionProviderChain::default_provider().or_else(DEFAULT_REGION);
    let mut builder = aws_config::defaults(BehaviorVersion::latest()).region(region);

    if let Ok(endpoint_url) = std::env::var("AWS_ENDPOINT_URL") {
        info!("Using custom AWS endpoint: {}", endpoint_url);
        builder = builder.endpoint_url(&endpoint_url);
    }

    let config = builder.load().await;
    debug!("AWS region: {:?}", config.region());
    config
}

fn s3_adapter(aws_config: &SdkConfig) -> Arc<S3Adapter> {
    let mut s3_config = aws_sdk_s3::config::Builder::from(aws_config);

    // LocalStack only serves path-style addressing.
    if std::env::var("AWS_ENDPOINT_URL").is_ok() {
        s3_config = s3_config.force_path_style(true);
    }

    Arc::new(S3Adapter::new(aws_sdk_s3::Client::from_conf(s3_config.build())))
}

fn notifier(aws_config: &SdkConfig) -> Option<Arc<dyn Notifier>> {
    match alert_topic_arn() {
        Some(topic_arn) => {
            info!("Failure alerts go to {}", topic_arn);
            let client = aws_sdk_sns::Client::new(aws_config);
            Some(Arc::new(SnsNotifier::new(client, topic_arn)) as Arc<dyn Notifier>)
        }
        None => {
            info!("SNS_TOPIC_ARN not set, failure alerts disabled");
            None
        }
    }
}

pub async fn news_etl_service() -> NewsEtlService {
    let aws_config = load_aws_config().await;
    let config = NewsEtlConfig::from_env();
    info!("News ETL writing to bucket {}", config.bucket);

    NewsEtlService::new(
        Arc::new(SsmSecretStore::new(aws_sdk_ssm::Client::new(&aws_config))),
        Arc::new(ReqwestFetcher::new()),
        s3_adapter(&aws_config),
        notifier(&aws_config),
        config,
    )
}

pub async fn csv_etl_service() -> CsvEtlService {
    let aws_config = load_aws_config().await;
    let config = CsvEtlConfig::from_env();
    info!("CSV ETL writing to bucket {}", config.dest_bucket);

    CsvEtlService::new(s3_adapter(&aws_config), notifier(&aws_config), config)
}
