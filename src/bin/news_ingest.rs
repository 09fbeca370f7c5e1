use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use news_etl::{
    application::news_etl_service::NewsEtlService,
    bootstrap,
    domain::envelope::Envelope,
    telemetry,
};
use serde_json::Value;
use tracing::{info, debug};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init_tracing();
    info!("Starting news ingest handler");

    let service = bootstrap::news_etl_service().await;
    run(service_fn(|event| handler(event, &service))).await
}

/// The event payload only triggers the run; its content is not used.
async fn handler(event: LambdaEvent<Value>, service: &NewsEtlService) -> Result<Envelope, Error> {
    debug!("Event received: {}", event.payload);
    info!("Request id: {}", event.context.request_id);
    Ok(service.run().await)
}
