use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use news_etl::{
    application::csv_etl_service::CsvEtlService,
    bootstrap,
    domain::envelope::Envelope,
    telemetry,
};
use serde_json::Value;
use tracing::{info, debug};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init_tracing();
    info!("Starting CSV transform handler");

    let service = bootstrap::csv_etl_service().await;
    run(service_fn(|event| handler(event, &service))).await
}

/// The payload is decoded by the service so a malformed trigger still
/// yields a failure envelope and an alert.
async fn handler(event: LambdaEvent<Value>, service: &CsvEtlService) -> Result<Envelope, Error> {
    debug!("Event received: {}", event.payload);
    info!("Request id: {}", event.context.request_id);
    Ok(service.process_payload(event.payload).await)
}
