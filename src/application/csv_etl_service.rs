use std::sync::Arc;
use aws_lambda_events::event::s3::S3Event;
use serde_json::{json, Map, Value};
use tracing::{info, debug, error, warn};
use crate::{
    application::{alerting::report_failure, dedup::dedupe_rows, output_key::build_output_key},
    config::CsvEtlConfig,
    domain::{
        envelope::Envelope,
        error::EtlError,
        models::FileToProcess,
        ports::{Notifier, ObjectStore},
    },
    infrastructure::parsers::csv_parser::{parse_csv, write_csv},
};

pub const ALERT_SUBJECT: &str = "ETL Pipeline Failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformReport {
    pub output_key: String,
    pub rows_in: usize,
    pub rows_out: usize,
}

/// Transform handler: read a CSV object, drop exact duplicate rows and
/// write the cleaned copy under `processed/` in the destination bucket.
pub struct CsvEtlService {
    store: Arc<dyn ObjectStore>,
    notifier: Option<Arc<dyn Notifier>>,
    config: CsvEtlConfig,
}

impl CsvEtlService {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        notifier: Option<Arc<dyn Notifier>>,
        config: CsvEtlConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    /// Handles a raw trigger payload. A payload that is not an S3
    /// notification fails through the same alerting path as any other step.
    pub async fn process_payload(&self, payload: Value) -> Envelope {
        match parse_event(payload) {
            Ok(event) => self.process_event(&event).await,
            Err(e) => report_failure(self.notifier.as_ref(), ALERT_SUBJECT, &e).await,
        }
    }

    /// Handles one storage event. Only the first record is processed; any
    /// further records in the batch are ignored.
    pub async fn process_event(&self, event: &S3Event) -> Envelope {
        let outcome = match first_record(event) {
            Ok(file) => self.process_file(file).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(report) => {
                let mut extra = Map::new();
                extra.insert("output_key".to_string(), json!(report.output_key));
                extra.insert("rows_in".to_string(), json!(report.rows_in));
                extra.insert("rows_out".to_string(), json!(report.rows_out));
                Envelope::success("File processed successfully", extra)
            }
            Err(e) => report_failure(self.notifier.as_ref(), ALERT_SUBJECT, &e).await,
        }
    }

    pub async fn process_file(&self, file: FileToProcess) -> Result<TransformReport, EtlError> {
        info!("Processing file: s3://{}/{}", file.bucket, file.key);

        // Step 1: Fetch source object
        let bytes = self.store.read(&file.bucket, &file.key).await
            .map_err(|e| {
                error!("Failed to fetch file {}/{}: {}", file.bucket, file.key, e);
                e
            })?;
        debug!("Fetched {} bytes", bytes.len());

        // Step 2: Parse into a rectangular table
        let table = parse_csv(&bytes)?;
        let rows_in = table.rows.len();
        info!("Original table: {} columns, {} rows", table.headers.len(), rows_in);

        // Step 3: Deduplicate
        let cleaned = dedupe_rows(table);
        let rows_out = cleaned.rows.len();
        info!("Cleaned table: {} rows ({} duplicates removed)", rows_out, rows_in - rows_out);

        // Step 4: Derive destination and write
        let output_key = build_output_key(&file.key);
        info!("Output Key: {}", output_key);

        let body = write_csv(&cleaned)?;
        self.store
            .write(&self.config.dest_bucket, &output_key, body, "text/csv")
            .await
            .map_err(|e| {
                error!("Failed to upload cleaned file {}: {}", output_key, e);
                e
            })?;

        info!("✅ Uploaded cleaned file to: s3://{}/{}", self.config.dest_bucket, output_key);
        Ok(TransformReport {
            output_key,
            rows_in,
            rows_out,
        })
    }
}

pub fn parse_event(payload: Value) -> Result<S3Event, EtlError> {
    serde_json::from_value(payload)
        .map_err(|e| EtlError::InvalidEvent(format!("not an S3 notification: {}", e)))
}

/// Object keys arrive form-encoded: `+` for space, `%XX` for reserved bytes.
pub fn decode_object_key(raw: &str) -> Result<String, EtlError> {
    urlencoding::decode(&raw.replace('+', " "))
        .map(|key| key.into_owned())
        .map_err(|e| EtlError::InvalidEvent(format!("object key is not valid UTF-8: {}", e)))
}

/// Extracts the source object from the first record of the event.
pub fn first_record(event: &S3Event) -> Result<FileToProcess, EtlError> {
    let record = event
        .records
        .first()
        .ok_or_else(|| EtlError::InvalidEvent("event contains no records".to_string()))?;

    if event.records.len() > 1 {
        warn!("Event carries {} records, only the first is processed", event.records.len());
    }

    let bucket = record
        .s3
        .bucket
        .name
        .clone()
        .filter(|b| !b.is_empty())
        .ok_or_else(|| EtlError::InvalidEvent("record has no bucket name".to_string()))?;
    let raw_key = record
        .s3
        .object
        .key
        .as_deref()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| EtlError::InvalidEvent("record has no object key".to_string()))?;
    let key = decode_object_key(raw_key)?;

    Ok(FileToProcess { bucket, key })
}
