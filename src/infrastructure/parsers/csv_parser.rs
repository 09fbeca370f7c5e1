use csv::{ReaderBuilder, WriterBuilder};
use std::io::Cursor;
use tracing::{debug, info, error};
use crate::domain::{error::EtlError, models::CsvTable};

/// Parses CSV bytes into a rectangular table.
///
/// Blank payloads are `EmptyInput`. A payload that does not yield a header
/// plus at least one row of matching width is `MalformedInput`.
pub fn parse_csv(bytes: &[u8]) -> Result<CsvTable, EtlError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| EtlError::MalformedInput(format!("payload is not UTF-8: {}", e)))?;

    if text.trim().is_empty() {
        return Err(EtlError::EmptyInput("CSV file".to_string()));
    }

    debug!("Creating CSV reader with headers enabled");
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(Cursor::new(text.as_bytes()));

    let headers: Vec<String> = reader.headers()
        .map_err(|e| {
            error!("Failed to read CSV headers: {}", e);
            EtlError::MalformedInput(e.to_string())
        })?
        .iter()
        .map(str::to_string)
        .collect();

    debug!("CSV headers: {:?}", headers);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            error!("Failed to read CSV record at row {}: {}", rows.len() + 1, e);
            EtlError::MalformedInput(e.to_string())
        })?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());

        if rows.len() % 1000 == 0 {
            debug!("Parsed {} CSV rows", rows.len());
        }
    }

    if rows.is_empty() {
        return Err(EtlError::MalformedInput("header row without any data rows".to_string()));
    }

    info!("Parsed {} rows across {} columns", rows.len(), headers.len());
    Ok(CsvTable { headers, rows })
}

/// Serializes a table back to CSV, header first.
pub fn write_csv(table: &CsvTable) -> Result<Vec<u8>, EtlError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(&table.headers)
        .map_err(|e| EtlError::Serialization(e.to_string()))?;
    for row in &table.rows {
        writer.write_record(row)
            .map_err(|e| EtlError::Serialization(e.to_string()))?;
    }

    writer.into_inner()
        .map_err(|e| EtlError::Serialization(e.to_string()))
}
