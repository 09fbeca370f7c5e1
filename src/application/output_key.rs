use std::sync::LazyLock;
use chrono::{DateTime, Utc};
use regex::Regex;

pub const RAW_PREFIX: &str = "raw";
pub const PROCESSED_PREFIX: &str = "processed";

static LOCATION_PREFIXES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:raw/|processed/)+").expect("static prefix pattern is valid"));

/// Strips every leading `raw/` or `processed/` segment and re-roots the
/// remainder under `processed/`. Total over all inputs.
pub fn build_output_key(original_key: &str) -> String {
    let remainder = LOCATION_PREFIXES.replace(original_key, "");
    format!("{}/{}", PROCESSED_PREFIX, remainder)
}

/// Key for a freshly ingested news batch, e.g. `raw/news_2024-03-01_08-15-00.json`.
pub fn ingest_key(at: DateTime<Utc>) -> String {
    format!("{}/news_{}.json", RAW_PREFIX, at.format("%Y-%m-%d_%H-%M-%S"))
}
