pub mod alerting;
pub mod csv_etl_service;
pub mod dedup;
pub mod news_etl_service;
pub mod output_key;
