pub mod envelope;
pub mod error;
pub mod models;
pub mod ports;
