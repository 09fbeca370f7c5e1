pub mod http_adapter;
pub mod parsers;
pub mod s3_adapter;
pub mod sns_adapter;
pub mod ssm_adapter;
