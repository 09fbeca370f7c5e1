use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "news_etl=debug,aws_sdk=warn,aws_smithy=warn";

/// Installs the fmt subscriber. `RUST_LOG` overrides the default filter.
/// Timestamps and colours are left to CloudWatch.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .with_file(true)
        .with_line_number(true)
        .init();
}
