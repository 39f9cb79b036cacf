use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Send diagnostics to stderr, filtered by `filter` (a `tracing` directive
/// string such as `debug`) or warnings only when none is configured.
pub fn init_logging(filter: Option<&str>) {
    let env_filter = match filter {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|e| {
            eprintln!("nodist: ignoring invalid log filter '{directives}': {e}");
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None => EnvFilter::new(DEFAULT_FILTER),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
