use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr
///
/// Defaults to `warn` so stdout stays clean for the corrected title; set
/// `RUST_LOG=debug` to see the generated pattern and each rewrite.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
