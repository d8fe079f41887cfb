use tracing_subscriber::EnvFilter;

/// Initialize a tracing subscriber writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `debug` forces the `debug` level and
/// `default_level` (from the config file) applies. Standard output is reserved
/// for the result messages.
pub fn init_tracing_subscriber(debug: bool, default_level: &str) {
    let fallback = if debug { "debug" } else { default_level };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
