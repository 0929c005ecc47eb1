//! Logger setup for the binary.
//!
//! Logs go to stderr through `env_logger`. `RUST_LOG` takes precedence over
//! the verbosity flag.

/// Initialize logging once. Later calls are ignored.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}
