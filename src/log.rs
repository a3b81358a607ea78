//! Diagnostic logging setup. The dashboard stays silent unless asked:
//! fallback substitutions and skipped rows only show up with `--verbose`
//! or an explicit RUST_LOG filter.

use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "fondash=debug" } else { "off" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time())
        .with(filter)
        .init();
}
