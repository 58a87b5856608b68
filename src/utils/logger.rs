use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET_DIRECTIVES: &str = "fx_display=warn";
const VERBOSE_DIRECTIVES: &str = "fx_display=debug,info";

/// `RUST_LOG` wins; otherwise only this crate's warnings, or its debug output
/// when `verbose` is set.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_DIRECTIVES
        } else {
            QUIET_DIRECTIVES
        })
    })
}

/// Compact human-readable logs on stderr; stdout carries command output only.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            fmt::layer()
                .with_target(verbose)
                .without_time()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// One JSON object per event on stderr, with the enclosing span's fields
/// (such as the pivot currency of a conversion) flattened in.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
