use crate::domain::model::ResourceName;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "echo_module=info";
const VERBOSE_FILTER: &str = "echo_module=debug,info";

/// `RUST_LOG` wins over the built-in default.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_cli_logger(verbose: bool) {
    let filter = env_filter(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// One JSON object per line, with the active resource span attached.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .json()
                .with_current_span(true)
                .with_span_list(false),
        )
        .init();
}

/// Span every event of a resource is recorded under.
pub fn resource_span(name: &ResourceName) -> tracing::Span {
    tracing::info_span!("resource", name = %name)
}
