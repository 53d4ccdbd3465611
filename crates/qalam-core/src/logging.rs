#![forbid(unsafe_code)]

//! Logging bootstrap for qalam binaries.
//!
//! Library code logs through `tracing` macros and never installs a
//! subscriber. Binaries call [`init`] once at startup; it is only available
//! with the `tracing` feature. With `tracing-json` the output is one JSON
//! object per event.

/// Environment variable holding the `tracing-subscriber` filter directive.
pub const ENV_LOG: &str = "QALAM_LOG";

/// Filter used when [`ENV_LOG`] is unset or blank.
pub const DEFAULT_FILTER: &str = "warn";

/// Resolve the filter directive from an environment lookup.
#[must_use]
pub fn filter_directive<F>(get_env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    get_env(ENV_LOG)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install a global fmt subscriber writing to stderr.
///
/// Returns an error if the filter directive is invalid or a global
/// subscriber is already set.
#[cfg(feature = "tracing")]
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter_directive(|key| std::env::var(key).ok()))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    #[cfg(feature = "tracing-json")]
    {
        builder.json().try_init()
    }
    #[cfg(not(feature = "tracing-json"))]
    {
        builder.try_init()
    }
}
