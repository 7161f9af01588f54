// Logging module for structured logging using the tracing crate

use std::error::Error;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the output format (`json` or `text`)
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|value| Self::parse(&value))
            .unwrap_or(LogFormat::Text)
    }

    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Initialize the tracing subscriber for structured logging
///
/// Events go to stderr so the binary's stdout carries only the generated
/// URL. The level filter comes from `RUST_LOG` (default `info`); setting
/// `LOG_FORMAT=json` switches to one JSON object per line.
///
/// Calling this more than once is a no-op.
///
/// # Examples
///
/// ```
/// use imgproxy_url::logging::init_subscriber;
///
/// init_subscriber().expect("Failed to initialize logging");
/// tracing::info!("Application started");
/// ```
pub fn init_subscriber() -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut result = Ok(());
    INIT.call_once(|| result = install_subscriber());
    result
}

static INIT: Once = Once::new();

fn install_subscriber() -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match LogFormat::from_env() {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
}
