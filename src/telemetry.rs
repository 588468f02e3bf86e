//! Telemetry initialization.
//!
//! Controlled by `MANIFEST_LOG`:
//! - unset or empty → no-op (tracing disabled, nothing written)
//! - `"stderr"` → JSON events to stderr
//! - `"text"` → human-readable events to stderr
//!
//! Any other value prints a warning and leaves logging off.
//! Level filtering follows `RUST_LOG` (default `info`).

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log sink.
pub const LOG_ENV: &str = "MANIFEST_LOG";

/// Where log events go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    Off,
    Json,
    Text,
}

impl Sink {
    /// Map a `MANIFEST_LOG` value to a sink. `None` for values that name
    /// no sink.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("") => Some(Self::Off),
            Some("stderr" | "json") => Some(Self::Json),
            Some("text") => Some(Self::Text),
            Some(_) => None,
        }
    }
}

/// Initialize telemetry based on `MANIFEST_LOG`.
pub fn init() {
    let value = std::env::var(LOG_ENV).ok();
    match Sink::from_env_value(value.as_deref()) {
        Some(Sink::Off) => {}
        Some(Sink::Json) => init_json(),
        Some(Sink::Text) => init_text(),
        None => {
            let value = value.unwrap_or_default();
            eprintln!("warning: {LOG_ENV}={value} not recognised, logging disabled");
        }
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// JSON events to stderr via tracing-subscriber's JSON formatter.
fn init_json() {
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE),
        )
        .init();
}

fn init_text() {
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
