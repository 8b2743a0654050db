use thiserror::Error;

/// Errors that end a tick, and with it the application.
///
/// Per-process read failures are not errors: they come back from the
/// collector as skipped entries and are dropped by the sampler.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("collector error: {0}")]
    Collector(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = MonitorError> = std::result::Result<T, E>;
