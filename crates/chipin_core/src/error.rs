use thiserror::Error;

/// Errors from the fallible edges of the core: event log files, scripts, config.
/// Widget reducers themselves never fail.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("event log I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("event log is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("script line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },
}

impl CoreError {
    pub(crate) fn script(line: usize, message: impl Into<String>) -> Self {
        CoreError::Script {
            line,
            message: message.into(),
        }
    }
}
