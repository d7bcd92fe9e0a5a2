//! Error types for elog

pub type Result<T> = std::result::Result<T, ElogError>;

#[derive(Debug, thiserror::Error)]
pub enum ElogError {
    /// Sink IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The formatter reported an error while rendering a line
    #[error("Formatter error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Text that does not name a level
    #[error("Invalid log level: '{input}'")]
    ParseLevel { input: String },

    /// Byte outside `0..=6`
    #[error("Invalid log level value: {0}")]
    InvalidLevelValue(u8),

    /// A sink was already installed
    #[error("Output sink already installed: '{name}'")]
    SinkAlreadySet { name: String },

    /// The `log` facade already has a logger
    #[cfg(feature = "log")]
    #[error("Failed to install log bridge: {0}")]
    LoggerInit(#[from] log::SetLoggerError),
}

impl ElogError {
    /// Create a level parse error
    pub fn parse_level(input: impl Into<String>) -> Self {
        ElogError::ParseLevel {
            input: input.into(),
        }
    }

    /// Create a sink-already-set error
    pub fn sink_already_set(name: impl Into<String>) -> Self {
        ElogError::SinkAlreadySet { name: name.into() }
    }
}
