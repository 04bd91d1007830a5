use thiserror::Error;

/// Errors reported by network construction, sampling and the surrounding shell.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// The network definition violates a structural or probabilistic invariant.
    /// Construction never hands out a partially valid model.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A caller supplied a value the operation cannot accept.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SamplerError {
    pub fn configuration(message: impl Into<String>) -> Self {
        SamplerError::Configuration(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        SamplerError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SamplerError>;

impl From<std::convert::Infallible> for SamplerError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
