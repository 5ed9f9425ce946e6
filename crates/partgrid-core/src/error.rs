use thiserror::Error;

/// Errors raised while decoding a serialized part.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("malformed coordinate '{entry}': {reason}")]
    MalformedCoordinate { entry: String, reason: String },

    #[error("unknown part orientation '{0}'")]
    UnknownOrientation(String),
}

/// Errors raised while loading or validating a placement config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse placement config RON: {0}")]
    Parse(String),

    #[error("failed to serialize placement config: {0}")]
    Serialize(String),

    #[error("invalid placement config: {0}")]
    Invalid(String),
}
