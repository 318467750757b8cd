use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessageError {
    #[error("Failed to serialize message: {0}")]
    SerializeError(String),

    #[error("Failed to parse message: {0}")]
    ParseError(String),

    #[error("Unexpected message type: expected '{expected}', found '{found}'")]
    UnexpectedType {
        expected: &'static str,
        found: String,
    },

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to read input: {0}")]
    IoError(String),
}

// Decode paths only; encoders map to `SerializeError` themselves.
impl From<serde_json::Error> for MessageError {
    fn from(error: serde_json::Error) -> Self {
        MessageError::ParseError(error.to_string())
    }
}

impl From<std::io::Error> for MessageError {
    fn from(error: std::io::Error) -> Self {
        MessageError::IoError(error.to_string())
    }
}
