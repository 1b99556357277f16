use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("LLM request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Malformed model output: {0}")]
    Format(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Coarse classification reported to clients alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::Yaml(_) | Self::AddrParse(_) => "configuration",
            Self::Llm(_) | Self::Network(_) | Self::OpenAi(_) => "provider",
            Self::Timeout(_) => "timeout",
            Self::Format(_) => "format",
            Self::InvalidRequest(_) => "invalid_request",
            Self::Io(_) | Self::Internal(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::config("missing key").kind(), "configuration");
        assert_eq!(Error::llm("connection reset").kind(), "provider");
        assert_eq!(Error::Timeout(Duration::from_secs(5)).kind(), "timeout");
        assert_eq!(Error::format("not json").kind(), "format");
        assert_eq!(Error::internal("boom").kind(), "internal");
    }

    #[test]
    fn test_timeout_message_mentions_duration() {
        let err = Error::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "LLM request timed out after 30s");
    }
}
