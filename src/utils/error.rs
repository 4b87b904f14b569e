use thiserror::Error;

#[derive(Error, Debug)]
pub enum MutualError {
    #[error("Please enter at least one username.")]
    EmptyInput,

    #[error("Rate limit exceeded (HTTP {status}) for {url}")]
    RateLimited { status: u16, url: String },

    #[error("API error: {status} for {url}")]
    Api { status: u16, url: String },

    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unreadable {header} header in response from {url}")]
    MalformedHeader { header: &'static str, url: String },

    #[error("Fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl MutualError {
    /// Upstream quota rejection. The resolver answers these with the fallback dataset.
    pub fn is_throttled(&self) -> bool {
        matches!(self, MutualError::RateLimited { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MutualError::EmptyInput => "Pass one or more comma-separated usernames",
            MutualError::RateLimited { .. } => "Wait for the rate limit window to reset",
            MutualError::Api { status: 404, .. } => "Check that every username exists",
            MutualError::Api { .. } | MutualError::Request(_) => {
                "Check network connectivity and the API base URL"
            }
            MutualError::Decode { .. } | MutualError::MalformedHeader { .. } => {
                "Check that --api-base points at a GitHub-compatible API"
            }
            MutualError::Task(_) => "Retry the lookup",
            MutualError::InvalidUrl { .. }
            | MutualError::ConfigValidationError { .. }
            | MutualError::InvalidConfigValueError { .. } => "Fix the configuration and retry",
            MutualError::Io(_) | MutualError::Serialization(_) => "Check the output destination",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            MutualError::EmptyInput => 0,
            MutualError::InvalidUrl { .. }
            | MutualError::ConfigValidationError { .. }
            | MutualError::InvalidConfigValueError { .. } => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, MutualError>;
