use thiserror::Error;

/// Why a city's data file could not be turned into dishes. Every variant is
/// recoverable: the city simply stays without data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response status {0}")]
    Status(u16),

    #[error("malformed city data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("failed to read city data: {0}")]
    Io(#[from] std::io::Error),
}
