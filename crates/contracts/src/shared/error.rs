use thiserror::Error;

/// Why the destination data file could not be used
#[derive(Debug, Error)]
pub enum DestinationError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("invalid destination data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Why the map could not be shown
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("map library did not load within {0} ms")]
    LibraryUnavailable(u32),

    #[error("map could not be created: {0}")]
    Init(String),
}
