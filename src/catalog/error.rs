//! Errors produced while talking to the remote catalog.

/// Failure of a single page fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (network, CORS, aborted).
    Transport(String),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The response body was not a valid artworks page.
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::Status(status) => write!(f, "HTTP error! status: {}", status),
            FetchError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Failure of a multi-page batch; one failing page fails the whole batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkFetchError {
    /// Page whose fetch failed.
    pub page: u32,
    pub source: FetchError,
}

impl std::fmt::Display for BulkFetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to fetch page {} of batch: {}", self.page, self.source)
    }
}

impl std::error::Error for BulkFetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
