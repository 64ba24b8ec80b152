use thiserror::Error;

/// Why a poll cycle produced no data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// The server function call itself failed (transport, decoding).
    #[error("{0}")]
    Server(String),

    /// The upstream API answered with a failure.
    #[error("HTTP error! {0}")]
    Upstream(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Request(String),
}
