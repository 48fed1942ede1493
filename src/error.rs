use thiserror::Error;

/// Failure of a call to the parc API, as seen by the client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn decode(err: impl std::fmt::Display) -> Self {
        ApiError::Decode(err.to_string())
    }
}
