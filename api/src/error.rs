use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure: DNS, refused connection, TLS, aborted fetch.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx answer. `message` is the backend's `{ "message": ... }` if it sent one.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("unexpected response shape: expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Server-supplied explanation, when the backend provided one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Error::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::Rejected { .. })
    }
}
