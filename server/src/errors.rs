use thiserror::Error;
use warp::reject;

/// Enumerates high-level errors returned by this library.
#[derive(Debug, Error)]
pub enum HubError {
    /// Represents a path parameter that could not be parsed as a
    /// resource ID.
    #[error("invalid ID: {0}")]
    InvalidId(String),

    /// Represents a lookup for a resource that does not exist.
    #[error("no such resource")]
    ResourceNotFound,

    /// Represents a catch-all path segment that is not a recognized
    /// identifier.
    #[error("unrecognized identifier: {0}")]
    UnrecognizedIdentifier(String),

    /// Represents a contact submission that could not be parsed.
    #[error("malformed submission")]
    MalformedSubmission,
}

impl reject::Reject for HubError {}
