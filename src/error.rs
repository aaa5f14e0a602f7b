//! Error taxonomy for the administration console.
//!
//! Every operator action resolves to either a success value or one of these
//! kinds. Parse fallback during message rendering is deliberately absent: a
//! failed parse of embedded content substitutes raw text and is never an error.

use thiserror::Error;

/// Classification of a failed call against the agent service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 4xx other than 404.
    ClientError,
    /// HTTP 404.
    NotFound,
    /// Anything else the server returned.
    ServerError,
    /// The request never produced an HTTP response.
    Network,
}

impl FailureKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => FailureKind::NotFound,
            400..=499 => FailureKind::ClientError,
            _ => FailureKind::ServerError,
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FailureKind::ClientError => "client error",
            FailureKind::NotFound => "not found",
            FailureKind::ServerError => "server error",
            FailureKind::Network => "network failure",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// HTTP or network failure talking to the agent service.
    #[error("transport failure ({kind}): {message}")]
    Transport {
        kind: FailureKind,
        status: Option<u16>,
        message: String,
    },

    /// Operator referenced an identifier absent from the last listing.
    #[error("not found: {0}")]
    NotFound(String),

    /// Operator input was malformed.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A relationship mutation contradicts the current relationship state.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Configuration loading or prompt plumbing failed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ConsoleError {
    /// Normalize a non-success HTTP response into a transport error.
    pub fn from_status(status: u16, body: String) -> Self {
        let message = if body.trim().is_empty() {
            format!("server returned {}", status)
        } else {
            format!("server returned {}: {}", status, body.trim())
        };
        ConsoleError::Transport {
            kind: FailureKind::from_status(status),
            status: Some(status),
            message,
        }
    }

    /// Normalize a request that produced no HTTP response at all.
    pub fn network(err: reqwest::Error) -> Self {
        ConsoleError::Transport {
            kind: FailureKind::Network,
            status: None,
            message: err.to_string(),
        }
    }

    /// True when the failure suggests the endpoint shape, not the request
    /// content, is wrong: 405, or 404 on a path built from a known-valid
    /// identifier. These trigger the transport unifier's fallback route.
    pub fn is_endpoint_mismatch(&self) -> bool {
        matches!(
            self,
            ConsoleError::Transport {
                status: Some(404) | Some(405),
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(FailureKind::from_status(404), FailureKind::NotFound);
        assert_eq!(FailureKind::from_status(422), FailureKind::ClientError);
        assert_eq!(FailureKind::from_status(500), FailureKind::ServerError);
        assert_eq!(FailureKind::from_status(302), FailureKind::ServerError);
    }

    #[test]
    fn endpoint_mismatch_detection() {
        assert!(ConsoleError::from_status(405, String::new()).is_endpoint_mismatch());
        assert!(ConsoleError::from_status(404, "no route".to_string()).is_endpoint_mismatch());
        assert!(!ConsoleError::from_status(500, String::new()).is_endpoint_mismatch());
        assert!(!ConsoleError::NotFound("passage-1".to_string()).is_endpoint_mismatch());
    }

    #[test]
    fn empty_body_gets_a_status_message() {
        let err = ConsoleError::from_status(503, "  ".to_string());
        assert_eq!(err.to_string(), "transport failure (server error): server returned 503");
    }
}
