/// Errors produced by calls against the activity service.
///
/// There are exactly two kinds: the request never completed (network or DOM
/// failure, or an undecodable success body), or the server answered with a
/// non-2xx status and, usually, a human-readable `detail`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The fetch itself failed or the response body could not be decoded.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server rejected the request with a non-2xx status.
    #[error("rejected ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Server-provided detail for a rejection, if the body carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Transport(_) => None,
            ApiError::Rejected { detail, .. } => detail.as_deref(),
        }
    }

    /// True when the request never reached a server verdict.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_only_on_rejection() {
        let err = ApiError::Rejected {
            status: 400,
            detail: Some("Already registered".to_string()),
        };
        assert_eq!(err.detail(), Some("Already registered"));
        assert!(!err.is_transport());

        let err = ApiError::Transport("connection reset".to_string());
        assert_eq!(err.detail(), None);
        assert!(err.is_transport());
    }

    #[test]
    fn test_display() {
        let err = ApiError::Rejected {
            status: 404,
            detail: Some("Activity not found".to_string()),
        };
        assert_eq!(err.to_string(), "rejected (404): Activity not found");

        let err = ApiError::Rejected {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "rejected (500): no detail");
    }
}
