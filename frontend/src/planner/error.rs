use thiserror::Error;

/// Every way a plan submission can fail. The user sees one apology for all
/// of them; the variant only matters for the log line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailed {
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("request failed: {0}")]
    Transport(String),

    /// Request could not be encoded or response could not be decoded.
    #[error("invalid JSON body: {0}")]
    InvalidBody(String),
}

impl From<gloo_net::Error> for SubmissionFailed {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => SubmissionFailed::InvalidBody(err.to_string()),
            other => SubmissionFailed::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for SubmissionFailed {
    fn from(err: serde_json::Error) -> Self {
        SubmissionFailed::InvalidBody(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_the_code() {
        assert_eq!(SubmissionFailed::HttpStatus(500).to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn gloo_serde_errors_are_not_transport_failures() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SubmissionFailed::from(gloo_net::Error::SerdeError(json_err));
        assert!(matches!(err, SubmissionFailed::InvalidBody(_)));

        let err = SubmissionFailed::from(gloo_net::Error::GlooError("connection refused".to_string()));
        assert!(matches!(err, SubmissionFailed::Transport(ref msg) if msg.contains("connection refused")));
    }

    #[test]
    fn json_errors_become_invalid_body() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(matches!(SubmissionFailed::from(err), SubmissionFailed::InvalidBody(_)));
    }
}
