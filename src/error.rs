//! Errors produced while resolving release assets.

use reqwest::StatusCode;

/// Broad classification of a [`FindError`], for callers that only care
/// about which stage of the lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindErrorKind {
    Transport,
    Api,
    Io,
    Decode,
}

/// Errors that can occur while finding release assets.
#[derive(Debug)]
pub enum FindError {
    /// The request never produced a response (DNS, connect, TLS, timeout)
    Transport(reqwest::Error),
    /// The API answered with anything other than HTTP 200
    Api { status: StatusCode, url: String },
    /// The response body could not be read to the end
    Io(reqwest::Error),
    /// The response body is not a release object
    Decode(serde_json::Error),
}

impl FindError {
    pub fn kind(&self) -> FindErrorKind {
        match self {
            FindError::Transport(_) => FindErrorKind::Transport,
            FindError::Api { .. } => FindErrorKind::Api,
            FindError::Io(_) => FindErrorKind::Io,
            FindError::Decode(_) => FindErrorKind::Decode,
        }
    }
}

impl std::fmt::Display for FindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindError::Transport(e) => write!(f, "Failed to send request: {}", e),
            FindError::Api { status, url } => write!(f, "{} (URL: {})", status, url),
            FindError::Io(e) => write!(f, "Failed to read response body: {}", e),
            FindError::Decode(e) => write!(f, "Failed to parse JSON response: {}", e),
        }
    }
}

impl std::error::Error for FindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FindError::Transport(e) | FindError::Io(e) => Some(e),
            FindError::Decode(e) => Some(e),
            FindError::Api { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_api_error_display_includes_status_and_url() {
        let err = FindError::Api {
            status: StatusCode::NOT_FOUND,
            url: "https://api.github.com/repos/foo/bar/releases/latest".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "404 Not Found (URL: https://api.github.com/repos/foo/bar/releases/latest)"
        );
        assert_eq!(err.kind(), FindErrorKind::Api);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = FindError::Decode(json_err);
        assert_eq!(err.kind(), FindErrorKind::Decode);
        assert!(err.to_string().starts_with("Failed to parse JSON response"));
        assert!(err.source().is_some());
    }
}
