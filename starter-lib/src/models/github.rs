use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// A published release as returned by `GET /repos/{owner}/{repo}/releases/latest`.
/// Only `name` is decoded, the rest of the payload is ignored whatever its shape.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GitHubRelease {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Decode,
    Config,
}

#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },
    #[error("failed to decode release from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid release checker setup: {0}")]
    Config(String),
}

impl ReleaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReleaseError::Request { .. } | ReleaseError::Status { .. } => ErrorKind::Transport,
            ReleaseError::Decode { .. } => ErrorKind::Decode,
            ReleaseError::Config(_) => ErrorKind::Config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let json = r#"{"name": "v1.2.0", "tag_name": "v1.2.0", "id": 42, "assets": []}"#;
        let release: GitHubRelease = serde_json::from_str(json).unwrap();
        assert_eq!(release.name, "v1.2.0");
    }

    #[test]
    fn test_decode_tolerates_oddly_typed_extra_fields() {
        let json = r#"{
            "name": "v0.0.2",
            "tag_name": 2,
            "prerelease": null,
            "draft": "no",
            "published_at": "last tuesday",
            "html_url": {}
        }"#;
        let release: GitHubRelease = serde_json::from_str(json).unwrap();
        assert_eq!(release.name, "v0.0.2");
    }

    #[test]
    fn test_decode_rejects_null_name() {
        let json = r#"{"name": null, "tag_name": "v1.2.0"}"#;
        assert!(serde_json::from_str::<GitHubRelease>(json).is_err());
    }

    #[test]
    fn test_error_kinds() {
        let status = ReleaseError::Status {
            url: "http://localhost/releases/latest".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(status.kind(), ErrorKind::Transport);
        assert!(status.to_string().contains("500"));

        let decode = ReleaseError::Decode {
            url: "http://localhost/releases/latest".to_string(),
            source: serde_json::from_str::<GitHubRelease>("{").unwrap_err(),
        };
        assert_eq!(decode.kind(), ErrorKind::Decode);

        assert_eq!(
            ReleaseError::Config("empty version".to_string()).kind(),
            ErrorKind::Config
        );
    }
}
