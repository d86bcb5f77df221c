use crate::client::github_client::GitHubClient;
use crate::config::ReleaseConfig;
use crate::models::github::ReleaseError;
use log::debug;

/// Outcome of comparing the running version with the latest published release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseStatus {
    pub current: String,
    pub latest: String,
}

impl ReleaseStatus {
    pub fn is_latest(&self) -> bool {
        self.current == self.latest
    }
}

/// Tells whether a version is the latest release of the configured repository.
///
/// The version to compare against is handed in at construction, nothing is read from
/// global state. A checker only holds immutable data and can be shared between tasks.
#[derive(Debug, Clone)]
pub struct ReleaseChecker {
    config: ReleaseConfig,
    current_version: String,
}

impl ReleaseChecker {
    pub fn new(
        config: ReleaseConfig,
        current_version: impl Into<String>,
    ) -> Result<Self, ReleaseError> {
        let current_version = current_version.into();
        if current_version.is_empty() {
            return Err(ReleaseError::Config("current version is empty".to_string()));
        }
        Ok(ReleaseChecker {
            config,
            current_version,
        })
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    /// Name of the most recent release. Each call builds its own HTTP client and drops it
    /// before returning, so no connection outlives the call.
    pub async fn latest_release_name(&self) -> Result<String, ReleaseError> {
        let client = GitHubClient::new(&self.config)?;
        let release = client.get_latest_release(&self.config).await?;
        Ok(release.name)
    }

    /// Exact, case-sensitive comparison. `v1.0.0` and `1.0.0` are different versions.
    pub fn is_latest(&self, candidate: &str) -> bool {
        candidate == self.current_version
    }

    pub async fn check(&self) -> Result<ReleaseStatus, ReleaseError> {
        let latest = self.latest_release_name().await?;
        debug!(
            "Running {}, latest release is {}",
            self.current_version, latest
        );
        Ok(ReleaseStatus {
            current: self.current_version.clone(),
            latest,
        })
    }
}
