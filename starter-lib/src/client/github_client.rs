use crate::config::ReleaseConfig;
use crate::models::github::{GitHubRelease, ReleaseError};
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    pub fn new(config: &ReleaseConfig) -> Result<Self, ReleaseError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|source| ReleaseError::Request {
            url: config.api_url.clone(),
            source,
        })?;

        Ok(GitHubClient { client })
    }

    pub async fn get_latest_release(
        &self,
        release: &ReleaseConfig,
    ) -> Result<GitHubRelease, ReleaseError> {
        let url = release.latest_release_url();
        debug!("Fetching latest release from {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .send()
            .await
            .map_err(|source| ReleaseError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReleaseError::Status { url, status });
        }

        // Decoded by hand so a malformed body is reported as such and not as a transport error
        let body = response.text().await.map_err(|source| ReleaseError::Request {
            url: url.clone(),
            source,
        })?;
        let latest: GitHubRelease = serde_json::from_str(&body)
            .map_err(|source| ReleaseError::Decode {
                url: url.clone(),
                source,
            })?;

        debug!("Latest release at {} is {:?}", url, latest.name);
        Ok(latest)
    }
}
