use crate::utils::version::VERSION;
use config::builder::DefaultState;
use config::{Config as ConfigLoader, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OWNER: &str = "bartoszmajsak";
pub const DEFAULT_REPO: &str = "template-golang";
/// Prefix of the environment variables read at runtime.
pub const ENV_PREFIX: &str = "STARTER";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub release: ReleaseConfig,
}

/// Where to look for releases of this tool.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    pub api_url: String,
    pub owner: String,
    pub repo: String,
    pub user_agent: String,
    /// Unset means the HTTP transport defaults apply.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            api_url: DEFAULT_API_URL.to_string(),
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl ReleaseConfig {
    pub fn latest_release_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }
}

fn default_user_agent() -> String {
    format!("starter/{}", VERSION)
}

impl Config {
    /// Defaults, then `starter.toml` in the working directory, then `STARTER_*` env vars
    /// (e.g. `STARTER_RELEASE__REPO`).
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(File::with_name("starter").required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true)
                    .separator("__"),
            );
        builder.build()?.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        ConfigLoader::builder()
            .set_default("release.api_url", DEFAULT_API_URL)?
            .set_default("release.owner", DEFAULT_OWNER)?
            .set_default("release.repo", DEFAULT_REPO)?
            .set_default("release.user_agent", default_user_agent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults() {
        let config: Config = Config::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.release, ReleaseConfig::default());
        assert!(config.release.user_agent.starts_with("starter/"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [release]
            owner = "acme"
            repo = "tool"
            timeout_secs = 5
        "#;
        let config: Config = Config::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.release.owner, "acme");
        assert_eq!(config.release.repo, "tool");
        assert_eq!(config.release.api_url, DEFAULT_API_URL);
        assert_eq!(config.release.timeout_secs, Some(5));
    }

    #[test]
    fn test_env_overrides_defaults() {
        // The only test in this crate that touches STARTER_* variables
        std::env::set_var("STARTER_RELEASE__REPO", "from-env");
        std::env::set_var("STARTER_RELEASE__TIMEOUT_SECS", "7");

        let config = Config::load();

        std::env::remove_var("STARTER_RELEASE__REPO");
        std::env::remove_var("STARTER_RELEASE__TIMEOUT_SECS");

        let config = config.unwrap();
        assert_eq!(config.release.repo, "from-env");
        assert_eq!(config.release.timeout_secs, Some(7));
        assert_eq!(config.release.owner, DEFAULT_OWNER);
        assert_eq!(config.release.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_latest_release_url() {
        let release = ReleaseConfig {
            api_url: "http://127.0.0.1:8080/".to_string(),
            ..ReleaseConfig::default()
        };
        assert_eq!(
            release.latest_release_url(),
            "http://127.0.0.1:8080/repos/bartoszmajsak/template-golang/releases/latest"
        );
        assert_eq!(
            ReleaseConfig::default().latest_release_url(),
            "https://api.github.com/repos/bartoszmajsak/template-golang/releases/latest"
        );
    }
}
