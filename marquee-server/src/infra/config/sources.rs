use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub overseerr: FileOverseerrConfig,
    #[serde(default)]
    pub release: FileReleaseConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileOverseerrConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Humantime duration, e.g. `10s` or `1m 30s`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileReleaseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_region: Option<String>,
}

/// Settings read from the process environment.
#[derive(Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub overseerr_base_url: Option<String>,
    pub overseerr_api_key: Option<String>,
    pub overseerr_timeout: Option<String>,
    pub home_region: Option<String>,
}

impl std::fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvConfig")
            .field("config_path", &self.config_path)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("overseerr_base_url", &self.overseerr_base_url)
            .field(
                "overseerr_api_key",
                &self.overseerr_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("overseerr_timeout", &self.overseerr_timeout)
            .field("home_region", &self.home_region)
            .finish()
    }
}

impl EnvConfig {
    pub fn gather() -> Self {
        let mut env_config = EnvConfig {
            config_path: std::env::var("MARQUEE_CONFIG").ok().map(PathBuf::from),
            ..EnvConfig::default()
        };

        env_config.server_host = non_empty_var("SERVER_HOST");
        env_config.server_port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|s| s.parse().ok());

        env_config.overseerr_base_url = non_empty_var("OVERSEERR_BASE_URL");
        env_config.overseerr_api_key = non_empty_var("OVERSEERR_API_KEY");
        env_config.overseerr_timeout = non_empty_var("OVERSEERR_TIMEOUT");

        env_config.home_region = non_empty_var("MARQUEE_HOME_REGION");

        env_config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
