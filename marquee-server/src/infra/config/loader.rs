use once_cell::sync::Lazy;
use std::{fs, path::PathBuf, time::Duration};
use thiserror::Error;
use url::Url;

use marquee_core::providers::overseerr::DEFAULT_TIMEOUT;
use marquee_model::{ModelError, RegionCode};

use super::{
    models::{
        Config, ConfigLoad, ConfigMetadata, ConfigWarnings, OverseerrConfig,
        ReleaseConfig, ServerConfig,
    },
    sources::{EnvConfig, FileConfig},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("marquee.toml"),
        PathBuf::from("config/marquee.toml"),
    ]
});

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Loads `.env`, then composes environment, file and defaults.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        self.load_with_env(EnvConfig::gather(), env_file_loaded)
    }

    /// Composes configuration from an already gathered environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let mut warnings = ConfigWarnings::default();

        if file_config.is_none() {
            warnings.push_with_hint(
                "No marquee.toml detected; falling back to environment variables",
                "Create marquee.toml or set OVERSEERR_BASE_URL and OVERSEERR_API_KEY",
            );
        }

        let FileConfig {
            server: file_server,
            overseerr: file_overseerr,
            release: file_release,
        } = file_config.unwrap_or_default();

        let server = ServerConfig {
            host: env
                .server_host
                .or(file_server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: env.server_port.or(file_server.port).unwrap_or(DEFAULT_PORT),
        };

        let raw_base_url = env
            .overseerr_base_url
            .or(file_overseerr.base_url)
            .ok_or(ConfigLoadError::MissingSetting {
                name: "OVERSEERR_BASE_URL",
            })?;
        let base_url = parse_base_url(&raw_base_url)?;

        let api_key = env
            .overseerr_api_key
            .or(file_overseerr.api_key)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigLoadError::MissingSetting {
                name: "OVERSEERR_API_KEY",
            })?;

        let timeout = match env.overseerr_timeout.or(file_overseerr.timeout) {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_TIMEOUT,
        };

        let home_region = match env.home_region.or(file_release.home_region) {
            Some(raw) => RegionCode::new(&raw)?,
            None => RegionCode::default(),
        };
        if home_region.as_str() != "US" {
            warnings.push_with_hint(
                format!(
                    "home region {home_region} is used for lookups, but home matches are still labelled (US)"
                ),
                "Release lines sourced from the home region always carry the US tag",
            );
        }

        let config = Config {
            server,
            overseerr: OverseerrConfig {
                base_url,
                api_key,
                timeout,
            },
            release: ReleaseConfig { home_region },
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        };

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.clone(),
                None => return Ok((None, None)),
            },
        };

        let contents =
            fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigLoadError> {
    let url = Url::parse(raw.trim())
        .map_err(|source| ConfigLoadError::InvalidBaseUrl { source })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigLoadError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigLoadError> {
    let timeout = humantime::parse_duration(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidTimeout {
            value: raw.to_string(),
            source,
        }
    })?;
    if timeout.is_zero() {
        return Err(ConfigLoadError::ZeroTimeout);
    }
    Ok(timeout)
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("missing required setting {name}")]
    MissingSetting { name: &'static str },
    #[error("invalid Overseerr base URL")]
    InvalidBaseUrl {
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported Overseerr URL scheme '{scheme}'")]
    UnsupportedScheme { scheme: String },
    #[error("invalid Overseerr timeout '{value}'")]
    InvalidTimeout {
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("Overseerr timeout must be greater than zero")]
    ZeroTimeout,
    #[error("invalid home region")]
    InvalidRegion(#[from] ModelError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
