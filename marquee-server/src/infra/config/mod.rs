pub mod loader;
pub mod models;
pub mod sources;

pub use loader::{ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    Config, ConfigLoad, ConfigMetadata, ConfigWarning, ConfigWarnings,
    OverseerrConfig, ReleaseConfig, ServerConfig,
};
pub use sources::{EnvConfig, FileConfig};
