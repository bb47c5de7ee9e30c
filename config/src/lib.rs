#[macro_use]
extern crate tracing;

mod app_config;
mod args;
pub mod credentials;
pub mod secret_store;

use app_config::AppConfig;
pub use app_config::{
    get_config_dir,
    get_data_dir,
};
pub use args::Args;
use color_eyre::Result;
use eyre::Context as _;
pub use credentials::{
    ConfigurationError,
    CredentialResolver,
    Credentials,
    ProviderSection,
    NOT_CONFIGURED,
};
pub use secret_store::{
    EnvSecretStore,
    SecretStore,
    StaticSecretStore,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::{
    path::{
        Path,
        PathBuf,
    },
    time::Duration,
};
use url::Url;

const DEFAULT_CONFIG: &str = include_str!("default-config.yaml");
const SECRETS_FILE_NAME: &str = "secrets.json";
const SNAPSHOT_FILE_NAME: &str = "data.json";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpotifySettings {
    pub base_url: Url,
    pub auth_url: Url,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppleSettings {
    pub base_url: Url,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten, skip_serializing)]
    pub(crate) app_config: AppConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
    pub spotify: SpotifySettings,
    pub apple: AppleSettings,
    /// Upper bound for every provider request, e.g. `30s`.
    pub request_timeout: String,
}

impl Default for Config {
    fn default() -> Self {
        serde_yml::from_str(DEFAULT_CONFIG).expect("Failed to parse default config")
    }
}

impl Config {
    /// Layers the built-in defaults, `config.yaml`, the environment and the CLI arguments.
    pub fn new(args: Args) -> Result<Self, config::ConfigError> {
        let data_dir = get_data_dir();
        let config_dir = get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("config_dir", config_dir.to_string_lossy().to_string())?;

        builder = builder.add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Yaml));

        let config_files = [("config.yaml", config::FileFormat::Yaml)];

        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
        }

        builder = builder.add_source(
            config::Environment::with_prefix(app_config::PROJECT_NAME)
                .prefix_separator("_")
                .separator("__"),
        );

        builder = builder.add_source(args);

        let cfg: Self = builder.build()?.try_deserialize()?;

        Ok(cfg)
    }

    pub fn data_dir(&self) -> &Path {
        &self.app_config.data_dir
    }

    pub fn config_dir(&self) -> &Path {
        &self.app_config.config_dir
    }

    pub fn secrets_file(&self) -> PathBuf {
        self.secrets_file
            .clone()
            .unwrap_or_else(|| self.config_dir().join(SECRETS_FILE_NAME))
    }

    pub fn output_file(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| self.data_dir().join(SNAPSHOT_FILE_NAME))
    }

    pub fn request_timeout(&self) -> Result<Duration> {
        humantime::parse_duration(&self.request_timeout)
            .wrap_err_with(|| format!("Invalid request timeout '{}'", self.request_timeout))
    }
}
