use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use awaazein_models::email_address::EmailAddress;
use config::{Environment, File, FileFormat};
use serde::Deserialize;

mod duration;

pub use duration::Duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a `PATH`-style list of config files to load
/// instead of [`DEFAULT_CONFIG_PATH`]. Later files override earlier ones.
pub const CONFIG_PATH_ENV_VAR: &str = "AWAAZEIN_CONFIG";

pub fn load() -> anyhow::Result<Config> {
    load_paths(&paths())
}

pub fn paths() -> Vec<PathBuf> {
    std::env::var_os(CONFIG_PATH_ENV_VAR)
        .map(|paths| std::env::split_paths(&paths).collect())
        .unwrap_or_else(|| vec![DEFAULT_CONFIG_PATH.into()])
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(
            Environment::with_prefix("AWAAZEIN")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    /// When absent, the server starts but contact messages are rejected with
    /// a configuration error and no delivery is attempted.
    pub email: Option<EmailConfig>,
    pub contact: ContactConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddress,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipient: EmailAddress,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}
