use std::{env, path::PathBuf};

use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::warn;

/// Application configuration.
///
/// Read once at startup from an optional `config.json5` / `config.toml` in
/// the config dir; everything has a default so running without any config
/// file is fine.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
}

lazy_static! {
    static ref ENV_PREFIX: String = env!("CARGO_CRATE_NAME").to_uppercase();
    static ref DATA_DIR_OVERRIDE: Option<PathBuf> = dir_from_env("DATA");
    static ref CONFIG_DIR_OVERRIDE: Option<PathBuf> = dir_from_env("CONFIG");
}

fn dir_from_env(suffix: &str) -> Option<PathBuf> {
    env::var(format!("{}_{suffix}", *ENV_PREFIX))
        .ok()
        .map(PathBuf::from)
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        let config_dir = get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("data_dir", get_data_dir().to_str().unwrap_or_default())?
            .set_default("config_dir", config_dir.to_str().unwrap_or_default())?;

        let sources = [
            ("config.json5", config::FileFormat::Json5),
            ("config.toml", config::FileFormat::Toml),
        ];
        let mut any_found = false;
        for (name, format) in sources {
            let path = config_dir.join(name);
            any_found |= path.exists();
            builder = builder.add_source(config::File::from(path).format(format).required(false));
        }
        if !any_found {
            warn!("no configuration file found, using defaults");
        }

        builder.build()?.try_deserialize()
    }
}

pub fn get_data_dir() -> PathBuf {
    DATA_DIR_OVERRIDE.clone().unwrap_or_else(|| {
        project_directory()
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".").join(".data"))
    })
}

pub fn get_config_dir() -> PathBuf {
    CONFIG_DIR_OVERRIDE.clone().unwrap_or_else(|| {
        project_directory()
            .map(|dirs| dirs.config_local_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".").join(".config"))
    })
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "timjonaswechler", env!("CARGO_PKG_NAME"))
}
