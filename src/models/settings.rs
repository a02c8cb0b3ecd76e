use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::utils::errors::SettingsError;
use crate::utils::logger::Level;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
const CONFIG_FILE: &str = "gridcap";
const ENV_PREFIX: &str = "GRIDCAP";
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub api_base: String,
    pub log_level: String,
    #[serde(default)]
    pub session_file: Option<String>,
}

/// Values given on the command line; they win over every other source.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub api_base: Option<String>,
    pub session_file: Option<String>,
    pub log_level: Option<String>,
}

impl Settings {
    /// Layers defaults, an optional `gridcap.toml` in the working directory,
    /// `GRIDCAP_*` environment variables and the command line overrides.
    pub fn load(overrides: &SettingsOverrides) -> Result<Self, SettingsError> {
        Settings::build(File::with_name(CONFIG_FILE).required(false), overrides)
    }

    pub fn load_from(path: &Path, overrides: &SettingsOverrides) -> Result<Self, SettingsError> {
        Settings::build(File::from(path).required(true), overrides)
    }

    fn build<S>(file: S, overrides: &SettingsOverrides) -> Result<Self, SettingsError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("api_base", DEFAULT_API_BASE)?
            .set_default("log_level", "warn")?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .set_override_option("api_base", overrides.api_base.clone())?
            .set_override_option("session_file", overrides.session_file.clone())?
            .set_override_option("log_level", overrides.log_level.clone())?
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;
        settings.api_base = settings.api_base.trim_end_matches('/').to_string();
        Ok(settings)
    }

    pub fn level(&self) -> Result<Level, SettingsError> {
        self.log_level.parse()
    }

    /// Where the session store lives unless a path was configured.
    pub fn session_path(&self) -> PathBuf {
        match &self.session_file {
            Some(path) => PathBuf::from(path),
            None => match dirs::config_dir() {
                Some(dir) => dir.join("gridcap").join(SESSION_FILE),
                None => PathBuf::from(format!(".gridcap-{SESSION_FILE}")),
            },
        }
    }
}
