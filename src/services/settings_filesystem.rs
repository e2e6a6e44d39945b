use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, Settings, SettingsNamespace};
use crate::ports::SettingsStore;

const CONFIG_HOME_ENV: &str = "MAXGPT_CONFIG_HOME";

/// TOML settings file at `<config home>/<organization>/<application>.toml`.
#[derive(Debug, Clone)]
pub struct FilesystemSettingsStore {
    path: PathBuf,
}

impl FilesystemSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store for `namespace` under the user's config home.
    pub fn for_namespace(namespace: SettingsNamespace) -> Result<Self, AppError> {
        let path = config_home()?
            .join(namespace.organization)
            .join(format!("{}.toml", namespace.application));
        Ok(Self::new(path))
    }
}

fn config_home() -> Result<PathBuf, AppError> {
    for var in [CONFIG_HOME_ENV, "XDG_CONFIG_HOME"] {
        if let Some(value) = std::env::var_os(var)
            && !value.is_empty()
        {
            return Ok(PathBuf::from(value));
        }
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Ok(PathBuf::from(home).join(".config"));
    }
    if let Some(app_data) = std::env::var_os("APPDATA") {
        return Ok(PathBuf::from(app_data));
    }
    Err(AppError::config_error(format!(
        "Cannot locate a config directory. Set {} or HOME.",
        CONFIG_HOME_ENV
    )))
}

impl SettingsStore for FilesystemSettingsStore {
    fn load(&self) -> Result<Settings, AppError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(settings)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
