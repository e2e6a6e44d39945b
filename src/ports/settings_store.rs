use std::path::PathBuf;

use crate::domain::{AppError, Settings};

/// Port for persisted settings.
pub trait SettingsStore {
    /// Load settings, falling back to defaults when nothing is stored yet.
    fn load(&self) -> Result<Settings, AppError>;

    /// Persist settings, replacing what was stored.
    fn save(&self, settings: &Settings) -> Result<(), AppError>;

    /// Location of the stored settings.
    fn location(&self) -> PathBuf;
}
