use clap::Subcommand;

use crate::app::api;
use crate::domain::{API_KEY_ENV, AppError};
use crate::ports::SettingsStore;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective settings (the API key is masked)
    Show,
    /// Print the settings file location
    Path,
    /// Store the chat API key
    SetKey {
        /// API key
        key: String,
    },
}

pub fn run_config(command: ConfigCommands) -> Result<(), AppError> {
    match command {
        ConfigCommands::Show => {
            let settings = api::load_settings()?;
            let masked = mask_key(&settings.api_key);
            println!("api_key = {}", masked);
            println!("api.url = {}", settings.api.url);
            println!("api.timeout_secs = {}", settings.api.timeout_secs);
            match &settings.host.program {
                Some(program) => println!("host.program = {}", program.display()),
                None => println!("host.program = (not set, scripts are printed)"),
            }
            println!("host.python_embedding = {:?}", settings.host.python_embedding);
            println!("host.staging_dir = {}", settings.host.staging_dir().display());
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", api::settings_store()?.location().display());
            Ok(())
        }
        ConfigCommands::SetKey { key } => {
            if key.trim().is_empty() {
                return Err(AppError::config_error("API key must not be empty"));
            }
            let path = api::set_api_key(&key)?;
            println!("✅ Saved API key to {}", path.display());
            if std::env::var_os(API_KEY_ENV).is_some() {
                println!("⚠️  {} is set and overrides the stored key", API_KEY_ENV);
            }
            Ok(())
        }
    }
}

fn mask_key(key: &str) -> String {
    let count = key.chars().count();
    if count == 0 {
        return "(not set)".to_string();
    }
    if count <= 8 {
        return "*".repeat(count);
    }
    let tail: String = key.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}
