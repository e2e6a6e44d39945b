//! Persisted application settings.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Environment variable that overrides the stored API key for one process.
pub const API_KEY_ENV: &str = "MAXGPT_API_KEY";

/// Organization/application pair that keys the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsNamespace {
    pub organization: &'static str,
    pub application: &'static str,
}

impl SettingsNamespace {
    pub const DEFAULT: SettingsNamespace =
        SettingsNamespace { organization: "maxgpt", application: "openai" };
}

/// Settings loaded from `<config home>/<organization>/<application>.toml`.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Chat API key. Empty when not configured.
    #[serde(default)]
    pub api_key: String,
    /// Chat API endpoint configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Host runtime configuration.
    #[serde(default)]
    pub host: HostConfig,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &redact(&self.api_key))
            .field("api", &self.api)
            .field("host", &self.host)
            .finish()
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()
    }

    /// Replace the stored key with `MAXGPT_API_KEY` when that variable is set
    /// and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.trim().is_empty()
        {
            self.api_key = key.trim().to_string();
        }
        self
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.api_key.clone())
    }
}

/// Chat API endpoint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Chat completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { url: default_api_url(), timeout_secs: default_timeout() }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("api.timeout_secs must be greater than 0"));
        }
        if !matches!(self.url.scheme(), "http" | "https") {
            return Err(AppError::config_error("api.url must use http or https"));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    60
}

/// How python code reaches the host's embedded interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PythonEmbedding {
    /// Stage the code in a `.py` file and run it with `python.executeFile`.
    #[default]
    File,
    /// Escape the code into a host string literal passed to `python.execute`.
    Inline,
}

/// Host runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Host batch executable that runs a script file. When unset, scripts are
    /// printed instead of executed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<PathBuf>,
    /// Extra arguments placed before the script path.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default)]
    pub python_embedding: PythonEmbedding,
    /// Directory for staged script files. Defaults to the system temp dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staging_dir: Option<PathBuf>,
}

impl HostConfig {
    pub fn staging_dir(&self) -> PathBuf {
        self.staging_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// API credentials handed to the synthesizer at construction.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("api_key", &redact(&self.api_key)).finish()
    }
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn update(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() { "[EMPTY]" } else { "[REDACTED]" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api.url.as_str(), "https://api.openai.com/v1/chat/completions");
        assert_eq!(settings.host.python_embedding, PythonEmbedding::File);
        assert!(!settings.credentials().is_configured());
    }

    #[test]
    fn parses_full_document() {
        let settings: Settings = toml::from_str(
            r#"
api_key = "sk-test"

[api]
url = "http://localhost:8080/v1/chat/completions"
timeout_secs = 5

[host]
program = "/opt/max/3dsmaxbatch"
args = ["-mxsString", "quiet"]
python_embedding = "inline"
"#,
        )
        .unwrap();

        assert_eq!(settings.api_key, "sk-test");
        assert_eq!(settings.api.timeout_secs, 5);
        assert_eq!(settings.host.args.len(), 2);
        assert_eq!(settings.host.python_embedding, PythonEmbedding::Inline);
        settings.validate().unwrap();
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = toml::from_str::<Settings>("key = \"legacy\"");
        assert!(result.is_err());
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let mut settings = Settings::default();
        settings.api.timeout_secs = 0;
        assert!(matches!(settings.validate(), Err(AppError::Configuration(_))));
    }

    #[test]
    fn debug_output_redacts_key() {
        let settings = Settings { api_key: "sk-secret".into(), ..Settings::default() };
        let rendered = format!("{:?} {:?}", settings, settings.credentials());
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn credentials_update_in_place() {
        let mut credentials = Credentials::default();
        assert!(!credentials.is_configured());
        credentials.update("sk-new");
        assert!(credentials.is_configured());
        assert_eq!(credentials.api_key(), "sk-new");
        credentials.update("   ");
        assert!(!credentials.is_configured());
    }
}
