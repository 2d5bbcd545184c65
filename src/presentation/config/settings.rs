use std::collections::HashMap;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::infrastructure::llm::DEFAULT_OPENAI_BASE_URL;
use crate::infrastructure::observability::DEFAULT_LOG_FILTER;
use crate::infrastructure::storage::DEFAULT_SMARTSHEET_BASE_URL;

/// Plain environment variables honoured on top of the `APP__*` layout.
const LEGACY_OVERRIDES: &[(&str, &str)] = &[
    ("SMARTSHEET_API_KEY", "storage.api_key"),
    ("OPENAI_API_KEY", "llm.api_key"),
    ("INTERNAL_SECRET_CODE", "access.secret"),
    ("PORT", "server.port"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub llm: LlmSettings,
    pub access: AccessSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub base_url: String,
    pub api_key: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl StorageSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub base_url: String,
    pub api_key: String,
    pub chat_model: String,
    pub request_timeout_secs: u64,
}

impl LlmSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Clone, Deserialize)]
pub struct AccessSettings {
    pub secret: String,
}

impl std::fmt::Debug for AccessSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessSettings")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("missing required setting: {0}")]
    Missing(&'static str),
}

impl Settings {
    /// Reads `appsettings.<env>`, `APP__SECTION__KEY` variables and the legacy
    /// variable names from the process environment.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        Self::load_from(environment, std::env::vars().collect())
    }

    pub fn load_from(
        environment: Environment,
        vars: HashMap<String, String>,
    ) -> Result<Self, SettingsError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("storage.base_url", DEFAULT_SMARTSHEET_BASE_URL)?
            .set_default("storage.api_key", "")?
            .set_default("storage.connect_timeout_secs", 10_i64)?
            .set_default("storage.request_timeout_secs", 120_i64)?
            .set_default("llm.base_url", DEFAULT_OPENAI_BASE_URL)?
            .set_default("llm.api_key", "")?
            .set_default("llm.chat_model", "gpt-4")?
            .set_default("llm.request_timeout_secs", 120_i64)?
            .set_default("access.secret", "")?
            .set_default("logging.level", DEFAULT_LOG_FILTER)?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file_stem()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone().into_iter().collect())),
            );

        for (variable, key) in LEGACY_OVERRIDES {
            builder = builder.set_override_option(*key, vars.get(*variable).cloned())?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.access.secret.is_empty() {
            return Err(SettingsError::Missing("access.secret (INTERNAL_SECRET_CODE)"));
        }
        if self.storage.api_key.is_empty() {
            return Err(SettingsError::Missing("storage.api_key (SMARTSHEET_API_KEY)"));
        }
        if self.llm.api_key.is_empty() {
            return Err(SettingsError::Missing("llm.api_key (OPENAI_API_KEY)"));
        }
        Ok(())
    }
}
