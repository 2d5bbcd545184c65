mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AccessSettings, LlmSettings, LoggingSettings, ServerSettings, Settings, SettingsError,
    StorageSettings,
};
