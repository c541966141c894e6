pub mod config;
pub mod manager;

pub use config::{ProviderSettings, Settings, VoiceSettings};
pub use manager::SettingsManager;
