use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub voices: VoiceSettings,
}

/// Gemini connection settings. The API key may live in the settings file
/// or in the `GEMINI_API_KEY` environment variable; the variable wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_tts_model")]
    pub tts_model: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            text_model: default_text_model(),
            tts_model: default_tts_model(),
        }
    }
}

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_tts_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

/// Prebuilt voice names, one per output language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceSettings {
    #[serde(default = "default_arabic_voice")]
    pub arabic: String,
    #[serde(default = "default_french_voice")]
    pub french: String,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            arabic: default_arabic_voice(),
            french: default_french_voice(),
        }
    }
}

fn default_arabic_voice() -> String {
    "Algenib".to_string()
}

fn default_french_voice() -> String {
    "Odeya".to_string()
}

impl Settings {
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.provider.api_key.clone())
    }
}
