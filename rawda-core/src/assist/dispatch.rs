//! Routes a tool request through prompt construction, generation, and,
//! for songs, concurrent dual-language speech synthesis.

use std::sync::Arc;

use anyhow::Context;
use tracing::{error, warn};

use crate::ai::gemini::{GeminiConfig, GeminiGenerator};
use crate::ai::{BilingualFields, StructuredGenerator};
use crate::assist::messages;
use crate::assist::result::{BilingualResult, ToolRequest};
use crate::catalog::{resolve_tool, ToolKind};
use crate::prompt::build_request;
use crate::settings::Settings;
use crate::speech::gemini::{GeminiSpeech, GeminiSpeechConfig};
use crate::speech::{synthesize, SpeechGenerator};

/// Which prebuilt voice speaks which language.
#[derive(Debug, Clone)]
pub struct VoiceAssignment {
    pub arabic: String,
    pub french: String,
}

impl Default for VoiceAssignment {
    fn default() -> Self {
        Self {
            arabic: "Algenib".to_string(),
            french: "Odeya".to_string(),
        }
    }
}

/// Stateless per-request orchestrator. Failures never escape `dispatch`
/// as `Err`; the returned result carries the user-facing message.
pub struct Assistant {
    generator: Arc<dyn StructuredGenerator>,
    speech: Arc<dyn SpeechGenerator>,
    voices: VoiceAssignment,
}

impl Assistant {
    pub fn new(generator: Arc<dyn StructuredGenerator>, speech: Arc<dyn SpeechGenerator>) -> Self {
        Self::with_voices(generator, speech, VoiceAssignment::default())
    }

    pub fn with_voices(
        generator: Arc<dyn StructuredGenerator>,
        speech: Arc<dyn SpeechGenerator>,
        voices: VoiceAssignment,
    ) -> Self {
        Self {
            generator,
            speech,
            voices,
        }
    }

    /// Wire up the live Gemini providers from settings.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let api_key = settings
            .resolved_api_key()
            .context("No API key configured: set GEMINI_API_KEY or provider.api_key in settings")?;

        let mut generator_config = GeminiConfig::new(api_key.clone());
        generator_config.model = settings.provider.text_model.clone();
        let mut speech_config = GeminiSpeechConfig::new(api_key);
        speech_config.model = settings.provider.tts_model.clone();

        Ok(Self::with_voices(
            Arc::new(GeminiGenerator::new(generator_config)),
            Arc::new(GeminiSpeech::new(speech_config)),
            VoiceAssignment {
                arabic: settings.voices.arabic.clone(),
                french: settings.voices.french.clone(),
            },
        ))
    }

    pub async fn dispatch(&self, request: &ToolRequest) -> BilingualResult {
        if request.user_input.trim().is_empty() {
            return BilingualResult::failure(messages::EMPTY_INPUT);
        }

        let Some(kind) = resolve_tool(&request.tool_id) else {
            warn!(tool_id = %request.tool_id, "Unknown tool identifier");
            return BilingualResult::failure(messages::UNKNOWN_TOOL);
        };

        let generation = build_request(kind, &request.user_input, request.age_level);
        let fields = match self.generator.generate(generation).await {
            Ok(fields) => fields,
            Err(e) => {
                error!(tool_id = %request.tool_id, error = ?e, "Generation failed");
                return BilingualResult::failure(messages::generation_failed(&e));
            }
        };

        match kind {
            ToolKind::Song => self.attach_song_audio(fields).await,
            _ => BilingualResult::from_fields(fields),
        }
    }

    /// Fan out one synthesis call per language and join both before
    /// assembling the result. A synthesis failure keeps the lyrics and
    /// whatever audio did come back.
    async fn attach_song_audio(&self, fields: BilingualFields) -> BilingualResult {
        let (arabic, french) = tokio::join!(
            synthesize(self.speech.as_ref(), &fields.arabic, &self.voices.arabic),
            synthesize(self.speech.as_ref(), &fields.french, &self.voices.french),
        );

        let arabic_audio = match arabic {
            Ok(uri) => Some(uri),
            Err(e) => {
                error!(voice = %self.voices.arabic, error = ?e, "Arabic synthesis failed");
                None
            }
        };
        let french_audio = match french {
            Ok(uri) => Some(uri),
            Err(e) => {
                error!(voice = %self.voices.french, error = ?e, "French synthesis failed");
                None
            }
        };

        let mut result = BilingualResult::from_fields(fields);
        if arabic_audio.is_none() || french_audio.is_none() {
            result.error = Some(messages::SONG_AUDIO_FAILED.to_string());
        }
        result.arabic_audio = arabic_audio;
        result.french_audio = french_audio;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::mock::{MockBehavior, MockGenerator};
    use crate::prompt::AgeLevel;
    use crate::speech::mock::{MockSpeech, MockSpeechBehavior};
    use rstest::rstest;

    fn assistant(generator: MockGenerator, speech: MockSpeech) -> Assistant {
        Assistant::new(Arc::new(generator), Arc::new(speech))
    }

    fn request(tool_id: &str, input: &str) -> ToolRequest {
        ToolRequest::new(tool_id, input, AgeLevel::FourYears)
    }

    #[tokio::test]
    async fn story_success_returns_both_texts() {
        let generator = MockGenerator::succeeding("قصة...", "Histoire...");
        let assistant = assistant(generator, MockSpeech::default());

        let result = assistant
            .dispatch(&request("story", "صداقة بين قطة وفأر"))
            .await;

        assert_eq!(result.arabic_text.as_deref(), Some("قصة..."));
        assert_eq!(result.french_text.as_deref(), Some("Histoire..."));
        assert_eq!(result.error, None);
        assert_eq!(result.arabic_audio, None);
        assert_eq!(result.french_audio, None);
    }

    #[tokio::test]
    async fn generation_transport_error_nulls_both_texts() {
        let generator = MockGenerator::new(MockBehavior::AlwaysTransportError);
        let assistant = assistant(generator, MockSpeech::default());

        let result = assistant.dispatch(&request("story", "صداقة")).await;

        assert_eq!(result.arabic_text, None);
        assert_eq!(result.french_text, None);
        let error = result.error.expect("failure must carry a message");
        assert!(error.contains("عذرًا"));
    }

    #[tokio::test]
    async fn empty_input_is_rejected_before_any_provider_call() {
        let generator = MockGenerator::succeeding("نص", "texte");
        let speech = MockSpeech::default();
        let assistant = Assistant::new(Arc::new(generator.clone()), Arc::new(speech.clone()));

        let result = assistant.dispatch(&request("story", "   \n")).await;

        assert!(result.error.is_some());
        assert_eq!(generator.call_count(), 0);
        assert!(speech.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_tool_is_rejected_before_any_provider_call() {
        let generator = MockGenerator::succeeding("نص", "texte");
        let assistant = Assistant::new(Arc::new(generator.clone()), Arc::new(MockSpeech::default()));

        let result = assistant.dispatch(&request("weather", "الطقس")).await;

        assert_eq!(result.error.as_deref(), Some(messages::UNKNOWN_TOOL));
        assert_eq!(generator.call_count(), 0);
    }

    #[rstest]
    #[case("lesson")]
    #[case("objectives")]
    #[case("unit")]
    #[tokio::test]
    async fn planning_aliases_share_the_lesson_pipeline(#[case] tool_id: &str) {
        let generator = MockGenerator::default();
        let assistant = Assistant::new(Arc::new(generator.clone()), Arc::new(MockSpeech::default()));

        assistant.dispatch(&request(tool_id, "الفضاء")).await;

        let captured = generator.last_captured_request().unwrap();
        assert_eq!(captured.schema.arabic_field().name, "lessonPlanArabic");
        assert!(captured.prompt.contains("expert teacher"));
    }

    #[tokio::test]
    async fn song_success_attaches_audio_for_both_languages() {
        let generator = MockGenerator::succeeding("كلمات", "paroles");
        let speech = MockSpeech::default();
        let assistant = Assistant::new(Arc::new(generator), Arc::new(speech.clone()));

        let result = assistant.dispatch(&request("song", "الألوان")).await;

        assert_eq!(result.error, None);
        assert!(result
            .arabic_audio
            .as_deref()
            .unwrap()
            .starts_with("data:audio/wav;base64,"));
        assert!(result
            .french_audio
            .as_deref()
            .unwrap()
            .starts_with("data:audio/wav;base64,"));

        let calls = speech.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.contains(&("كلمات".to_string(), "Algenib".to_string())));
        assert!(calls.contains(&("paroles".to_string(), "Odeya".to_string())));
    }

    #[tokio::test]
    async fn song_keeps_lyrics_when_all_synthesis_fails() {
        let generator = MockGenerator::succeeding("كلمات", "paroles");
        let speech = MockSpeech::new(MockSpeechBehavior::AlwaysNoAudio);
        let assistant = assistant(generator, speech);

        let result = assistant.dispatch(&request("song", "الألوان")).await;

        assert_eq!(result.arabic_text.as_deref(), Some("كلمات"));
        assert_eq!(result.french_text.as_deref(), Some("paroles"));
        assert_eq!(result.arabic_audio, None);
        assert_eq!(result.french_audio, None);
        assert_eq!(result.error.as_deref(), Some(messages::SONG_AUDIO_FAILED));
    }

    #[tokio::test]
    async fn song_partial_failure_keeps_the_succeeding_audio() {
        let generator = MockGenerator::succeeding("كلمات", "paroles");
        let speech = MockSpeech::default();
        speech.fail_voice("Odeya");
        let assistant = assistant(generator, speech);

        let result = assistant.dispatch(&request("song", "الألوان")).await;

        assert_eq!(result.arabic_text.as_deref(), Some("كلمات"));
        assert_eq!(result.french_text.as_deref(), Some("paroles"));
        assert!(result.arabic_audio.is_some());
        assert_eq!(result.french_audio, None);
        assert_eq!(result.error.as_deref(), Some(messages::SONG_AUDIO_FAILED));
    }

    #[tokio::test]
    async fn non_audio_tools_never_reach_the_speech_provider() {
        let generator = MockGenerator::default();
        let speech = MockSpeech::default();
        let assistant = Assistant::new(Arc::new(generator), Arc::new(speech.clone()));

        for tool_id in ["lesson", "flashcard", "summary", "communication", "support"] {
            assistant.dispatch(&request(tool_id, "موضوع")).await;
        }

        assert!(speech.calls().is_empty());
    }
}
