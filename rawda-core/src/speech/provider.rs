use crate::speech::error::SynthesisError;
use crate::speech::types::MediaPayload;

/// Trait for speech synthesis providers
///
/// One call produces audio for exactly one text in one prebuilt voice; the
/// caller decides which voice speaks which language.
#[async_trait::async_trait]
pub trait SpeechGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate_speech(
        &self,
        text: &str,
        voice: &str,
    ) -> Result<MediaPayload, SynthesisError>;
}
