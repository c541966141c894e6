use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::speech::error::SynthesisError;
use crate::speech::provider::SpeechGenerator;
use crate::speech::types::MediaPayload;

/// Mock behavior for the mock speech generator
#[derive(Debug, Clone, Default)]
pub enum MockSpeechBehavior {
    /// Return a small fixed PCM payload
    #[default]
    Success,
    /// Return a response with no usable media reference
    AlwaysNoAudio,
    /// Return a transport failure
    AlwaysTransportError,
}

/// Mock speech generator for testing the song fan-out
#[derive(Clone, Default)]
pub struct MockSpeech {
    behavior: Arc<Mutex<MockSpeechBehavior>>,
    failing_voices: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockSpeech {
    pub fn new(behavior: MockSpeechBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            ..Self::default()
        }
    }

    /// Make synthesis fail for one voice while others keep succeeding.
    pub fn fail_voice(&self, voice: impl Into<String>) {
        self.failing_voices.lock().unwrap().insert(voice.into());
    }

    /// Calls seen so far as (text, voice) pairs.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn fixture_payload() -> MediaPayload {
        let pcm = [0u8, 1, 2, 3, 4, 5, 6, 7];
        MediaPayload {
            data_uri: format!(
                "data:audio/L16;codec=pcm;rate=24000;base64,{}",
                STANDARD.encode(pcm)
            ),
        }
    }
}

#[async_trait::async_trait]
impl SpeechGenerator for MockSpeech {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate_speech(
        &self,
        text: &str,
        voice: &str,
    ) -> Result<MediaPayload, SynthesisError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), voice.to_string()));

        if self.failing_voices.lock().unwrap().contains(voice) {
            return Err(SynthesisError::NoAudio);
        }

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            MockSpeechBehavior::Success => Ok(Self::fixture_payload()),
            MockSpeechBehavior::AlwaysNoAudio => Err(SynthesisError::NoAudio),
            MockSpeechBehavior::AlwaysTransportError => Err(SynthesisError::Transport(
                anyhow::anyhow!("Mock transport error"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn per_voice_failure_leaves_other_voices_working() {
        let speech = MockSpeech::default();
        speech.fail_voice("Odeya");

        assert!(speech.generate_speech("كلمات", "Algenib").await.is_ok());
        assert!(matches!(
            speech.generate_speech("paroles", "Odeya").await,
            Err(SynthesisError::NoAudio)
        ));
        assert_eq!(speech.calls().len(), 2);
    }
}
