//! Speech synthesis: provider boundary plus PCM repackaging
//!
//! A provider call yields a media data URI whose payload is base64 raw PCM
//! (16-bit mono, 24 kHz). [`synthesize`] drives one call for one language
//! and returns a playable `data:audio/wav;base64,...` URI.

pub mod error;
pub mod gemini;
pub mod mock;
pub mod provider;
pub mod types;

pub use error::SynthesisError;
pub use gemini::GeminiSpeech;
pub use provider::SpeechGenerator;
pub use types::{AudioData, MediaPayload};

use anyhow::anyhow;

use crate::audio::wav_data_uri;

/// Synthesize `text` with the given prebuilt voice and return a WAV data URI.
pub async fn synthesize(
    generator: &dyn SpeechGenerator,
    text: &str,
    voice: &str,
) -> Result<String, SynthesisError> {
    let payload = generator.generate_speech(text, voice).await?;
    let audio = decode_media_payload(&payload)?;
    let uri = wav_data_uri(
        &audio.pcm,
        audio.channels,
        audio.sample_rate,
        audio.bits_per_sample,
    )?;
    Ok(uri)
}

/// Extract the base64 payload after the data-URI comma and decode it.
pub fn decode_media_payload(payload: &MediaPayload) -> Result<AudioData, SynthesisError> {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    let (_, encoded) = payload
        .data_uri
        .split_once(',')
        .ok_or_else(|| SynthesisError::InvalidPayload(anyhow!("media reference is not a data URI")))?;

    let pcm = STANDARD.decode(encoded)?;
    Ok(AudioData::speech_pcm(pcm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    #[test]
    fn decodes_payload_after_comma() {
        let pcm = vec![1u8, 2, 3, 4];
        let payload = MediaPayload {
            data_uri: format!("data:audio/L16;rate=24000;base64,{}", STANDARD.encode(&pcm)),
        };

        let audio = decode_media_payload(&payload).unwrap();
        assert_eq!(audio.pcm, pcm);
        assert_eq!(audio.sample_rate, 24000);
        assert_eq!(audio.channels, 1);
        assert_eq!(audio.bits_per_sample, 16);
    }

    #[test]
    fn rejects_reference_without_comma() {
        let payload = MediaPayload {
            data_uri: "data:audio/L16".to_string(),
        };
        let err = decode_media_payload(&payload).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidPayload(_)));
    }

    #[test]
    fn rejects_malformed_base64() {
        let payload = MediaPayload {
            data_uri: "data:audio/L16;base64,!!!not-base64!!!".to_string(),
        };
        let err = decode_media_payload(&payload).unwrap_err();
        assert!(matches!(err, SynthesisError::InvalidPayload(_)));
    }

    #[tokio::test]
    async fn synthesize_returns_wav_data_uri() {
        let speech = mock::MockSpeech::default();
        let uri = synthesize(&speech, "كلمات", "Algenib").await.unwrap();
        assert!(uri.starts_with("data:audio/wav;base64,"));
    }
}
