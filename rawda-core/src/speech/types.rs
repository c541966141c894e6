/// Media reference returned by a speech model: a
/// `data:<mime>;base64,<payload>` URI whose payload is raw PCM.
#[derive(Debug, Clone)]
pub struct MediaPayload {
    pub data_uri: String,
}

/// Decoded audio from one synthesis call
#[derive(Debug, Clone)]
pub struct AudioData {
    pub pcm: Vec<u8>,
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl AudioData {
    /// The fixed format the speech provider emits: 16-bit mono at 24 kHz.
    pub fn speech_pcm(pcm: Vec<u8>) -> Self {
        Self {
            pcm,
            sample_rate: 24000,
            channels: 1,
            bits_per_sample: 16,
        }
    }
}
