//! Wraps raw PCM bytes in a RIFF/WAVE container, in memory.
//!
//! The speech provider returns bare 16-bit mono PCM; browsers and audio
//! players need a container before they can play it. The payload is copied
//! verbatim into the data chunk, no resampling or validation.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use byteorder::{LittleEndian, WriteBytesExt};

/// Wrap `pcm` in a WAV container and return the complete file bytes.
///
/// Header fields are derived from the parameters: byte rate is
/// `sample_rate * channels * bits_per_sample / 8`, block align is
/// `channels * bits_per_sample / 8`, and the RIFF chunk size is
/// 36 plus the data length.
pub fn encode_wav(
    pcm: &[u8],
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
) -> std::io::Result<Vec<u8>> {
    let bytes_per_frame = channels as u32 * bits_per_sample as u32 / 8;
    let byte_rate = sample_rate * bytes_per_frame;
    let data_size = pcm.len() as u32;
    let chunk_size = 36 + data_size;

    let mut out = Vec::with_capacity(44 + pcm.len());

    // RIFF header
    out.write_all(b"RIFF")?;
    out.write_u32::<LittleEndian>(chunk_size)?;
    out.write_all(b"WAVE")?;

    // fmt subchunk
    out.write_all(b"fmt ")?;
    out.write_u32::<LittleEndian>(16)?; // Subchunk1Size for PCM
    out.write_u16::<LittleEndian>(1)?; // AudioFormat: PCM
    out.write_u16::<LittleEndian>(channels)?;
    out.write_u32::<LittleEndian>(sample_rate)?;
    out.write_u32::<LittleEndian>(byte_rate)?;
    out.write_u16::<LittleEndian>(bytes_per_frame as u16)?;
    out.write_u16::<LittleEndian>(bits_per_sample)?;

    // data subchunk
    out.write_all(b"data")?;
    out.write_u32::<LittleEndian>(data_size)?;
    out.write_all(pcm)?;

    Ok(out)
}

/// Encode PCM as a WAV file and base64 the result.
pub fn encode_wav_base64(
    pcm: &[u8],
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
) -> std::io::Result<String> {
    let wav = encode_wav(pcm, channels, sample_rate, bits_per_sample)?;
    Ok(STANDARD.encode(wav))
}

/// Encode PCM as an inline `data:audio/wav;base64,...` URI.
pub fn wav_data_uri(
    pcm: &[u8],
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
) -> std::io::Result<String> {
    let encoded = encode_wav_base64(pcm, channels, sample_rate, bits_per_sample)?;
    Ok(format!("data:audio/wav;base64,{encoded}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::ReadBytesExt;
    use std::io::Cursor;

    fn field_u32(wav: &[u8], offset: usize) -> u32 {
        let mut cursor = Cursor::new(&wav[offset..offset + 4]);
        cursor.read_u32::<LittleEndian>().unwrap()
    }

    fn field_u16(wav: &[u8], offset: usize) -> u16 {
        let mut cursor = Cursor::new(&wav[offset..offset + 2]);
        cursor.read_u16::<LittleEndian>().unwrap()
    }

    #[test]
    fn round_trips_pcm_bytes_exactly() {
        let pcm: Vec<u8> = (0..=255).collect();
        let wav = encode_wav(&pcm, 1, 24000, 16).unwrap();

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(field_u32(&wav, 4), 36 + pcm.len() as u32);
        assert_eq!(&wav[44..], pcm.as_slice());

        let reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 24000);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(reader.len() as usize, pcm.len() / 2);
    }

    #[test]
    fn empty_pcm_yields_valid_container() {
        let wav = encode_wav(&[], 1, 24000, 16).unwrap();
        assert_eq!(wav.len(), 44);
        assert_eq!(field_u32(&wav, 4), 36);
        assert_eq!(field_u32(&wav, 40), 0);

        let reader = hound::WavReader::new(Cursor::new(wav)).unwrap();
        assert_eq!(reader.len(), 0);
    }

    #[test]
    fn header_math_for_mono_24khz_16bit() {
        let pcm = [0u8; 16];
        let wav = encode_wav(&pcm, 1, 24000, 16).unwrap();

        assert_eq!(field_u32(&wav, 40), 16, "data chunk size");
        assert_eq!(field_u32(&wav, 28), 48000, "byte rate");
        assert_eq!(field_u16(&wav, 32), 2, "block align");
    }

    #[test]
    fn base64_output_decodes_to_container() {
        let pcm = [1u8, 2, 3, 4];
        let encoded = encode_wav_base64(&pcm, 1, 24000, 16).unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, encode_wav(&pcm, 1, 24000, 16).unwrap());
    }

    #[test]
    fn data_uri_carries_wav_mime() {
        let uri = wav_data_uri(&[0, 0], 1, 24000, 16).unwrap();
        assert!(uri.starts_with("data:audio/wav;base64,"));
    }
}
