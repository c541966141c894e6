//! Audio container encoding for synthesized speech

pub mod wav;

pub use wav::{encode_wav, encode_wav_base64, wav_data_uri};
