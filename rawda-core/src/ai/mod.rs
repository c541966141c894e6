pub mod error;
pub mod gemini;
pub mod mock;
pub mod provider;
pub mod types;

pub use error::GenerationError;
pub use gemini::GeminiGenerator;
pub use provider::StructuredGenerator;
pub use types::*;
