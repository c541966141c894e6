pub mod ai;
pub mod assist;
pub mod audio;
pub mod catalog;
pub mod prompt;
pub mod settings;
pub mod speech;

// Public library API - if you are embedding rawda as a library, these are
// the types meant to stay stable (but everything is public so go nuts).
pub use ai::{GenerationError, StructuredGenerator};
pub use assist::{Assistant, BilingualResult, ToolRequest, VoiceAssignment};
pub use catalog::{resolve_tool, tool_groups, ToolKind};
pub use prompt::AgeLevel;
pub use settings::{Settings, SettingsManager};
pub use speech::{SpeechGenerator, SynthesisError};
