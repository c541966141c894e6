//! Request dispatch and the unified result contract

pub mod dispatch;
pub mod messages;
pub mod result;

pub use dispatch::{Assistant, VoiceAssignment};
pub use result::{BilingualResult, ToolRequest};
