use crate::ai::{error::GenerationError, types::*};

/// A model that can fill a two-field bilingual schema from a prompt.
///
/// One invocation is one provider call: no retries, no post-processing of
/// the returned fields. Test doubles substitute deterministic fixtures so
/// dispatch logic can be exercised without a live model.
#[async_trait::async_trait]
pub trait StructuredGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<BilingualFields, GenerationError>;
}
