use crate::ai::{error::GenerationError, provider::StructuredGenerator, types::*};
use std::sync::{Arc, Mutex};

/// Mock behavior for the mock generator
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return the given field values
    Success { arabic: String, french: String },
    /// Echo the requested field names back as values
    EchoFieldNames,
    /// Return a transport failure
    AlwaysTransportError,
    /// Return an empty structured result
    AlwaysEmptyResult,
}

impl Default for MockBehavior {
    fn default() -> Self {
        MockBehavior::EchoFieldNames
    }
}

/// Mock generator for testing dispatch and error merging
#[derive(Clone, Default)]
pub struct MockGenerator {
    behavior: Arc<Mutex<MockBehavior>>,
    call_count: Arc<Mutex<usize>>,
    captured_requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockGenerator {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Arc::new(Mutex::new(behavior)),
            call_count: Arc::new(Mutex::new(0)),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn succeeding(arabic: impl Into<String>, french: impl Into<String>) -> Self {
        Self::new(MockBehavior::Success {
            arabic: arabic.into(),
            french: french.into(),
        })
    }

    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn last_captured_request(&self) -> Option<GenerationRequest> {
        self.captured_requests.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl StructuredGenerator for MockGenerator {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<BilingualFields, GenerationError> {
        {
            let mut requests = self.captured_requests.lock().unwrap();
            requests.push(request.clone());
        }

        {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;
        }

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            MockBehavior::Success { arabic, french } => Ok(BilingualFields { arabic, french }),
            MockBehavior::EchoFieldNames => Ok(BilingualFields {
                arabic: request.schema.arabic_field().name.to_string(),
                french: request.schema.french_field().name.to_string(),
            }),
            MockBehavior::AlwaysTransportError => Err(GenerationError::Transport(anyhow::anyhow!(
                "Mock transport error"
            ))),
            MockBehavior::AlwaysEmptyResult => Err(GenerationError::EmptyResult),
        }
    }
}
