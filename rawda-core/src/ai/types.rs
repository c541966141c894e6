/// A single generation call: one prompt, one required output shape.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub schema: OutputSchema,
}

/// The two named string fields every tool asks the model to fill.
///
/// Field order is fixed: Arabic first, French second. The names and
/// descriptions vary per tool (e.g. `lessonPlanArabic` vs `storyArabic`)
/// and are fed to the provider as a response schema.
#[derive(Debug, Clone)]
pub struct OutputSchema {
    pub fields: [FieldSpec; 2],
}

impl OutputSchema {
    pub fn bilingual(arabic: FieldSpec, french: FieldSpec) -> Self {
        Self {
            fields: [arabic, french],
        }
    }

    pub fn arabic_field(&self) -> &FieldSpec {
        &self.fields[0]
    }

    pub fn french_field(&self) -> &FieldSpec {
        &self.fields[1]
    }
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
}

impl FieldSpec {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// Parallel Arabic/French content extracted from one model response.
#[derive(Debug, Clone, PartialEq)]
pub struct BilingualFields {
    pub arabic: String,
    pub french: String,
}
