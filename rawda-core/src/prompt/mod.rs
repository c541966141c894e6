//! Prompt construction for each tool kind
//!
//! Every tool gets a role-setting preamble, the age-level label, the raw
//! user input verbatim, and a fixed trailing instruction demanding Arabic
//! and French output with nothing else. Construction is deterministic.

use serde::{Deserialize, Serialize};

use crate::ai::{FieldSpec, GenerationRequest, OutputSchema};
use crate::catalog::ToolKind;

/// Preschool cohort selector. Two values only; it changes prompt text,
/// never control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeLevel {
    FourYears,
    FiveYears,
}

impl AgeLevel {
    /// Parse the wire token used by callers.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "4 years" => Some(AgeLevel::FourYears),
            "5 years" => Some(AgeLevel::FiveYears),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            AgeLevel::FourYears => "4 years",
            AgeLevel::FiveYears => "5 years",
        }
    }

    /// The level label interpolated into most prompts.
    pub fn label(&self) -> &'static str {
        match self {
            AgeLevel::FourYears => "التمهيدي الأول (Moyenne Section)",
            AgeLevel::FiveYears => "التمهيدي الثاني (Grande Section)",
        }
    }

    /// Story prompts carry the age range as well.
    pub fn story_label(&self) -> &'static str {
        match self {
            AgeLevel::FourYears => "التمهيدي الأول (Moyenne Section), aged 3-4 years",
            AgeLevel::FiveYears => "التمهيدي الثاني (Grande Section), aged 5-6 years",
        }
    }
}

const BILINGUAL_INSTRUCTION: &str = "Provide the response in both Arabic and French.";

/// Build the full generation request for one tool invocation.
pub fn build_request(kind: ToolKind, user_input: &str, age: AgeLevel) -> GenerationRequest {
    GenerationRequest {
        prompt: prompt_text(kind, user_input, age),
        schema: output_schema(kind),
    }
}

pub fn prompt_text(kind: ToolKind, user_input: &str, age: AgeLevel) -> String {
    let label = age.label();
    match kind {
        ToolKind::Lesson => format!(
            "You are an expert teacher. Your task is to prepare a detailed lesson plan for children in the '{label}' level. The topic is: \"{user_input}\".\n\n{BILINGUAL_INSTRUCTION}\nProvide ONLY the plan, without any introduction or conclusion."
        ),
        ToolKind::Activity => format!(
            "You are an expert in early childhood education. Generate a list of 3-4 creative and engaging activity ideas for children based on the following topic.\n\n{BILINGUAL_INSTRUCTION}\nProvide ONLY the list of activities, without any introduction or conclusion.\n\nTopic: For children in the '{label}' level: {user_input}"
        ),
        ToolKind::Flashcard => format!(
            "You are an educational material designer. Your task is to create a list of 3-4 key words and simple concepts for making flashcards for children in the '{label}' level about the topic: \"{user_input}\".\n\n{BILINGUAL_INSTRUCTION}\nProvide ONLY the list, without any introduction or conclusion."
        ),
        ToolKind::Story => {
            let label = age.story_label();
            format!(
                "You are a talented children's story writer. Your task is to write a short, simple, and engaging story for children in the '{label}' level. The story should be very simple, with a clear moral, and suitable for the specified age. The story's theme is: \"{user_input}\".\n\n{BILINGUAL_INSTRUCTION}\nProvide ONLY the story, without any introduction or conclusion."
            )
        }
        ToolKind::Song => format!(
            "Your role is a composer and lyricist specializing in children's songs for kids in the '{label}' level. Your task is to compose a simple and fun educational song with easy-to-remember lyrics. The song's topic is: \"{user_input}\".\n\n{BILINGUAL_INSTRUCTION}\nProvide ONLY the song lyrics, without any introduction or conclusion."
        ),
        ToolKind::Summary => format!(
            "You are a helpful teacher. Based on the provided activities, create a short, informative, and positive summary for parents (3-5 sentences).\n\n{BILINGUAL_INSTRUCTION}\nProvide ONLY the summary, without any introduction or conclusion.\n\nActivities: For children in level '{label}', the activities were: {user_input}"
        ),
        ToolKind::Communication => format!(
            "You are a specialist in parent communication for a preschool/kindergarten (children in level '{label}'). Your task is to write a draft of a positive, brief, and professional message to a parent about: \"{user_input}\".\n\n{BILINGUAL_INSTRUCTION}\nProvide ONLY the message, without any introduction or conclusion."
        ),
        ToolKind::Parent => format!(
            "You are an expert in family-school partnership. Your task is to suggest 2-3 simple and fun home activities that parents can do with their children (level '{label}') to reinforce learning about the topic: \"{user_input}\".\n\n{BILINGUAL_INSTRUCTION}\nProvide ONLY the activities, without any introduction or conclusion."
        ),
        ToolKind::Support => format!(
            "You are a special education teacher. Your task is to create a simplified individual support plan for a virtual student (level '{label}') facing difficulty in a specific area. The difficulty is: \"{user_input}\". The plan should have 2-3 simple, actionable steps.\n\n{BILINGUAL_INSTRUCTION}\nProvide ONLY the plan, without any introduction or conclusion."
        ),
    }
}

pub fn output_schema(kind: ToolKind) -> OutputSchema {
    match kind {
        ToolKind::Lesson => OutputSchema::bilingual(
            FieldSpec::new("lessonPlanArabic", "The detailed lesson plan in Arabic."),
            FieldSpec::new("lessonPlanFrench", "The detailed lesson plan in French."),
        ),
        ToolKind::Activity => OutputSchema::bilingual(
            FieldSpec::new(
                "activityIdeasArabic",
                "A list of 3-4 activity ideas related to the topic, in Arabic.",
            ),
            FieldSpec::new(
                "activityIdeasFrench",
                "A list of 3-4 activity ideas related to the topic, in French.",
            ),
        ),
        ToolKind::Flashcard => OutputSchema::bilingual(
            FieldSpec::new(
                "flashcardsArabic",
                "A list of 3-4 key words and concepts for flashcards, in Arabic.",
            ),
            FieldSpec::new(
                "flashcardsFrench",
                "A list of 3-4 key words and concepts for flashcards, in French.",
            ),
        ),
        ToolKind::Story => OutputSchema::bilingual(
            FieldSpec::new("storyArabic", "The short children's story in Arabic."),
            FieldSpec::new("storyFrench", "The short children's story in French."),
        ),
        ToolKind::Song => OutputSchema::bilingual(
            FieldSpec::new("songArabic", "The song lyrics in Arabic."),
            FieldSpec::new("songFrench", "The song lyrics in French."),
        ),
        ToolKind::Summary => OutputSchema::bilingual(
            FieldSpec::new(
                "summaryArabic",
                "A concise summary of the day for parents in Arabic (3-5 sentences).",
            ),
            FieldSpec::new(
                "summaryFrench",
                "A concise summary of the day for parents in French (3-5 sentences).",
            ),
        ),
        ToolKind::Communication => OutputSchema::bilingual(
            FieldSpec::new("messageArabic", "The draft message to the parent in Arabic."),
            FieldSpec::new("messageFrench", "The draft message to the parent in French."),
        ),
        ToolKind::Parent => OutputSchema::bilingual(
            FieldSpec::new(
                "homeActivitiesArabic",
                "A list of 2-3 simple home activities, in Arabic.",
            ),
            FieldSpec::new(
                "homeActivitiesFrench",
                "A list of 2-3 simple home activities, in French.",
            ),
        ),
        ToolKind::Support => OutputSchema::bilingual(
            FieldSpec::new(
                "supportPlanArabic",
                "The simplified individual support plan in Arabic.",
            ),
            FieldSpec::new(
                "supportPlanFrench",
                "The simplified individual support plan in French.",
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[test]
    fn construction_is_deterministic() {
        let a = prompt_text(ToolKind::Lesson, "الفضاء", AgeLevel::FourYears);
        let b = prompt_text(ToolKind::Lesson, "الفضاء", AgeLevel::FourYears);
        assert_eq!(a, b);
    }

    #[rstest]
    #[case(AgeLevel::FourYears, "التمهيدي الأول (Moyenne Section)")]
    #[case(AgeLevel::FiveYears, "التمهيدي الثاني (Grande Section)")]
    fn age_label_is_substituted(#[case] age: AgeLevel, #[case] label: &str) {
        let prompt = prompt_text(ToolKind::Flashcard, "حيوانات المزرعة", age);
        assert!(prompt.contains(label));
    }

    #[test]
    fn story_prompt_carries_age_range() {
        let prompt = prompt_text(ToolKind::Story, "صداقة", AgeLevel::FiveYears);
        assert!(prompt.contains("aged 5-6 years"));
    }

    #[test]
    fn user_input_is_interpolated_verbatim() {
        let input = "a \"quoted\" topic with <tags> & newlines\n";
        let prompt = prompt_text(ToolKind::Song, input, AgeLevel::FourYears);
        assert!(prompt.contains(input));
    }

    #[test]
    fn every_prompt_demands_bilingual_output() {
        for kind in ToolKind::iter() {
            let prompt = prompt_text(kind, "topic", AgeLevel::FourYears);
            assert!(
                prompt.contains(BILINGUAL_INSTRUCTION),
                "{kind} prompt must demand both languages"
            );
        }
    }

    #[rstest]
    #[case(ToolKind::Lesson, "lessonPlanArabic", "lessonPlanFrench")]
    #[case(ToolKind::Activity, "activityIdeasArabic", "activityIdeasFrench")]
    #[case(ToolKind::Song, "songArabic", "songFrench")]
    #[case(ToolKind::Summary, "summaryArabic", "summaryFrench")]
    fn schema_field_names_match_tool(
        #[case] kind: ToolKind,
        #[case] arabic: &str,
        #[case] french: &str,
    ) {
        let schema = output_schema(kind);
        assert_eq!(schema.arabic_field().name, arabic);
        assert_eq!(schema.french_field().name, french);
    }

    #[rstest]
    #[case("4 years", Some(AgeLevel::FourYears))]
    #[case("5 years", Some(AgeLevel::FiveYears))]
    #[case("6 years", None)]
    #[case("", None)]
    fn age_token_parsing(#[case] token: &str, #[case] expected: Option<AgeLevel>) {
        assert_eq!(AgeLevel::parse(token), expected);
    }
}
