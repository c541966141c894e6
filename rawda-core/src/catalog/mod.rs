//! Static tool catalog and identifier routing
//!
//! Several raw tool identifiers intentionally funnel into one canonical
//! kind (planning ids all mean "lesson", classroom ids all mean
//! "activity"). The mapping is a flat lookup table so it can be audited
//! and tested apart from dispatch.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Canonical content-generation capability behind one or more raw ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Lesson,
    Activity,
    Flashcard,
    Story,
    Song,
    Summary,
    Communication,
    Parent,
    Support,
}

/// Raw identifier → canonical kind. Many-to-one by design.
const ALIASES: &[(&str, ToolKind)] = &[
    ("lesson", ToolKind::Lesson),
    ("objectives", ToolKind::Lesson),
    ("unit", ToolKind::Lesson),
    ("activity", ToolKind::Activity),
    ("roleplay", ToolKind::Activity),
    ("questions", ToolKind::Activity),
    ("flashcard", ToolKind::Flashcard),
    ("story", ToolKind::Story),
    ("song", ToolKind::Song),
    ("summary", ToolKind::Summary),
    ("observation", ToolKind::Summary),
    ("communication", ToolKind::Communication),
    ("parent", ToolKind::Parent),
    ("support", ToolKind::Support),
];

pub fn resolve_tool(id: &str) -> Option<ToolKind> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == id)
        .map(|(_, kind)| *kind)
}

/// One selectable tool as shown to the teacher
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub id: &'static str,
    pub icon: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupColor {
    Blue,
    Green,
    Yellow,
    Purple,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolGroup {
    pub name: &'static str,
    pub color: GroupColor,
    pub tools: &'static [Tool],
}

pub fn tool_groups() -> &'static [ToolGroup] {
    GROUPS
}

const GROUPS: &[ToolGroup] = &[
    ToolGroup {
        name: "🗓️ التخطيط",
        color: GroupColor::Blue,
        tools: &[Tool {
            id: "lesson",
            icon: "📝",
            name: "التخطيط",
            desc: "خطط للدروس، الوحدات، والأهداف.",
            placeholder: "مثال: وحدة دراسية عن الفضاء والكواكب",
        }],
    },
    ToolGroup {
        name: "🎭 أنشطة الفصل",
        color: GroupColor::Green,
        tools: &[Tool {
            id: "activity",
            icon: "🤸",
            name: "أنشطة الفصل",
            desc: "أنشطة، لعب أدوار، وأسئلة.",
            placeholder: "مثال: أنشطة فنية عن فصل الخريف",
        }],
    },
    ToolGroup {
        name: "📝 بطاقات تعليمية",
        color: GroupColor::Yellow,
        tools: &[Tool {
            id: "flashcard",
            icon: "🗂️",
            name: "بطاقات تعليمية",
            desc: "أنشئ بطاقات لكلمات ومفاهيم.",
            placeholder: "مثال: بطاقات عن حيوانات المزرعة",
        }],
    },
    ToolGroup {
        name: "📖 موارد تعليمية",
        color: GroupColor::Purple,
        tools: &[
            Tool {
                id: "story",
                icon: "📚",
                name: "قصة",
                desc: "مواد قصص.",
                placeholder: "مثال: قصة عن صداقة بين قطة وفأر",
            },
            Tool {
                id: "song",
                icon: "🎵",
                name: "أنشودة",
                desc: "مواد أناشيد.",
                placeholder: "مثال: أنشودة عن الألوان",
            },
        ],
    },
    ToolGroup {
        name: "📋 ملخص اليوم والملاحظات",
        color: GroupColor::Blue,
        tools: &[Tool {
            id: "summary",
            icon: "📑",
            name: "ملخص اليوم والملاحظات",
            desc: "لخص اليوم ودون الملاحظات.",
            placeholder: "مثال: \"اليوم تعلمنا عن حرف الباء، ولعبنا في الخارج...\"",
        }],
    },
    ToolGroup {
        name: "📩 رسائل للأهل",
        color: GroupColor::Green,
        tools: &[Tool {
            id: "communication",
            icon: "📧",
            name: "رسائل للأهل",
            desc: "تواصل بفعالية مع أولياء الأمور.",
            placeholder: "مثال: إبلاغ الأهل بالرحلة القادمة إلى الحديقة",
        }],
    },
    ToolGroup {
        name: "🏡 أنشطة منزلية",
        color: GroupColor::Yellow,
        tools: &[Tool {
            id: "parent",
            icon: "🏠",
            name: "أنشطة منزلية",
            desc: "عزز التعلم في المنزل.",
            placeholder: "مثال: أنشطة منزلية لتعزيز مفهوم الألوان",
        }],
    },
    ToolGroup {
        name: "🆘 خطة دعم",
        color: GroupColor::Purple,
        tools: &[Tool {
            id: "support",
            icon: "❤️",
            name: "خطة دعم",
            desc: "ضع خطة دعم فردية.",
            placeholder: "مثال: طالب يواجه صعوبة في التعرف على الحروف",
        }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("lesson", ToolKind::Lesson)]
    #[case("objectives", ToolKind::Lesson)]
    #[case("unit", ToolKind::Lesson)]
    #[case("activity", ToolKind::Activity)]
    #[case("roleplay", ToolKind::Activity)]
    #[case("questions", ToolKind::Activity)]
    #[case("summary", ToolKind::Summary)]
    #[case("observation", ToolKind::Summary)]
    #[case("song", ToolKind::Song)]
    fn aliases_resolve_to_canonical_kind(#[case] id: &str, #[case] expected: ToolKind) {
        assert_eq!(resolve_tool(id), Some(expected));
    }

    #[test]
    fn unknown_id_does_not_resolve() {
        assert_eq!(resolve_tool("weather"), None);
        assert_eq!(resolve_tool(""), None);
    }

    #[test]
    fn every_catalog_id_resolves() {
        for group in tool_groups() {
            for tool in group.tools {
                assert!(
                    resolve_tool(tool.id).is_some(),
                    "catalog id {} must route somewhere",
                    tool.id
                );
            }
        }
    }
}
