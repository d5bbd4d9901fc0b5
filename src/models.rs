use ratatui::style::Color;
use ratatui::text::Line;
use serde::Deserialize;

/// One chemical element. The full table is embedded in the binary and
/// deserialized once at startup; records are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Element {
    pub z: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f64,
    pub category: Category,
    /// `None` exactly for f-block elements (lanthanides/actinides).
    pub group: Option<u8>,
    pub period: u8,
    pub block: Block,
    pub phase: Phase,
    pub density: Option<f64>,
    pub melting_point: Option<f64>,
    pub boiling_point: Option<f64>,
    pub electron_configuration: String,
    pub oxidation_states: Vec<i8>,
    pub discovered_by: Option<String>,
    pub year_discovered: Option<i32>,
    pub uses: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    #[serde(rename = "alkali metal")]
    AlkaliMetal,
    #[serde(rename = "alkaline earth metal")]
    AlkalineEarthMetal,
    #[serde(rename = "transition metal")]
    TransitionMetal,
    #[serde(rename = "post-transition metal")]
    PostTransitionMetal,
    #[serde(rename = "metalloid")]
    Metalloid,
    #[serde(rename = "nonmetal")]
    Nonmetal,
    #[serde(rename = "halogen")]
    Halogen,
    #[serde(rename = "noble gas")]
    NobleGas,
    #[serde(rename = "lanthanide")]
    Lanthanide,
    #[serde(rename = "actinide")]
    Actinide,
    #[serde(rename = "unknown")]
    Unknown,
}

pub const ALL_CATEGORIES: [Category; 11] = [
    Category::AlkaliMetal,
    Category::AlkalineEarthMetal,
    Category::TransitionMetal,
    Category::PostTransitionMetal,
    Category::Metalloid,
    Category::Nonmetal,
    Category::Halogen,
    Category::NobleGas,
    Category::Lanthanide,
    Category::Actinide,
    Category::Unknown,
];

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::AlkaliMetal => "alkali metal",
            Category::AlkalineEarthMetal => "alkaline earth metal",
            Category::TransitionMetal => "transition metal",
            Category::PostTransitionMetal => "post-transition metal",
            Category::Metalloid => "metalloid",
            Category::Nonmetal => "nonmetal",
            Category::Halogen => "halogen",
            Category::NobleGas => "noble gas",
            Category::Lanthanide => "lanthanide",
            Category::Actinide => "actinide",
            Category::Unknown => "unknown",
        }
    }

    /// The one category→color table shared by the grid and trends views.
    pub fn color(&self) -> Color {
        match self {
            Category::AlkaliMetal => Color::Rgb(0xef, 0x44, 0x44),
            Category::AlkalineEarthMetal => Color::Rgb(0xf9, 0x73, 0x16),
            Category::TransitionMetal => Color::Rgb(0xea, 0xb3, 0x08),
            Category::PostTransitionMetal => Color::Rgb(0x84, 0xcc, 0x16),
            Category::Metalloid => Color::Rgb(0x10, 0xb9, 0x81),
            Category::Nonmetal => Color::Rgb(0x06, 0xb6, 0xd4),
            Category::Halogen => Color::Rgb(0x3b, 0x82, 0xf6),
            Category::NobleGas => Color::Rgb(0x8b, 0x5c, 0xf6),
            Category::Lanthanide => Color::Rgb(0xd9, 0x46, 0xef),
            Category::Actinide => Color::Rgb(0xf4, 0x3f, 0x5e),
            Category::Unknown => Color::Rgb(0x94, 0xa3, 0xb8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Block {
    #[serde(rename = "s")]
    S,
    #[serde(rename = "p")]
    P,
    #[serde(rename = "d")]
    D,
    #[serde(rename = "f")]
    F,
}

impl Block {
    pub fn label(&self) -> &'static str {
        match self {
            Block::S => "s",
            Block::P => "p",
            Block::D => "d",
            Block::F => "f",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
    Unknown,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Solid => "Solid",
            Phase::Liquid => "Liquid",
            Phase::Gas => "Gas",
            Phase::Unknown => "Unknown",
        }
    }
}

/// What a quiz question asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    SymbolToName,
    NameToSymbol,
    AtomicNumber,
}

pub const QUESTION_KINDS: [QuestionKind; 3] = [
    QuestionKind::SymbolToName,
    QuestionKind::NameToSymbol,
    QuestionKind::AtomicNumber,
];

#[derive(Debug, Clone)]
pub struct QuizQuestion<'a> {
    pub kind: QuestionKind,
    pub target: &'a Element,
    /// Four distinct elements including the target, already shuffled.
    pub options: Vec<&'a Element>,
    /// Display string of the target's relevant attribute for this kind.
    pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Menu,
    Playing,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Chat panel state, scoped to one element detail view and discarded on close.
#[derive(Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub is_loading: bool,
    pub scroll_y: u16,
    pub max_scroll: u16,
    pub rendered_lines_cache: Vec<Line<'static>>,
    pub cached_message_count: usize,
}

impl ChatState {
    pub fn for_element(element_name: &str) -> Self {
        ChatState {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                content: format!(
                    "Hello! I'm your AI lab assistant. Ask me anything about **{}**!",
                    element_name
                ),
            }],
            ..ChatState::default()
        }
    }
}

#[derive(Debug)]
pub enum AiRequest {
    Ask {
        element_z: u32,
        element_name: String,
        question: String,
    },
}

#[derive(Debug)]
pub enum AiResponse {
    Reply { element_z: u32, text: String },
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Landing,
    Explorer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    Trends,
    Quiz,
}

impl ViewMode {
    pub fn next(&self) -> ViewMode {
        match self {
            ViewMode::Table => ViewMode::Trends,
            ViewMode::Trends => ViewMode::Quiz,
            ViewMode::Quiz => ViewMode::Table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_cycle() {
        let mut mode = ViewMode::Table;
        mode = mode.next();
        assert_eq!(mode, ViewMode::Trends);
        mode = mode.next();
        assert_eq!(mode, ViewMode::Quiz);
        mode = mode.next();
        assert_eq!(mode, ViewMode::Table);
    }

    #[test]
    fn test_chat_state_greeting_names_element() {
        let chat = ChatState::for_element("Helium");
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].role, ChatRole::Assistant);
        assert!(chat.messages[0].content.contains("Helium"));
        assert!(!chat.is_loading);
    }

    #[test]
    fn test_category_colors_are_distinct() {
        for (i, a) in ALL_CATEGORIES.iter().enumerate() {
            for b in &ALL_CATEGORIES[i + 1..] {
                assert_ne!(a.color(), b.color(), "{} vs {}", a.label(), b.label());
            }
        }
    }
}
