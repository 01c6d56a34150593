use serde::Serialize;

/// One classified, renderable unit of a parsed solution.
///
/// Blocks own their text: a parse produces plain values that outlive the
/// response they came from. Headings carry no number; display numbering of
/// questions is derived by the renderer (see [`crate::render::number_blocks`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Title of an exercise group.
    Heading { text: String },
    /// A question with its full (markdown, possibly multi-line) answer.
    Qa { question: String, answer: String },
    /// A sentence whose blank is filled in with bold text, kept verbatim.
    FillIn { text: String },
    /// Markdown table source, passed through untouched.
    Table { text: String },
    /// Anything that did not match a more specific shape.
    Other { text: String },
}

impl ContentBlock {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn qa(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::Qa {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn fill_in(text: impl Into<String>) -> Self {
        Self::FillIn { text: text.into() }
    }

    pub fn table(text: impl Into<String>) -> Self {
        Self::Table { text: text.into() }
    }

    pub fn other(text: impl Into<String>) -> Self {
        Self::Other { text: text.into() }
    }

    /// Short lowercase name of the variant, used in snapshots and markup classes.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Qa { .. } => "qa",
            Self::FillIn { .. } => "fill-in",
            Self::Table { .. } => "table",
            Self::Other { .. } => "other",
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Self::Heading { .. })
    }

    pub fn is_qa(&self) -> bool {
        matches!(self, Self::Qa { .. })
    }
}
