use std::sync::OnceLock;

use regex::Regex;

use super::{
    markers,
    text::{LineRef, Span, lines_with_spans},
};

/// What a single line looks like, judged without any surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// A horizontal rule made of hyphens (`---`), the exercise delimiter.
    Rule,
    /// A level-2 heading (`## Title`).
    Heading,
    /// `<n>. **Question:**`
    NumberedQuestion,
    /// `<n>.` followed by whitespace.
    NumberedItem,
    /// A line opening with `**Answer:**`.
    AnswerLabel,
    Text,
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// Full byte span of this line, newline included.
    pub line: Span,
    /// Line text without its newline.
    pub content: &'a str,
    pub kind: LineKind,
    /// Offset into `content` just past the line's marker (0 if it has none).
    pub marker_end: usize,
}

impl<'a> LineClass<'a> {
    /// Text following the marker, e.g. the question after `**Question:**`.
    pub fn after_marker(&self) -> &'a str {
        &self.content[self.marker_end..]
    }

    /// Whether this line opens a numbered list entry of any kind.
    pub fn is_numbered(&self) -> bool {
        matches!(self.kind, LineKind::NumberedQuestion | LineKind::NumberedItem)
    }
}

fn rule_regex() -> &'static Regex {
    static RULE: OnceLock<Regex> = OnceLock::new();
    RULE.get_or_init(|| Regex::new(r"^[ \t]*-{3,}[ \t]*$").expect("Invalid rule regex"))
}

fn numbered_question_regex() -> &'static Regex {
    static NUMBERED_QUESTION: OnceLock<Regex> = OnceLock::new();
    NUMBERED_QUESTION.get_or_init(|| {
        Regex::new(r"^[ \t]*[0-9]+\.[ \t]*\*\*Question:\*\*").expect("Invalid question regex")
    })
}

fn numbered_item_regex() -> &'static Regex {
    static NUMBERED_ITEM: OnceLock<Regex> = OnceLock::new();
    NUMBERED_ITEM.get_or_init(|| Regex::new(r"^[ \t]*[0-9]+\.\s").expect("Invalid item regex"))
}

fn answer_label_regex() -> &'static Regex {
    static ANSWER_LABEL: OnceLock<Regex> = OnceLock::new();
    ANSWER_LABEL.get_or_init(|| {
        Regex::new(r"^[ \t]*\*\*Answer:\*\*").expect("Invalid answer regex")
    })
}

/// Classifies individual lines for the fragment parsers.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`]. Never fails: anything
    /// unrecognised is [`LineKind::Text`].
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let content = lr.content();
        let (kind, marker_end) = Self::kind_of(lr.text, content);
        LineClass {
            line: lr.span,
            content,
            kind,
            marker_end,
        }
    }

    fn kind_of(raw: &str, content: &str) -> (LineKind, usize) {
        if content.trim().is_empty() {
            return (LineKind::Blank, 0);
        }
        if rule_regex().is_match(content) {
            return (LineKind::Rule, 0);
        }
        if markers::heading_text(content).is_some() {
            return (LineKind::Heading, markers::Marker::HEADING.len());
        }
        if let Some(m) = numbered_question_regex().find(content) {
            return (LineKind::NumberedQuestion, m.end());
        }
        // Matched against the raw line so `1.` directly before the newline counts.
        if numbered_item_regex().is_match(raw) {
            let marker_end = content.find('.').map_or(0, |dot| dot + 1);
            return (LineKind::NumberedItem, marker_end);
        }
        if let Some(m) = answer_label_regex().find(content) {
            return (LineKind::AnswerLabel, m.end());
        }
        (LineKind::Text, 0)
    }
}

/// Classifies every line of `s`, in order.
pub fn classify_lines(s: &str) -> impl Iterator<Item = LineClass<'_>> + '_ {
    let classifier = LineClassifier;
    lines_with_spans(s).map(move |lr| classifier.classify(&lr))
}
