use super::{
    classify::{LineKind, classify_lines},
    markers::{Marker, strip_numeric_marker},
    types::ContentBlock,
};

/// Decides what a single residual item is.
///
/// Precedence, first match wins:
/// 1. an `**Answer:**` label opening a line after the first → [`ContentBlock::Qa`]
/// 2. any bold markers → [`ContentBlock::FillIn`]
/// 3. anything else → [`ContentBlock::Other`]
///
/// The answer check runs first because answers are usually bold as well.
pub fn classify_item(item: &str) -> ContentBlock {
    if let Some((question, answer)) = split_at_answer_label(item) {
        return ContentBlock::qa(strip_numeric_marker(question.trim()).trim(), answer.trim());
    }
    if item.contains(Marker::BOLD) {
        return ContentBlock::fill_in(item);
    }
    unstructured(item)
}

/// Fallback for text with no recognisable structure.
fn unstructured(item: &str) -> ContentBlock {
    ContentBlock::other(item)
}

/// Splits at the first line (after the first) that opens with `**Answer:**`.
fn split_at_answer_label(item: &str) -> Option<(&str, &str)> {
    let label = classify_lines(item)
        .skip(1)
        .find(|lc| lc.kind == LineKind::AnswerLabel)?;
    Some((
        &item[..label.line.start],
        &item[label.line.start + label.marker_end..],
    ))
}
