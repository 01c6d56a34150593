//! Extraction of strictly formatted `<n>. **Question:** ... **Answer:** ...` pairs.
//!
//! A question line opens a pair only if an `**Answer:**` label follows it,
//! either later on the same line or at the start of the next non-blank line.
//! The answer then runs up to the next numbered line (another question or a
//! plain `<n>.` item) or the end of the fragment, so answers continuing on
//! unnumbered lines stay whole.
//!
//! Text the pairs do not cover is handed back as [`Segment::Residual`] at its
//! position in reading order; nothing is dropped.

use super::{
    classify::{LineClass, LineKind, classify_lines},
    markers::Marker,
    text::Span,
};

/// A piece of an exercise body, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A matched question/answer pair, both trimmed.
    Pair { question: &'a str, answer: &'a str },
    /// Text not covered by any pair, trimmed and non-empty.
    Residual(&'a str),
}

/// A successful match, as spans into the fragment.
#[derive(Debug, Clone, Copy)]
struct PairMatch {
    full: Span,
    question: Span,
    answer: Span,
}

/// Splits `body` into matched pairs and the residual text around them.
pub fn extract_pairs(body: &str) -> Vec<Segment<'_>> {
    let lines: Vec<LineClass<'_>> = classify_lines(body).collect();
    let mut out = vec![];
    let mut consumed = 0usize;

    for idx in 0..lines.len() {
        if lines[idx].kind != LineKind::NumberedQuestion || lines[idx].line.start < consumed {
            continue;
        }
        let Some(m) = match_pair(body.len(), &lines, idx) else {
            continue;
        };

        push_residual(&mut out, &body[consumed..m.full.start]);
        out.push(Segment::Pair {
            question: m.question.slice(body).trim(),
            answer: m.answer.slice(body).trim(),
        });
        consumed = m.full.end;
    }
    push_residual(&mut out, &body[consumed..]);

    out
}

fn push_residual<'a>(out: &mut Vec<Segment<'a>>, text: &'a str) {
    let text = text.trim();
    if !text.is_empty() {
        out.push(Segment::Residual(text));
    }
}

/// Tries to match a pair whose question line is `lines[idx]`.
fn match_pair(body_len: usize, lines: &[LineClass<'_>], idx: usize) -> Option<PairMatch> {
    let q_line = &lines[idx];
    let tail = q_line.after_marker();
    let tail_start = q_line.line.start + q_line.marker_end;

    let (question, answer_start, answer_line) = match tail.find(Marker::ANSWER) {
        Some(at) => (
            Span::new(tail_start, tail_start + at),
            tail_start + at + Marker::ANSWER.len(),
            idx,
        ),
        None => {
            let next = lines[idx + 1..]
                .iter()
                .position(|lc| lc.kind != LineKind::Blank)
                .map(|offset| idx + 1 + offset)?;
            let label = &lines[next];
            if label.kind != LineKind::AnswerLabel {
                return None;
            }
            (
                Span::new(tail_start, tail_start + tail.len()),
                label.line.start + label.marker_end,
                next,
            )
        }
    };

    let answer_end = lines[answer_line + 1..]
        .iter()
        .find(|lc| lc.is_numbered())
        .map_or(body_len, |lc| lc.line.start);

    Some(PairMatch {
        full: Span::new(q_line.line.start, answer_end),
        question,
        answer: Span::new(answer_start, answer_end),
    })
}
