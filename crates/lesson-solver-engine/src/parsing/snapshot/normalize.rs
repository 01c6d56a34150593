use std::fmt;

use serde::Serialize;

use crate::{parsing::ContentBlock, render::number_blocks};

const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub kind: String,
    pub number: Option<u32>,
    pub text: String,
    pub answer: Option<String>,
}

pub fn normalize(blocks: &[ContentBlock]) -> Snap {
    let blocks = number_blocks(blocks)
        .into_iter()
        .map(|nb| {
            let (text, answer) = match nb.block {
                ContentBlock::Qa { question, answer } => {
                    (preview(question), Some(preview(answer)))
                }
                ContentBlock::Heading { text }
                | ContentBlock::FillIn { text }
                | ContentBlock::Table { text }
                | ContentBlock::Other { text } => (preview(text), None),
            };
            BlockSnap {
                kind: nb.block.kind_name().to_string(),
                number: nb.number,
                text,
                answer,
            }
        })
        .collect();

    Snap { blocks }
}

/// Truncates to [`PREVIEW_CHARS`] characters with a "..." suffix.
fn preview(s: &str) -> String {
    let mut out: String = s.chars().take(PREVIEW_CHARS).collect();
    if s.chars().count() > PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.blocks {
            write!(f, "{}", b.kind)?;
            if let Some(n) = b.number {
                write!(f, " #{n}")?;
            }
            write!(f, " {:?}", b.text)?;
            if let Some(answer) = &b.answer {
                write!(f, " -> {answer:?}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
