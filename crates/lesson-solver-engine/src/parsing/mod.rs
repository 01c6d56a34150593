//! # Response Parsing
//!
//! Turns the markdown a model returns for a set of lesson pages into an ordered
//! list of [`ContentBlock`]s. The model is asked for a fixed layout but follows
//! it only loosely, so every stage degrades instead of failing.
//!
//! ## Stages
//!
//! 1. **Line tokenizing** (`classify`): each line gets a [`classify::LineKind`]
//!    from local facts only (rule, heading, numbered question, answer label...)
//! 2. **Exercise splitting** (`exercises`): horizontal rules delimit exercises,
//!    each with an optional leading `## heading`
//! 3. **Pair extraction** (`pairs`): strict `**Question:** / **Answer:**` pairs
//! 4. **Residual splitting** (`residual`): leftover text becomes one table or a
//!    run of numbered items
//! 5. **Item classification** (`items`): Q&A, fill-in or other
//!
//! [`parse_solution`] assembles the results in reading order.
//!
//! ## Key Invariants
//!
//! - Parsing never fails and is deterministic
//! - Block order follows the source; nothing is dropped or duplicated
//! - Block text is a trimmed slice of the source

pub mod classify;
pub mod exercises;
pub mod items;
pub mod markers;
pub mod pairs;
pub mod residual;
pub mod snapshot;
pub mod text;
pub mod types;

#[cfg(test)]
mod tests;

pub use exercises::{Exercise, split_exercises};
pub use items::classify_item;
pub use pairs::{Segment, extract_pairs};
pub use residual::split_residual;
pub use types::ContentBlock;

/// Parses a raw model response into content blocks.
pub fn parse_solution(raw: &str) -> Vec<ContentBlock> {
    let mut out = vec![];

    for exercise in split_exercises(raw) {
        if let Some(heading) = exercise.heading {
            out.push(ContentBlock::heading(heading));
        }
        for segment in extract_pairs(exercise.body) {
            match segment {
                Segment::Pair { question, answer } => out.push(ContentBlock::qa(question, answer)),
                Segment::Residual(text) => out.extend(split_residual(text)),
            }
        }
    }

    out
}
