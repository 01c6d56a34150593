use crate::parsing::{ContentBlock, parse_solution};
use crate::render::{NumberedBlock, number_blocks};

/// A model response together with the blocks parsed from it.
///
/// Built once per response; a new response means a new `Solution`, never an
/// update of an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    raw: String,
    blocks: Vec<ContentBlock>,
}

impl Solution {
    /// Parse a raw response into a solution
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let blocks = parse_solution(&raw);
        log::debug!(
            "Parsed {} bytes of response into {} blocks ({} questions)",
            raw.len(),
            blocks.len(),
            blocks.iter().filter(|b| b.is_qa()).count()
        );
        Self { raw, blocks }
    }

    /// The response exactly as the model returned it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Blocks with their per-exercise question numbers
    pub fn numbered(&self) -> Vec<NumberedBlock<'_>> {
        number_blocks(&self.blocks)
    }

    pub fn question_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_qa()).count()
    }

    pub fn exercise_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_heading()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_questions_and_exercises() {
        let solution = Solution::from_raw(
            "## A\n1. **Question:** x? **Answer:** y\n---\n## B\n1. Plain **bold** item",
        );
        assert_eq!(solution.exercise_count(), 2);
        assert_eq!(solution.question_count(), 1);
        assert_eq!(solution.blocks().len(), 4);
        assert!(!solution.is_empty());
    }

    #[test]
    fn keeps_raw_text_untouched() {
        let raw = "  \n## Title\n\n";
        let solution = Solution::from_raw(raw);
        assert_eq!(solution.raw(), raw);
        assert_eq!(solution.blocks(), &[ContentBlock::heading("Title")]);
    }

    #[test]
    fn whitespace_response_is_empty() {
        assert!(Solution::from_raw(" \n\t").is_empty());
    }

    #[test]
    fn numbered_view_matches_blocks() {
        let solution = Solution::from_raw("1. **Question:** a? **Answer:** b");
        let numbered = solution.numbered();
        assert_eq!(numbered.len(), 1);
        assert_eq!(numbered[0].number, Some(1));
    }
}
