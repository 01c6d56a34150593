use crate::parsing::ContentBlock;

/// A block paired with its display number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedBlock<'a> {
    pub block: &'a ContentBlock,
    /// Position of a question within its exercise, starting at 1. `None` for
    /// everything that is not a question.
    pub number: Option<u32>,
}

/// Assigns question numbers, restarting after every heading.
pub fn number_blocks(blocks: &[ContentBlock]) -> Vec<NumberedBlock<'_>> {
    blocks
        .iter()
        .scan(0u32, |counter, block| {
            let number = next_number(counter, block);
            Some(NumberedBlock { block, number })
        })
        .collect()
}

/// Advances the per-exercise question counter past `block`.
pub fn next_number(counter: &mut u32, block: &ContentBlock) -> Option<u32> {
    match block {
        ContentBlock::Heading { .. } => {
            *counter = 0;
            None
        }
        ContentBlock::Qa { .. } => {
            *counter += 1;
            Some(*counter)
        }
        ContentBlock::FillIn { .. } | ContentBlock::Table { .. } | ContentBlock::Other { .. } => {
            None
        }
    }
}
