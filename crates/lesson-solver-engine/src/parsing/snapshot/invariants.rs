use crate::parsing::ContentBlock;

/// Asserts that every block's text occurs in `raw`, in block order.
///
/// Each piece is searched for after the end of the previous one, so a
/// reordered, duplicated or fabricated block fails the check.
pub fn check(raw: &str, blocks: &[ContentBlock]) {
    let mut pos = 0usize;
    for (i, b) in blocks.iter().enumerate() {
        let pieces: Vec<&str> = match b {
            ContentBlock::Qa { question, answer } => vec![question.as_str(), answer.as_str()],
            ContentBlock::Heading { text }
            | ContentBlock::FillIn { text }
            | ContentBlock::Table { text }
            | ContentBlock::Other { text } => vec![text.as_str()],
        };
        for piece in pieces {
            assert_eq!(
                piece,
                piece.trim(),
                "block {i} ({}) has untrimmed text: {piece:?}",
                b.kind_name()
            );
            let found = raw[pos..].find(piece).unwrap_or_else(|| {
                panic!(
                    "block {i} ({}) text not found in source after byte {pos}: {piece:?}",
                    b.kind_name()
                )
            });
            pos += found + piece.len();
        }
    }
}
