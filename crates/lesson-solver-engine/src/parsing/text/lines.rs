use super::span::Span;

/// A single line of the input together with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line (includes the newline if present).
    pub span: Span,
    /// The raw line text, newline included.
    pub text: &'a str,
}

impl<'a> LineRef<'a> {
    /// The line text without its trailing `\n` / `\r\n`.
    pub fn content(&self) -> &'a str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Newlines stay attached to the line they terminate so that consecutive spans
/// tile the input exactly.
pub fn lines_with_spans(s: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    s.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span::new(start, offset),
            text: line,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_tile_the_input() {
        let s = "one\ntwo\r\n\nthree";
        let lines: Vec<_> = lines_with_spans(s).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].span, Span::new(0, 4));
        assert_eq!(lines[1].content(), "two");
        assert_eq!(lines[2].content(), "");
        assert_eq!(lines[3].span, Span::new(10, 15));
        assert_eq!(lines[3].span.end, s.len());
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(lines_with_spans("").count(), 0);
    }
}
