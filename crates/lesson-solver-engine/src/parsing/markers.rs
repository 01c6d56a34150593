use super::text::Cursor;

/// The literal markers the model is asked to produce.
pub struct Marker;

impl Marker {
    pub const QUESTION: &'static str = "**Question:**";
    pub const ANSWER: &'static str = "**Answer:**";
    pub const BOLD: &'static str = "**";
    pub const HEADING: &'static str = "##";
}

/// Length of a leading `<digits>.` marker, if `s` starts with one.
///
/// Only ASCII digits count; whatever follows the period is not inspected.
pub fn numeric_marker_len(s: &str) -> Option<usize> {
    let mut cur = Cursor::new(s);
    if cur.eat_while(|b| b.is_ascii_digit()) == 0 {
        return None;
    }
    cur.eat(b'.').then(|| cur.pos())
}

/// Strips a leading `<digits>.` marker and the whitespace after it.
///
/// Text without a marker is returned unchanged.
pub fn strip_numeric_marker(s: &str) -> &str {
    let Some(len) = numeric_marker_len(s) else {
        return s;
    };
    let mut cur = Cursor::new(&s[len..]);
    cur.eat_while(|b| b.is_ascii_whitespace());
    cur.rest()
}

/// Text of a level-2 heading line (`## Title`), trimmed.
///
/// Deeper headings (`### Title`) are not exercise headings and return `None`.
pub fn heading_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(Marker::HEADING)?;
    if rest.starts_with('#') {
        return None;
    }
    Some(rest.trim())
}
