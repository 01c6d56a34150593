use super::{
    classify::classify_lines, items::classify_item, markers::numeric_marker_len,
    types::ContentBlock,
};

/// Classifies text the pair extractor left over.
///
/// A residual that looks like a table becomes a single [`ContentBlock::Table`];
/// anything else is split into numbered items, each classified on its own.
pub fn split_residual(text: &str) -> Vec<ContentBlock> {
    let text = text.trim();
    if text.is_empty() {
        return vec![];
    }
    if looks_like_table(text) {
        return vec![ContentBlock::table(text)];
    }
    split_items(text).into_iter().map(classify_item).collect()
}

/// Pipe and hyphen present, and not a numbered list.
///
/// Heuristic: a fill-in sentence containing both characters is also taken for
/// a table.
pub fn looks_like_table(text: &str) -> bool {
    text.contains('|') && text.contains('-') && numeric_marker_len(text).is_none()
}

/// Splits `text` before every line that opens a numbered list entry.
///
/// Text ahead of the first entry is an item of its own. Items are trimmed and
/// empty ones dropped.
pub fn split_items(text: &str) -> Vec<&str> {
    let mut out = vec![];
    let mut start = 0usize;

    for lc in classify_lines(text) {
        if lc.is_numbered() && lc.line.start > start {
            push_item(&mut out, &text[start..lc.line.start]);
            start = lc.line.start;
        }
    }
    push_item(&mut out, &text[start..]);

    out
}

fn push_item<'a>(out: &mut Vec<&'a str>, item: &'a str) {
    let item = item.trim();
    if !item.is_empty() {
        out.push(item);
    }
}
