use super::{
    classify::{LineKind, classify_lines},
    markers,
};

/// One exercise-scoped fragment of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise<'a> {
    /// Text of the leading `## ...` line, trimmed.
    pub heading: Option<&'a str>,
    /// Everything after the heading, trimmed. May be empty.
    pub body: &'a str,
}

/// Splits a response into exercises on horizontal-rule lines.
///
/// Fragments that are empty after trimming produce nothing. Appearance order
/// is preserved.
pub fn split_exercises(raw: &str) -> Vec<Exercise<'_>> {
    let mut out = vec![];
    let mut start = 0usize;

    for lc in classify_lines(raw) {
        if lc.kind == LineKind::Rule {
            push_fragment(&mut out, &raw[start..lc.line.start]);
            start = lc.line.end;
        }
    }
    push_fragment(&mut out, &raw[start..]);

    out
}

fn push_fragment<'a>(out: &mut Vec<Exercise<'a>>, fragment: &'a str) {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return;
    }
    out.push(take_heading(fragment));
}

/// Peels a leading level-2 heading off an already-trimmed fragment.
fn take_heading(fragment: &str) -> Exercise<'_> {
    let first_line_end = fragment.find('\n').unwrap_or(fragment.len());
    let first_line = fragment[..first_line_end].trim_end_matches('\r');

    match markers::heading_text(first_line) {
        Some(heading) => Exercise {
            heading: Some(heading),
            body: fragment[first_line_end..].trim(),
        },
        None => Exercise {
            heading: None,
            body: fragment,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ex<'a>(heading: Option<&'a str>, body: &'a str) -> Exercise<'a> {
        Exercise { heading, body }
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(split_exercises("").is_empty());
        assert!(split_exercises("  \n\t\n").is_empty());
        assert!(split_exercises("---\n\n---\n").is_empty());
    }

    #[test]
    fn heading_only_fragment() {
        assert_eq!(split_exercises("## Title"), vec![ex(Some("Title"), "")]);
    }

    #[test]
    fn splits_on_rules_and_trims() {
        let raw = "## Exercise 1\n\n1. First\n\n---\n\n## Exercise 2\n2. Second\n";
        assert_eq!(
            split_exercises(raw),
            vec![
                ex(Some("Exercise 1"), "1. First"),
                ex(Some("Exercise 2"), "2. Second"),
            ]
        );
    }

    #[test]
    fn fragment_without_heading_is_all_body() {
        assert_eq!(
            split_exercises("Read the passage.\n\n---\n## Next"),
            vec![ex(None, "Read the passage."), ex(Some("Next"), "")]
        );
    }

    #[test]
    fn table_separator_rows_are_not_rules() {
        let raw = "| A | B |\n|---|---|\n| 1 | 2 |";
        assert_eq!(split_exercises(raw), vec![ex(None, raw)]);
    }

    #[test]
    fn longer_rules_and_crlf() {
        let raw = "## One\r\nbody one\r\n-----\r\n## Two\r\nbody two";
        assert_eq!(
            split_exercises(raw),
            vec![ex(Some("One"), "body one"), ex(Some("Two"), "body two")]
        );
    }

    #[test]
    fn heading_must_open_the_fragment() {
        assert_eq!(
            split_exercises("Intro line\n## Late heading"),
            vec![ex(None, "Intro line\n## Late heading")]
        );
    }
}
