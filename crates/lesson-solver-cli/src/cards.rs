use lesson_solver_engine::{ContentBlock, NumberedBlock};

const INDENT: &str = "   ";

/// Plain-text lines for one card in the list.
///
/// Questions carry their per-exercise number and show the answer only when
/// `revealed`; every other block is shown verbatim.
pub fn card_lines(numbered: &NumberedBlock, revealed: bool) -> Vec<String> {
    match numbered.block {
        ContentBlock::Heading { text } => vec![text.clone()],
        ContentBlock::Qa { question, answer } => {
            let label = match numbered.number {
                Some(n) => format!("{n}. "),
                None => String::new(),
            };
            let mut question_lines = question.lines();
            let first = question_lines.next().unwrap_or_default();
            let mut lines = vec![format!("{label}{first}").trim_end().to_string()];
            lines.extend(question_lines.map(|line| format!("{INDENT}{line}")));
            if revealed {
                lines.push(format!("{INDENT}▼ Answer"));
                lines.extend(answer.lines().map(|line| format!("{INDENT}{INDENT}{line}")));
            } else {
                lines.push(format!("{INDENT}▶ Answer (hidden)"));
            }
            lines
        }
        ContentBlock::FillIn { text } | ContentBlock::Table { text } | ContentBlock::Other { text } => {
            text.lines().map(str::to_string).collect()
        }
    }
}
