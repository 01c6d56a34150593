use pulldown_cmark::{Event, Options, Parser, html};

use super::numbering::{NumberedBlock, number_blocks};
use crate::parsing::ContentBlock;

/// Markdown extensions the model's output relies on.
fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_MATH
}

/// Renders a markdown fragment to HTML.
///
/// Raw HTML in the fragment is emitted as escaped text, never as markup.
pub fn markdown_to_html(md: &str) -> String {
    let events = Parser::new_ext(md, markdown_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

/// Renders parsed blocks as a standalone card list.
///
/// Questions become numbered cards with the answer inside a collapsed
/// `<details>` element; the counter restarts at every heading.
pub fn render_html(blocks: &[ContentBlock]) -> String {
    let mut out = String::from("<article class=\"solution\">\n");
    for nb in number_blocks(blocks) {
        push_block(&mut out, nb);
    }
    out.push_str("</article>\n");
    out
}

fn push_block(out: &mut String, nb: NumberedBlock<'_>) {
    match nb.block {
        ContentBlock::Heading { text } => {
            out.push_str("<h2 class=\"exercise-heading\">");
            out.push_str(&html_escape::encode_text(text));
            out.push_str("</h2>\n");
        }
        ContentBlock::Qa { question, answer } => {
            let number = nb.number.unwrap_or_default();
            out.push_str("<section class=\"card qa\">\n");
            out.push_str(&format!("<div class=\"question-number\">{number}</div>\n"));
            out.push_str("<div class=\"question\">\n");
            out.push_str(&markdown_to_html(question));
            out.push_str("</div>\n<details class=\"answer\">\n<summary>Answer</summary>\n");
            out.push_str(&markdown_to_html(answer));
            out.push_str("</details>\n</section>\n");
        }
        ContentBlock::FillIn { text } | ContentBlock::Table { text } | ContentBlock::Other { text } => {
            out.push_str(&format!("<section class=\"card {}\">\n", nb.block.kind_name()));
            out.push_str(&markdown_to_html(text));
            out.push_str("</section>\n");
        }
    }
}
