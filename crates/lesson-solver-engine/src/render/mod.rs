//! # Rendering Support
//!
//! Parsing stops at [`ContentBlock`](crate::parsing::ContentBlock)s. Anything a
//! renderer needs beyond that lives here: question numbering (an explicit
//! accumulator, so the parser stays free of display state) and HTML export.

pub mod html;
pub mod numbering;

pub use html::{markdown_to_html, render_html};
pub use numbering::{NumberedBlock, next_number, number_blocks};
