pub mod cursor;
pub mod lines;
pub mod span;

pub use cursor::Cursor;
pub use lines::{LineRef, lines_with_spans};
pub use span::Span;
