pub mod io;
pub mod models;
pub mod parsing;
pub mod render;
pub mod solver;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::{ContentBlock, parse_solution};
pub use render::{NumberedBlock, number_blocks, render_html};
pub use solver::{ImagePart, LessonSolver, SolveError, solve_lesson};
