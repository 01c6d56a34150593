pub mod solution;

pub use solution::Solution;
