//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! - **`normalize`**: converts parsed blocks to a stable [`Snap`] that renders
//!   one line per block, for `insta` snapshots
//! - **`invariants`**: runtime checks that block text appears in the source in
//!   block order (nothing reordered, nothing invented)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
