//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed tree to a stable, serializable `Snap`
//!   format for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds,
//!   child spans contained in parents, literal text matching serialization)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
