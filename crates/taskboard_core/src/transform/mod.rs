//! Pure task list transforms.
//!
//! # Responsibility
//! - Normalize decorative labels, shuffle the flat list, reorder on drag-end.
//! - Stay free of I/O and shared state; callers own every sequence.
//!
//! # Invariants
//! - Every transform returns a new sequence and leaves its input untouched.
//! - Every transform is total: edge cases resolve to identity, never error.

pub mod normalize;
pub mod reorder;
pub mod shuffle;
