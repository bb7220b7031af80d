//! Task board domain model.
//!
//! # Responsibility
//! - Define tasks, quadrants and the four-category board.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`, never by its label.
//! - A board always has exactly four categories.

pub mod board;
pub mod task;
