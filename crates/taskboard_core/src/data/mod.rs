//! Board data boundary.
//!
//! # Responsibility
//! - Provide the built-in sample board.
//! - Load and write board documents as JSON.
//!
//! # Invariants
//! - Transforms never read data from here; callers pass sequences in.
//! - Every loaded board passes `Board::try_new` validation.
//!
//! # See also
//! - `model::board` for the shape rules.

mod document;
mod sample;

pub use document::{board_from_json, board_to_json, load_board_file, BoardDataError};
pub use sample::sample_board;
