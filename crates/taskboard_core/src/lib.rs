//! Core task list logic for Taskboard.
//! Pure transforms over task sequences, plus the board model and view state
//! that a UI shell drives.

pub mod data;
pub mod logging;
pub mod model;
pub mod transform;
pub mod view;

pub use data::{board_from_json, board_to_json, load_board_file, sample_board, BoardDataError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::board::{Board, BoardError, Category, Quadrant, QuadrantParseError};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use transform::normalize::{decorative_prefix_len, is_normalized, normalize};
pub use transform::reorder::{
    move_index, plan_reorder, reorder, reorder_by_key, ReorderOutcome, UnchangedReason,
};
pub use transform::shuffle::{shuffle, shuffle_with, IndexSource, RngSource};
pub use view::{BoardView, ViewError, ViewMode, TOGGLE_TRANSITION_MS};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
