//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task list transforms and board loading to Dart via FRB.
//! - Flatten core errors into plain messages for the UI shell.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Inputs are passed in and results returned by value; no state is kept
//!   here between calls except the logging bootstrap.

use taskboard_core::{
    board_from_json, board_to_json, core_version as core_version_inner,
    init_logging as init_logging_inner, normalize, ping as ping_inner, reorder, sample_board,
    shuffle, BoardView, Quadrant, ReorderOutcome, RngSource, TaskId,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Strips the decorative prefix from one label.
#[flutter_rust_bridge::frb(sync)]
pub fn normalize_label(label: String) -> String {
    normalize(&label)
}

/// Returns the labels in a uniformly random order.
#[flutter_rust_bridge::frb(sync)]
pub fn shuffle_labels(labels: Vec<String>) -> Vec<String> {
    shuffle(&labels)
}

/// Moves `source_id` into the slot held by `dest_id`.
///
/// Unknown labels return the input unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn reorder_labels(labels: Vec<String>, source_id: String, dest_id: String) -> Vec<String> {
    reorder(&labels, &source_id, &dest_id)
}

/// Returns the built-in sample board as a JSON document.
///
/// # FFI contract
/// - Never panics; returns an empty string if serialization fails.
#[flutter_rust_bridge::frb(sync)]
pub fn sample_board_json() -> String {
    board_to_json(&sample_board()).unwrap_or_default()
}

/// Flat list view payload for the unsorted screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatListResponse {
    /// Whether the board document was accepted.
    pub ok: bool,
    /// Normalized, shuffled labels (empty on failure).
    pub labels: Vec<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Matrix column payload for the sorted screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixColumn {
    /// Quadrant token (`do_now|schedule|delegate|drop`).
    pub quadrant: String,
    pub title: String,
    pub header_class: String,
    /// Task ids in display order, as strings.
    pub task_ids: Vec<String>,
    /// Raw labels in display order.
    pub labels: Vec<String>,
}

/// Builds the shuffled flat list from a board document.
///
/// An empty `board_json` uses the built-in sample board.
#[flutter_rust_bridge::frb(sync)]
pub fn flat_list_from_json(board_json: String) -> FlatListResponse {
    match load(&board_json) {
        Ok(board) => {
            let labels = shuffle(&board.flat_labels());
            FlatListResponse {
                ok: true,
                message: format!("Loaded {} task(s).", labels.len()),
                labels,
            }
        }
        Err(message) => FlatListResponse {
            ok: false,
            labels: Vec::new(),
            message,
        },
    }
}

/// Returns matrix columns for a board document in quadrant order.
///
/// An empty `board_json` uses the built-in sample board. Invalid documents
/// return an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn matrix_from_json(board_json: String) -> Vec<MatrixColumn> {
    let Ok(board) = load(&board_json) else {
        return Vec::new();
    };
    Quadrant::ALL
        .into_iter()
        .map(|quadrant| {
            let category = board.category(quadrant);
            MatrixColumn {
                quadrant: quadrant.as_str().to_string(),
                title: category.title.clone(),
                header_class: category.header_class.clone(),
                task_ids: category.tasks.iter().map(|t| t.id.to_string()).collect(),
                labels: category.tasks.iter().map(|t| t.label.clone()).collect(),
            }
        })
        .collect()
}

/// Board document returned after a drag-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardUpdateResponse {
    /// Whether the request was accepted.
    pub ok: bool,
    /// Whether the task sequence changed.
    pub moved: bool,
    /// Updated board document (empty on failure).
    pub board_json: String,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardUpdateResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            moved: false,
            board_json: String::new(),
            message: message.into(),
        }
    }
}

/// Applies a drag-end inside one quadrant, matching tasks by id.
///
/// Input semantics:
/// - `board_json`: board document; blank means the built-in sample board.
/// - `quadrant`: `do_now|schedule|delegate|drop`; only drag-enabled
///   quadrants accept the move.
/// - `source_id` / `dest_id`: task ids as returned by `matrix_from_json`.
///
/// # FFI contract
/// - Never panics.
/// - Unknown ids are accepted and return the document unchanged
///   (`ok = true`, `moved = false`).
#[flutter_rust_bridge::frb(sync)]
pub fn reorder_board_json(
    board_json: String,
    quadrant: String,
    source_id: String,
    dest_id: String,
) -> BoardUpdateResponse {
    let quadrant = match quadrant.parse::<Quadrant>() {
        Ok(quadrant) => quadrant,
        Err(err) => return BoardUpdateResponse::failure(err.to_string()),
    };
    let (source, dest) = match (parse_task_id(&source_id), parse_task_id(&dest_id)) {
        (Ok(source), Ok(dest)) => (source, dest),
        (Err(message), _) | (_, Err(message)) => return BoardUpdateResponse::failure(message),
    };
    let board = match load(&board_json) {
        Ok(board) => board,
        Err(message) => return BoardUpdateResponse::failure(message),
    };

    let mut view = BoardView::load(board, &mut RngSource(rand::rng()));
    let outcome = match view.drag_end(quadrant, source, dest) {
        Ok(outcome) => outcome,
        Err(err) => return BoardUpdateResponse::failure(err.to_string()),
    };
    let board_json = match board_to_json(view.board()) {
        Ok(json) => json,
        Err(err) => return BoardUpdateResponse::failure(err.to_string()),
    };

    let message = match outcome {
        ReorderOutcome::Moved { from, to } => format!("Moved task from {from} to {to}."),
        ReorderOutcome::Unchanged(reason) => format!("Unchanged: {}.", reason.as_str()),
    };
    BoardUpdateResponse {
        ok: true,
        moved: outcome.is_moved(),
        board_json,
        message,
    }
}

fn parse_task_id(raw: &str) -> Result<TaskId, String> {
    raw.trim()
        .parse::<TaskId>()
        .map_err(|err| format!("invalid task id `{raw}`: {err}"))
}

fn load(board_json: &str) -> Result<taskboard_core::Board, String> {
    if board_json.trim().is_empty() {
        return Ok(sample_board());
    }
    board_from_json(board_json).map_err(|err| format!("board load failed: {err}"))
}
