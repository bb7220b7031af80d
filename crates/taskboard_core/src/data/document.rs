//! JSON board documents.
//!
//! Document shape:
//! `{"categories":[{"quadrant":"do_now","title":"…","header_class":"…","tasks":[…]}]}`
//! where each task is either a bare label string (id assigned on load) or
//! `{"id":"<uuid>","label":"…"}`.

use crate::model::board::{Board, BoardError, Category, Quadrant};
use crate::model::task::{Task, TaskId, TaskValidationError};
use log::{error, info};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Errors from loading or writing board documents.
#[derive(Debug)]
pub enum BoardDataError {
    /// Board file could not be read.
    Io(std::io::Error),
    /// Document is not valid JSON or does not match the document shape.
    Json(serde_json::Error),
    /// Task entry carries an invalid id.
    InvalidTask(TaskValidationError),
    /// Document parsed but violates board invariants.
    Invalid(BoardError),
}

impl Display for BoardDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "board file read failed: {err}"),
            Self::Json(err) => write!(f, "board document is malformed: {err}"),
            Self::InvalidTask(err) => write!(f, "invalid task entry: {err}"),
            Self::Invalid(err) => write!(f, "invalid board: {err}"),
        }
    }
}

impl Error for BoardDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidTask(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BoardDataError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for BoardDataError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<TaskValidationError> for BoardDataError {
    fn from(value: TaskValidationError) -> Self {
        Self::InvalidTask(value)
    }
}

impl From<BoardError> for BoardDataError {
    fn from(value: BoardError) -> Self {
        Self::Invalid(value)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BoardDocument {
    categories: Vec<CategoryDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryDocument {
    quadrant: Quadrant,
    title: String,
    #[serde(default)]
    header_class: String,
    #[serde(default)]
    tasks: Vec<TaskEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TaskEntry {
    Label(String),
    Full { id: TaskId, label: String },
}

impl TaskEntry {
    fn into_task(self) -> Result<Task, TaskValidationError> {
        match self {
            Self::Label(label) => Ok(Task::new(label)),
            Self::Full { id, label } => Task::with_id(id, label),
        }
    }
}

impl CategoryDocument {
    fn into_category(self) -> Result<Category, TaskValidationError> {
        let tasks = self
            .tasks
            .into_iter()
            .map(TaskEntry::into_task)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Category::new(
            self.quadrant,
            self.title,
            self.header_class,
            tasks,
        ))
    }
}

/// Parses and validates a board document.
///
/// # Errors
/// - `Json` when the text does not match the document shape.
/// - `InvalidTask` when a task entry has a nil id.
/// - `Invalid` when board invariants fail.
pub fn board_from_json(text: &str) -> Result<Board, BoardDataError> {
    let result = parse_board(text);
    match &result {
        Ok(board) => info!(
            "event=board_load module=data status=ok tasks={}",
            board.task_count()
        ),
        Err(err) => error!("event=board_load module=data status=error error={err}"),
    }
    result
}

fn parse_board(text: &str) -> Result<Board, BoardDataError> {
    let document: BoardDocument = serde_json::from_str(text)?;
    let categories = document
        .categories
        .into_iter()
        .map(CategoryDocument::into_category)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Board::try_new(categories)?)
}

/// Reads a board document from disk.
///
/// # Errors
/// - `Io` when the file cannot be read; otherwise as [`board_from_json`].
pub fn load_board_file(path: impl AsRef<Path>) -> Result<Board, BoardDataError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|err| {
        error!("event=board_read module=data status=error error={err}");
        BoardDataError::Io(err)
    })?;
    board_from_json(&text)
}

/// Serializes a board with explicit task ids.
///
/// # Errors
/// - `Json` when serialization fails.
pub fn board_to_json(board: &Board) -> Result<String, BoardDataError> {
    Ok(serde_json::to_string_pretty(board)?)
}

#[cfg(test)]
mod tests {
    use super::{board_from_json, board_to_json, BoardDataError};
    use crate::data::sample_board;
    use crate::model::board::{BoardError, Quadrant};
    use crate::model::task::TaskValidationError;

    fn doc(categories: &str) -> String {
        format!(r#"{{"categories":[{categories}]}}"#)
    }

    const MINIMAL: &str = r#"
        {"quadrant":"do_now","title":"Now","tasks":["📊 Report"]},
        {"quadrant":"schedule","title":"Later"},
        {"quadrant":"delegate","title":"Hand off","header_class":"yellow"},
        {"quadrant":"drop","title":"Skip","tasks":[]}
    "#;

    #[test]
    fn loads_minimal_document_with_defaults() {
        let board = board_from_json(&doc(MINIMAL)).unwrap();
        assert_eq!(board.task_count(), 1);
        assert_eq!(board.category(Quadrant::Delegate).header_class, "yellow");
        assert_eq!(board.category(Quadrant::Schedule).header_class, "");
    }

    #[test]
    fn keeps_explicit_task_ids() {
        let text = doc(
            r#"
            {"quadrant":"do_now","title":"Now","tasks":[
                {"id":"11111111-2222-4333-8444-555555555555","label":"🧥 Hoodie"},
                "💰 Deposit"
            ]},
            {"quadrant":"schedule","title":"Later"},
            {"quadrant":"delegate","title":"Hand off"},
            {"quadrant":"drop","title":"Skip"}
        "#,
        );
        let board = board_from_json(&text).unwrap();
        let tasks = &board.category(Quadrant::DoNow).tasks;
        assert_eq!(tasks[0].id.to_string(), "11111111-2222-4333-8444-555555555555");
        assert_eq!(tasks[0].label, "🧥 Hoodie");
        assert_eq!(tasks[1].label, "💰 Deposit");
    }

    #[test]
    fn rejects_nil_task_id() {
        let text = doc(
            r#"
            {"quadrant":"do_now","title":"Now","tasks":[
                {"id":"00000000-0000-0000-0000-000000000000","label":"x"}
            ]},
            {"quadrant":"schedule","title":"Later"},
            {"quadrant":"delegate","title":"Hand off"},
            {"quadrant":"drop","title":"Skip"}
        "#,
        );
        let err = board_from_json(&text).unwrap_err();
        assert!(matches!(
            err,
            BoardDataError::InvalidTask(TaskValidationError::NilId)
        ));
    }

    #[test]
    fn rejects_missing_quadrant_and_bad_json() {
        let three = doc(
            r#"
            {"quadrant":"do_now","title":"Now"},
            {"quadrant":"schedule","title":"Later"},
            {"quadrant":"drop","title":"Skip"}
        "#,
        );
        assert!(matches!(
            board_from_json(&three).unwrap_err(),
            BoardDataError::Invalid(BoardError::WrongCategoryCount(3))
        ));

        assert!(matches!(
            board_from_json("{not json").unwrap_err(),
            BoardDataError::Json(_)
        ));
        assert!(matches!(
            board_from_json(&doc(r#"{"quadrant":"someday","title":"x"}"#)).unwrap_err(),
            BoardDataError::Json(_)
        ));
    }

    #[test]
    fn written_document_loads_back_with_same_ids() {
        let board = sample_board();
        let text = board_to_json(&board).unwrap();
        assert_eq!(board_from_json(&text).unwrap(), board);
    }
}
