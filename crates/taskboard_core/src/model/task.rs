//! Task domain model.
//!
//! # Responsibility
//! - Pair each task label with a stable opaque identity.
//!
//! # Invariants
//! - `id` is never nil and never reused for another task.
//! - `label` is display text only; it is never used as an identity key.

use crate::transform::normalize::normalize;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one task, independent of its label text.
pub type TaskId = Uuid;

/// Validation errors for task construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Provided id is the nil UUID.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item as shown in the matrix view.
///
/// Serialize-only: documents are read through `data`, which routes ids
/// through [`Task::with_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Stable identity used for drag reordering.
    pub id: TaskId,
    /// Raw label, possibly carrying a decorative prefix.
    pub label: String,
}

impl Task {
    /// Creates a task with a freshly generated id.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
        }
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by loaders where identity already exists in the document.
    ///
    /// # Errors
    /// - Returns `TaskValidationError::NilId` for `Uuid::nil()`.
    pub fn with_id(id: TaskId, label: impl Into<String>) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        Ok(Self {
            id,
            label: label.into(),
        })
    }

    /// Returns the label without its decorative prefix.
    pub fn plain_label(&self) -> String {
        normalize(&self.label)
    }
}
