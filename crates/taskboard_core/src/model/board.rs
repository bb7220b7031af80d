//! Eisenhower board model.
//!
//! # Responsibility
//! - Group tasks into the four fixed quadrant categories.
//! - Validate board shape once, at construction time.
//!
//! # Invariants
//! - A board holds exactly one category per quadrant, in `Quadrant::ALL` order.
//! - Category titles are never blank.
//! - Task ids are unique across the whole board.
//! - Task sequences are only ever replaced by permutations of themselves.

use crate::model::task::{Task, TaskId};
use crate::transform::normalize::normalize;
use crate::transform::reorder::{apply_outcome, plan_reorder, ReorderOutcome, UnchangedReason};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the four fixed matrix quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Urgent and important.
    DoNow,
    /// Important, not urgent.
    Schedule,
    /// Urgent, not important.
    Delegate,
    /// Neither urgent nor important.
    Drop,
}

impl Quadrant {
    /// All quadrants in matrix display order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::DoNow,
        Quadrant::Schedule,
        Quadrant::Delegate,
        Quadrant::Drop,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::DoNow => 0,
            Self::Schedule => 1,
            Self::Delegate => 2,
            Self::Drop => 3,
        }
    }

    /// Stable snake_case token, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DoNow => "do_now",
            Self::Schedule => "schedule",
            Self::Delegate => "delegate",
            Self::Drop => "drop",
        }
    }

    pub fn is_urgent(self) -> bool {
        matches!(self, Self::DoNow | Self::Delegate)
    }

    pub fn is_important(self) -> bool {
        matches!(self, Self::DoNow | Self::Schedule)
    }
}

impl Display for Quadrant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unknown quadrant tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadrantParseError(pub String);

impl Display for QuadrantParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown quadrant `{}`; expected do_now|schedule|delegate|drop",
            self.0
        )
    }
}

impl Error for QuadrantParseError {}

impl FromStr for Quadrant {
    type Err = QuadrantParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let token = value.trim().to_ascii_lowercase().replace('-', "_");
        Quadrant::ALL
            .into_iter()
            .find(|quadrant| quadrant.as_str() == token)
            .ok_or_else(|| QuadrantParseError(value.to_string()))
    }
}

/// One quadrant column: title, header style tag and ordered tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub quadrant: Quadrant,
    /// Column heading, may carry a decorative prefix.
    pub title: String,
    /// Opaque style tag for the shell (CSS class list in the web prototype).
    pub header_class: String,
    /// Ordered tasks; order matters in the matrix view.
    pub tasks: Vec<Task>,
}

impl Category {
    pub fn new(
        quadrant: Quadrant,
        title: impl Into<String>,
        header_class: impl Into<String>,
        tasks: Vec<Task>,
    ) -> Self {
        Self {
            quadrant,
            title: title.into(),
            header_class: header_class.into(),
            tasks,
        }
    }

    /// Returns task ids in display order.
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|task| task.id).collect()
    }

    /// Returns raw labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.tasks.iter().map(|task| task.label.as_str()).collect()
    }
}

/// Errors from board construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board did not have exactly four categories.
    WrongCategoryCount(usize),
    /// Two categories claimed the same quadrant.
    DuplicateQuadrant(Quadrant),
    /// Category title is blank after trim.
    BlankTitle(Quadrant),
    /// Task id appears more than once.
    DuplicateTaskId(TaskId),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongCategoryCount(count) => {
                write!(f, "board requires exactly 4 categories, got {count}")
            }
            Self::DuplicateQuadrant(quadrant) => {
                write!(f, "quadrant `{quadrant}` is defined more than once")
            }
            Self::BlankTitle(quadrant) => {
                write!(f, "category title for `{quadrant}` must not be blank")
            }
            Self::DuplicateTaskId(id) => write!(f, "duplicate task id: {id}"),
        }
    }
}

impl Error for BoardError {}

/// The four categories of an Eisenhower matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    categories: [Category; 4],
}

impl Board {
    /// Builds a board from categories given in any order.
    ///
    /// # Errors
    /// - `WrongCategoryCount` unless exactly four categories are given.
    /// - `DuplicateQuadrant` when a quadrant repeats.
    /// - `BlankTitle` when a title is empty after trim.
    /// - `DuplicateTaskId` when a task id repeats anywhere on the board.
    pub fn try_new(mut categories: Vec<Category>) -> Result<Self, BoardError> {
        if categories.len() != Quadrant::ALL.len() {
            return Err(BoardError::WrongCategoryCount(categories.len()));
        }

        let mut quadrants = HashSet::new();
        let mut task_ids = HashSet::new();
        for category in &categories {
            if !quadrants.insert(category.quadrant) {
                return Err(BoardError::DuplicateQuadrant(category.quadrant));
            }
            if category.title.trim().is_empty() {
                return Err(BoardError::BlankTitle(category.quadrant));
            }
            for task in &category.tasks {
                if !task_ids.insert(task.id) {
                    return Err(BoardError::DuplicateTaskId(task.id));
                }
            }
        }

        categories.sort_by_key(|category| category.quadrant.index());
        let categories: [Category; 4] = categories
            .try_into()
            .map_err(|rest: Vec<Category>| BoardError::WrongCategoryCount(rest.len()))?;
        Ok(Self { categories })
    }

    /// Builds a board from columns already in `Quadrant::ALL` order.
    ///
    /// Callers guarantee the `try_new` invariants; used for built-in data
    /// whose ids are freshly generated.
    pub(crate) fn from_columns(categories: [Category; 4]) -> Self {
        debug_assert!(categories
            .iter()
            .zip(Quadrant::ALL)
            .all(|(category, quadrant)| category.quadrant == quadrant));
        Self { categories }
    }

    /// Categories in matrix display order.
    pub fn categories(&self) -> &[Category; 4] {
        &self.categories
    }

    pub fn category(&self, quadrant: Quadrant) -> &Category {
        &self.categories[quadrant.index()]
    }

    /// Total number of tasks across all quadrants.
    pub fn task_count(&self) -> usize {
        self.categories.iter().map(|c| c.tasks.len()).sum()
    }

    /// Finds which quadrant holds `id`.
    pub fn quadrant_of(&self, id: TaskId) -> Option<Quadrant> {
        self.categories
            .iter()
            .find(|category| category.tasks.iter().any(|task| task.id == id))
            .map(|category| category.quadrant)
    }

    /// Every label, normalized, in category-then-task order.
    ///
    /// This is the unshuffled input of the flat list view.
    pub fn flat_labels(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|category| category.tasks.iter())
            .map(|task| normalize(&task.label))
            .collect()
    }

    /// Moves `source` into the slot of `dest` within one quadrant.
    ///
    /// The quadrant's sequence is replaced wholesale. Ids outside that
    /// quadrant resolve as missing and leave the board untouched.
    pub fn reorder_tasks(
        &mut self,
        quadrant: Quadrant,
        source: TaskId,
        dest: TaskId,
    ) -> ReorderOutcome {
        let category = &mut self.categories[quadrant.index()];
        let outcome = plan_reorder(&category.tasks, |task| &task.id, &source, &dest);
        if outcome.is_moved() {
            category.tasks = apply_outcome(&category.tasks, outcome);
        }
        outcome
    }

    /// Moves the task at index `from` to index `to` within one quadrant.
    ///
    /// Out-of-range indexes leave the board untouched.
    pub fn move_task(&mut self, quadrant: Quadrant, from: usize, to: usize) -> ReorderOutcome {
        let category = &mut self.categories[quadrant.index()];
        let (Some(source), Some(dest)) = (category.tasks.get(from), category.tasks.get(to))
        else {
            let reason = if from >= category.tasks.len() {
                UnchangedReason::SourceMissing
            } else {
                UnchangedReason::DestinationMissing
            };
            return ReorderOutcome::Unchanged(reason);
        };
        let (source, dest) = (source.id, dest.id);
        self.reorder_tasks(quadrant, source, dest)
    }
}
