//! Board presentation state.
//!
//! # Responsibility
//! - Own the mutable view state (mode, shuffled flat list, toggle flag) so
//!   transforms stay pure.
//! - Apply drag-end events to the board.
//!
//! # Invariants
//! - The flat list is shuffled once per load and never reshuffled by
//!   toggles or drags.
//! - At most one toggle is in flight.
//! - Drag-end only touches quadrants listed as draggable.
//! - Task sequences are replaced wholesale, never edited in place.

use crate::model::board::{Board, Quadrant};
use crate::model::task::TaskId;
use crate::transform::reorder::{ReorderOutcome, UnchangedReason};
use crate::transform::shuffle::{shuffle_with, IndexSource};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Cosmetic transition length a shell should wait between
/// `begin_toggle` and `finish_toggle`.
pub const TOGGLE_TRANSITION_MS: u64 = 400;

/// Which board layout is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Shuffled, normalized labels in one column.
    FlatList,
    /// Four quadrant columns with raw labels.
    Matrix,
}

impl ViewMode {
    fn flipped(self) -> Self {
        match self {
            Self::FlatList => Self::Matrix,
            Self::Matrix => Self::FlatList,
        }
    }
}

/// Errors from view state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// A toggle is already in flight.
    ToggleInProgress,
    /// `finish_toggle` was called without `begin_toggle`.
    NoPendingToggle,
    /// Quadrant does not accept drag reordering.
    DragDisabled(Quadrant),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToggleInProgress => write!(f, "view toggle already in progress"),
            Self::NoPendingToggle => write!(f, "no view toggle is pending"),
            Self::DragDisabled(quadrant) => {
                write!(f, "drag reordering is disabled for quadrant `{quadrant}`")
            }
        }
    }
}

impl Error for ViewError {}

/// Presentation state for one loaded board.
#[derive(Debug, Clone)]
pub struct BoardView {
    board: Board,
    flat: Vec<String>,
    mode: ViewMode,
    transitioning: bool,
    draggable: HashSet<Quadrant>,
}

impl BoardView {
    /// Loads a board, shuffling its normalized labels once.
    ///
    /// Starts in flat-list mode with drag enabled for `Quadrant::DoNow`.
    pub fn load<S: IndexSource + ?Sized>(board: Board, source: &mut S) -> Self {
        let flat = shuffle_with(&board.flat_labels(), source);
        info!(
            "event=view_load module=view status=ok tasks={}",
            flat.len()
        );
        Self {
            board,
            flat,
            mode: ViewMode::FlatList,
            transitioning: false,
            draggable: HashSet::from([Quadrant::DoNow]),
        }
    }

    /// Replaces the set of quadrants that accept drag-end events.
    pub fn with_draggable(mut self, quadrants: impl IntoIterator<Item = Quadrant>) -> Self {
        self.draggable = quadrants.into_iter().collect();
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Shuffled, normalized labels for the flat list.
    pub fn flat_list(&self) -> &[String] {
        &self.flat
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn is_draggable(&self, quadrant: Quadrant) -> bool {
        self.draggable.contains(&quadrant)
    }

    /// Caption for the toggle button in the current mode.
    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            ViewMode::FlatList => "Sort",
            ViewMode::Matrix => "Back to List",
        }
    }

    /// Starts a mode toggle. The mode flips on [`BoardView::finish_toggle`].
    ///
    /// # Errors
    /// - `ToggleInProgress` while a previous toggle has not finished.
    pub fn begin_toggle(&mut self) -> Result<(), ViewError> {
        if self.transitioning {
            warn!("event=view_toggle module=view status=rejected reason=in_progress");
            return Err(ViewError::ToggleInProgress);
        }
        self.transitioning = true;
        Ok(())
    }

    /// Completes a pending toggle and returns the new mode.
    ///
    /// # Errors
    /// - `NoPendingToggle` when no toggle was started.
    pub fn finish_toggle(&mut self) -> Result<ViewMode, ViewError> {
        if !self.transitioning {
            return Err(ViewError::NoPendingToggle);
        }
        self.transitioning = false;
        self.mode = self.mode.flipped();
        debug!(
            "event=view_toggle module=view status=ok mode={:?}",
            self.mode
        );
        Ok(self.mode)
    }

    /// Begins and finishes a toggle in one step.
    ///
    /// # Errors
    /// - `ToggleInProgress` while a previous toggle has not finished.
    pub fn toggle(&mut self) -> Result<ViewMode, ViewError> {
        self.begin_toggle()?;
        self.finish_toggle()
    }

    /// Applies a drag-end event inside one quadrant.
    ///
    /// Unknown ids are reported as an unchanged outcome, not an error.
    ///
    /// # Errors
    /// - `DragDisabled` when the quadrant does not accept drags.
    pub fn drag_end(
        &mut self,
        quadrant: Quadrant,
        source: TaskId,
        dest: TaskId,
    ) -> Result<ReorderOutcome, ViewError> {
        if !self.is_draggable(quadrant) {
            warn!(
                "event=drag_end module=view status=rejected reason=drag_disabled quadrant={quadrant}"
            );
            return Err(ViewError::DragDisabled(quadrant));
        }

        let outcome = self.board.reorder_tasks(quadrant, source, dest);
        match outcome {
            ReorderOutcome::Moved { from, to } => info!(
                "event=drag_end module=view status=ok quadrant={quadrant} from={from} to={to}"
            ),
            ReorderOutcome::Unchanged(reason) => log_unchanged(quadrant, reason),
        }
        Ok(outcome)
    }
}

fn log_unchanged(quadrant: Quadrant, reason: UnchangedReason) {
    debug!(
        "event=drag_end module=view status=noop quadrant={quadrant} reason={}",
        reason.as_str()
    );
}

#[cfg(test)]
mod tests {
    use super::{BoardView, ViewError, ViewMode};
    use crate::data::sample_board;
    use crate::model::board::Quadrant;
    use crate::transform::reorder::{ReorderOutcome, UnchangedReason};
    use crate::transform::shuffle::RngSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn view() -> BoardView {
        BoardView::load(sample_board(), &mut RngSource(StdRng::seed_from_u64(1)))
    }

    #[test]
    fn load_starts_in_flat_mode_with_all_labels() {
        let view = view();
        assert_eq!(view.mode(), ViewMode::FlatList);
        assert_eq!(view.toggle_label(), "Sort");

        let mut shown = view.flat_list().to_vec();
        let mut expected = view.board().flat_labels();
        shown.sort();
        expected.sort();
        assert_eq!(shown, expected);
    }

    #[test]
    fn toggle_flips_mode_and_rejects_overlap() {
        let mut view = view();
        view.begin_toggle().unwrap();
        assert!(view.is_transitioning());
        assert_eq!(view.begin_toggle(), Err(ViewError::ToggleInProgress));
        assert_eq!(view.mode(), ViewMode::FlatList);

        assert_eq!(view.finish_toggle(), Ok(ViewMode::Matrix));
        assert_eq!(view.toggle_label(), "Back to List");
        assert_eq!(view.finish_toggle(), Err(ViewError::NoPendingToggle));

        assert_eq!(view.toggle(), Ok(ViewMode::FlatList));
    }

    #[test]
    fn toggling_keeps_the_same_shuffled_list() {
        let mut view = view();
        let before = view.flat_list().to_vec();
        view.toggle().unwrap();
        view.toggle().unwrap();
        assert_eq!(view.flat_list(), before.as_slice());
    }

    #[test]
    fn drag_end_reorders_draggable_quadrant() {
        let mut view = view();
        let ids = view.board().category(Quadrant::DoNow).task_ids();

        let outcome = view.drag_end(Quadrant::DoNow, ids[2], ids[0]).unwrap();
        assert_eq!(outcome, ReorderOutcome::Moved { from: 2, to: 0 });

        let after = view.board().category(Quadrant::DoNow).task_ids();
        assert_eq!(after[0], ids[2]);
        assert_eq!(after[1], ids[0]);
        assert_eq!(after[2], ids[1]);
        assert_eq!(&after[3..], &ids[3..]);
    }

    #[test]
    fn drag_end_with_foreign_id_is_a_noop() {
        let mut view = view();
        let foreign = view.board().category(Quadrant::Drop).tasks[0].id;
        let ids = view.board().category(Quadrant::DoNow).task_ids();

        let outcome = view.drag_end(Quadrant::DoNow, foreign, ids[0]).unwrap();
        assert_eq!(
            outcome,
            ReorderOutcome::Unchanged(UnchangedReason::SourceMissing)
        );
        assert_eq!(view.board().category(Quadrant::DoNow).task_ids(), ids);
    }

    #[test]
    fn drag_end_rejects_disabled_quadrant_until_enabled() {
        let mut view = view();
        let ids = view.board().category(Quadrant::Schedule).task_ids();
        assert_eq!(
            view.drag_end(Quadrant::Schedule, ids[1], ids[0]),
            Err(ViewError::DragDisabled(Quadrant::Schedule))
        );

        let mut view = view.with_draggable(Quadrant::ALL);
        assert!(view
            .drag_end(Quadrant::Schedule, ids[1], ids[0])
            .unwrap()
            .is_moved());
    }
}
