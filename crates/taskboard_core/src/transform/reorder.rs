//! Drag-end reordering of one task sequence.
//!
//! # Responsibility
//! - Move one element into another element's slot, keeping the relative
//!   order of everything else.
//! - Report why a requested move turned into a no-op.
//!
//! # Invariants
//! - Output is always a permutation of the input.
//! - Unknown source or destination yields an unchanged copy, never an error.
//! - Identities resolve to their first occurrence in the sequence.

/// Why a reorder request left the sequence untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnchangedReason {
    /// Source and destination are the same element.
    SameElement,
    /// Source identity is not present.
    SourceMissing,
    /// Destination identity is not present.
    DestinationMissing,
}

impl UnchangedReason {
    /// Stable token for log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SameElement => "same_element",
            Self::SourceMissing => "source_missing",
            Self::DestinationMissing => "destination_missing",
        }
    }
}

/// Resolved plan for one reorder request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// Element at `from` moves to index `to`.
    Moved { from: usize, to: usize },
    /// Sequence stays as it is.
    Unchanged(UnchangedReason),
}

impl ReorderOutcome {
    /// Returns whether the sequence changes.
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Resolves source/destination keys to indexes without touching the data.
pub fn plan_reorder<T, K, F>(items: &[T], key: F, source: &K, dest: &K) -> ReorderOutcome
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    let Some(from) = items.iter().position(|item| key(item) == source) else {
        return ReorderOutcome::Unchanged(UnchangedReason::SourceMissing);
    };
    let Some(to) = items.iter().position(|item| key(item) == dest) else {
        return ReorderOutcome::Unchanged(UnchangedReason::DestinationMissing);
    };
    if from == to {
        return ReorderOutcome::Unchanged(UnchangedReason::SameElement);
    }
    ReorderOutcome::Moved { from, to }
}

/// Removes the element at `from` and reinserts it at `to`.
///
/// Out-of-range indexes return an unchanged copy.
pub fn move_index<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if from >= out.len() || to >= out.len() || from == to {
        return out;
    }
    let moved = out.remove(from);
    out.insert(to, moved);
    out
}

/// Applies a planned outcome to `items`.
pub fn apply_outcome<T: Clone>(items: &[T], outcome: ReorderOutcome) -> Vec<T> {
    match outcome {
        ReorderOutcome::Moved { from, to } => move_index(items, from, to),
        ReorderOutcome::Unchanged(_) => items.to_vec(),
    }
}

/// Moves the element identified by `source` into the slot held by `dest`,
/// matching identities through `key`.
pub fn reorder_by_key<T, K, F>(items: &[T], key: F, source: &K, dest: &K) -> Vec<T>
where
    T: Clone,
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    apply_outcome(items, plan_reorder(items, key, source, dest))
}

/// Moves `source` into the slot held by `dest`, using values as identities.
///
/// Duplicate values resolve to their first occurrence.
pub fn reorder<T: PartialEq + Clone>(items: &[T], source: &T, dest: &T) -> Vec<T> {
    reorder_by_key(items, |item| item, source, dest)
}
