//! # Actions, Moves, and Selections
//!
//! An [`Action`] is one atomic board mutation. A [`Move`] bundles the
//! ordered actions that realize one legal play together with the cell the
//! acting piece lands on and the display selections the candidate implies
//! while it is being browsed. Action ordering matters; it is how a capture
//! expresses "remove the captured piece, then relocate the capturing
//! piece".
//!
//! Selections are pure display intent. They never touch board state; the
//! presenter realizes them as visual markers.

use crate::position::PositionId;

/// Display intent attached to a cell while a selection is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The focused cell of an active selection.
    Selected,
    /// The focused cell yields no legal moves.
    Unselectable,
    /// This cell's piece would be removed by the browsed move.
    Remove,
    /// The browsed move would land the acting piece here.
    Drop,
    /// Explicit "no marker" intent.
    None,
}

/// A display-only association of a cell with a marker intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub position: PositionId,
    pub marker: Marker,
}

impl Selection {
    pub fn new(position: PositionId, marker: Marker) -> Selection {
        Selection { position, marker }
    }
}

/// One atomic board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Clear the piece at a cell. Clearing an already-empty cell is a no-op.
    Remove { at: PositionId },
    /// Relocate the piece at `from` to `to`, clobbering whatever was there.
    Relocate { from: PositionId, to: PositionId },
}

/// An ordered bundle of actions plus the resulting focus cell and the UI
/// markers it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// Where the acting piece ends up; focus lands here after a commit.
    pub target: PositionId,
    /// Executed strictly in declaration order.
    pub actions: Vec<Action>,
    /// Markers shown while this candidate is the browsed one.
    pub selections: Vec<Selection>,
}

impl Move {
    pub fn new(target: PositionId, actions: Vec<Action>, selections: Vec<Selection>) -> Move {
        Move {
            target,
            actions,
            selections,
        }
    }

    /// Whether this move removes an opposing piece.
    pub fn is_capture(&self) -> bool {
        self.actions
            .iter()
            .any(|action| matches!(action, Action::Remove { .. }))
    }
}
