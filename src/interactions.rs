//! # Interactions
//!
//! The selection state machine between user intent and the board. A
//! session is always in one of three states: nothing focused (*idle*), a
//! focused cell with no legal moves (*unselectable*), or a focused cell
//! with a non-empty candidate-move list and one current index
//! (*selecting*).
//!
//! Every transition re-establishes the display invariant before returning:
//! the active marker set is exactly the `Selected` marker on the focused
//! cell plus the markers declared by the currently browsed candidate (or
//! the lone `Unselectable` marker). Stale markers never survive a
//! transition.
//!
//! Commands with nothing to act on (confirming or cycling while idle)
//! are deliberate no-ops, not errors: malformed UI-driven interaction is
//! answered with silence.

use crate::error::EngineError;
use crate::games::Game;
use crate::moves::{Marker, Move, Selection};
use crate::position::{Direction, PositionId};
use crate::presenter::Presenter;

/// Where the selection state machine currently stands.
enum Focus {
    Idle,
    Unselectable {
        at: PositionId,
    },
    Selecting {
        at: PositionId,
        moves: Vec<Move>,
        index: usize,
    },
}

/// Translates select/cycle/confirm/nudge commands into board queries and
/// mutations, and into marker instructions for the presenter.
pub struct Interactions<P: Presenter> {
    game: Game,
    presenter: P,
    focus: Focus,
    /// Cells currently carrying markers, so they can be cleared precisely.
    displayed: Vec<PositionId>,
}

impl<P: Presenter> Interactions<P> {
    pub fn new(game: Game, presenter: P) -> Interactions<P> {
        Interactions {
            game,
            presenter,
            focus: Focus::Idle,
            displayed: Vec::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The focused cell, in both the unselectable and selecting states.
    pub fn focused(&self) -> Option<PositionId> {
        match self.focus {
            Focus::Idle => None,
            Focus::Unselectable { at } | Focus::Selecting { at, .. } => Some(at),
        }
    }

    /// Number of candidate moves under the current selection.
    pub fn candidate_count(&self) -> usize {
        match &self.focus {
            Focus::Selecting { moves, .. } => moves.len(),
            _ => 0,
        }
    }

    /// Index of the currently browsed candidate, when selecting.
    pub fn current_index(&self) -> Option<usize> {
        match &self.focus {
            Focus::Selecting { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// The currently browsed candidate move, when selecting.
    pub fn current_move(&self) -> Option<&Move> {
        match &self.focus {
            Focus::Selecting { moves, index, .. } => moves.get(*index),
            _ => None,
        }
    }

    /// Focuses a cell: queries the rules for the piece sitting there and
    /// enters either the selecting state (candidates found, first one
    /// current) or the unselectable state. Any previous selection is
    /// discarded and its markers cleared first.
    pub fn select(&mut self, at: PositionId) {
        self.focus = if self.game.can_move(at) {
            let moves = self.game.possible_moves(at);
            Focus::Selecting {
                at,
                moves,
                index: 0,
            }
        } else {
            Focus::Unselectable { at }
        };
        self.render_markers();
    }

    /// Convenience name-based [`Interactions::select`]; returns whether the
    /// cell exists.
    pub fn select_name(&mut self, name: &str) -> bool {
        match self.game.board().position_by_name(name) {
            Some(at) => {
                self.select(at);
                true
            }
            None => false,
        }
    }

    /// Cycles to the next candidate move, wrapping past the end, and
    /// re-renders the marker set for it. No-op outside the selecting state.
    pub fn next(&mut self) {
        if let Focus::Selecting { moves, index, .. } = &mut self.focus {
            *index = (*index + 1) % moves.len();
            self.render_markers();
        }
    }

    /// If the active selection offers a candidate landing on `at`, makes
    /// it the current candidate and re-renders its markers. Returns whether
    /// such a candidate existed. This is the pointing-device counterpart of
    /// [`Interactions::next`]: pointing at a highlighted landing cell picks
    /// that move directly.
    pub fn select_target(&mut self, at: PositionId) -> bool {
        if let Focus::Selecting { moves, index, .. } = &mut self.focus {
            if let Some(found) = moves.iter().position(|mv| mv.target == at) {
                *index = found;
                self.render_markers();
                return true;
            }
        }
        false
    }

    /// Commits the currently browsed candidate: applies it through the
    /// rules, clears the selection, and immediately re-selects the cell the
    /// piece landed on, which is what makes chained interactions work
    /// without special-casing. No-op when there is nothing to commit; an
    /// error from the rules (oracle divergence) is fatal and propagates.
    pub fn confirm(&mut self) -> Result<(), EngineError> {
        let Focus::Selecting { at, moves, index } = &self.focus else {
            return Ok(());
        };
        let Some(mv) = moves.get(*index).cloned() else {
            return Ok(());
        };
        let from = *at;

        let landed = self
            .game
            .apply_move(from, &mv, &mut self.presenter)?;
        self.select(landed);
        Ok(())
    }

    /// Relocates focus to the focused cell's neighbor in `direction` and
    /// re-selects it: a pure focus shortcut, distinct from committing.
    /// No-op while idle or when no neighbor exists there.
    pub fn nudge(&mut self, direction: Direction) {
        let Some(at) = self.focused() else {
            return;
        };
        if let Some(next) = self.game.board().neighbor(at, direction) {
            self.select(next);
        }
    }

    /// Drops the selection entirely and clears every marker.
    pub fn clear(&mut self) {
        self.focus = Focus::Idle;
        self.render_markers();
    }

    /// The display set implied by the current state.
    fn active_selections(&self) -> Vec<Selection> {
        match &self.focus {
            Focus::Idle => Vec::new(),
            Focus::Unselectable { at } => vec![Selection::new(*at, Marker::Unselectable)],
            Focus::Selecting { at, moves, index } => {
                let mut selections = vec![Selection::new(*at, Marker::Selected)];
                if let Some(mv) = moves.get(*index) {
                    selections.extend(mv.selections.iter().copied());
                }
                selections
            }
        }
    }

    /// Clears the previously displayed markers and applies the active set,
    /// restoring the display invariant.
    fn render_markers(&mut self) {
        let selections = self.active_selections();
        let board = self.game.board_mut();
        for at in self.displayed.drain(..) {
            board.clear_marker(at, &mut self.presenter);
        }
        for selection in &selections {
            board.show_marker(selection.position, selection.marker, &mut self.presenter);
            self.displayed.push(selection.position);
        }
    }
}
