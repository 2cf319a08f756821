//! # Checkers
//!
//! Two-player capture game. A piece belonging to the player whose turn it
//! is moves along its two forward diagonals, where forward means away from
//! that player's home edge, so white walks toward higher rows and black
//! toward lower ones. An empty adjacent diagonal is a simple step; an
//! opposing piece with an empty cell beyond it is a single-hop capture.
//!
//! Chained captures are a configuration choice, not an assumption: with
//! [`CheckersRules::with_chained_captures`] the turn stays with the mover
//! while the landed piece still has a capture available, and the
//! confirm-then-reselect flow of the interaction layer walks the chain.

use crate::board::Board;
use crate::error::EngineError;
use crate::moves::{Action, Marker, Move, Selection};
use crate::piece::{Piece, PieceColor};
use crate::position::{Direction, PositionId};
use crate::presenter::Presenter;

use super::Rules;

/// Move generation and turn rotation for the capture game.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckersRules {
    chained_captures: bool,
}

impl CheckersRules {
    pub fn new() -> CheckersRules {
        CheckersRules::default()
    }

    /// Keeps the turn with the mover after a capture that can continue.
    pub fn with_chained_captures(chained: bool) -> CheckersRules {
        CheckersRules {
            chained_captures: chained,
        }
    }

    /// The two forward diagonals for a side, generation order fixed:
    /// left diagonal before right diagonal.
    fn diagonals(color: PieceColor) -> Option<[Direction; 2]> {
        match color {
            PieceColor::White => Some([Direction::ForwardLeft, Direction::ForwardRight]),
            PieceColor::Black => Some([Direction::BackLeft, Direction::BackRight]),
            PieceColor::Neutral => None,
        }
    }

    /// Emits the step or capture available along one diagonal, if any.
    fn fill_moves(
        board: &Board,
        at: PositionId,
        direction: Direction,
        mover: PieceColor,
        moves: &mut Vec<Move>,
    ) {
        let Some(adjacent) = board.neighbor(at, direction) else {
            return;
        };

        if board.piece(adjacent).is_empty() {
            moves.push(Move::new(
                adjacent,
                vec![Action::Relocate {
                    from: at,
                    to: adjacent,
                }],
                vec![Selection::new(adjacent, Marker::Drop)],
            ));
            return;
        }

        // Occupied: a capture needs an opposing piece and an empty landing
        // cell beyond it along the same diagonal.
        if board.piece(adjacent).color != mover.opponent() {
            return;
        }
        let Some(landing) = board.neighbor(adjacent, direction) else {
            return;
        };
        if !board.piece(landing).is_empty() {
            return;
        }

        moves.push(Move::new(
            landing,
            vec![
                Action::Remove { at: adjacent },
                Action::Relocate {
                    from: at,
                    to: landing,
                },
            ],
            vec![
                Selection::new(adjacent, Marker::Remove),
                Selection::new(landing, Marker::Drop),
            ],
        ));
    }

    /// Whether the piece at `at` has a capture available. Used to decide
    /// chain continuation after a landing.
    fn has_capture(&self, board: &Board, at: PositionId) -> bool {
        self.possible_moves(board, at, board.piece(at))
            .iter()
            .any(Move::is_capture)
    }
}

impl Rules for CheckersRules {
    fn possible_moves(&self, board: &Board, at: PositionId, piece: Piece) -> Vec<Move> {
        // Only the current player's pieces generate moves.
        let Some(player) = board.current_player() else {
            return Vec::new();
        };
        if !player.owns(piece) {
            return Vec::new();
        }
        let Some(diagonals) = Self::diagonals(player.color()) else {
            return Vec::new();
        };

        let mut moves = Vec::new();
        for direction in diagonals {
            Self::fill_moves(board, at, direction, player.color(), &mut moves);
        }
        moves
    }

    fn apply_move(
        &mut self,
        board: &mut Board,
        _from: PositionId,
        mv: &Move,
        presenter: &mut dyn Presenter,
    ) -> Result<PositionId, EngineError> {
        board.apply_actions(&mv.actions, presenter);

        // A capture that can continue keeps the turn; focus stays on the
        // landed piece so the reselect offers the follow-up jump.
        if self.chained_captures && mv.is_capture() && self.has_capture(board, mv.target) {
            return Ok(mv.target);
        }

        Ok(board.switch_player(mv.target, presenter))
    }
}
