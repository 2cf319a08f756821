//! # Peg Solitaire
//!
//! Single-player jump game: a peg moves only by jumping an orthogonally
//! adjacent peg into the empty cell directly beyond it, removing the jumped
//! peg. There is no simple step in this variant, and with a single player
//! there is no turn rotation either.

use crate::board::Board;
use crate::moves::{Action, Marker, Move, Selection};
use crate::piece::Piece;
use crate::position::{Direction, PositionId};

use super::Rules;

/// Jump directions, generation order fixed.
const JUMP_DIRECTIONS: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Back,
    Direction::Forward,
];

/// Move generation for peg solitaire.
#[derive(Debug, Default, Clone, Copy)]
pub struct SolitaireRules;

impl SolitaireRules {
    pub fn new() -> SolitaireRules {
        SolitaireRules
    }

    /// Emits the jump along one direction, if the adjacent cell is occupied
    /// and the cell beyond it exists and is empty.
    fn fill_jump(board: &Board, at: PositionId, direction: Direction, moves: &mut Vec<Move>) {
        let Some(adjacent) = board.neighbor(at, direction) else {
            return;
        };
        if board.piece(adjacent).is_empty() {
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
}

impl Rules for SolitaireRules {
    fn possible_moves(&self, board: &Board, at: PositionId, piece: Piece) -> Vec<Move> {
        if piece.is_empty() {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for direction in JUMP_DIRECTIONS {
            Self::fill_jump(board, at, direction, &mut moves);
        }
        moves
    }

    // Default apply: run the actions and land on the target. A single
    // player means rotation would be a no-op, so none is performed.
}
