//! # Players and Turn Order
//!
//! Participants are an ordered list; the board tracks whose turn it is by
//! index and rotation wraps. Single-player variants use a one-element list,
//! which makes rotation a no-op.

use crate::piece::PieceColor;
use crate::position::PositionId;

/// One participant, tagged with the color identifying their pieces.
#[derive(Debug, Clone)]
pub struct Player {
    color: PieceColor,
    last_visited: Option<PositionId>,
}

impl Player {
    pub fn new(color: PieceColor) -> Player {
        Player {
            color,
            last_visited: None,
        }
    }

    /// The one-element list for single-player boards.
    pub fn single() -> Vec<Player> {
        vec![Player::new(PieceColor::Neutral)]
    }

    /// The white/black pair for two-player boards. White moves first.
    pub fn black_white() -> Vec<Player> {
        vec![
            Player::new(PieceColor::White),
            Player::new(PieceColor::Black),
        ]
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    /// The cell this player's focus last rested on before their turn ended.
    pub fn last_visited(&self) -> Option<PositionId> {
        self.last_visited
    }

    pub(crate) fn set_last_visited(&mut self, at: PositionId) {
        self.last_visited = Some(at);
    }

    /// Whether `piece` belongs to this player.
    pub fn owns(&self, piece: crate::piece::Piece) -> bool {
        !piece.is_empty() && piece.color == self.color
    }
}
