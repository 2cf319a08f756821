//! # Pieces
//!
//! A piece is a typed token occupying a cell. "Empty" is a real piece kind,
//! not the absence of one: every initialized position always holds *a*
//! piece value, so emptiness is tested with [`Piece::is_empty`], never by
//! option-ness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a piece is. `Empty` marks an unoccupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PieceKind {
    Empty,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    /// A capture-game man.
    Man,
    /// A solitaire peg.
    Peg,
}

impl PieceKind {
    /// Lowercase single-character code used by the board fingerprint.
    fn code(self) -> char {
        match self {
            PieceKind::Empty => '?',
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::Man => 'm',
            PieceKind::Peg => 'o',
        }
    }
}

/// Which side a piece (or player) belongs to. Single-player variants use
/// `Neutral` throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PieceColor {
    Neutral,
    White,
    Black,
}

impl PieceColor {
    /// The opposing side. `Neutral` has no opponent and maps to itself.
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
            PieceColor::Neutral => PieceColor::Neutral,
        }
    }

    /// Side-to-move character used in the oracle state string.
    pub fn as_char(self) -> char {
        match self {
            PieceColor::White => 'w',
            PieceColor::Black => 'b',
            PieceColor::Neutral => '-',
        }
    }
}

/// A typed, colored token located at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    /// The distinguished empty value held by unoccupied cells.
    pub const EMPTY: Piece = Piece {
        kind: PieceKind::Empty,
        color: PieceColor::Neutral,
    };

    pub fn new(kind: PieceKind, color: PieceColor) -> Piece {
        Piece { kind, color }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == PieceKind::Empty
    }

    pub fn is_white(&self) -> bool {
        !self.is_empty() && self.color == PieceColor::White
    }

    pub fn is_black(&self) -> bool {
        !self.is_empty() && self.color == PieceColor::Black
    }

    /// Single-character board-string code: uppercase for white pieces,
    /// lowercase otherwise.
    pub fn code(&self) -> char {
        let code = self.kind.code();
        if self.color == PieceColor::White {
            code.to_ascii_uppercase()
        } else {
            code
        }
    }
}

impl Default for Piece {
    fn default() -> Piece {
        Piece::EMPTY
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
