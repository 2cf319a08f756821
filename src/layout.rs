//! # Board Layouts
//!
//! A layout is the declarative configuration a board is built from: the
//! named cells, the piece (if any) each starts with, and the player setup.
//! The three shipped variants have built-in layouts; custom boards load
//! from JSON files with the same shape. Layout mistakes (duplicate names,
//! names that do not parse, unreadable files) are configuration errors
//! and abort setup.
//!
//! ```json
//! {
//!   "players": "single",
//!   "cells": [
//!     { "name": "a1", "piece": { "kind": "peg", "color": "neutral" } },
//!     { "name": "b1" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::Board;
use crate::error::EngineError;
use crate::location::cell_name;
use crate::piece::{Piece, PieceColor, PieceKind};
use crate::player::Player;

/// Which participant list a board starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerSetup {
    Single,
    BlackWhite,
}

impl PlayerSetup {
    pub fn players(self) -> Vec<Player> {
        match self {
            PlayerSetup::Single => Player::single(),
            PlayerSetup::BlackWhite => Player::black_white(),
        }
    }
}

/// One declared cell: a name and the piece it starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellSpec {
    pub name: String,
    /// Defaults to the empty piece when omitted.
    #[serde(default)]
    pub piece: Piece,
}

/// Declarative board configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub players: PlayerSetup,
    pub cells: Vec<CellSpec>,
}

impl Layout {
    /// Standard checkers: full 8×8 grid, 12 men per side on the dark
    /// squares of the first and last three rows.
    pub fn checkers() -> Layout {
        let cells = grid(8, 8, |row, column| {
            let dark = (row + column) % 2 == 0;
            match row {
                1..=3 if dark => Piece::new(PieceKind::Man, PieceColor::White),
                6..=8 if dark => Piece::new(PieceKind::Man, PieceColor::Black),
                _ => Piece::EMPTY,
            }
        });
        Layout {
            players: PlayerSetup::BlackWhite,
            cells,
        }
    }

    /// English peg solitaire: the 33-cell cross (a 7×7 grid without its
    /// 2×2-arm corners, a deliberately irregular board), every cell pegged
    /// except the center.
    pub fn peg_solitaire() -> Layout {
        let mut cells = Vec::new();
        for row in 1..=7u32 {
            for column in 1..=7u32 {
                let in_cross = (3..=5).contains(&row) || (3..=5).contains(&column);
                if !in_cross {
                    continue;
                }
                let name = cell_name(column, row).expect("columns a-g are in range");
                let piece = if row == 4 && column == 4 {
                    Piece::EMPTY
                } else {
                    Piece::new(PieceKind::Peg, PieceColor::Neutral)
                };
                cells.push(CellSpec { name, piece });
            }
        }
        Layout {
            players: PlayerSetup::Single,
            cells,
        }
    }

    /// Standard chess setup; white on rows 1-2, black on rows 7-8.
    pub fn chess() -> Layout {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let cells = grid(8, 8, |row, column| match row {
            1 => Piece::new(BACK_RANK[(column - 1) as usize], PieceColor::White),
            2 => Piece::new(PieceKind::Pawn, PieceColor::White),
            7 => Piece::new(PieceKind::Pawn, PieceColor::Black),
            8 => Piece::new(BACK_RANK[(column - 1) as usize], PieceColor::Black),
            _ => Piece::EMPTY,
        });
        Layout {
            players: PlayerSetup::BlackWhite,
            cells,
        }
    }

    /// Parses a layout from its JSON representation.
    pub fn from_json(json: &str) -> Result<Layout, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a layout from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Layout, EngineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let layout = Layout::from_json(&json)?;
        info!(path = %path.display(), cells = layout.cells.len(), "layout loaded");
        Ok(layout)
    }

    /// Builds the board this layout declares.
    pub fn into_board(self) -> Result<Board, EngineError> {
        let players = self.players.players();
        Board::new(
            self.cells.into_iter().map(|cell| (cell.name, cell.piece)),
            players,
        )
    }
}

/// Full `rows × columns` grid with a piece function.
fn grid(rows: u32, columns: u32, piece_at: impl Fn(u32, u32) -> Piece) -> Vec<CellSpec> {
    let mut cells = Vec::with_capacity((rows * columns) as usize);
    for row in 1..=rows {
        for column in 1..=columns {
            cells.push(CellSpec {
                name: cell_name(column, row).expect("grid columns stay within a-z"),
                piece: piece_at(row, column),
            });
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkers_layout_places_twelve_men_per_side() {
        let layout = Layout::checkers();
        assert_eq!(layout.cells.len(), 64);
        let whites = layout.cells.iter().filter(|c| c.piece.is_white()).count();
        let blacks = layout.cells.iter().filter(|c| c.piece.is_black()).count();
        assert_eq!(whites, 12);
        assert_eq!(blacks, 12);
        // Men sit on dark squares only.
        let board = layout.into_board().unwrap();
        for (_, position) in board.positions() {
            if !position.piece().is_empty() {
                assert_eq!((position.row() + position.column()) % 2, 0);
            }
        }
    }

    #[test]
    fn solitaire_layout_is_the_33_cell_cross_with_an_empty_center() {
        let layout = Layout::peg_solitaire();
        assert_eq!(layout.cells.len(), 33);
        let pegs = layout.cells.iter().filter(|c| !c.piece.is_empty()).count();
        assert_eq!(pegs, 32);

        let board = layout.into_board().unwrap();
        let center = board.position_by_name("d4").unwrap();
        assert!(board.piece(center).is_empty());
        // Corners are holes, not empty cells.
        assert_eq!(board.position_by_name("a1"), None);
        assert_eq!(board.at(1, 1), None);
        assert_eq!(board.position_by_name("g7"), None);
    }

    #[test]
    fn chess_layout_fingerprint_matches_the_standard_setup() {
        let board = Layout::chess().into_board().unwrap();
        assert_eq!(
            board.to_string(),
            "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr"
        );
    }

    #[test]
    fn layouts_round_trip_through_json() {
        let layout = Layout::peg_solitaire();
        let json = serde_json::to_string(&layout).unwrap();
        let parsed = Layout::from_json(&json).unwrap();
        assert_eq!(parsed.cells.len(), layout.cells.len());
        assert_eq!(parsed.players, layout.players);
    }

    #[test]
    fn omitted_pieces_default_to_empty() {
        let layout = Layout::from_json(
            r#"{ "players": "single", "cells": [ { "name": "a1" } ] }"#,
        )
        .unwrap();
        assert!(layout.cells[0].piece.is_empty());
    }

    #[test]
    fn malformed_json_is_a_configuration_error() {
        assert!(matches!(
            Layout::from_json("{ not json"),
            Err(EngineError::LayoutFormat(_))
        ));
    }

    #[test]
    fn duplicate_cells_surface_at_board_construction() {
        let layout = Layout::from_json(
            r#"{ "players": "single", "cells": [ { "name": "a1" }, { "name": "a1" } ] }"#,
        )
        .unwrap();
        assert!(matches!(
            layout.into_board(),
            Err(EngineError::DuplicateCell(_))
        ));
    }
}
