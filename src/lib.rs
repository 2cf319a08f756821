//! # Boardkit: a turn-based board-game rule engine
//!
//! A board of named, spatially-linked cells holding at most one piece
//! each; a pluggable move-generation contract specialized per game
//! variant; and a selection state machine that lets a user pick a piece,
//! browse among its legal destinations, and commit one.
//!
//! ## Architecture
//! - [`Location`] decodes `"a1"`-style cell names and derives the 8
//!   neighboring names; [`Board`] resolves those names into an index-based
//!   adjacency graph over its position arena at construction time.
//! - [`games::Rules`] is the per-variant move-generation capability; a
//!   [`games::Game`] pairs one board with one rules instance for a session.
//! - [`Interactions`] drives the select → browse → confirm loop and keeps
//!   the display marker set consistent through every transition, talking
//!   to the outside world only through the [`Presenter`] contract.
//!
//! ## Variants
//! Checkers (two-player capture game), peg solitaire (single-player jump
//! game), and chess, which delegates legality to an external rule
//! oracle consumed through [`games::chess::ChessOracle`].
//!
//! Everything is single-threaded and synchronous: every operation runs to
//! completion before the next input is accepted, and a committed move
//! applies all of its actions in order before the turn rotates.

pub mod board;
pub mod error;
pub mod games;
pub mod interactions;
pub mod layout;
pub mod location;
pub mod moves;
pub mod piece;
pub mod player;
pub mod position;
pub mod presenter;

pub use board::Board;
pub use error::EngineError;
pub use games::{Game, Rules};
pub use interactions::Interactions;
pub use layout::{CellSpec, Layout, PlayerSetup};
pub use location::Location;
pub use moves::{Action, Marker, Move, Selection};
pub use piece::{Piece, PieceColor, PieceKind};
pub use player::Player;
pub use position::{Direction, Position, PositionId};
pub use presenter::{NullPresenter, Presenter};
