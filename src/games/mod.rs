//! # Game Variants
//!
//! Each variant of the engine supplies its own move generation through the
//! [`Rules`] trait, the one capability interface the board, the selection
//! state machine, and the frontend all program against.
//!
//! ## Supported Variants
//! - **Checkers**: two-player capture game on the forward diagonals
//! - **Peg solitaire**: single-player orthogonal jump game
//! - **Chess**: move legality delegated to an injected external rule oracle
//!
//! ## Adding New Variants
//! Implement [`Rules`] (move generation is mandatory, `can_move` and
//! `apply_move` have sensible defaults), pick a board layout, and wire the
//! pair into a [`Game`].

pub mod checkers;
pub mod chess;
pub mod solitaire;

use crate::board::Board;
use crate::error::EngineError;
use crate::moves::Move;
use crate::piece::Piece;
use crate::position::PositionId;
use crate::presenter::Presenter;

/// Per-variant move-generation strategy.
///
/// Generation must be pure: callers re-query it freely for display purposes
/// and expect no side effects. Application may carry variant state (the
/// chess adapter advances its oracle here), which is why it takes `&mut
/// self`.
pub trait Rules {
    /// All legal moves for `piece` sitting at `at`. The base contract
    /// yields no moves; variants override.
    fn possible_moves(&self, _board: &Board, _at: PositionId, _piece: Piece) -> Vec<Move> {
        Vec::new()
    }

    /// Existence check for legal moves. The default delegates to
    /// [`Rules::possible_moves`]; variants may override with something
    /// cheaper.
    fn can_move(&self, board: &Board, at: PositionId, piece: Piece) -> bool {
        !self.possible_moves(board, at, piece).is_empty()
    }

    /// Applies a committed move: executes its actions in order and returns
    /// the cell focus should land on. Variants wrap this to rotate the turn
    /// or to keep an external oracle in lockstep.
    fn apply_move(
        &mut self,
        board: &mut Board,
        _from: PositionId,
        mv: &Move,
        presenter: &mut dyn Presenter,
    ) -> Result<PositionId, EngineError> {
        board.apply_actions(&mv.actions, presenter);
        Ok(mv.target)
    }
}

/// A session: one board paired with the rules that govern it.
///
/// All queries and mutations flow through here so the rules see every
/// operation. Turn state lives on the board, session-scoped; there is no
/// ambient global.
pub struct Game {
    board: Board,
    rules: Box<dyn Rules>,
}

impl Game {
    pub fn new(board: Board, rules: Box<dyn Rules>) -> Game {
        Game { board, rules }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Legal moves for the piece currently at `at`. Pure.
    pub fn possible_moves(&self, at: PositionId) -> Vec<Move> {
        let piece = self.board.piece(at);
        self.rules.possible_moves(&self.board, at, piece)
    }

    /// Whether the piece currently at `at` has any legal move.
    pub fn can_move(&self, at: PositionId) -> bool {
        let piece = self.board.piece(at);
        self.rules.can_move(&self.board, at, piece)
    }

    /// Commits a move originating at `from` and returns the cell focus
    /// should land on.
    pub fn apply_move(
        &mut self,
        from: PositionId,
        mv: &Move,
        presenter: &mut dyn Presenter,
    ) -> Result<PositionId, EngineError> {
        self.rules.apply_move(&mut self.board, from, mv, presenter)
    }
}
