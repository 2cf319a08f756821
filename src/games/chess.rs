//! # Chess Oracle Adapter
//!
//! Chess legality is not computed here. An opaque external rule oracle,
//! injected at construction and consumed strictly through [`ChessOracle`],
//! owns the rules; this adapter owns only the translation layer between
//! local cell names and oracle coordinates, and the discipline that keeps
//! board and oracle state in lockstep: every committed move goes to the
//! oracle *first*, and a refusal is fatal for the session rather than a
//! recoverable condition, because a divergence means the translation
//! itself is broken.
//!
//! The oracle is constructed from the board's serialized fingerprint with
//! a side-to-move / castling / en-passant suffix appended; that combined
//! string is meaningful to the oracle alone.

use tracing::warn;

use crate::board::Board;
use crate::error::EngineError;
use crate::moves::{Action, Marker, Move, Selection};
use crate::piece::Piece;
use crate::position::PositionId;
use crate::presenter::Presenter;

use super::Rules;

/// One oracle-legal move: two-character coordinates in the same
/// column-letter + row-number form as local cell names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleMove {
    pub from: String,
    pub to: String,
}

/// The oracle refused a commit.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct OracleRejection(pub String);

/// The consumed contract of the external chess rule engine.
///
/// Implementations are constructed from a board-state string by the
/// builder passed to [`ChessRules::new`]; coordinates are case-insensitive
/// and the adapter normalizes to lowercase.
pub trait ChessOracle {
    /// Legal destination moves for the piece at `from`.
    fn legal_moves(&self, from: &str) -> Vec<OracleMove>;

    /// Advances oracle-internal state by one move.
    fn commit(&mut self, mv: &OracleMove) -> Result<(), OracleRejection>;
}

/// Rules implementation that defers legality to an injected oracle.
pub struct ChessRules {
    oracle: Box<dyn ChessOracle>,
}

impl ChessRules {
    /// Builds the oracle from the board's current state.
    ///
    /// The builder receives the board fingerprint plus the side-to-move and
    /// castling/en-passant suffix, e.g. `"...rows... w KQkq - 0 1"`.
    pub fn new<F>(board: &Board, build: F) -> ChessRules
    where
        F: FnOnce(&str) -> Box<dyn ChessOracle>,
    {
        let side = board
            .current_player()
            .map(|player| player.color().as_char())
            .unwrap_or('w');
        let state = format!("{board} {side} KQkq - 0 1");
        ChessRules {
            oracle: build(&state),
        }
    }

    fn oracle_move(board: &Board, from: PositionId, to: PositionId) -> OracleMove {
        OracleMove {
            from: board.position(from).name().to_lowercase(),
            to: board.position(to).name().to_lowercase(),
        }
    }
}

impl Rules for ChessRules {
    fn possible_moves(&self, board: &Board, at: PositionId, _piece: Piece) -> Vec<Move> {
        let from = board.position(at).name().to_lowercase();
        let mut moves = Vec::new();
        for oracle_move in self.oracle.legal_moves(&from) {
            // A destination the board does not declare cannot be played
            // locally; skip it rather than fail the whole query.
            let Some(target) = board.position_by_name(&oracle_move.to.to_lowercase()) else {
                warn!(to = oracle_move.to.as_str(), "oracle destination has no local cell");
                continue;
            };
            moves.push(Move::new(
                target,
                vec![Action::Relocate { from: at, to: target }],
                vec![Selection::new(target, Marker::Drop)],
            ));
        }
        moves
    }

    fn apply_move(
        &mut self,
        board: &mut Board,
        from: PositionId,
        mv: &Move,
        presenter: &mut dyn Presenter,
    ) -> Result<PositionId, EngineError> {
        // Oracle first. If it refuses a move the local generator offered,
        // the translation layer is inconsistent and the session must stop
        // before board and oracle drift apart.
        let oracle_move = Self::oracle_move(board, from, mv.target);
        self.oracle
            .commit(&oracle_move)
            .map_err(|rejection| EngineError::OracleDivergence(rejection.to_string()))?;

        board.apply_actions(&mv.actions, presenter);
        Ok(board.switch_player(mv.target, presenter))
    }
}
