//! # Board
//!
//! The board owns every position of a game session. Construction takes a
//! flat list of declared cells, indexes them by name (duplicates are a
//! fatal configuration error), resolves each cell's 8 neighbor links
//! through the name index, and lays the cells into a dense row×column grid
//! sized to the maximum coordinates observed. Grid slots without a backing
//! position are legitimate holes: boards need not be rectangles, and holes
//! still occupy their slot for serialization purposes.
//!
//! The board also owns the ordered player list and the current-turn index,
//! applies move actions in order, and serializes itself to the run-length
//! fingerprint consumed verbatim by the chess oracle adapter.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::EngineError;
use crate::location::Location;
use crate::moves::{Action, Marker};
use crate::piece::Piece;
use crate::player::Player;
use crate::position::{Direction, Position, PositionId};
use crate::presenter::Presenter;

/// The position arena, adjacency graph, and turn state of one game session.
///
/// A board is constructed once per session and never resized. It strictly
/// owns its positions; ids handed out are only valid against this board.
pub struct Board {
    positions: Vec<Position>,
    by_name: HashMap<String, PositionId>,
    rows: u32,
    columns: u32,
    /// Row-major `rows × columns` grid; `None` slots are holes.
    grid: Vec<Option<PositionId>>,
    players: Vec<Player>,
    current: usize,
}

impl Board {
    /// Builds a board from declared cells and a player list.
    ///
    /// Fails fast on configuration errors: a cell name that does not parse,
    /// or two cells sharing a name. Silently dropping either would corrupt
    /// the adjacency graph, so setup aborts instead.
    pub fn new(
        cells: impl IntoIterator<Item = (String, Piece)>,
        players: Vec<Player>,
    ) -> Result<Board, EngineError> {
        let mut positions = Vec::new();
        let mut by_name = HashMap::new();
        let mut locations = Vec::new();
        let mut rows = 0;
        let mut columns = 0;

        for (name, piece) in cells {
            let location = Location::parse(&name)
                .filter(|location| location.row >= 1)
                .ok_or_else(|| EngineError::MalformedCellName(name.clone()))?;
            let id = PositionId(positions.len());
            if by_name.insert(name.clone(), id).is_some() {
                return Err(EngineError::DuplicateCell(name));
            }
            rows = rows.max(location.row);
            columns = columns.max(location.column);
            positions.push(Position {
                name,
                row: location.row,
                column: location.column,
                piece,
                neighbors: [None; 8],
                marker: None,
            });
            locations.push(location);
        }

        // Resolve neighbor links through the name index. Derived names that
        // no declared cell carries stay unresolved (edges and holes).
        for (position, location) in positions.iter_mut().zip(&locations) {
            for direction in Direction::ALL {
                position.neighbors[direction.index()] = location
                    .neighbor(direction)
                    .and_then(|name| by_name.get(name).copied());
            }
        }

        let mut grid = vec![None; (rows * columns) as usize];
        for (index, position) in positions.iter().enumerate() {
            let slot = ((position.row - 1) * columns + (position.column - 1)) as usize;
            grid[slot] = Some(PositionId(index));
        }

        debug!(rows, columns, cells = positions.len(), "board built");

        Ok(Board {
            positions,
            by_name,
            rows,
            columns,
            grid,
            players,
            current: 0,
        })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// The position behind an id issued by this board.
    pub fn position(&self, id: PositionId) -> &Position {
        &self.positions[id.0]
    }

    /// Pure name lookup; `None` is the explicit "absent" default every
    /// caller checks before dereferencing.
    pub fn position_by_name(&self, name: &str) -> Option<PositionId> {
        self.by_name.get(name).copied()
    }

    /// The position at 1-based grid coordinates, or `None` for holes and
    /// out-of-range coordinates.
    pub fn at(&self, row: u32, column: u32) -> Option<PositionId> {
        if row == 0 || column == 0 || row > self.rows || column > self.columns {
            return None;
        }
        self.grid[((row - 1) * self.columns + (column - 1)) as usize]
    }

    /// All positions in arena order.
    pub fn positions(&self) -> impl Iterator<Item = (PositionId, &Position)> {
        self.positions
            .iter()
            .enumerate()
            .map(|(index, position)| (PositionId(index), position))
    }

    /// Resolved neighbor of `id` in `direction`.
    pub fn neighbor(&self, id: PositionId, direction: Direction) -> Option<PositionId> {
        self.position(id).neighbor(direction)
    }

    /// The piece at a cell (possibly [`Piece::EMPTY`]).
    pub fn piece(&self, id: PositionId) -> Piece {
        self.position(id).piece
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player_index(&self) -> usize {
        self.current
    }

    /// The player whose turn it is. The wrap-on-increment invariant keeps
    /// the index in range, but the sentinel is guarded regardless.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    /// Executes actions strictly in declaration order, notifying the
    /// presenter of every piece that appears or disappears.
    pub fn apply_actions(&mut self, actions: &[Action], presenter: &mut dyn Presenter) {
        for action in actions {
            self.apply_action(*action, presenter);
        }
    }

    fn apply_action(&mut self, action: Action, presenter: &mut dyn Presenter) {
        match action {
            Action::Remove { at } => {
                debug!(at = self.positions[at.0].name.as_str(), "remove action");
                let position = &mut self.positions[at.0];
                if !position.piece.is_empty() {
                    position.piece = Piece::EMPTY;
                    presenter.destroy_piece(&self.positions[at.0].name);
                }
            }
            Action::Relocate { from, to } => {
                debug!(
                    from = self.positions[from.0].name.as_str(),
                    to = self.positions[to.0].name.as_str(),
                    "relocate action"
                );
                let piece = self.positions[from.0].piece;
                if !self.positions[to.0].piece.is_empty() {
                    presenter.destroy_piece(&self.positions[to.0].name);
                }
                self.positions[from.0].piece = Piece::EMPTY;
                presenter.destroy_piece(&self.positions[from.0].name);
                self.positions[to.0].piece = piece;
                presenter.instantiate_piece(piece, &self.positions[to.0].name);
            }
        }
    }

    /// Places a marker intent on a cell and notifies the presenter.
    pub fn show_marker(&mut self, at: PositionId, marker: Marker, presenter: &mut dyn Presenter) {
        self.positions[at.0].marker = Some(marker);
        presenter.show_marker(&self.positions[at.0].name, marker);
    }

    /// Clears a cell's marker and notifies the presenter.
    pub fn clear_marker(&mut self, at: PositionId, presenter: &mut dyn Presenter) {
        if self.positions[at.0].marker.take().is_some() {
            presenter.remove_marker(&self.positions[at.0].name);
        }
    }

    /// Rotates the turn: records the outgoing player's last visited cell,
    /// advances the index with wraparound, notifies the presenter of the
    /// identity change, and returns the cell focus should land on.
    pub fn switch_player(&mut self, last: PositionId, presenter: &mut dyn Presenter) -> PositionId {
        if let Some(player) = self.players.get_mut(self.current) {
            player.set_last_visited(last);
        }

        if !self.players.is_empty() {
            self.current = (self.current + 1) % self.players.len();
        }

        if let Some(player) = self.current_player() {
            debug!(player = self.current, color = ?player.color(), "turn rotated");
            presenter.switch_player_view(self.current, player.color());
        }

        last
    }
}

/// Canonical board fingerprint: row-major from row 0, rows separated by
/// `/`, runs of empty-or-absent cells as decimal counts, occupied cells as
/// their single-character piece code. Cell absence and cell-present-but-
/// empty serialize identically, so sparse boards still produce a valid
/// fixed-width serialization.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=self.rows {
            if row > 1 {
                write!(f, "/")?;
            }
            let mut empty_run = 0u32;
            for column in 1..=self.columns {
                let piece = self.at(row, column).map(|id| self.piece(id));
                match piece {
                    Some(piece) if !piece.is_empty() => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", piece.code())?;
                    }
                    _ => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{PieceColor, PieceKind};
    use crate::presenter::NullPresenter;

    fn cell(name: &str) -> (String, Piece) {
        (name.to_string(), Piece::EMPTY)
    }

    fn occupied(name: &str, kind: PieceKind, color: PieceColor) -> (String, Piece) {
        (name.to_string(), Piece::new(kind, color))
    }

    #[test]
    fn every_supplied_position_is_retrievable_by_its_own_name() {
        let names = ["a1", "b1", "a2", "b2", "c7"];
        let board = Board::new(names.into_iter().map(cell), Player::single()).unwrap();
        for name in names {
            let id = board.position_by_name(name).unwrap();
            assert_eq!(board.position(id).name(), name);
        }
        assert_eq!(board.position_by_name("d4"), None);
    }

    #[test]
    fn duplicate_names_are_fatal() {
        let result = Board::new(
            vec![cell("a1"), cell("b1"), cell("a1")],
            Player::single(),
        );
        assert!(matches!(result, Err(EngineError::DuplicateCell(name)) if name == "a1"));
    }

    #[test]
    fn malformed_names_are_fatal() {
        let result = Board::new(vec![cell("a1"), cell("1a")], Player::single());
        assert!(matches!(result, Err(EngineError::MalformedCellName(name)) if name == "1a"));

        // "a0" parses as a location but can never sit on a 1-based board.
        let result = Board::new(vec![cell("a0")], Player::single());
        assert!(matches!(result, Err(EngineError::MalformedCellName(_))));
    }

    #[test]
    fn neighbor_resolution_is_symmetric_where_both_cells_exist() {
        let board = Board::new(
            vec![cell("a1"), cell("a2"), cell("b1"), cell("b2")],
            Player::single(),
        )
        .unwrap();
        for (id, position) in board.positions() {
            if let Some(forward) = position.neighbor(Direction::Forward) {
                assert_eq!(board.position(forward).neighbor(Direction::Back), Some(id));
            }
            if let Some(right) = position.neighbor(Direction::Right) {
                assert_eq!(board.position(right).neighbor(Direction::Left), Some(id));
            }
        }
    }

    #[test]
    fn neighbors_across_holes_stay_unresolved() {
        // b2 is missing: a2's right neighbor and b1's forward neighbor are
        // absent even though the derived names are well-formed.
        let board = Board::new(vec![cell("a1"), cell("a2"), cell("b1")], Player::single()).unwrap();
        let a2 = board.position_by_name("a2").unwrap();
        let b1 = board.position_by_name("b1").unwrap();
        assert_eq!(board.neighbor(a2, Direction::Right), None);
        assert_eq!(board.neighbor(b1, Direction::Forward), None);
        assert_eq!(board.at(2, 2), None);
    }

    #[test]
    fn fingerprint_run_length_encodes_empty_and_absent_alike() {
        // Row 1: [empty, empty, pawn, empty] -> "2p1".
        let board = Board::new(
            vec![
                cell("a1"),
                cell("b1"),
                occupied("c1", PieceKind::Pawn, PieceColor::Black),
                cell("d1"),
            ],
            Player::single(),
        )
        .unwrap();
        assert_eq!(board.to_string(), "2p1");
    }

    #[test]
    fn fingerprint_all_empty_row_is_a_single_count() {
        let names = ["a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1"];
        let board = Board::new(names.into_iter().map(cell), Player::single()).unwrap();
        assert_eq!(board.to_string(), "8");
    }

    #[test]
    fn fingerprint_spans_rows_and_holes() {
        // 2x2 grid where b1 is a hole; white man at a2.
        let board = Board::new(
            vec![
                cell("a1"),
                cell("b2"),
                occupied("a2", PieceKind::Man, PieceColor::White),
            ],
            Player::single(),
        )
        .unwrap();
        assert_eq!(board.to_string(), "2/M1");
    }

    #[test]
    fn removing_an_empty_cell_twice_is_a_no_op() {
        let mut board = Board::new(
            vec![occupied("a1", PieceKind::Peg, PieceColor::Neutral)],
            Player::single(),
        )
        .unwrap();
        let a1 = board.position_by_name("a1").unwrap();
        let mut presenter = NullPresenter;

        board.apply_actions(&[Action::Remove { at: a1 }], &mut presenter);
        assert!(board.piece(a1).is_empty());
        board.apply_actions(&[Action::Remove { at: a1 }], &mut presenter);
        assert!(board.piece(a1).is_empty());
    }

    #[test]
    fn relocate_clobbers_the_target() {
        let mut board = Board::new(
            vec![
                occupied("a1", PieceKind::Man, PieceColor::White),
                occupied("b1", PieceKind::Man, PieceColor::Black),
            ],
            Player::black_white(),
        )
        .unwrap();
        let a1 = board.position_by_name("a1").unwrap();
        let b1 = board.position_by_name("b1").unwrap();

        board.apply_actions(&[Action::Relocate { from: a1, to: b1 }], &mut NullPresenter);
        assert!(board.piece(a1).is_empty());
        assert!(board.piece(b1).is_white());
    }

    #[test]
    fn turn_rotation_wraps_and_records_last_visited() {
        let mut board = Board::new(vec![cell("a1"), cell("b1")], Player::black_white()).unwrap();
        let a1 = board.position_by_name("a1").unwrap();
        let b1 = board.position_by_name("b1").unwrap();

        assert_eq!(board.current_player().unwrap().color(), PieceColor::White);
        let focus = board.switch_player(a1, &mut NullPresenter);
        assert_eq!(focus, a1);
        assert_eq!(board.current_player().unwrap().color(), PieceColor::Black);
        assert_eq!(board.players()[0].last_visited(), Some(a1));

        board.switch_player(b1, &mut NullPresenter);
        assert_eq!(board.current_player().unwrap().color(), PieceColor::White);
        assert_eq!(board.players()[1].last_visited(), Some(b1));
    }
}
