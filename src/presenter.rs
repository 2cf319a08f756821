//! # Presenter Contract
//!
//! The engine does not render anything. Whenever selection state or board
//! state changes, it notifies a [`Presenter`], the consumed contract of
//! whatever realizes markers and pieces visually (a terminal grid, a scene
//! graph, a logger). Cells are identified by name, the one currency that is
//! stable outside the engine.
//!
//! All methods default to no-ops so a presenter implements only the
//! notifications it can realize. [`NullPresenter`] is the headless
//! implementation used by tests and batch tooling.

use crate::moves::Marker;
use crate::piece::{Piece, PieceColor};

/// Rendering-side collaborator notified of display-relevant state changes.
pub trait Presenter {
    /// A marker intent was placed on a cell.
    fn show_marker(&mut self, _cell: &str, _marker: Marker) {}

    /// A cell's marker was cleared.
    fn remove_marker(&mut self, _cell: &str) {}

    /// A piece came into existence at a cell.
    fn instantiate_piece(&mut self, _piece: Piece, _cell: &str) {}

    /// The piece at a cell ceased to exist there.
    fn destroy_piece(&mut self, _cell: &str) {}

    /// The turn rotated; the view should follow the new player.
    fn switch_player_view(&mut self, _player: usize, _color: PieceColor) {}
}

/// Presenter that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}
