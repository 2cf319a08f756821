//! # Application State
//!
//! State for the terminal frontend: which screen is active, the menu
//! selection, and the running game session (an [`Interactions`] machine
//! over a [`TuiPresenter`]). The frontend exposes the two variants that
//! need no external collaborator; chess requires an injected rule oracle
//! and is driven through the library API instead.

use boardkit::games::checkers::CheckersRules;
use boardkit::games::solitaire::SolitaireRules;
use boardkit::{
    EngineError, Game, Interactions, Layout, Marker, Piece, PieceColor, PositionId, Presenter,
};
use ratatui::widgets::ListState;

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    GameSelection,
    InGame,
}

/// The variants playable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Checkers,
    Solitaire,
}

impl Variant {
    pub fn title(self) -> &'static str {
        match self {
            Variant::Checkers => "Checkers",
            Variant::Solitaire => "Peg Solitaire",
        }
    }
}

/// Presenter that keeps a rolling log of engine notifications for the
/// events panel. Markers themselves are rendered straight from board
/// state, so the marker notifications are logged rather than mirrored.
#[derive(Debug, Default)]
pub struct TuiPresenter {
    events: Vec<String>,
}

const EVENT_LOG_LIMIT: usize = 50;

impl TuiPresenter {
    pub fn events(&self) -> &[String] {
        &self.events
    }

    fn log(&mut self, event: String) {
        self.events.push(event);
        if self.events.len() > EVENT_LOG_LIMIT {
            let overflow = self.events.len() - EVENT_LOG_LIMIT;
            self.events.drain(..overflow);
        }
    }
}

impl Presenter for TuiPresenter {
    fn show_marker(&mut self, cell: &str, marker: Marker) {
        self.log(format!("marker {marker:?} on {cell}"));
    }

    fn remove_marker(&mut self, cell: &str) {
        self.log(format!("marker off {cell}"));
    }

    fn instantiate_piece(&mut self, piece: Piece, cell: &str) {
        self.log(format!("piece {} to {cell}", piece.code()));
    }

    fn destroy_piece(&mut self, cell: &str) {
        self.log(format!("piece off {cell}"));
    }

    fn switch_player_view(&mut self, player: usize, color: PieceColor) {
        self.log(format!("turn: player {} ({:?})", player + 1, color));
    }
}

/// The main application state.
pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub games: Vec<Variant>,
    pub game_selection_state: ListState,
    pub variant: Variant,
    pub session: Option<Interactions<TuiPresenter>>,
    pub status: Option<String>,
    chained_captures: bool,
    layout_override: Option<Layout>,
}

impl App {
    /// Creates the app; an explicitly requested variant skips the menu.
    pub fn new(
        variant: Option<Variant>,
        layout_override: Option<Layout>,
        chained_captures: bool,
    ) -> Result<App, EngineError> {
        let mut state = ListState::default();
        state.select(Some(0));
        let mut app = App {
            should_quit: false,
            mode: AppMode::GameSelection,
            games: vec![Variant::Checkers, Variant::Solitaire],
            game_selection_state: state,
            variant: variant.unwrap_or(Variant::Checkers),
            session: None,
            status: None,
            chained_captures,
            layout_override,
        };
        if variant.is_some() {
            app.start_game(app.variant)?;
        }
        Ok(app)
    }

    /// Builds the layout a session of `variant` starts from.
    pub fn layout_for(&self, variant: Variant) -> Layout {
        match &self.layout_override {
            Some(layout) => layout.clone(),
            None => match variant {
                Variant::Checkers => Layout::checkers(),
                Variant::Solitaire => Layout::peg_solitaire(),
            },
        }
    }

    /// Starts a fresh session of `variant` and focuses a sensible cell.
    pub fn start_game(&mut self, variant: Variant) -> Result<(), EngineError> {
        let board = self.layout_for(variant).into_board()?;
        let game = match variant {
            Variant::Checkers => Game::new(
                board,
                Box::new(CheckersRules::with_chained_captures(self.chained_captures)),
            ),
            Variant::Solitaire => Game::new(board, Box::new(SolitaireRules::new())),
        };

        let mut session = Interactions::new(game, TuiPresenter::default());
        if let Some(start) = initial_focus(session.game()) {
            session.select(start);
        }

        self.variant = variant;
        self.session = Some(session);
        self.mode = AppMode::InGame;
        self.status = None;
        Ok(())
    }

    /// Restarts the current variant from its starting layout.
    pub fn restart(&mut self) {
        if let Err(error) = self.start_game(self.variant) {
            self.fail_session(error);
        }
    }

    /// Abandons the session after a fatal engine error.
    pub fn fail_session(&mut self, error: EngineError) {
        self.status = Some(error.to_string());
        self.session = None;
        self.mode = AppMode::GameSelection;
    }

    pub fn select_next_game(&mut self) {
        let len = self.games.len() + 1; // + Quit entry
        let next = match self.game_selection_state.selected() {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.game_selection_state.select(Some(next));
    }

    pub fn select_prev_game(&mut self) {
        let len = self.games.len() + 1;
        let prev = match self.game_selection_state.selected() {
            Some(0) | None => len - 1,
            Some(index) => index - 1,
        };
        self.game_selection_state.select(Some(prev));
    }
}

/// First cell worth focusing when a session starts: the first current-player
/// piece that can move, else the first current-player piece, else the first
/// declared cell.
fn initial_focus(game: &Game) -> Option<PositionId> {
    let board = game.board();
    let owned: Vec<PositionId> = board
        .positions()
        .filter(|(_, position)| {
            board
                .current_player()
                .is_some_and(|player| player.owns(position.piece()))
        })
        .map(|(id, _)| id)
        .collect();

    owned
        .iter()
        .copied()
        .find(|&id| game.can_move(id))
        .or_else(|| owned.first().copied())
        .or_else(|| board.positions().map(|(id, _)| id).next())
}
