//! # Input Handling
//!
//! Maps raw key presses onto the engine's discrete command vocabulary
//! (select, next, confirm, nudge) plus frontend navigation. The engine
//! itself has no notion of input devices; this module is the whole
//! translation.

use crate::app::{App, AppMode};
use boardkit::Direction;
use crossterm::event::KeyCode;

/// Routes a key press to the handler for the active screen.
pub fn handle_key_press(app: &mut App, key_code: KeyCode) {
    match app.mode {
        AppMode::GameSelection => handle_menu_input(app, key_code),
        AppMode::InGame => handle_game_input(app, key_code),
    }
}

fn handle_menu_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up => app.select_prev_game(),
        KeyCode::Down => app.select_next_game(),
        KeyCode::Enter => {
            let Some(selected) = app.game_selection_state.selected() else {
                return;
            };
            if let Some(&variant) = app.games.get(selected) {
                if let Err(error) = app.start_game(variant) {
                    app.fail_session(error);
                }
            } else {
                // The entry past the variants is Quit.
                app.should_quit = true;
            }
        }
        _ => {}
    }
}

fn handle_game_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => app.mode = AppMode::GameSelection,
        KeyCode::Char('r') => app.restart(),
        KeyCode::Up => nudge(app, Direction::Forward),
        KeyCode::Down => nudge(app, Direction::Back),
        KeyCode::Left => nudge(app, Direction::Left),
        KeyCode::Right => nudge(app, Direction::Right),
        KeyCode::Tab => {
            if let Some(session) = app.session.as_mut() {
                session.next();
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => confirm(app),
        _ => {}
    }
}

fn nudge(app: &mut App, direction: Direction) {
    if let Some(session) = app.session.as_mut() {
        session.nudge(direction);
    }
}

fn confirm(app: &mut App) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    // A confirm with nothing to commit is a silent no-op inside the
    // engine; an error is an internal consistency violation and ends the
    // session.
    if let Err(error) = session.confirm() {
        app.fail_session(error);
    }
}
