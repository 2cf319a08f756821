//! # UI Widgets
//!
//! Drawing functions for the menu and the in-game view: the board grid
//! with marker highlighting, the session info panel, and the rolling
//! engine-event log fed by the presenter.

use crate::app::{App, AppMode};
use boardkit::{Board, Marker, PieceColor};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.size();
    match app.mode {
        AppMode::GameSelection => draw_menu(frame, app, area),
        AppMode::InGame => draw_game_view(frame, app, area),
    }
}

fn draw_menu(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(area);

    let mut items: Vec<ListItem> = app
        .games
        .iter()
        .map(|variant| ListItem::new(variant.title()))
        .collect();
    items.push(ListItem::new("Quit"));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Select a Game"))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[0], &mut app.game_selection_state);

    let status = app
        .status
        .as_deref()
        .unwrap_or("Use Up/Down to navigate, Enter to select, Q to quit");
    let footer = Paragraph::new(status)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(footer, chunks[1]);
}

fn draw_game_view(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_board(f, app, chunks[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    draw_info(f, app, side[0]);
    draw_events(f, app, side[1]);
}

fn draw_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(app.variant.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(session) = app.session.as_ref() else {
        f.render_widget(Paragraph::new("No active session"), inner);
        return;
    };
    let board = session.game().board();

    // Highest row on top, rank labels left, file letters below.
    let mut lines = Vec::new();
    for row in (1..=board.rows()).rev() {
        let mut spans = vec![Span::styled(
            format!("{row:>2} "),
            Style::default().fg(Color::DarkGray),
        )];
        for column in 1..=board.columns() {
            spans.push(cell_span(board, row, column));
        }
        lines.push(Line::from(spans));
    }
    let mut files = String::from("   ");
    for column in 1..=board.columns() {
        files.push((b'a' + (column - 1) as u8) as char);
        files.push(' ');
    }
    lines.push(Line::from(Span::styled(
        files,
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}

fn cell_span(board: &Board, row: u32, column: u32) -> Span<'static> {
    let Some(id) = board.at(row, column) else {
        // Holes render as blanks, not as empty cells.
        return Span::raw("  ");
    };
    let position = board.position(id);
    let piece = position.piece();

    let symbol = if piece.is_empty() {
        '·'
    } else {
        piece.code()
    };
    let mut style = match piece.color {
        PieceColor::White => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        PieceColor::Black => Style::default().fg(Color::Blue),
        PieceColor::Neutral if piece.is_empty() => Style::default().fg(Color::DarkGray),
        PieceColor::Neutral => Style::default().fg(Color::Cyan),
    };
    style = match position.marker() {
        Some(Marker::Selected) => style.bg(Color::Yellow).fg(Color::Black),
        Some(Marker::Drop) => style.bg(Color::Green).fg(Color::Black),
        Some(Marker::Remove) => style.bg(Color::Red).fg(Color::Black),
        Some(Marker::Unselectable) => style.bg(Color::Magenta).fg(Color::Black),
        Some(Marker::None) | None => style,
    };
    Span::styled(format!("{symbol} "), style)
}

fn draw_info(f: &mut Frame, app: &App, area: Rect) {
    let mut text = vec![Line::from(format!("Game: {}", app.variant.title()))];

    if let Some(session) = app.session.as_ref() {
        let board = session.game().board();
        if let Some(player) = board.current_player() {
            text.push(Line::from(format!(
                "Turn: player {} ({:?})",
                board.current_player_index() + 1,
                player.color()
            )));
        }
        let focus = session
            .focused()
            .map(|id| board.position(id).name().to_string())
            .unwrap_or_else(|| "-".to_string());
        text.push(Line::from(format!("Focus: {focus}")));
        if let Some(index) = session.current_index() {
            text.push(Line::from(format!(
                "Move: {}/{}",
                index + 1,
                session.candidate_count()
            )));
        }
    }

    text.push(Line::from(""));
    text.push(Line::from("Arrows move focus, Tab cycles moves"));
    text.push(Line::from("Enter/Space commits, R restarts"));
    text.push(Line::from("Esc for menu, Q quits"));

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Session"));
    f.render_widget(paragraph, area);
}

fn draw_events(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .session
        .as_ref()
        .map(|session| session.presenter().events())
        .unwrap_or(&[])
        .iter()
        .rev()
        .take(visible)
        .map(|event| ListItem::new(event.as_str()))
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Engine Events"));
    f.render_widget(list, area);
}
