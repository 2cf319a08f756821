//! # Boardkit Arena
//!
//! Interactive terminal frontend for the boardkit rule engine. Pick a
//! variant from the menu (or name one on the command line), move the focus
//! with the arrow keys, cycle candidate moves with Tab, and commit with
//! Enter.
//!
//! ## Usage
//! - `play`: open the variant menu
//! - `play --game checkers --chained-captures`: straight into checkers
//!   with multi-jump turns
//! - `play --game solitaire --dump`: print the board and its fingerprint
//!   without entering the TUI
//! - `play --layout cross.json --game solitaire`: custom board layout

mod app;
mod tui;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use app::{App, Variant};
use boardkit::{Board, Layout, PieceColor};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Variant to start immediately: "checkers" or "solitaire"
    #[clap(short, long)]
    game: Option<String>,

    /// Custom board layout (JSON) used instead of the built-in one
    #[clap(short, long)]
    layout: Option<PathBuf>,

    /// Keep the turn after a capture while another jump is available
    #[clap(long, action = clap::ArgAction::SetTrue)]
    chained_captures: bool,

    /// Print the starting board and its fingerprint instead of playing
    #[clap(long, action = clap::ArgAction::SetTrue)]
    dump: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let variant = match args.game.as_deref() {
        None => None,
        Some("checkers") => Some(Variant::Checkers),
        Some("solitaire") => Some(Variant::Solitaire),
        Some(other) => bail!("unknown game type: {other}"),
    };

    let layout_override = match &args.layout {
        Some(path) => Some(
            Layout::from_file(path)
                .with_context(|| format!("loading layout {}", path.display()))?,
        ),
        None => None,
    };

    if args.dump {
        let variant = variant.unwrap_or(Variant::Checkers);
        let layout = layout_override.unwrap_or_else(|| match variant {
            Variant::Checkers => Layout::checkers(),
            Variant::Solitaire => Layout::peg_solitaire(),
        });
        let board = layout.into_board().context("building board")?;
        dump_board(&board);
        return Ok(());
    }

    let mut app = App::new(variant, layout_override, args.chained_captures)
        .context("starting session")?;
    tui::run(&mut app)?;
    Ok(())
}

/// Prints the board grid (highest row on top) and its fingerprint.
fn dump_board(board: &Board) {
    for row in (1..=board.rows()).rev() {
        let mut line = format!("{row:>2} ");
        for column in 1..=board.columns() {
            let cell = match board.at(row, column) {
                None => "  ".normal(),
                Some(id) => {
                    let piece = board.piece(id);
                    let text = format!("{} ", if piece.is_empty() { '·' } else { piece.code() });
                    match piece.color {
                        _ if piece.is_empty() => text.dimmed(),
                        PieceColor::White => text.bright_white().bold(),
                        PieceColor::Black => text.blue(),
                        PieceColor::Neutral => text.yellow(),
                    }
                }
            };
            line.push_str(&cell.to_string());
        }
        println!("{line}");
    }
    let mut files = String::from("   ");
    for column in 1..=board.columns() {
        files.push((b'a' + (column - 1) as u8) as char);
        files.push(' ');
    }
    println!("{}", files.dimmed());
    println!();
    println!("fingerprint: {board}");
}
