//! End-to-end properties of the engine over the full built-in layouts:
//! construction invariants, fingerprints, and complete select → browse →
//! confirm interaction flows.

use boardkit::games::checkers::CheckersRules;
use boardkit::games::solitaire::SolitaireRules;
use boardkit::{
    Board, Direction, Game, Interactions, Layout, Marker, NullPresenter, Piece, PieceColor,
    PieceKind, Player,
};

fn checkers_session() -> Interactions<NullPresenter> {
    let board = Layout::checkers().into_board().unwrap();
    Interactions::new(
        Game::new(board, Box::new(CheckersRules::new())),
        NullPresenter,
    )
}

fn solitaire_session() -> Interactions<NullPresenter> {
    let board = Layout::peg_solitaire().into_board().unwrap();
    Interactions::new(
        Game::new(board, Box::new(SolitaireRules::new())),
        NullPresenter,
    )
}

#[test]
fn every_layout_cell_is_retrievable_by_its_own_name_and_no_other() {
    for layout in [Layout::checkers(), Layout::peg_solitaire(), Layout::chess()] {
        let names: Vec<String> = layout.cells.iter().map(|cell| cell.name.clone()).collect();
        let board = layout.into_board().unwrap();
        for name in &names {
            let id = board.position_by_name(name).unwrap();
            assert_eq!(board.position(id).name(), name);
        }
        assert_eq!(board.positions().count(), names.len());
    }
}

#[test]
fn adjacency_is_symmetric_across_the_whole_cross_board() {
    let board = Layout::peg_solitaire().into_board().unwrap();
    let pairs = [
        (Direction::Forward, Direction::Back),
        (Direction::Back, Direction::Forward),
        (Direction::Left, Direction::Right),
        (Direction::Right, Direction::Left),
        (Direction::ForwardLeft, Direction::BackRight),
        (Direction::BackRight, Direction::ForwardLeft),
        (Direction::ForwardRight, Direction::BackLeft),
        (Direction::BackLeft, Direction::ForwardRight),
    ];
    for (id, position) in board.positions() {
        for (there, back) in pairs {
            if let Some(neighbor) = position.neighbor(there) {
                assert_eq!(
                    board.position(neighbor).neighbor(back),
                    Some(id),
                    "asymmetric link at {}",
                    position.name()
                );
            }
        }
    }
}

#[test]
fn starting_fingerprints_are_stable() {
    assert_eq!(
        Layout::checkers().into_board().unwrap().to_string(),
        "M1M1M1M1/1M1M1M1M/M1M1M1M1/8/8/1m1m1m1m/m1m1m1m1/1m1m1m1m"
    );
    assert_eq!(
        Layout::peg_solitaire().into_board().unwrap().to_string(),
        "2ooo2/2ooo2/ooooooo/ooo1ooo/ooooooo/2ooo2/2ooo2"
    );
    assert_eq!(
        Layout::chess().into_board().unwrap().to_string(),
        "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr"
    );
}

#[test]
fn a_full_checkers_exchange_rotates_turns_and_updates_the_fingerprint() {
    let mut session = checkers_session();

    // White opens: the man on a3 has exactly one step, to b4.
    assert!(session.select_name("a3"));
    assert_eq!(session.candidate_count(), 1);
    session.confirm().unwrap();

    let board = session.game().board();
    let b4 = board.position_by_name("b4").unwrap();
    assert!(board.piece(b4).is_white());
    assert_eq!(
        board.current_player().unwrap().color(),
        PieceColor::Black
    );
    assert_eq!(
        board.to_string(),
        "M1M1M1M1/1M1M1M1M/2M1M1M1/1M6/8/1m1m1m1m/m1m1m1m1/1m1m1m1m"
    );

    // Focus followed the moved piece, which now belongs to the idle side.
    assert_eq!(session.focused(), Some(b4));
    assert!(!session.game().can_move(b4));

    // Black answers: b6 has both diagonals free.
    assert!(session.select_name("b6"));
    assert_eq!(session.candidate_count(), 2);
    session.confirm().unwrap();
    assert_eq!(
        session.game().board().current_player().unwrap().color(),
        PieceColor::White
    );
}

#[test]
fn browsing_candidates_never_leaks_markers_between_moves() {
    let mut session = checkers_session();
    session.select_name("c3");
    assert_eq!(session.candidate_count(), 2);

    // Wrap through all candidates; the marker set is always focus + the
    // current candidate's drop cell.
    for _ in 0..2 {
        let marked: Vec<String> = session
            .game()
            .board()
            .positions()
            .filter(|(_, p)| p.marker().is_some())
            .map(|(_, p)| p.name().to_string())
            .collect();
        assert_eq!(marked.len(), 2);
        assert!(marked.contains(&"c3".to_string()));
        session.next();
    }
    assert_eq!(session.current_index(), Some(0));
}

#[test]
fn the_first_solitaire_jump_crosses_into_the_center() {
    let mut session = solitaire_session();

    // d2 has a single jump: over d3 into the empty center d4.
    assert!(session.select_name("d2"));
    assert_eq!(session.candidate_count(), 1);
    session.confirm().unwrap();

    let board = session.game().board();
    let d2 = board.position_by_name("d2").unwrap();
    let d3 = board.position_by_name("d3").unwrap();
    let d4 = board.position_by_name("d4").unwrap();
    assert!(board.piece(d2).is_empty());
    assert!(board.piece(d3).is_empty());
    assert_eq!(board.piece(d4).kind, PieceKind::Peg);

    // Focus landed on the center; 32 pegs became 31.
    assert_eq!(session.focused(), Some(d4));
    let pegs = board
        .positions()
        .filter(|(_, p)| !p.piece().is_empty())
        .count();
    assert_eq!(pegs, 31);
}

#[test]
fn solitaire_jumps_never_target_holes() {
    let session = solitaire_session();
    let board = session.game().board();

    // b3 sits next to the cross edge: jumping left over a3 would land on a
    // nonexistent column, and no such move is generated anywhere.
    for (id, _) in board.positions() {
        for mv in session.game().possible_moves(id) {
            assert!(board
                .positions()
                .any(|(candidate, _)| candidate == mv.target));
        }
    }
}

#[test]
fn chained_captures_walk_a_double_jump_through_reselection() {
    // 6x6 board: white at b2, black at c3 and c5. With chaining on, one
    // confirm jumps to d4 and keeps the turn; the auto-reselect offers the
    // second jump to b6 immediately.
    let mut cells = Vec::new();
    for row in 1..=6u32 {
        for column in 1..=6u32 {
            let name = format!("{}{row}", (b'a' + (column - 1) as u8) as char);
            let piece = match name.as_str() {
                "b2" => Piece::new(PieceKind::Man, PieceColor::White),
                "c3" | "c5" => Piece::new(PieceKind::Man, PieceColor::Black),
                _ => Piece::EMPTY,
            };
            cells.push((name, piece));
        }
    }
    let board = Board::new(cells, Player::black_white()).unwrap();
    let mut session = Interactions::new(
        Game::new(board, Box::new(CheckersRules::with_chained_captures(true))),
        NullPresenter,
    );

    session.select_name("b2");
    // Only the capture is offered along forward-right; forward-left is a
    // step. Find and commit the capture.
    while !session.current_move().unwrap().is_capture() {
        session.next();
    }
    session.confirm().unwrap();

    // Turn held, focus on d4, follow-up capture already selected.
    let board = session.game().board();
    assert_eq!(board.current_player().unwrap().color(), PieceColor::White);
    assert_eq!(session.focused(), board.position_by_name("d4"));
    assert!(session.current_move().is_some());

    while !session.current_move().unwrap().is_capture() {
        session.next();
    }
    session.confirm().unwrap();

    // Chain exhausted: both black men gone, turn finally rotated.
    let board = session.game().board();
    let b6 = board.position_by_name("b6").unwrap();
    assert!(board.piece(b6).is_white());
    assert!(board
        .piece(board.position_by_name("c3").unwrap())
        .is_empty());
    assert!(board
        .piece(board.position_by_name("c5").unwrap())
        .is_empty());
    assert_eq!(board.current_player().unwrap().color(), PieceColor::Black);
}

#[test]
fn custom_layouts_drive_sessions_like_built_in_ones() {
    let json = r#"{
        "players": "single",
        "cells": [
            { "name": "a1", "piece": { "kind": "peg", "color": "neutral" } },
            { "name": "b1", "piece": { "kind": "peg", "color": "neutral" } },
            { "name": "c1" }
        ]
    }"#;
    let board = Layout::from_json(json).unwrap().into_board().unwrap();
    let mut session = Interactions::new(
        Game::new(board, Box::new(SolitaireRules::new())),
        NullPresenter,
    );

    session.select_name("a1");
    assert_eq!(session.candidate_count(), 1);
    session.confirm().unwrap();
    let board = session.game().board();
    assert_eq!(
        board.piece(board.position_by_name("c1").unwrap()).kind,
        PieceKind::Peg
    );
    assert_eq!(board.to_string(), "2o");
}

#[test]
fn unselectable_cells_show_exactly_one_marker() {
    let mut session = checkers_session();
    // Focusing an empty mid-board cell yields the unselectable state.
    session.select_name("d4");
    let marked: Vec<(String, Marker)> = session
        .game()
        .board()
        .positions()
        .filter_map(|(_, p)| p.marker().map(|m| (p.name().to_string(), m)))
        .collect();
    assert_eq!(marked, vec![("d4".to_string(), Marker::Unselectable)]);
}
