//! End-to-end checks of the simulation rules through the public API.

use std::time::Duration;

use blockfall::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use blockfall::game::{tick, Board, Cell, Game, GameState, Piece, PieceKind, TickOutcome};
use ratatui::style::Color;

const SETTLED: Cell = Cell::Filled(Color::Gray);

fn filled_count(board: &Board) -> usize {
    board.rows().iter().flatten().filter(|c| c.is_filled()).count()
}

#[test]
fn o_piece_slides_to_the_right_wall() {
    let mut game = Game::with_seed(1);
    game.current_piece = Some(Piece::new(PieceKind::O));
    {
        let piece = game.current_piece.as_ref().unwrap();
        assert_eq!((piece.x, piece.y), (4, 0));
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(4, 0), (5, 0), (4, 1), (5, 1)]);
    }

    for _ in 0..5 {
        game.move_right();
    }

    let piece = game.current_piece.as_ref().unwrap();
    assert_eq!(piece.x, 8);
    assert_eq!(piece.x + piece.right_bound(), BOARD_WIDTH as i32 - 1);
}

#[test]
fn completing_the_bottom_row_collapses_the_stack() {
    let mut board = Board::new();
    for x in 1..BOARD_WIDTH as i32 {
        board.set(x, 19, SETTLED);
    }
    // a marker above the full row
    board.set(3, 10, SETTLED);
    board.set(7, 18, SETTLED);
    let before = board.clone();

    board.set(0, 19, SETTLED);
    assert_eq!(board.clear_lines(), 1);

    assert_eq!(board.rows()[0], [Cell::Empty; BOARD_WIDTH]);
    for y in 1..BOARD_HEIGHT {
        assert_eq!(board.rows()[y], before.rows()[y - 1], "row {y}");
    }
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.is_occupied(7, 19));
    assert!(board.is_occupied(3, 11));
}

#[test]
fn piece_resting_on_floor_lands_on_next_tick_regardless_of_board() {
    for kind in PieceKind::ALL {
        let mut board = Board::new();
        let mut piece = Piece::new(kind);
        piece.y = BOARD_HEIGHT as i32 - 1 - piece.ground();

        assert_eq!(tick(&mut piece, &mut board), TickOutcome::Landed, "{kind:?}");
        assert_eq!(filled_count(&board), 4, "{kind:?}");
    }
}

#[test]
fn left_then_right_round_trips_for_every_kind() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        let x = piece.x;
        assert!(piece.move_left(&board));
        assert!(piece.move_right(&board));
        assert_eq!(piece.x, x, "{kind:?}");
    }
}

#[test]
fn merge_past_the_floor_keeps_only_in_bounds_cells() {
    let mut board = Board::new();
    let mut piece = Piece::new(PieceKind::I);
    piece.y = BOARD_HEIGHT as i32 - 1;
    board.merge(&piece);

    assert_eq!(filled_count(&board), 1);
    assert!(board.is_occupied(piece.x + 2, BOARD_HEIGHT as i32 - 1));
}

#[test]
fn same_seed_gives_same_piece_sequence() {
    let sequence = |seed| {
        let mut game = Game::with_seed(seed);
        let mut kinds = Vec::new();
        for _ in 0..12 {
            kinds.push(game.current_piece.as_ref().unwrap().kind);
            game.reset();
        }
        kinds
    };

    assert_eq!(sequence(2024), sequence(2024));
}

#[test]
fn gravity_drops_piece_to_the_floor_and_spawns_next() {
    let mut game = Game::with_options(Some(8), Duration::from_millis(10));
    game.current_piece = Some(Piece::new(PieceKind::T));

    let mut landed = false;
    for _ in 0..BOARD_HEIGHT {
        if game.update(Duration::from_millis(10)) == Some(TickOutcome::Landed) {
            landed = true;
            break;
        }
    }

    assert!(landed);
    assert_eq!(filled_count(&game.board), 4);
    // T points down: a bar on row 18 with its stem on row 19
    assert!(game.board.is_occupied(4, 18));
    assert!(game.board.is_occupied(6, 18));
    assert!(game.board.is_occupied(5, 19));
    assert!(!game.board.is_occupied(4, 19));
    let next = game.current_piece.as_ref().unwrap();
    assert_eq!((next.x, next.y), (4, 0));
}

#[test]
fn stacking_in_one_column_tops_out() {
    let mut game = Game::with_seed(77);
    let mut ticks = 0;
    while game.game_state == GameState::Playing {
        game.soft_drop();
        ticks += 1;
        assert!(ticks < 10_000, "game never ended");
    }

    assert!(game.is_over());
    assert!(game.current_piece.is_none());
    assert!(game.board.rows()[0..2].iter().flatten().any(|c| c.is_filled()));
}
