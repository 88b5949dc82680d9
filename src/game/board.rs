use ratatui::style::Color;
use tracing::debug;

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::piece::Piece;

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_filled(self) -> bool {
        self != Cell::Empty
    }
}

pub type Row = [Cell; BOARD_WIDTH];

/// The grid of settled cells, indexed `[y][x]` with row 0 at the top.
#[derive(Clone, PartialEq, Debug)]
pub struct Board {
    rows: [Row; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            rows: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    pub fn in_bounds(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32
    }

    /// Returns `None` for coordinates outside the board.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if Self::in_bounds(x, y) {
            Some(self.rows[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Writes a cell; out-of-bounds writes are dropped and reported as `false`.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Cell::is_filled)
    }

    pub fn rows(&self) -> &[Row; BOARD_HEIGHT] {
        &self.rows
    }

    pub fn row_is_full(&self, y: usize) -> bool {
        self.rows[y].iter().all(|cell| cell.is_filled())
    }

    /// Reports whether any occupied piece cell, shifted by `(dx, dy)`, lands on
    /// an occupied board cell. Cells that fall outside the board are ignored.
    pub fn collides(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        piece
            .cells()
            .any(|(x, y)| self.is_occupied(x + dx, y + dy))
    }

    /// Reports whether the piece, shifted by `(dx, dy)`, lies entirely inside
    /// the board on empty cells.
    pub fn fits(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        piece.cells().all(|(x, y)| {
            let (x, y) = (x + dx, y + dy);
            Self::in_bounds(x, y) && !self.is_occupied(x, y)
        })
    }

    /// Copies the piece's occupied cells into the board. Cells outside the
    /// board are dropped.
    pub fn merge(&mut self, piece: &Piece) {
        let mut dropped = 0;
        for (x, y) in piece.cells() {
            if !self.set(x, y, Cell::Filled(piece.color)) {
                dropped += 1;
            }
        }
        if dropped > 0 {
            debug!(dropped, "merge dropped out-of-bounds cells");
        }
    }

    /// Removes every full row, collapsing the rows above it downward.
    ///
    /// Rows are scanned top to bottom. After a row is removed the same index is
    /// checked again, since the row shifted into it may be full as well.
    /// Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = 0;
        while y < BOARD_HEIGHT {
            if self.row_is_full(y) {
                self.collapse_row(y);
                cleared += 1;
            } else {
                y += 1;
            }
        }
        cleared
    }

    fn collapse_row(&mut self, y: usize) {
        self.rows.copy_within(0..y, 1);
        self.rows[0] = [Cell::Empty; BOARD_WIDTH];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::piece::PieceKind;

    const GREY: Cell = Cell::Filled(Color::Gray);

    fn fill_row(board: &mut Board, y: i32) {
        for x in 0..BOARD_WIDTH as i32 {
            board.set(x, y, GREY);
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.width(), 10);
        assert_eq!(board.height(), 20);
        assert!(board
            .rows()
            .iter()
            .flatten()
            .all(|cell| *cell == Cell::Empty));
    }

    #[test]
    fn get_and_set_reject_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);
        assert!(!board.set(BOARD_WIDTH as i32, 0, GREY));
        assert!(!board.set(0, -1, GREY));
        assert!(board.set(3, 7, GREY));
        assert_eq!(board.get(3, 7), Some(GREY));
    }

    #[test]
    fn collides_ignores_off_board_cells() {
        let board = Board::new();
        let mut piece = Piece::new(PieceKind::O);
        piece.x = BOARD_WIDTH as i32 - 1;
        assert!(!board.collides(&piece, 0, 0));
        assert!(!board.fits(&piece, 0, 0));
    }

    #[test]
    fn collides_detects_occupied_cell_below() {
        let mut board = Board::new();
        let piece = Piece::new(PieceKind::O);
        board.set(piece.x, 2, GREY);
        assert!(!board.collides(&piece, 0, 0));
        assert!(board.collides(&piece, 0, 1));
        assert!(!board.fits(&piece, 0, 1));
    }

    #[test]
    fn collides_does_not_wrap_negative_columns() {
        // (-1, 2) would alias (9, 1) in a flat row-major array
        let mut board = Board::new();
        board.set(BOARD_WIDTH as i32 - 1, 1, GREY);
        board.set(BOARD_WIDTH as i32 - 2, 1, GREY);
        let mut piece = Piece::new(PieceKind::I).rotated_right();
        piece.x = -2;

        assert!(piece.cells().any(|(x, _)| x < 0));
        assert!(!board.collides(&piece, 0, 0));
        assert!(!board.fits(&piece, 0, 0));
        assert_eq!(board.get(-1, 2), None);
    }

    #[test]
    fn merge_drops_cells_below_floor() {
        let mut board = Board::new();
        let mut piece = Piece::new(PieceKind::I);
        piece.y = BOARD_HEIGHT as i32 - 2;
        board.merge(&piece);

        let filled = board.rows().iter().flatten().filter(|c| c.is_filled()).count();
        assert_eq!(filled, 2);
    }

    #[test]
    fn clear_lines_removes_consecutive_full_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 18);
        fill_row(&mut board, 19);
        board.set(0, 17, GREY);

        assert_eq!(board.clear_lines(), 2);
        assert_eq!(board.get(0, 19), Some(GREY));
        assert!(!board.row_is_full(19));
        assert_eq!(board.rows().iter().flatten().filter(|c| c.is_filled()).count(), 1);
    }

    #[test]
    fn clear_lines_leaves_partial_rows_alone() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(4, 19, Cell::Empty);
        let before = board.clone();

        assert_eq!(board.clear_lines(), 0);
        assert_eq!(board, before);
    }
}
