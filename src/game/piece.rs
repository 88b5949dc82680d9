use rand::Rng;
use ratatui::style::Color;

use crate::constants::{PIECE_SIZE, SPAWN_X, SPAWN_Y};
use crate::game::board::Board;

pub type Shape = [[bool; PIECE_SIZE]; PIECE_SIZE];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    I, J, L, O, S, T, Z
}

const X: bool = true;
const O: bool = false;

const SHAPE_I: Shape = [
    [O, O, X, O],
    [O, O, X, O],
    [O, O, X, O],
    [O, O, X, O],
];
const SHAPE_J: Shape = [
    [O, X, X, O],
    [O, O, X, O],
    [O, O, X, O],
    [O, O, O, O],
];
const SHAPE_L: Shape = [
    [O, X, X, O],
    [O, X, O, O],
    [O, X, O, O],
    [O, O, O, O],
];
// Flush left so a spawned O covers (4,0)-(5,1)
const SHAPE_O: Shape = [
    [X, X, O, O],
    [X, X, O, O],
    [O, O, O, O],
    [O, O, O, O],
];
const SHAPE_S: Shape = [
    [O, X, X, O],
    [X, X, O, O],
    [O, O, O, O],
    [O, O, O, O],
];
const SHAPE_T: Shape = [
    [X, X, X, O],
    [O, X, O, O],
    [O, O, O, O],
    [O, O, O, O],
];
const SHAPE_Z: Shape = [
    [O, X, X, O],
    [O, O, X, X],
    [O, O, O, O],
    [O, O, O, O],
];

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I, PieceKind::J, PieceKind::L, PieceKind::O,
        PieceKind::S, PieceKind::T, PieceKind::Z,
    ];

    pub fn template(self) -> &'static Shape {
        match self {
            PieceKind::I => &SHAPE_I,
            PieceKind::J => &SHAPE_J,
            PieceKind::L => &SHAPE_L,
            PieceKind::O => &SHAPE_O,
            PieceKind::S => &SHAPE_S,
            PieceKind::T => &SHAPE_T,
            PieceKind::Z => &SHAPE_Z,
        }
    }

    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Rgb(0xff, 0x00, 0x00),
            PieceKind::J => Color::Rgb(0xff, 0x00, 0xff),
            PieceKind::L => Color::Rgb(0xff, 0xff, 0x00),
            PieceKind::O => Color::Rgb(0x00, 0xff, 0xff),
            PieceKind::S => Color::Rgb(0x00, 0x00, 0xff),
            PieceKind::T => Color::Rgb(0xcc, 0xcc, 0xcc),
            PieceKind::Z => Color::Rgb(0x00, 0xff, 0x00),
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// The falling piece: a shape in a fixed 4x4 frame whose top-left corner sits
/// at board offset `(x, y)`.
#[derive(Clone, PartialEq, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: *kind.template(),
            x: SPAWN_X,
            y: SPAWN_Y,
            color: kind.color(),
        }
    }

    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        Self::new(PieceKind::random(rng))
    }

    /// Board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.occupied()
            .map(move |(col, row)| (self.x + col as i32, self.y + row as i32))
    }

    fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..PIECE_SIZE)
            .flat_map(|row| (0..PIECE_SIZE).map(move |col| (col, row)))
            .filter(move |&(col, row)| self.shape[row][col])
    }

    pub fn left_bound(&self) -> i32 {
        self.occupied().map(|(col, _)| col).min().unwrap_or(0) as i32
    }

    pub fn right_bound(&self) -> i32 {
        self.occupied().map(|(col, _)| col).max().unwrap_or(0) as i32
    }

    /// Lowest occupied row within the frame.
    pub fn ground(&self) -> i32 {
        self.occupied().map(|(_, row)| row).max().unwrap_or(0) as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.ground()
    }

    /// Returns a copy turned 90 degrees clockwise inside the 4x4 frame.
    pub fn rotated_right(&self) -> Self {
        let mut rotated = self.clone();
        let size = PIECE_SIZE;
        let mut new_shape = [[false; PIECE_SIZE]; PIECE_SIZE];

        for i in 0..size {
            for j in 0..size {
                new_shape[j][size - 1 - i] = self.shape[i][j];
            }
        }

        rotated.shape = new_shape;
        rotated
    }

    pub fn rotate_right(&mut self, board: &Board) -> bool {
        let rotated = self.rotated_right();
        if board.fits(&rotated, 0, 0) {
            self.shape = rotated.shape;
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self, board: &Board) -> bool {
        if self.left_bound() + self.x > 0 && board.fits(self, -1, 0) {
            self.x -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_right(&mut self, board: &Board) -> bool {
        if self.right_bound() + self.x < board.width() as i32 - 1 && board.fits(self, 1, 0) {
            self.x += 1;
            true
        } else {
            false
        }
    }
}
