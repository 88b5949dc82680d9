pub mod board;
pub mod piece;
pub mod state;
pub mod timer;

pub use board::{Board, Cell};
pub use piece::{Piece, PieceKind};
pub use state::{tick, Game, GameState, TickOutcome};
pub use timer::TickTimer;
