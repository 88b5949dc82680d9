use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::constants::{BOARD_HEIGHT, TICK_INTERVAL};
use crate::game::board::Board;
use crate::game::piece::Piece;
use crate::game::timer::TickTimer;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Over,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    Falling,
    Landed,
}

/// Advances the piece one row, or merges it into the board when it rests on
/// the floor or on settled cells. A landed piece is not moved.
pub fn tick(piece: &mut Piece, board: &mut Board) -> TickOutcome {
    if piece.bottom() >= BOARD_HEIGHT as i32 - 1 || board.collides(piece, 0, 1) {
        board.merge(piece);
        TickOutcome::Landed
    } else {
        piece.y += 1;
        TickOutcome::Falling
    }
}

pub struct Game {
    pub board: Board,
    pub current_piece: Option<Piece>,
    pub game_state: GameState,
    timer: TickTimer,
    rng: StdRng,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy(), Duration::from_millis(TICK_INTERVAL))
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), Duration::from_millis(TICK_INTERVAL))
    }

    pub fn with_options(seed: Option<u64>, tick_interval: Duration) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng, tick_interval)
    }

    fn with_rng(rng: StdRng, tick_interval: Duration) -> Self {
        let mut game = Self {
            board: Board::new(),
            current_piece: None,
            game_state: GameState::Playing,
            timer: TickTimer::new(tick_interval),
            rng,
        };
        game.spawn_piece();
        game
    }

    pub fn is_over(&self) -> bool {
        self.game_state == GameState::Over
    }

    pub fn tick_interval(&self) -> Duration {
        self.timer.interval()
    }

    pub fn spawn_piece(&mut self) {
        let piece = Piece::spawn(&mut self.rng);
        if self.board.fits(&piece, 0, 0) {
            debug!(kind = ?piece.kind, x = piece.x, y = piece.y, "spawned piece");
            self.current_piece = Some(piece);
        } else {
            info!(kind = ?piece.kind, "no room to spawn, game over");
            self.current_piece = None;
            self.game_state = GameState::Over;
        }
    }

    pub fn move_left(&mut self) -> bool {
        match self.current_piece.as_mut() {
            Some(piece) => piece.move_left(&self.board),
            None => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        match self.current_piece.as_mut() {
            Some(piece) => piece.move_right(&self.board),
            None => false,
        }
    }

    pub fn rotate_right(&mut self) -> bool {
        match self.current_piece.as_mut() {
            Some(piece) => piece.rotate_right(&self.board),
            None => false,
        }
    }

    /// Runs one simulation tick. A landed piece is merged, full rows are
    /// cleared and the next piece is spawned.
    pub fn step(&mut self) -> Option<TickOutcome> {
        let piece = self.current_piece.as_mut()?;
        let outcome = tick(piece, &mut self.board);

        if outcome == TickOutcome::Landed {
            debug!(kind = ?piece.kind, x = piece.x, y = piece.y, "piece landed");
            self.current_piece = None;

            let lines = self.board.clear_lines();
            if lines > 0 {
                info!(lines, "cleared lines");
            }
            self.spawn_piece();
        }

        Some(outcome)
    }

    /// Forces a tick immediately and restarts the gravity interval.
    pub fn soft_drop(&mut self) -> Option<TickOutcome> {
        let outcome = self.step();
        self.timer.reset();
        outcome
    }

    pub fn update(&mut self, dt: Duration) -> Option<TickOutcome> {
        if self.is_over() {
            return None;
        }
        if self.timer.advance(dt) {
            self.step()
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        info!("starting new game");
        self.board = Board::new();
        self.current_piece = None;
        self.game_state = GameState::Playing;
        self.timer.reset();
        self.spawn_piece();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
