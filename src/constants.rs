pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Pieces live in a fixed 4x4 frame
pub const PIECE_SIZE: usize = 4;

// Spawn offset: horizontally centered, top row
pub const SPAWN_X: i32 = BOARD_WIDTH as i32 / 2 - 1;
pub const SPAWN_Y: i32 = 0;

// Gravity interval (in milliseconds)
pub const TICK_INTERVAL: u64 = 1000;

// Input poll budget per frame (in milliseconds)
pub const FRAME_DELAY: u64 = 16;
