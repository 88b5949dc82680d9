//! A minimal falling-block puzzle game for the terminal.
//!
//! The simulation lives in [`game`] and has no terminal dependencies beyond
//! cell colors; [`input`] and [`ui`] are the crossterm/ratatui glue used by the
//! binary.

pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod ui;
