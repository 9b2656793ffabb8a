//! Alien Invasion: a fleet of aliens marches across the screen, the player's
//! ship shoots it down wave after wave.
//!
//! The library holds all game logic and is terminal-agnostic; the binary in
//! `main.rs` drives it with `crossterm`.

pub mod assets;
pub mod clock;
pub mod compute;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod game;
pub mod scoreboard;
pub mod settings;
pub mod stats;
