//! Alien Wave: a single-screen arcade shooter.
//!
//! - `config`: geometry and tuning constants, loadable from RON
//! - `entities`: plain data for the player, bullet, aliens and world
//! - `compute`: pure simulation functions (wave generation, per-frame tick)
//! - `input`: key-event translation into session commands
//! - `render`: the drawing surface abstraction and frame layout
//! - `session`: the mutable game session and its explicit game loop

pub mod compute;
pub mod config;
pub mod entities;
pub mod input;
pub mod render;
pub mod session;

pub use config::{ConfigError, GameConfig};
pub use entities::{GameState, GameStatus};
pub use session::{Frontend, GameSession};
