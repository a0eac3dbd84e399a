//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The host drives it once per frame through [`GameState::update`] and reads a
//! [`Snapshot`] back for drawing.

pub mod action;
pub mod config;
pub mod error;
pub mod food;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Intent};
pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use snake::{Position, Snake};
pub use state::{GameOverCause, GameState, Phase, Snapshot, TickOutcome};
