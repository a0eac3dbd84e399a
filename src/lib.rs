//! Tick Snake - a terminal Snake game with a deterministic core
//!
//! This library provides:
//! - Core game logic, free of I/O (game module)
//! - Draw-command generation and TUI painting (render module)
//! - Keyboard mapping (input module)
//! - Session statistics (metrics module)
//! - The interactive terminal host (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
