//! Rendering: snapshot to draw commands, draw commands to the terminal

pub mod draw;
pub mod renderer;

pub use draw::{DrawCommand, TextSlot, TileKind, render};
pub use renderer::Renderer;
