//! Turns a game snapshot into host-agnostic draw commands
//!
//! Nothing here knows about pixels, colors or fonts. A host paints tiles on
//! grid cells and puts text in named slots however it likes.

use crate::game::{Position, Snapshot};

pub const CONTROLS_TEXT: &str = "Controls: Arrow keys or WASD. R = restart (on game over)";
pub const GAME_OVER_TEXT: &str = "GAME OVER! Press R to restart.";

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Head,
    Body,
    Food,
}

/// Where a line of text belongs on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSlot {
    Score,
    Speed,
    Controls,
    /// Shown over the board once the game has ended
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Tile { cell: Position, kind: TileKind },
    Text { slot: TextSlot, text: String },
}

/// Build the draw list for one frame
///
/// Tiles come in painting order: food first, then the snake from tail to
/// head, so the head always ends up on top.
pub fn render(snapshot: &Snapshot) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(snapshot.snake.len() + 5);

    if let Some(food) = snapshot.food {
        commands.push(DrawCommand::Tile {
            cell: food,
            kind: TileKind::Food,
        });
    }

    for (index, &cell) in snapshot.snake.iter().enumerate().rev() {
        let kind = if index == snapshot.head_index {
            TileKind::Head
        } else {
            TileKind::Body
        };
        commands.push(DrawCommand::Tile { cell, kind });
    }

    commands.push(DrawCommand::Text {
        slot: TextSlot::Score,
        text: format!("Score: {}", snapshot.score),
    });
    commands.push(DrawCommand::Text {
        slot: TextSlot::Speed,
        text: format!("Speed (frames/move): {}", snapshot.tick_speed),
    });
    commands.push(DrawCommand::Text {
        slot: TextSlot::Controls,
        text: CONTROLS_TEXT.to_string(),
    });

    if snapshot.game_over {
        commands.push(DrawCommand::Text {
            slot: TextSlot::GameOver,
            text: GAME_OVER_TEXT.to_string(),
        });
    }

    commands
}
