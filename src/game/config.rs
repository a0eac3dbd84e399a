use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest grid side accepted; keeps cell math inside `i32` and the board
/// inside a `u16` terminal area
pub const MAX_GRID_SIDE: usize = 1024;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,

    // Difficulty curve
    /// Frames per movement at the start of a game (lower = faster)
    pub base_tick_speed: u32,
    /// Fastest the snake is allowed to get
    pub min_tick_speed: u32,
    /// Speed up every N food eaten
    pub speed_up_every: u32,
    /// How many frames to take off the tick speed on each speed-up
    pub speed_delta: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            initial_snake_length: 3,
            base_tick_speed: 8,
            min_tick_speed: 2,
            speed_up_every: 5,
            speed_delta: 1,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Number of cells on the board, saturating for absurd sizes
    pub fn cell_count(&self) -> usize {
        self.grid_width.saturating_mul(self.grid_height)
    }

    /// Check that a game can be started with this configuration
    ///
    /// The snake spawns with its head at the grid center and extends to the
    /// left, so it has to fit between column 0 and the center column.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                max: MAX_GRID_SIDE,
            });
        }

        if self.initial_snake_length == 0 {
            return Err(ConfigError::EmptySnake);
        }

        if self.initial_snake_length > self.grid_width / 2 + 1 {
            return Err(ConfigError::SnakeTooLong {
                length: self.initial_snake_length,
                width: self.grid_width,
            });
        }

        if self.initial_snake_length >= self.cell_count() {
            return Err(ConfigError::NoRoomForFood {
                length: self.initial_snake_length,
                cells: self.cell_count(),
            });
        }

        for (name, value) in [
            ("base_tick_speed", self.base_tick_speed),
            ("min_tick_speed", self.min_tick_speed),
            ("speed_up_every", self.speed_up_every),
            ("speed_delta", self.speed_delta),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroValue { name });
            }
        }

        if self.min_tick_speed > self.base_tick_speed {
            return Err(ConfigError::SpeedRange {
                min: self.min_tick_speed,
                base: self.base_tick_speed,
            });
        }

        Ok(())
    }
}
