use thiserror::Error;

/// Reasons a [`GameConfig`](super::GameConfig) cannot be played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid of {width}x{height} exceeds the {max}x{max} limit")]
    GridTooLarge { width: usize, height: usize, max: usize },

    #[error("initial_snake_length must be at least 1")]
    EmptySnake,

    #[error("snake of length {length} does not fit left of the center of a {width}-wide grid")]
    SnakeTooLong { length: usize, width: usize },

    #[error("a {cells}-cell grid has no room for food next to a snake of length {length}")]
    NoRoomForFood { length: usize, cells: usize },

    #[error("{name} must be at least 1")]
    ZeroValue { name: &'static str },

    #[error("min_tick_speed ({min}) cannot exceed base_tick_speed ({base})")]
    SpeedRange { min: u32, base: u32 },
}

/// Failures inside the game core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no free cell left on the board for food")]
    BoardFull,

    #[error("snake cell ({x}, {y}) lies outside the grid")]
    SnakeOutOfBounds { x: i32, y: i32 },

    #[error("snake covers cell ({x}, {y}) more than once")]
    SnakeOverlaps { x: i32, y: i32 },

    #[error("food at ({x}, {y}) lies outside the grid")]
    FoodOutOfBounds { x: i32, y: i32 },

    #[error("food at ({x}, {y}) sits on the snake")]
    FoodOnSnake { x: i32, y: i32 },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
