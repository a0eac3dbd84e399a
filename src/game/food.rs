//! Food placement on free grid cells

use std::collections::HashSet;

use rand::Rng;
use rand::seq::IteratorRandom;

use super::error::GameError;
use super::snake::{Position, Snake};

/// Random draws tried before falling back to enumerating free cells
pub const MAX_REJECTION_ATTEMPTS: usize = 64;

/// Pick a uniformly random cell not covered by the snake
///
/// Rejection sampling is cheap while most of the board is empty. Once free
/// cells drop to a quarter of the board, or the draws keep landing on the
/// snake, the free cells are listed and one is chosen directly. Both paths are
/// uniform over the free cells.
pub fn spawn_food<R: Rng>(
    rng: &mut R,
    snake: &Snake,
    width: usize,
    height: usize,
) -> Result<Position, GameError> {
    let total = width * height;
    let free = total.saturating_sub(snake.len());
    if free == 0 {
        return Err(GameError::BoardFull);
    }

    if free * 4 > total {
        for _ in 0..MAX_REJECTION_ATTEMPTS {
            let pos = Position::new(
                rng.gen_range(0..width) as i32,
                rng.gen_range(0..height) as i32,
            );
            if !snake.occupies(pos) {
                return Ok(pos);
            }
        }
        tracing::trace!(free, "rejection sampling exhausted, enumerating free cells");
    }

    free_cells(snake, width, height)
        .choose(rng)
        .ok_or(GameError::BoardFull)
}

/// All cells of the grid the snake does not cover, row by row
pub fn free_cells(snake: &Snake, width: usize, height: usize) -> impl Iterator<Item = Position> {
    let occupied: HashSet<Position> = snake.cells().collect();
    (0..height as i32)
        .flat_map(move |y| (0..width as i32).map(move |x| Position::new(x, y)))
        .filter(move |pos| !occupied.contains(pos))
}
