use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    action::{Direction, Intent},
    config::GameConfig,
    error::GameError,
    food::spawn_food,
    snake::{Position, Snake},
};

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// Snake covers the whole board and no food can be placed
    BoardFull,
}

/// Whether the simulation is still advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver(GameOverCause),
}

/// What a single call to [`GameState::tick`] or [`GameState::update`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is over; nothing changed
    Frozen,
    /// Frame counted, but the throttle has not reached the tick speed yet
    Waiting,
    /// Snake advanced one cell without growing
    Moved,
    /// Snake advanced onto the food and grew by one cell
    Ate,
    /// Snake advanced into a wall or itself, or filled the board
    Crashed(GameOverCause),
    /// A finished game was replaced by a fresh one
    Restarted,
}

/// Read-only view of the game handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Snake cells, head first
    pub snake: Vec<Position>,
    pub head_index: usize,
    pub food: Option<Position>,
    pub score: u32,
    pub tick_speed: u32,
    pub game_over: bool,
    pub cause: Option<GameOverCause>,
    pub grid_width: usize,
    pub grid_height: usize,
}

/// Complete game state
///
/// Owns the board, the snake, the food, the speed curve and the random
/// source used for food placement. All mutation goes through [`reset`],
/// [`set_direction`] and [`tick`] (or [`update`], which combines them for a
/// host frame).
///
/// Movement is throttled by a frame counter: the host calls `tick` once per
/// rendered frame and the snake only moves every `tick_speed` frames.
///
/// [`reset`]: GameState::reset
/// [`set_direction`]: GameState::set_direction
/// [`tick`]: GameState::tick
/// [`update`]: GameState::update
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    config: GameConfig,
    rng: R,
    snake: Snake,
    dir: Direction,
    next_dir: Direction,
    food: Option<Position>,
    score: u32,
    frame: u32,
    tick_speed: u32,
    phase: Phase,
}

impl GameState<StdRng> {
    /// Create a new game seeded from the operating system
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a new game whose food placement is fully determined by `seed`
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new game that draws food positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;

        let mut state = Self::blank(config, rng);
        state.reset();
        Ok(state)
    }

    /// Create a running game from an explicit layout
    ///
    /// The snake moves in `direction`; score, frame counter and tick speed
    /// start from their initial values. Every snake cell must be on the grid
    /// and distinct, and the food must be on a free cell. Without food, one
    /// is placed from `rng`.
    pub fn from_parts(
        config: GameConfig,
        snake: Snake,
        direction: Direction,
        food: Option<Position>,
        rng: R,
    ) -> Result<Self, GameError> {
        config.validate()?;

        let (width, height) = (config.grid_width, config.grid_height);
        let mut seen = HashSet::with_capacity(snake.len());
        for cell in snake.cells() {
            if !cell.is_within(width, height) {
                return Err(GameError::SnakeOutOfBounds { x: cell.x, y: cell.y });
            }
            if !seen.insert(cell) {
                return Err(GameError::SnakeOverlaps { x: cell.x, y: cell.y });
            }
        }

        if let Some(food) = food {
            if !food.is_within(width, height) {
                return Err(GameError::FoodOutOfBounds { x: food.x, y: food.y });
            }
            if snake.occupies(food) {
                return Err(GameError::FoodOnSnake { x: food.x, y: food.y });
            }
        }

        let mut state = Self::blank(config, rng);
        state.snake = snake;
        state.dir = direction;
        state.next_dir = direction;
        state.food = food;

        if state.food.is_none() {
            state.place_food()?;
        }
        Ok(state)
    }

    fn blank(config: GameConfig, rng: R) -> Self {
        let snake = starting_snake(&config);
        let tick_speed = config.base_tick_speed;

        Self {
            config,
            rng,
            snake,
            dir: Direction::Right,
            next_dir: Direction::Right,
            food: None,
            score: 0,
            frame: 0,
            tick_speed,
            phase: Phase::Running,
        }
    }

    /// Start a fresh game: centered snake moving right, no score, base speed
    pub fn reset(&mut self) {
        self.snake = starting_snake(&self.config);
        self.dir = Direction::Right;
        self.next_dir = Direction::Right;
        self.score = 0;
        self.frame = 0;
        self.tick_speed = self.config.base_tick_speed;
        self.phase = Phase::Running;

        if let Err(err) = self.place_food() {
            // Only reachable with a board the validated config rules out
            tracing::warn!(%err, "could not place food after reset");
            self.food = None;
            self.phase = Phase::GameOver(GameOverCause::BoardFull);
        }

        tracing::info!(
            width = self.config.grid_width,
            height = self.config.grid_height,
            "game reset"
        );
    }

    /// Move the food to a uniformly random cell outside the snake
    pub fn place_food(&mut self) -> Result<Position, GameError> {
        let food = spawn_food(
            &mut self.rng,
            &self.snake,
            self.config.grid_width,
            self.config.grid_height,
        )?;

        tracing::debug!(x = food.x, y = food.y, "food placed");
        self.food = Some(food);
        Ok(food)
    }

    /// Buffer a direction change for the next movement tick
    ///
    /// The reversal check compares against the direction the snake is
    /// actually moving in, not the one already buffered. Returns whether the
    /// change was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.dir.is_opposite(direction) {
            tracing::trace!(?direction, moving = ?self.dir, "reversal rejected");
            return false;
        }

        self.next_dir = direction;
        true
    }

    /// Advance the simulation by one frame
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Frozen;
        }

        self.frame += 1;
        if self.frame < self.tick_speed {
            return TickOutcome::Waiting;
        }
        self.frame = 0;
        self.dir = self.next_dir;

        let new_head = self.snake.head().moved_in_direction(self.dir);

        if !new_head.is_within(self.config.grid_width, self.config.grid_height) {
            return self.end(GameOverCause::Wall);
        }

        // The tail has not moved yet, so stepping onto it counts as a hit
        if self.snake.occupies(new_head) {
            return self.end(GameOverCause::SelfCollision);
        }

        self.snake.push_head(new_head);

        if self.food != Some(new_head) {
            self.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.score += 1;
        self.speed_up();

        match self.place_food() {
            Ok(_) => TickOutcome::Ate,
            Err(_) => {
                self.food = None;
                self.end(GameOverCause::BoardFull)
            }
        }
    }

    /// Apply one frame of player input, then tick
    ///
    /// `Restart` only takes effect once the game is over, and replaces the
    /// tick for that frame.
    pub fn update<I>(&mut self, intents: I) -> TickOutcome
    where
        I: IntoIterator<Item = Intent>,
    {
        let mut restart = false;

        for intent in intents {
            match intent {
                Intent::Move(direction) => {
                    self.set_direction(direction);
                }
                Intent::Restart => restart = true,
            }
        }

        if restart && self.is_game_over() {
            self.reset();
            return TickOutcome::Restarted;
        }

        self.tick()
    }

    fn speed_up(&mut self) {
        let threshold = self.score % self.config.speed_up_every == 0;
        if threshold && self.tick_speed > self.config.min_tick_speed {
            self.tick_speed = self
                .tick_speed
                .saturating_sub(self.config.speed_delta)
                .max(self.config.min_tick_speed);
            tracing::debug!(score = self.score, tick_speed = self.tick_speed, "speed up");
        }
    }

    fn end(&mut self, cause: GameOverCause) -> TickOutcome {
        self.phase = Phase::GameOver(cause);
        tracing::info!(score = self.score, length = self.snake.len(), ?cause, "game over");
        TickOutcome::Crashed(cause)
    }

    /// Copy out everything the renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.cells().collect(),
            head_index: 0,
            food: self.food,
            score: self.score,
            tick_speed: self.tick_speed,
            game_over: self.is_game_over(),
            cause: match self.phase {
                Phase::Running => None,
                Phase::GameOver(cause) => Some(cause),
            },
            grid_width: self.config.grid_width,
            grid_height: self.config.grid_height,
        }
    }
}

impl<R> GameState<R> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Direction of the last movement
    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// Direction the next movement will take
    pub fn next_direction(&self) -> Direction {
        self.next_dir
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Frames per movement
    pub fn tick_speed(&self) -> u32 {
        self.tick_speed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }
}

/// Snake centered on the grid, facing right, body trailing left
fn starting_snake(config: &GameConfig) -> Snake {
    let center = Position::new(
        (config.grid_width / 2) as i32,
        (config.grid_height / 2) as i32,
    );
    Snake::new(center, Direction::Right, config.initial_snake_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(points: &[(i32, i32)]) -> Snake {
        Snake::from_cells(points.iter().map(|&(x, y)| Position::new(x, y))).unwrap()
    }

    fn layout(
        config: GameConfig,
        points: &[(i32, i32)],
        direction: Direction,
        food: (i32, i32),
    ) -> GameState {
        GameState::from_parts(
            config,
            cells(points),
            direction,
            Some(Position::new(food.0, food.1)),
            StdRng::seed_from_u64(0),
        )
        .unwrap()
    }

    /// Tick through the throttle and return the outcome of the movement frame
    fn advance_move(state: &mut GameState) -> TickOutcome {
        for _ in 1..state.tick_speed() {
            assert_eq!(state.tick(), TickOutcome::Waiting);
        }
        state.tick()
    }

    #[test]
    fn test_reset() {
        let state = GameState::seeded(GameConfig::default(), 1).unwrap();

        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_speed(), 8);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.next_direction(), Direction::Right);
        assert_eq!(
            state.snake().cells().collect::<Vec<_>>(),
            vec![Position::new(20, 15), Position::new(19, 15), Position::new(18, 15)]
        );

        let food = state.food().unwrap();
        assert!(!state.snake().occupies(food));
        assert!(food.is_within(40, 30));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = GameState::seeded(GameConfig::new(0, 0), 1);
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_layout_is_checked() {
        let rng = || StdRng::seed_from_u64(0);
        let config = GameConfig::small;

        let outside = GameState::from_parts(
            config(),
            cells(&[(9, 0), (10, 0)]),
            Direction::Left,
            None,
            rng(),
        );
        assert_eq!(outside.err(), Some(GameError::SnakeOutOfBounds { x: 10, y: 0 }));

        let overlap = GameState::from_parts(
            config(),
            cells(&[(2, 2), (3, 2), (2, 2)]),
            Direction::Left,
            None,
            rng(),
        );
        assert_eq!(overlap.err(), Some(GameError::SnakeOverlaps { x: 2, y: 2 }));

        let food_on_snake = GameState::from_parts(
            config(),
            cells(&[(2, 2), (3, 2)]),
            Direction::Left,
            Some(Position::new(3, 2)),
            rng(),
        );
        assert_eq!(food_on_snake.err(), Some(GameError::FoodOnSnake { x: 3, y: 2 }));

        let food_outside = GameState::from_parts(
            config(),
            cells(&[(2, 2), (3, 2)]),
            Direction::Left,
            Some(Position::new(-1, 4)),
            rng(),
        );
        assert_eq!(food_outside.err(), Some(GameError::FoodOutOfBounds { x: -1, y: 4 }));
    }

    #[test]
    fn test_layout_without_food_gets_some() {
        let state = GameState::from_parts(
            GameConfig::small(),
            cells(&[(2, 2), (3, 2)]),
            Direction::Left,
            None,
            StdRng::seed_from_u64(5),
        )
        .unwrap();

        let food = state.food().unwrap();
        assert!(food.is_within(10, 10));
        assert!(!state.snake().occupies(food));
    }

    #[test]
    fn test_throttle_moves_every_tick_speed_frames() {
        let mut state = layout(
            GameConfig::default(),
            &[(5, 5), (4, 5), (3, 5)],
            Direction::Right,
            (30, 20),
        );

        for _ in 0..7 {
            assert_eq!(state.tick(), TickOutcome::Waiting);
            assert_eq!(state.snake().head(), Position::new(5, 5));
        }

        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.snake().head(), Position::new(6, 5));
        assert_eq!(state.snake().len(), 3);

        assert_eq!(advance_move(&mut state), TickOutcome::Moved);
        assert_eq!(state.snake().head(), Position::new(7, 5));
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut state = layout(
            GameConfig::default(),
            &[(20, 15), (19, 15), (18, 15)],
            Direction::Right,
            (21, 15),
        );

        assert_eq!(advance_move(&mut state), TickOutcome::Ate);

        assert_eq!(state.snake().head(), Position::new(21, 15));
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().len(), 4);
        assert_eq!(state.snake().tail(), Position::new(18, 15));

        let food = state.food().unwrap();
        assert!(!state.snake().occupies(food));
    }

    #[test]
    fn test_wall_collision() {
        let mut state = layout(
            GameConfig::default(),
            &[(0, 15), (1, 15), (2, 15)],
            Direction::Left,
            (10, 10),
        );
        let before = state.snake().clone();

        assert_eq!(advance_move(&mut state), TickOutcome::Crashed(GameOverCause::Wall));

        assert!(state.is_game_over());
        assert_eq!(state.phase(), Phase::GameOver(GameOverCause::Wall));
        assert_eq!(state.snake(), &before);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_self_collision() {
        // Head at (5,5) came from (6,5); turning down runs into (5,6)
        let mut state = layout(
            GameConfig::default(),
            &[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)],
            Direction::Left,
            (20, 20),
        );

        assert!(state.set_direction(Direction::Down));
        assert_eq!(
            advance_move(&mut state),
            TickOutcome::Crashed(GameOverCause::SelfCollision)
        );
        assert_eq!(state.snake().len(), 5);
        assert_eq!(state.snake().head(), Position::new(5, 5));
    }

    #[test]
    fn test_moving_onto_tail_is_a_collision() {
        // Head at (1,1) moving down; turning left lands on the tail at (0,1)
        let mut state = layout(
            GameConfig::default(),
            &[(1, 1), (1, 0), (0, 0), (0, 1)],
            Direction::Down,
            (10, 10),
        );

        assert!(state.set_direction(Direction::Left));
        assert_eq!(
            advance_move(&mut state),
            TickOutcome::Crashed(GameOverCause::SelfCollision)
        );
    }

    #[test]
    fn test_reversal_rejected() {
        let mut state = GameState::seeded(GameConfig::default(), 3).unwrap();
        state.food = Some(Position::new(0, 0));

        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.next_direction(), Direction::Right);

        assert_eq!(advance_move(&mut state), TickOutcome::Moved);
        assert_eq!(state.direction(), Direction::Right);
    }

    #[test]
    fn test_reversal_checked_against_moving_direction() {
        let mut state = GameState::seeded(GameConfig::default(), 3).unwrap();

        // Left is not the reverse of the buffered Up, but is of the moving Right
        assert!(state.set_direction(Direction::Up));
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.next_direction(), Direction::Up);

        // Down reverses the buffered Up but not the moving Right
        assert!(state.set_direction(Direction::Down));
        assert_eq!(state.next_direction(), Direction::Down);
    }

    #[test]
    fn test_direction_applies_at_next_move() {
        let mut state = GameState::seeded(GameConfig::default(), 3).unwrap();
        state.food = Some(Position::new(0, 0));

        state.set_direction(Direction::Up);
        assert_eq!(state.direction(), Direction::Right);

        assert_eq!(state.tick(), TickOutcome::Waiting);
        assert_eq!(state.direction(), Direction::Right);

        for _ in 2..8 {
            state.tick();
        }
        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.direction(), Direction::Up);
        assert_eq!(state.snake().head(), Position::new(20, 14));
    }

    #[test]
    fn test_two_turns_over_two_moves() {
        let mut state = GameState::seeded(GameConfig::default(), 3).unwrap();
        state.food = Some(Position::new(0, 0));

        state.set_direction(Direction::Up);
        advance_move(&mut state);
        assert!(state.set_direction(Direction::Left));
        advance_move(&mut state);

        assert_eq!(state.direction(), Direction::Left);
        assert_eq!(state.snake().head(), Position::new(19, 14));
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = layout(
            GameConfig::default(),
            &[(0, 15), (1, 15), (2, 15)],
            Direction::Left,
            (10, 10),
        );
        advance_move(&mut state);
        let frozen = state.snapshot();

        for _ in 0..100 {
            assert_eq!(state.tick(), TickOutcome::Frozen);
        }
        state.set_direction(Direction::Up);
        assert_eq!(state.tick(), TickOutcome::Frozen);

        let after = state.snapshot();
        assert_eq!(after.snake, frozen.snake);
        assert_eq!(after.score, frozen.score);
        assert_eq!(after.food, frozen.food);
        assert!(after.game_over);
        assert_eq!(after.cause, Some(GameOverCause::Wall));
    }

    #[test]
    fn test_speed_up_on_threshold_only() {
        let mut state = layout(
            GameConfig::default(),
            &[(2, 5), (1, 5), (0, 5)],
            Direction::Right,
            (3, 5),
        );

        for eaten in 1..=5 {
            assert_eq!(advance_move(&mut state), TickOutcome::Ate);
            assert_eq!(state.score(), eaten);
            let expected = if eaten < 5 { 8 } else { 7 };
            assert_eq!(state.tick_speed(), expected);
            state.food = Some(state.snake().head().moved_in_direction(Direction::Right));
        }
    }

    #[test]
    fn test_speed_floors_at_minimum() {
        let config = GameConfig {
            base_tick_speed: 8,
            min_tick_speed: 2,
            speed_up_every: 1,
            speed_delta: 5,
            ..Default::default()
        };
        let mut state = layout(config, &[(2, 5), (1, 5), (0, 5)], Direction::Right, (3, 5));
        let mut speeds = Vec::new();

        for _ in 0..4 {
            assert_eq!(advance_move(&mut state), TickOutcome::Ate);
            speeds.push(state.tick_speed());
            state.food = Some(state.snake().head().moved_in_direction(Direction::Right));
        }

        assert_eq!(speeds, vec![3, 2, 2, 2]);
    }

    #[test]
    fn test_faster_speed_shortens_throttle() {
        let config = GameConfig {
            base_tick_speed: 3,
            min_tick_speed: 1,
            speed_up_every: 1,
            ..Default::default()
        };
        let mut state = layout(config, &[(2, 5), (1, 5), (0, 5)], Direction::Right, (3, 5));

        assert_eq!(advance_move(&mut state), TickOutcome::Ate);
        assert_eq!(state.tick_speed(), 2);

        state.food = Some(Position::new(30, 25));
        assert_eq!(state.tick(), TickOutcome::Waiting);
        assert_eq!(state.tick(), TickOutcome::Moved);
    }

    #[test]
    fn test_filling_the_board_ends_the_game() {
        let config = GameConfig {
            initial_snake_length: 1,
            base_tick_speed: 1,
            min_tick_speed: 1,
            ..GameConfig::new(3, 1)
        };
        let mut state = layout(config, &[(1, 0), (0, 0)], Direction::Right, (2, 0));

        assert_eq!(state.tick(), TickOutcome::Crashed(GameOverCause::BoardFull));
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().len(), 3);
        assert_eq!(state.food(), None);
    }

    #[test]
    fn test_update_restart_only_after_game_over() {
        let mut state = GameState::seeded(GameConfig::default(), 9).unwrap();

        assert_eq!(state.update([Intent::Restart]), TickOutcome::Waiting);

        state.phase = Phase::GameOver(GameOverCause::Wall);
        state.score = 12;
        state.tick_speed = 4;

        assert_eq!(
            state.update([Intent::Move(Direction::Up), Intent::Restart]),
            TickOutcome::Restarted
        );
        assert!(!state.is_game_over());
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_speed(), 8);
        assert_eq!(state.next_direction(), Direction::Right);
        assert_eq!(state.snake().head(), Position::new(20, 15));
    }

    #[test]
    fn test_update_applies_intents_in_order() {
        let mut state = GameState::seeded(GameConfig::default(), 9).unwrap();

        state.update([
            Intent::Move(Direction::Up),
            Intent::Move(Direction::Left),
            Intent::Move(Direction::Down),
        ]);

        assert_eq!(state.next_direction(), Direction::Down);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameState::seeded(GameConfig::small(), 77).unwrap();
        let mut b = GameState::seeded(GameConfig::small(), 77).unwrap();

        for frame in 0..400u32 {
            let intent = match frame / 24 % 4 {
                0 => Direction::Up,
                1 => Direction::Left,
                2 => Direction::Down,
                _ => Direction::Right,
            };
            let restart = [Intent::Move(intent), Intent::Restart];
            assert_eq!(a.update(restart), b.update(restart));
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }

    #[test]
    fn test_random_play_invariants() {
        let mut state = GameState::seeded(GameConfig::small(), 2024).unwrap();
        let mut input = StdRng::seed_from_u64(99);
        let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

        let mut prev_len = state.snake().len();
        let mut prev_score = state.score();
        let mut prev_speed = state.tick_speed();

        for _ in 0..20_000 {
            let mut intents = Vec::new();
            if input.gen_bool(0.2) {
                intents.push(Intent::Move(directions[input.gen_range(0..4)]));
            }
            intents.push(Intent::Restart);

            let outcome = state.update(intents);
            let len = state.snake().len();

            if outcome == TickOutcome::Restarted {
                assert_eq!(len, 3);
                assert_eq!(state.score(), 0);
                assert_eq!(state.tick_speed(), 8);
            } else {
                let grew = matches!(
                    outcome,
                    TickOutcome::Ate | TickOutcome::Crashed(GameOverCause::BoardFull)
                );
                assert!(len == prev_len || len == prev_len + 1);
                assert_eq!(len > prev_len, grew);
                assert_eq!(state.score() - prev_score, u32::from(grew));
                assert!(state.tick_speed() <= prev_speed);
            }
            assert!(state.tick_speed() >= state.config().min_tick_speed);

            if !state.is_game_over() {
                let food = state.food().unwrap();
                assert!(!state.snake().occupies(food));

                let mut seen = std::collections::HashSet::new();
                assert!(state.snake().cells().all(|cell| seen.insert(cell)));
            }

            prev_len = len;
            prev_score = state.score();
            prev_speed = state.tick_speed();
        }
    }
}
