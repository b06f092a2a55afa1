use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::INITIAL_DIRECTION;
use crate::food;
use crate::grid::{Direction, Grid, Position};
use crate::level::ParsedLevel;
use crate::snake::Snake;

/// Outcome of one simulation tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickResult {
    /// The snake moved one cell.
    Moved,
    /// The snake moved onto the food; it grew and the food was relocated.
    AteFood,
    /// The snake hit a wall, the boundary, or itself; a life was lost and
    /// the snake respawned.
    Collided,
    /// A collision spent the last life. The state is frozen from here on.
    GameOver,
}

/// Complete mutable simulation state for one level.
///
/// Each level gets a fresh instance; nothing is shared across levels.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub lives: u32,
    pub food_eaten: u32,
    pub game_over: bool,
    spawn: Position,
    rng: StdRng,
}

impl GameState {
    /// Creates the state for one level with entropy-seeded food placement.
    #[must_use]
    pub fn new(level: ParsedLevel, lives: u32) -> Self {
        Self::new_with_seed(level, lives, rand::random())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(level: ParsedLevel, lives: u32, seed: u64) -> Self {
        let ParsedLevel { grid, spawn } = level;
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(spawn);
        let food = food::spawn_position(&mut rng, &grid, &snake);

        Self {
            grid,
            snake,
            food,
            direction: INITIAL_DIRECTION,
            lives,
            food_eaten: 0,
            game_over: false,
            spawn,
            rng,
        }
    }

    /// The fixed respawn coordinate for this level.
    #[must_use]
    pub fn spawn(&self) -> Position {
        self.spawn
    }

    /// Advances the simulation one step in `direction`.
    ///
    /// The collision test runs against the pre-advance body, so stepping
    /// onto the cell the tail is about to vacate still collides. A finished
    /// game never advances; ticking it keeps returning [`TickResult::GameOver`].
    pub fn tick(&mut self, direction: Direction) -> TickResult {
        if self.game_over {
            return TickResult::GameOver;
        }

        self.direction = direction;
        let next = self.snake.head().step(direction);

        if !self.grid.is_passable(next) || self.snake.occupies(next) {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.game_over = true;
                return TickResult::GameOver;
            }

            self.snake.reset_to(self.spawn);
            self.direction = INITIAL_DIRECTION;
            return TickResult::Collided;
        }

        let grew = next == self.food;
        self.snake.advance(next, grew);

        if grew {
            self.food_eaten += 1;
            self.food = food::spawn_position(&mut self.rng, &self.grid, &self.snake);
            TickResult::AteFood
        } else {
            TickResult::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::INITIAL_DIRECTION;
    use crate::grid::{Direction, Position};
    use crate::level::parse_level;
    use crate::snake::Snake;

    use super::{GameState, TickResult};

    const ROOM: &str = "6 8\n\
                        ########\n\
                        #&     #\n\
                        #      #\n\
                        #      #\n\
                        #      #\n\
                        ########\n";

    fn room_state(lives: u32) -> GameState {
        let level = parse_level(ROOM).expect("room level should parse");
        GameState::new_with_seed(level, lives, 42)
    }

    #[test]
    fn fresh_state_starts_at_spawn_facing_right() {
        let state = room_state(5);

        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), state.spawn());
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.lives, 5);
        assert_eq!(state.food_eaten, 0);
        assert!(!state.game_over);
    }

    #[test]
    fn plain_move_keeps_length_and_lives() {
        let mut state = room_state(5);
        state.food = Position { x: 6, y: 4 };

        let result = state.tick(Direction::Right);

        assert_eq!(result, TickResult::Moved);
        assert_eq!(state.snake.head(), Position { x: 2, y: 1 });
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.lives, 5);
    }

    #[test]
    fn eating_food_grows_counts_and_relocates() {
        let mut state = room_state(5);
        state.food = Position { x: 2, y: 1 };

        let result = state.tick(Direction::Right);

        assert_eq!(result, TickResult::AteFood);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.food_eaten, 1);
        assert_ne!(state.food, Position { x: 2, y: 1 });
        assert!(state.grid.is_passable(state.food));
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn wall_collision_costs_a_life_and_respawns() {
        let mut state = room_state(5);
        state.food = Position { x: 6, y: 4 };
        state.snake = Snake::new(Position { x: 1, y: 2 });

        let result = state.tick(Direction::Left);

        assert_eq!(result, TickResult::Collided);
        assert_eq!(state.lives, 4);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), state.spawn());
        assert_eq!(state.direction, INITIAL_DIRECTION);
        assert!(!state.game_over);
    }

    #[test]
    fn self_collision_costs_a_life() {
        let mut state = room_state(5);
        state.food = Position { x: 6, y: 4 };
        // Head at (3,2) with the body hooked so Up hits a segment.
        state.snake = Snake::from_segments(vec![
            Position { x: 3, y: 2 },
            Position { x: 2, y: 2 },
            Position { x: 2, y: 1 },
            Position { x: 3, y: 1 },
        ]);

        let result = state.tick(Direction::Up);

        assert_eq!(result, TickResult::Collided);
        assert_eq!(state.lives, 4);
        assert_eq!(state.snake.head(), state.spawn());
    }

    #[test]
    fn tail_chasing_is_a_collision() {
        let mut state = room_state(5);
        state.food = Position { x: 6, y: 4 };
        // 2x2 loop: moving Down from the head lands on the tail cell, which
        // would be vacated this very tick. The pre-advance membership test
        // still counts it as occupied.
        state.snake = Snake::from_segments(vec![
            Position { x: 2, y: 1 },
            Position { x: 3, y: 1 },
            Position { x: 3, y: 2 },
            Position { x: 2, y: 2 },
        ]);

        let result = state.tick(Direction::Down);

        assert_eq!(result, TickResult::Collided);
        assert_eq!(state.lives, 4);
    }

    #[test]
    fn last_life_collision_ends_the_game() {
        let mut state = room_state(1);
        state.food = Position { x: 6, y: 4 };
        state.snake = Snake::new(Position { x: 1, y: 2 });

        let result = state.tick(Direction::Left);

        assert_eq!(result, TickResult::GameOver);
        assert!(state.game_over);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn finished_game_is_frozen() {
        let mut state = room_state(1);
        state.food = Position { x: 6, y: 4 };
        state.snake = Snake::new(Position { x: 1, y: 2 });
        assert_eq!(state.tick(Direction::Left), TickResult::GameOver);

        let head = state.snake.head();
        let result = state.tick(Direction::Right);

        assert_eq!(result, TickResult::GameOver);
        assert_eq!(state.snake.head(), head);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn lives_never_increase() {
        let mut state = room_state(3);
        state.food = Position { x: 6, y: 4 };

        let mut previous = state.lives;
        for direction in [
            Direction::Right,
            Direction::Right,
            Direction::Up, // wall
            Direction::Right,
            Direction::Down,
            Direction::Down,
            Direction::Down,
            Direction::Down, // wall
        ] {
            state.tick(direction);
            assert!(state.lives <= previous);
            previous = state.lives;
        }
    }
}
