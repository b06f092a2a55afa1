use std::collections::{HashSet, VecDeque};

use crate::game::GameState;
use crate::grid::{Direction, Position};

/// Picks the snake's next step: the first move of a shortest path from the
/// head to the food.
///
/// Breadth-first search over open cells the snake does not occupy, expanding
/// neighbors in the fixed [`Direction::ALL`] order (which breaks ties among
/// equally short paths). When the food is unreachable, or the head is already
/// on the food, the current direction is returned unchanged and the snake
/// keeps going straight until the board opens up.
///
/// The body moves every tick, so the result is only valid for the tick it was
/// computed for. Callers must not cache it.
#[must_use]
pub fn next_direction(state: &GameState) -> Direction {
    let start = state.snake.head();

    let mut queue: VecDeque<(Position, Vec<Direction>)> = VecDeque::new();
    let mut visited: HashSet<Position> = HashSet::new();
    queue.push_back((start, Vec::new()));
    visited.insert(start);

    while let Some((position, path)) = queue.pop_front() {
        if position == state.food {
            return path.first().copied().unwrap_or(state.direction);
        }

        for direction in Direction::ALL {
            let next = position.step(direction);
            if !is_walkable(state, next) || visited.contains(&next) {
                continue;
            }

            visited.insert(next);
            let mut next_path = path.clone();
            next_path.push(direction);
            queue.push_back((next, next_path));
        }
    }

    state.direction
}

/// A cell the search may route through: open floor without a snake segment.
fn is_walkable(state: &GameState, position: Position) -> bool {
    state.grid.is_passable(position) && !state.snake.occupies(position)
}

#[cfg(test)]
mod tests {
    use crate::game::{GameState, TickResult};
    use crate::grid::{Direction, Position};
    use crate::level::parse_level;
    use crate::snake::Snake;

    use super::next_direction;

    /// 5×5 open room behind a wall border.
    const OPEN_ROOM: &str = "7 7\n\
                             #######\n\
                             #&    #\n\
                             #     #\n\
                             #     #\n\
                             #     #\n\
                             #     #\n\
                             #######\n";

    /// One corridor connects the left chamber to the food chamber.
    const CORRIDOR: &str = "5 9\n\
                            #########\n\
                            #&  #   #\n\
                            #   #   #\n\
                            #       #\n\
                            #########\n";

    fn state_on(level_text: &str, seed: u64) -> GameState {
        let level = parse_level(level_text).expect("test level should parse");
        GameState::new_with_seed(level, 5, seed)
    }

    #[test]
    fn first_step_follows_bfs_tie_break_order() {
        let mut state = state_on(OPEN_ROOM, 3);
        state.food = Position { x: 3, y: 3 };

        // Up and Left from (1,1) are walls, so the queue seeds Down before
        // Right; the first shortest path dequeued is Down, Down, Right, Right.
        assert_eq!(next_direction(&state), Direction::Down);
    }

    #[test]
    fn reaches_food_in_manhattan_distance_on_open_ground() {
        let mut state = state_on(OPEN_ROOM, 3);
        state.food = Position { x: 3, y: 3 };

        for moves in 1..=4 {
            let direction = next_direction(&state);
            let result = state.tick(direction);

            if moves < 4 {
                assert_eq!(result, TickResult::Moved);
            } else {
                assert_eq!(result, TickResult::AteFood);
            }
        }

        assert_eq!(state.food_eaten, 1);
    }

    #[test]
    fn routes_around_walls() {
        let mut state = state_on(CORRIDOR, 5);
        state.food = Position { x: 5, y: 1 };

        // Shortest path must drop to row 3, cross the gap, and climb back:
        // 4 across + 2 down + 2 up = 8 moves.
        let mut moves = 0;
        loop {
            let direction = next_direction(&state);
            match state.tick(direction) {
                TickResult::Moved => moves += 1,
                TickResult::AteFood => {
                    moves += 1;
                    break;
                }
                other => panic!("unexpected tick result {other:?} after {moves} moves"),
            }
            assert!(moves <= 8, "path should not exceed the shortest route");
        }

        assert_eq!(moves, 8);
    }

    #[test]
    fn snake_body_blocks_paths() {
        let mut state = state_on(CORRIDOR, 5);
        state.food = Position { x: 5, y: 1 };
        // Three segments lying along the corridor row, head leftmost: the
        // only passage to the food chamber sits behind the snake's own body.
        state.snake = Snake::from_segments(vec![
            Position { x: 1, y: 3 },
            Position { x: 2, y: 3 },
            Position { x: 3, y: 3 },
        ]);
        state.direction = Direction::Left;

        assert_eq!(next_direction(&state), Direction::Left);
    }

    #[test]
    fn head_on_food_returns_current_direction() {
        let mut state = state_on(OPEN_ROOM, 3);
        state.direction = Direction::Left;
        state.food = state.snake.head();

        assert_eq!(next_direction(&state), Direction::Left);
    }

    #[test]
    fn first_step_is_never_worse_than_any_alternative() {
        let mut state = state_on(OPEN_ROOM, 3);
        state.food = Position { x: 2, y: 4 };

        // Walk the whole route; the distance to the food must drop by one
        // every tick, which only holds if each chosen step starts a shortest
        // path.
        let mut expected = manhattan(state.snake.head(), state.food);
        while expected > 0 {
            let direction = next_direction(&state);
            assert_ne!(state.tick(direction), TickResult::Collided);
            expected -= 1;
            if expected > 0 {
                assert_eq!(manhattan(state.snake.head(), state.food), expected);
            }
        }
    }

    fn manhattan(a: Position, b: Position) -> u32 {
        a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
    }
}
