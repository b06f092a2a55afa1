use rand::Rng;

use crate::grid::{Grid, Position};
use crate::snake::Snake;

/// Picks a cell for the next food pellet: uniform samples over the board,
/// rejected until one lands on open floor the snake does not occupy.
///
/// Termination is probabilistic, not bounded; a maze whose free space is
/// almost entirely covered by the snake can resample for a long time. Level
/// density is assumed low relative to free space.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, grid: &Grid, snake: &Snake) -> Position {
    loop {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(grid.width())),
            y: rng.gen_range(0..i32::from(grid.height())),
        };

        if grid.is_passable(candidate) && !snake.occupies(candidate) {
            return candidate;
        }
    }
}
