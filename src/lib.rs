//! Snaze: a Snake game that plays itself.
//!
//! Every tick a breadth-first search picks the next step toward the food and
//! the movement engine applies it. The simulation modules ([`grid`],
//! [`snake`], [`game`], [`pathfinder`], [`food`]) are pure and terminal-free;
//! the binary wires them to level files, ratatui rendering, and a tick loop.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod level;
pub mod pathfinder;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
