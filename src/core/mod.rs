//! Core types: players and the game-state contract.
//!
//! This module contains the building blocks that are game-agnostic.
//! Concrete games implement `GameState`; search only ever talks to it.

pub mod player;
pub mod state;

pub use player::Player;
pub use state::{GameState, DRAW, LOSE, WIN};
