//! Flappy - a single-screen tap-to-fly arcade game.
//!
//! The library holds the platform-independent core: entities, spawning,
//! collision and scoring rules, and the game state machine. Rendering,
//! input and audio are reached through the traits in [`adapters`].

pub mod adapters;
pub mod build_info;
pub mod constants;
pub mod entities;
pub mod evaluator;
pub mod game;
pub mod geometry;
pub mod spawner;

pub use adapters::{AudioPlayer, InputState, Renderer};
pub use game::{GameMode, GameState, TickEvents};
