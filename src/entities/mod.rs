//! Entities driven by the game state machine.
//!
//! The entity set is fixed: one bird and a list of pipe pairs. Each type
//! owns its per-tick update rules and is driven directly by
//! [`GameState`](crate::game::GameState).

pub mod bird;
pub mod pipe;

pub use bird::*;
pub use pipe::*;
