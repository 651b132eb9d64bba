//! Game state machine.
//!
//! Menu → Playing on the first press, Playing → GameOver on a collision,
//! GameOver → Playing when the restart button is pressed. [`GameState`]
//! owns the bird, the live pipe pairs and the score, and advances them
//! once per tick.

pub mod layout;
pub mod logic;
pub mod types;

pub use layout::*;
pub use types::*;
