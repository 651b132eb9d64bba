//! Game state data structures.

use super::layout::restart_button_rect;
use crate::entities::{Bird, PipePair};
use crate::evaluator::Collision;
use crate::geometry::Rect;
use crate::spawner::Spawner;

/// Top-level mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// What happened during one tick.
///
/// Sounds are already emitted by the time this is returned; the runner uses
/// it for logging and tests use it to observe transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvents {
    /// Menu → Playing happened this tick.
    pub started: bool,
    pub jumped: bool,
    pub spawned: bool,
    pub scored: bool,
    pub collision: Option<Collision>,
    /// GameOver → Playing happened this tick.
    pub restarted: bool,
}

impl TickEvents {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Everything that changes while the game runs.
#[derive(Debug, Clone)]
pub struct GameState {
    pub mode: GameMode,
    /// Gravity and scrolling are active. Set by the first press of a round.
    pub flying: bool,
    pub bird: Bird,
    /// Live pipe pairs in spawn order, which is also left-to-right order.
    pub pipes: Vec<PipePair>,
    pub spawner: Spawner,
    pub score: u32,
    /// The bird is inside the nearest pipe pair's horizontal span.
    pub passed_pipe: bool,
    pub restart_button: Rect,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            mode: GameMode::Menu,
            flying: false,
            bird: Bird::default(),
            pipes: Vec::new(),
            spawner: Spawner::new(),
            score: 0,
            passed_pipe: false,
            restart_button: restart_button_rect(),
        }
    }

    /// Start a fresh round after game over.
    ///
    /// The spawn clock and ground scroll keep running.
    pub fn restart(&mut self) {
        self.pipes.clear();
        self.bird.reset();
        self.score = 0;
        self.passed_pipe = false;
        self.mode = GameMode::Playing;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
