//! Time-gated pipe spawning and ground scrolling.

use crate::constants::{
    GROUND_SCROLL_WRAP, PIPE_CENTER_JITTER, PIPE_FREQUENCY_MS, SCREEN_HEIGHT, SCREEN_WIDTH,
    SCROLL_SPEED,
};
use crate::entities::PipePair;
use crate::game::GameMode;
use rand::Rng;
use std::time::Duration;

/// Spawns pipe pairs on a wall-clock interval.
///
/// Spawn timing uses elapsed time so the pipe rate does not depend on the
/// achieved frame rate. Scrolling is still counted in ticks.
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Clock reading of the last spawn. `None` spawns on the first call.
    pub last_spawn: Option<Duration>,
    pub spawn_interval: Duration,
    /// Horizontal offset of the looping ground strip, in (-35, 0].
    pub ground_scroll: i32,
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            last_spawn: None,
            spawn_interval: Duration::from_millis(PIPE_FREQUENCY_MS),
            ground_scroll: 0,
        }
    }

    /// Spawn a pipe pair if the interval has elapsed and scroll the ground.
    ///
    /// Does nothing outside [`GameMode::Playing`]. Returns true when a pair
    /// was appended to `pipes`.
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        now: Duration,
        mode: GameMode,
        rng: &mut R,
        pipes: &mut Vec<PipePair>,
    ) -> bool {
        if mode != GameMode::Playing {
            return false;
        }

        let due = match self.last_spawn {
            None => true,
            Some(last) => now.saturating_sub(last) > self.spawn_interval,
        };
        if due {
            let offset = rng.gen_range(-PIPE_CENTER_JITTER..=PIPE_CENTER_JITTER);
            pipes.push(PipePair::new(SCREEN_WIDTH, SCREEN_HEIGHT / 2 + offset));
            self.last_spawn = Some(now);
        }

        self.scroll_ground();
        due
    }

    fn scroll_ground(&mut self) {
        self.ground_scroll -= SCROLL_SPEED;
        if self.ground_scroll.abs() > GROUND_SCROLL_WRAP {
            self.ground_scroll = 0;
        }
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}
