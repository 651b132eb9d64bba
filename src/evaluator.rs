//! Collision and scoring rules evaluated once per tick.

use crate::constants::GROUND_Y;
use crate::entities::{Bird, PipePair};

/// Kind of round-ending collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Bird dropped below the ground line.
    Ground,
    /// Bird hit a pipe or the top of the screen.
    Obstacle,
}

/// Result of the scoring rule for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreUpdate {
    pub passed_pipe: bool,
    pub score: u32,
    /// A pipe pair was cleared this tick.
    pub scored: bool,
}

/// Apply the collision rules to the bird's latches.
///
/// Ground is checked first; the obstacle rule is skipped once `collided`
/// is set, so at most one collision registers per round.
pub fn check_collisions(bird: &mut Bird, pipes: &[PipePair]) -> Option<Collision> {
    if bird.rect.bottom() > GROUND_Y && !bird.collided {
        bird.collided = true;
        return Some(Collision::Ground);
    }

    let hit_obstacle =
        bird.rect.top() <= 0 || pipes.iter().any(|pair| pair.intersects(&bird.rect));
    if hit_obstacle && !bird.collided && !bird.died {
        bird.collided = true;
        bird.died = true;
        return Some(Collision::Obstacle);
    }

    None
}

/// Track the nearest pipe pair and count it once the bird clears it.
pub fn update_score(bird: &Bird, pipes: &[PipePair], passed_pipe: bool, score: u32) -> ScoreUpdate {
    let mut update = ScoreUpdate {
        passed_pipe,
        score,
        scored: false,
    };
    let Some(nearest) = pipes.first() else {
        return update;
    };

    let bird_left = bird.rect.left();
    let bird_right = bird.rect.right();

    if bird_left > nearest.left() && bird_right < nearest.right() && !update.passed_pipe {
        update.passed_pipe = true;
    }
    if update.passed_pipe && bird_left > nearest.right() {
        update.score += 1;
        update.passed_pipe = false;
        update.scored = true;
    }
    update
}
