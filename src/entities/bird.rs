//! The player-controlled bird.

use crate::constants::{
    BIRD_ANIMATION_COOLDOWN, BIRD_DEAD_ROTATION, BIRD_FRAMES, BIRD_HEIGHT, BIRD_SPAWN_X,
    BIRD_SPAWN_Y, BIRD_TILT_PER_VELOCITY, BIRD_WIDTH, GRAVITY, GROUND_Y, JUMP_IMPULSE,
    TERMINAL_VELOCITY,
};
use crate::geometry::{Point, Rect};

/// Sprite frame and rotation to draw the bird with this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdPose {
    pub frame: usize,
    /// Counter-clockwise rotation in degrees. Positive tilts the beak up.
    pub rotation_degrees: f32,
}

/// The bird. Created once, reset between rounds, never destroyed.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Bounding box. The x position never changes after spawn.
    pub rect: Rect,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity: f32,
    /// Latched once any terminal collision has been registered.
    pub collided: bool,
    /// Latched once the death effects have fired.
    pub died: bool,
    /// Current animation frame.
    pub frame: usize,
    /// Ticks since the last frame change.
    pub frame_counter: u32,
    /// Button latch so a held press only jumps once.
    click: bool,
    spawn_center: Point,
}

impl Bird {
    /// Create a bird centered on `center`.
    pub fn new(center: Point) -> Self {
        Self {
            rect: Rect::centered_on(center, BIRD_WIDTH, BIRD_HEIGHT),
            velocity: 0.0,
            collided: false,
            died: false,
            frame: 0,
            frame_counter: 0,
            click: false,
            spawn_center: center,
        }
    }

    /// Apply one tick of gravity.
    ///
    /// Does nothing unless `flying`. The position only integrates while the
    /// bird is at or above the ground line.
    pub fn apply_gravity(&mut self, flying: bool) {
        if !flying {
            return;
        }
        self.velocity = (self.velocity + GRAVITY).min(TERMINAL_VELOCITY);
        if self.rect.bottom() <= GROUND_Y {
            self.rect.y += self.velocity.floor() as i32;
        }
    }

    /// Feed the polled button state. Returns true when a jump fired.
    ///
    /// Only the not-pressed → pressed edge jumps; holding the button does
    /// nothing further until it is released. Velocity has no upward clamp.
    pub fn handle_jump_input(&mut self, mouse_down: bool) -> bool {
        if !mouse_down {
            self.click = false;
            return false;
        }
        if self.click {
            return false;
        }
        self.click = true;
        self.velocity -= JUMP_IMPULSE;
        true
    }

    /// Advance the wing animation by one tick.
    pub fn advance_animation(&mut self) {
        self.frame_counter += 1;
        if self.frame_counter > BIRD_ANIMATION_COOLDOWN {
            self.frame_counter = 0;
            self.frame = (self.frame + 1) % BIRD_FRAMES;
        }
    }

    /// Pose to draw: tilted with velocity while alive, nose-down once the
    /// round is over.
    pub fn render_pose(&self, game_over: bool) -> BirdPose {
        let rotation_degrees = if game_over {
            BIRD_DEAD_ROTATION
        } else {
            self.velocity * BIRD_TILT_PER_VELOCITY
        };
        BirdPose {
            frame: self.frame,
            rotation_degrees,
        }
    }

    /// Put the bird back on its spawn point with cleared latches.
    pub fn reset(&mut self) {
        self.rect = Rect::centered_on(self.spawn_center, BIRD_WIDTH, BIRD_HEIGHT);
        self.velocity = 0.0;
        self.collided = false;
        self.died = false;
    }

    pub fn center_y(&self) -> i32 {
        self.rect.center().y
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new(Point::new(BIRD_SPAWN_X, BIRD_SPAWN_Y))
    }
}
