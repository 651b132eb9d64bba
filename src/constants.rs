//! Fixed world, physics and layout constants.
//!
//! All distances are logical world units on a 400×600 playfield with the
//! origin in the top-left corner and y growing downward.

// World dimensions
pub const SCREEN_WIDTH: i32 = 400;
pub const SCREEN_HEIGHT: i32 = 600;
pub const GROUND_Y: i32 = 500;

// Game timing
pub const FPS: u32 = 60;
pub const PIPE_FREQUENCY_MS: u64 = 1000;

// Physics (per tick)
pub const GRAVITY: f32 = 0.5;
pub const TERMINAL_VELOCITY: f32 = 8.0;
pub const JUMP_IMPULSE: f32 = 11.0;
pub const SCROLL_SPEED: i32 = 4;

// Pipes
pub const PIPE_GAP: i32 = 150;
pub const PIPE_WIDTH: i32 = 52;
pub const PIPE_HEIGHT: i32 = 320;
/// Maximum distance of a gap center from the screen middle.
pub const PIPE_CENTER_JITTER: i32 = 100;

// Ground strip
pub const GROUND_WIDTH: i32 = 336;
pub const GROUND_HEIGHT: i32 = SCREEN_HEIGHT - GROUND_Y;
pub const GROUND_SCROLL_WRAP: i32 = 35;

// Bird
pub const BIRD_WIDTH: i32 = 34;
pub const BIRD_HEIGHT: i32 = 24;
pub const BIRD_SPAWN_X: i32 = 100;
pub const BIRD_SPAWN_Y: i32 = SCREEN_HEIGHT / 2;
pub const BIRD_FRAMES: usize = 3;
pub const BIRD_ANIMATION_COOLDOWN: u32 = 5;
pub const BIRD_DEAD_ROTATION: f32 = -90.0;
pub const BIRD_TILT_PER_VELOCITY: f32 = -3.0;

// Overlays
pub const MENU_WIDTH: i32 = 300;
pub const MENU_HEIGHT: i32 = 400;
pub const RESTART_WIDTH: i32 = 150;
pub const RESTART_HEIGHT: i32 = 50;
pub const GAME_OVER_WIDTH: i32 = 192;
pub const GAME_OVER_HEIGHT: i32 = 42;
/// Vertical distance the game-over banner sits above the screen middle.
pub const GAME_OVER_LIFT: i32 = 100;
pub const SCORE_TEXT_Y: i32 = 30;
