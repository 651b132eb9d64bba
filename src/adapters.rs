//! Contracts between the game core and the platform.
//!
//! The core calls into a [`Renderer`] and an [`AudioPlayer`] during a tick
//! and consumes an [`InputState`] snapshot produced by an [`InputSource`].
//! Concrete terminal implementations live in the binary.

use crate::constants::{
    BIRD_HEIGHT, BIRD_WIDTH, GAME_OVER_HEIGHT, GAME_OVER_WIDTH, GROUND_HEIGHT, GROUND_WIDTH,
    MENU_HEIGHT, MENU_WIDTH, PIPE_HEIGHT, PIPE_WIDTH, RESTART_HEIGHT, RESTART_WIDTH,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::geometry::{Point, Rect};
use std::io;

/// Images the core can ask to have drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sprite {
    Background,
    MainMenu,
    Ground,
    Bird { frame: usize, rotation_degrees: f32 },
    /// `flipped` is set for the upper pipe of a pair.
    Pipe { flipped: bool },
    GameOverText,
    RestartButton,
}

impl Sprite {
    /// Unrotated footprint in world units as `(width, height)`.
    pub fn size(self) -> (i32, i32) {
        match self {
            Sprite::Background => (SCREEN_WIDTH, SCREEN_HEIGHT),
            Sprite::MainMenu => (MENU_WIDTH, MENU_HEIGHT),
            Sprite::Ground => (GROUND_WIDTH, GROUND_HEIGHT),
            Sprite::Bird { .. } => (BIRD_WIDTH, BIRD_HEIGHT),
            Sprite::Pipe { .. } => (PIPE_WIDTH, PIPE_HEIGHT),
            Sprite::GameOverText => (GAME_OVER_WIDTH, GAME_OVER_HEIGHT),
            Sprite::RestartButton => (RESTART_WIDTH, RESTART_HEIGHT),
        }
    }

    /// Bounds of the sprite when drawn at `position`.
    pub fn bounds_at(self, position: Point) -> Rect {
        let (width, height) = self.size();
        Rect::new(position.x, position.y, width, height)
    }
}

/// Font faces available to `draw_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Score,
}

/// 24-bit text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Wing,
    Hit,
    Die,
    Point,
}

/// Looping music tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Theme,
}

/// Drawing surface. Draw calls are assumed to succeed; only presenting the
/// finished frame touches the device.
pub trait Renderer {
    /// Draw `sprite` with its top-left corner at `position`.
    fn draw(&mut self, sprite: Sprite, position: Point);

    /// Draw `text` centered on `position`.
    fn draw_text(&mut self, text: &str, font: Font, color: Rgb, position: Point);

    fn present_frame(&mut self) -> io::Result<()>;
}

/// Fire-and-forget audio output.
pub trait AudioPlayer {
    fn play(&mut self, sound: Sound);
    fn play_looping(&mut self, track: Track);
}

/// Input polled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    /// Pointer position in world units.
    pub pointer: Point,
    /// Primary button currently held.
    pub pressed: bool,
    /// Primary button went down since the previous poll.
    pub just_pressed: bool,
    /// The user asked to close the game.
    pub quit: bool,
}

impl InputState {
    /// A fresh press at `pointer`, as delivered on the tick the button goes down.
    pub fn press_at(pointer: Point) -> Self {
        Self {
            pointer,
            pressed: true,
            just_pressed: true,
            quit: false,
        }
    }

    /// Button held from an earlier tick.
    pub fn held_at(pointer: Point) -> Self {
        Self {
            pointer,
            pressed: true,
            just_pressed: false,
            quit: false,
        }
    }
}

/// Source of per-tick input snapshots.
pub trait InputSource {
    fn poll(&mut self) -> io::Result<InputState>;
}

/// Renderer that drops every command.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _sprite: Sprite, _position: Point) {}

    fn draw_text(&mut self, _text: &str, _font: Font, _color: Rgb, _position: Point) {}

    fn present_frame(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Audio player that stays silent.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioPlayer for NullAudio {
    fn play(&mut self, _sound: Sound) {}

    fn play_looping(&mut self, _track: Track) {}
}
