//! Crossterm input turned into per-tick [`InputState`] snapshots.

use crate::ui::Viewport;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use flappy::adapters::{InputSource, InputState};
use flappy::game::restart_button_rect;
use flappy::geometry::Point;
use std::io;
use std::time::Duration;

/// Polls the terminal without blocking and tracks the mouse button.
///
/// Space, Up and Enter act as a one-tick tap at the current pointer; `r`
/// taps the restart button.
#[derive(Debug, Default)]
pub struct TerminalInput {
    viewport: Viewport,
    pointer: Point,
    button_down: bool,
    /// A press arrived during the current poll, even if it was already released.
    pressed_this_poll: bool,
    quit: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Viewport used to translate mouse cells into world points.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn begin_poll(&mut self) {
        self.pressed_this_poll = false;
        self.quit = false;
    }

    fn apply_event(&mut self, event: &Event) {
        match event {
            Event::Mouse(mouse) => {
                self.pointer = self.viewport.to_world(mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        self.button_down = true;
                        self.pressed_this_poll = true;
                    }
                    MouseEventKind::Up(MouseButton::Left) => self.button_down = false,
                    _ => {}
                }
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => self.apply_key(key),
            _ => {}
        }
    }

    fn apply_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => self.pressed_this_poll = true,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.pointer = restart_button_rect().center();
                self.pressed_this_poll = true;
            }
            _ => {}
        }
    }

    fn snapshot(&self) -> InputState {
        InputState {
            pointer: self.pointer,
            pressed: self.button_down || self.pressed_this_poll,
            just_pressed: self.pressed_this_poll,
            quit: self.quit,
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<InputState> {
        self.begin_poll();
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.apply_event(&event);
        }
        Ok(self.snapshot())
    }
}
