//! Ratatui canvas implementation of the [`Renderer`] contract.
//!
//! Draw calls made during a tick are buffered and painted onto a single
//! canvas on `present_frame`. The canvas bounds are the world itself with
//! the y axis flipped, so sprite geometry never has to be rescaled by hand.

use super::viewport::Viewport;
use flappy::adapters::{Font, Renderer, Rgb, Sprite};
use flappy::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use flappy::geometry::{Point, Rect};
use ratatui::{
    backend::Backend,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block,
    },
    Terminal,
};
use std::io;

const SKY: Color = Color::Rgb(78, 192, 202);
const CLOUD: Color = Color::Rgb(222, 244, 246);
const PIPE: Color = Color::Rgb(100, 170, 40);
const PIPE_CAP: Color = Color::Rgb(60, 100, 20);
const GRASS: Color = Color::Rgb(84, 168, 55);
const GRASS_LIGHT: Color = Color::Rgb(110, 200, 70);
const DIRT: Color = Color::Rgb(210, 185, 110);
const BIRD: Color = Color::Rgb(245, 200, 66);
const PANEL: Color = Color::Rgb(40, 60, 90);
const BANNER: Color = Color::Rgb(225, 120, 35);
const BUTTON: Color = Color::Rgb(230, 90, 40);
const OUTSIDE: Color = Color::Black;

const PIPE_CAP_HEIGHT: i32 = 24;
const GRASS_HEIGHT: i32 = 12;
const GROUND_STRIPE_SPACING: i32 = 24;

/// Wing glyph for each animation frame.
const WING_GLYPHS: [char; 3] = ['v', '-', '^'];

#[derive(Debug, Clone, PartialEq)]
enum DrawCommand {
    Sprite { sprite: Sprite, position: Point },
    Text { text: String, color: Rgb, position: Point },
}

/// Renderer that paints into a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    commands: Vec<DrawCommand>,
    viewport: Viewport,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> io::Result<Self> {
        let viewport = Viewport::fit(terminal.size()?);
        Ok(Self {
            terminal,
            commands: Vec::new(),
            viewport,
        })
    }

    /// Area used by the last presented frame.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn draw(&mut self, sprite: Sprite, position: Point) {
        self.commands.push(DrawCommand::Sprite { sprite, position });
    }

    fn draw_text(&mut self, text: &str, _font: Font, color: Rgb, position: Point) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            color,
            position,
        });
    }

    fn present_frame(&mut self) -> io::Result<()> {
        let commands = std::mem::take(&mut self.commands);
        let mut viewport = self.viewport;

        self.terminal.draw(|frame| {
            let size = frame.size();
            frame.render_widget(Block::default().style(Style::default().bg(OUTSIDE)), size);

            viewport = Viewport::fit(size);
            let canvas = Canvas::default()
                .marker(Marker::HalfBlock)
                .background_color(SKY)
                .x_bounds([0.0, SCREEN_WIDTH as f64])
                .y_bounds([0.0, SCREEN_HEIGHT as f64])
                .paint(|ctx| {
                    let mut painter = Painter { ctx, viewport };
                    for command in &commands {
                        painter.paint(command);
                    }
                });
            frame.render_widget(canvas, viewport.area);
        })?;

        self.viewport = viewport;
        Ok(())
    }
}

/// Turns draw commands into canvas shapes and labels.
struct Painter<'c, 'a> {
    ctx: &'c mut Context<'a>,
    viewport: Viewport,
}

impl Painter<'_, '_> {
    fn paint(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Sprite { sprite, position } => self.paint_sprite(*sprite, *position),
            DrawCommand::Text {
                text,
                color,
                position,
            } => {
                let Rgb(r, g, b) = *color;
                let style = Style::default()
                    .fg(Color::Rgb(r, g, b))
                    .add_modifier(Modifier::BOLD);
                self.label(text, style, *position);
            }
        }
    }

    fn paint_sprite(&mut self, sprite: Sprite, position: Point) {
        let bounds = sprite.bounds_at(position);
        match sprite {
            Sprite::Background => {
                self.fill(bounds, SKY);
                // A couple of static clouds
                self.fill(Rect::new(40, 80, 90, 24), CLOUD);
                self.fill(Rect::new(250, 150, 110, 28), CLOUD);
            }
            Sprite::MainMenu => {
                self.fill(bounds, PANEL);
                let center = bounds.center();
                let title = Style::default().fg(BIRD).add_modifier(Modifier::BOLD);
                let hint = Style::default().fg(Color::White);
                self.label("FLAPPY BIRD", title, Point::new(center.x, center.y - 60));
                self.label("Click or press Space", hint, center);
                self.label("to start", hint, Point::new(center.x, center.y + 30));
            }
            Sprite::Ground => {
                let strip = Rect::new(bounds.x, bounds.y, SCREEN_WIDTH - bounds.x, bounds.height);
                self.fill(strip, DIRT);
                self.fill(Rect::new(strip.x, strip.y, strip.width, GRASS_HEIGHT), GRASS);
                let mut x = strip.x;
                while x < SCREEN_WIDTH + GRASS_HEIGHT {
                    self.segment(
                        (x, strip.y),
                        (x - GRASS_HEIGHT, strip.y + GRASS_HEIGHT),
                        GRASS_LIGHT,
                    );
                    x += GROUND_STRIPE_SPACING;
                }
            }
            Sprite::Bird {
                frame,
                rotation_degrees,
            } => {
                self.fill(bounds, BIRD);
                let wing = WING_GLYPHS[frame % WING_GLYPHS.len()];
                let glyph = format!("{}{}", wing, heading_glyph(rotation_degrees));
                let style = Style::default().fg(Color::Black).bg(BIRD);
                self.label(&glyph, style, bounds.center());
            }
            Sprite::Pipe { flipped } => {
                self.fill(bounds, PIPE);
                // The cap faces the gap
                let cap_y = if flipped {
                    bounds.bottom() - PIPE_CAP_HEIGHT
                } else {
                    bounds.top()
                };
                self.fill(Rect::new(bounds.x, cap_y, bounds.width, PIPE_CAP_HEIGHT), PIPE_CAP);
            }
            Sprite::GameOverText => {
                self.fill(bounds, BANNER);
                let style = Style::default()
                    .fg(Color::White)
                    .bg(BANNER)
                    .add_modifier(Modifier::BOLD);
                self.label("GAME OVER", style, bounds.center());
            }
            Sprite::RestartButton => {
                self.fill(bounds, BUTTON);
                let style = Style::default()
                    .fg(Color::White)
                    .bg(BUTTON)
                    .add_modifier(Modifier::BOLD);
                self.label("RESTART", style, bounds.center());
            }
        }
    }

    /// Fill a world rectangle with vertical canvas lines.
    fn fill(&mut self, rect: Rect, color: Color) {
        let step = (self.viewport.units_per_column() / 2.0).max(1.0);
        let top = (SCREEN_HEIGHT - rect.top()) as f64;
        let bottom = (SCREEN_HEIGHT - rect.bottom()) as f64;
        let mut x = rect.left() as f64;
        while x < rect.right() as f64 {
            self.ctx.draw(&CanvasLine {
                x1: x,
                y1: top,
                x2: x,
                y2: bottom,
                color,
            });
            x += step;
        }
    }

    fn segment(&mut self, from: (i32, i32), to: (i32, i32), color: Color) {
        self.ctx.draw(&CanvasLine {
            x1: from.0 as f64,
            y1: (SCREEN_HEIGHT - from.1) as f64,
            x2: to.0 as f64,
            y2: (SCREEN_HEIGHT - to.1) as f64,
            color,
        });
    }

    /// Print `text` centered on a world point.
    fn label(&mut self, text: &str, style: Style, center: Point) {
        let half_width = text.chars().count() as f64 * self.viewport.units_per_column() / 2.0;
        let x = (center.x as f64 - half_width).max(0.0);
        let y = (SCREEN_HEIGHT - center.y) as f64;
        self.ctx
            .print(x, y, Line::from(Span::styled(text.to_string(), style)));
    }
}

/// Arrow for the bird's heading. Positive rotation tilts the beak up.
fn heading_glyph(rotation_degrees: f32) -> char {
    if rotation_degrees <= -60.0 {
        '↓'
    } else if rotation_degrees < -10.0 {
        '↘'
    } else if rotation_degrees > 10.0 {
        '↗'
    } else {
        '→'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flappy::game::{game_over_rect, restart_button_rect};
    use ratatui::backend::TestBackend;

    fn renderer(width: u16, height: u16) -> TerminalRenderer<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        TerminalRenderer::new(terminal).unwrap()
    }

    fn screen_text(renderer: &TerminalRenderer<TestBackend>) -> String {
        renderer
            .terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_heading_glyphs() {
        assert_eq!(heading_glyph(-90.0), '↓');
        assert_eq!(heading_glyph(-24.0), '↘');
        assert_eq!(heading_glyph(0.0), '→');
        assert_eq!(heading_glyph(33.0), '↗');
    }

    #[test]
    fn test_commands_buffered_until_present() {
        let mut renderer = renderer(80, 40);
        renderer.draw(Sprite::Background, Point::new(0, 0));
        renderer.draw_text("12", Font::Score, Rgb::WHITE, Point::new(200, 30));
        assert_eq!(renderer.commands.len(), 2);
        renderer.present_frame().unwrap();
        assert!(renderer.commands.is_empty());
    }

    #[test]
    fn test_present_draws_overlay_labels() {
        let mut renderer = renderer(80, 40);
        renderer.draw(Sprite::Background, Point::new(0, 0));
        renderer.draw(Sprite::GameOverText, game_over_rect().top_left());
        renderer.draw(Sprite::RestartButton, restart_button_rect().top_left());
        renderer.draw_text("7", Font::Score, Rgb::WHITE, Point::new(200, 30));
        renderer.present_frame().unwrap();

        let text = screen_text(&renderer);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("RESTART"));
        assert!(text.contains('7'));
    }

    #[test]
    fn test_viewport_follows_terminal_size() {
        let mut renderer = renderer(80, 24);
        renderer.present_frame().unwrap();
        assert_eq!(renderer.viewport().area.width, 32);
        assert_eq!(renderer.viewport().area.height, 24);
    }
}
