//! Fixed-rate game loop on the terminal.

use crate::audio::TerminalAudio;
use crate::cli::Options;
use crate::input::TerminalInput;
use crate::ui::TerminalRenderer;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::adapters::{AudioPlayer, InputSource, Renderer, Track};
use flappy::constants::FPS;
use flappy::game::{GameState, TickEvents};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a target tick rate by sleeping out the rest of each frame.
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    /// Time left in the current frame at `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        (self.frame_start + self.frame).saturating_duration_since(now)
    }

    /// Sleep until the frame budget is spent, then start the next frame.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}

/// Take over the terminal, play until the user quits, and restore it.
pub fn run(options: &Options) -> io::Result<GameState> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut renderer = TerminalRenderer::new(terminal)?;

    let result = if options.bell {
        play(&mut renderer, options, TerminalAudio::with_bell(io::stdout()))
    } else {
        play(&mut renderer, options, TerminalAudio::<io::Stdout>::silent())
    };

    // Cleanup terminal
    disable_raw_mode()?;
    let terminal = renderer.terminal_mut();
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn play<B: Backend, W: Write>(
    renderer: &mut TerminalRenderer<B>,
    options: &Options,
    mut audio: TerminalAudio<W>,
) -> io::Result<GameState> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut input = TerminalInput::new();
    let mut state = GameState::new();
    let mut limiter = FrameLimiter::new(FPS);
    let clock = Instant::now();

    audio.play_looping(Track::Theme);
    info!("game loop started at {} ticks/s (seed: {:?})", FPS, options.seed);

    loop {
        input.set_viewport(renderer.viewport());
        let snapshot = input.poll()?;
        let events = state.tick(&snapshot, clock.elapsed(), &mut rng, renderer, &mut audio);
        renderer.present_frame()?;
        log_events(&state, &events);

        // Quit only after the current tick has been completed
        if snapshot.quit {
            info!("quit requested with score {}", state.score);
            break;
        }
        limiter.wait();
    }

    Ok(state)
}

fn log_events(state: &GameState, events: &TickEvents) {
    if events.is_empty() {
        return;
    }
    if events.started {
        info!("round started");
    }
    if events.restarted {
        info!("round restarted");
    }
    if events.spawned {
        debug!("pipe pair spawned, {} live", state.pipes.len());
    }
    if events.scored {
        debug!("score: {}", state.score);
    }
    if let Some(collision) = events.collision {
        info!("round over ({:?} collision), score {}", collision, state.score);
    }
}
