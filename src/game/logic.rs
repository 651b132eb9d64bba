//! Per-tick update of the game state machine.

use super::layout::{game_over_rect, menu_rect, score_position};
use super::types::{GameMode, GameState, TickEvents};
use crate::adapters::{AudioPlayer, Font, InputState, Renderer, Rgb, Sound, Sprite};
use crate::constants::GROUND_Y;
use crate::evaluator::{check_collisions, update_score, Collision};
use crate::geometry::Point;
use rand::Rng;
use std::time::Duration;

impl GameState {
    /// Run one tick: draw, advance the bird, then run the mode's rules.
    ///
    /// `now` is a monotonic clock reading used only for spawn timing. All
    /// movement is counted per tick.
    pub fn tick<R: Rng>(
        &mut self,
        input: &InputState,
        now: Duration,
        rng: &mut R,
        renderer: &mut impl Renderer,
        audio: &mut impl AudioPlayer,
    ) -> TickEvents {
        let mut events = TickEvents::default();

        renderer.draw(Sprite::Background, Point::new(0, 0));
        if self.mode == GameMode::Menu {
            renderer.draw(Sprite::MainMenu, menu_rect().top_left());
        } else {
            self.update_bird(input, renderer, audio, &mut events);
        }
        renderer.draw(
            Sprite::Ground,
            Point::new(self.spawner.ground_scroll, GROUND_Y),
        );

        match self.mode {
            GameMode::Menu => {}
            GameMode::Playing => self.tick_playing(now, rng, audio, &mut events),
            GameMode::GameOver => self.tick_game_over(input, renderer, &mut events),
        }

        // First press of a round starts the flight
        if input.just_pressed && !self.flying && self.mode != GameMode::GameOver {
            events.started = self.mode == GameMode::Menu;
            self.flying = true;
            self.mode = GameMode::Playing;
        }

        events
    }

    fn update_bird(
        &mut self,
        input: &InputState,
        renderer: &mut impl Renderer,
        audio: &mut impl AudioPlayer,
        events: &mut TickEvents,
    ) {
        let game_over = self.mode == GameMode::GameOver;

        renderer.draw_text(
            &self.score.to_string(),
            Font::Score,
            Rgb::WHITE,
            score_position(),
        );
        let pose = self.bird.render_pose(game_over);
        renderer.draw(
            Sprite::Bird {
                frame: pose.frame,
                rotation_degrees: pose.rotation_degrees,
            },
            self.bird.rect.top_left(),
        );

        self.bird.apply_gravity(self.flying);
        if !game_over {
            if self.bird.handle_jump_input(input.pressed) {
                audio.play(Sound::Wing);
                events.jumped = true;
            }
            self.bird.advance_animation();
        }

        for pair in &self.pipes {
            renderer.draw(Sprite::Pipe { flipped: true }, pair.top.rect.top_left());
            renderer.draw(Sprite::Pipe { flipped: false }, pair.bottom.rect.top_left());
        }
    }

    fn tick_playing<R: Rng>(
        &mut self,
        now: Duration,
        rng: &mut R,
        audio: &mut impl AudioPlayer,
        events: &mut TickEvents,
    ) {
        if self.flying {
            events.spawned = self
                .spawner
                .maybe_spawn(now, self.mode, rng, &mut self.pipes);
        }

        if let Some(collision) = check_collisions(&mut self.bird, &self.pipes) {
            audio.play(Sound::Hit);
            match collision {
                Collision::Ground => self.flying = false,
                Collision::Obstacle => audio.play(Sound::Die),
            }
            self.mode = GameMode::GameOver;
            events.collision = Some(collision);
        }

        let update = update_score(&self.bird, &self.pipes, self.passed_pipe, self.score);
        if update.scored {
            audio.play(Sound::Point);
            events.scored = true;
        }
        self.passed_pipe = update.passed_pipe;
        self.score = update.score;

        if self.mode == GameMode::Playing && self.flying {
            self.pipes.retain_mut(|pair| !pair.advance());
        }
    }

    fn tick_game_over(
        &mut self,
        input: &InputState,
        renderer: &mut impl Renderer,
        events: &mut TickEvents,
    ) {
        renderer.draw(Sprite::GameOverText, game_over_rect().top_left());
        renderer.draw(Sprite::RestartButton, self.restart_button.top_left());

        if input.pressed && self.restart_button.contains_point(input.pointer) {
            self.restart();
            events.restarted = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{NullAudio, NullRenderer, Track};
    use crate::constants::{BIRD_HEIGHT, JUMP_IMPULSE};
    use crate::entities::PipePair;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct SoundLog(Vec<Sound>);

    impl AudioPlayer for SoundLog {
        fn play(&mut self, sound: Sound) {
            self.0.push(sound);
        }

        fn play_looping(&mut self, _track: Track) {}
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn playing_state() -> GameState {
        let mut state = GameState::new();
        state.mode = GameMode::Playing;
        state.flying = true;
        state
    }

    #[test]
    fn test_menu_waits_for_press() {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(1);
        let events = state.tick(
            &InputState::default(),
            ms(0),
            &mut rng,
            &mut NullRenderer,
            &mut NullAudio,
        );
        assert!(events.is_empty());
        assert_eq!(state.mode, GameMode::Menu);
        assert!(!state.flying);
    }

    #[test]
    fn test_first_press_starts_playing() {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(1);
        let events = state.tick(
            &InputState::press_at(Point::new(10, 10)),
            ms(0),
            &mut rng,
            &mut NullRenderer,
            &mut NullAudio,
        );
        assert!(events.started);
        assert_eq!(state.mode, GameMode::Playing);
        assert!(state.flying);
        // No pipe until the first playing tick
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_held_press_jumps_on_next_tick() {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut audio = SoundLog::default();
        let pointer = Point::new(10, 10);
        state.tick(
            &InputState::press_at(pointer),
            ms(0),
            &mut rng,
            &mut NullRenderer,
            &mut audio,
        );
        let events = state.tick(
            &InputState::held_at(pointer),
            ms(16),
            &mut rng,
            &mut NullRenderer,
            &mut audio,
        );
        assert!(events.jumped);
        assert!(events.spawned);
        assert_eq!(audio.0, vec![Sound::Wing]);
        // Gravity first, then the impulse
        assert_eq!(state.bird.velocity, 0.5 - JUMP_IMPULSE);
    }

    #[test]
    fn test_ground_hit_ends_round() {
        let mut state = playing_state();
        state.bird.rect.y = GROUND_Y - BIRD_HEIGHT + 1;
        let mut rng = StdRng::seed_from_u64(1);
        let mut audio = SoundLog::default();
        let events = state.tick(
            &InputState::default(),
            ms(0),
            &mut rng,
            &mut NullRenderer,
            &mut audio,
        );
        assert_eq!(events.collision, Some(Collision::Ground));
        assert_eq!(state.mode, GameMode::GameOver);
        assert!(!state.flying);
        assert_eq!(audio.0, vec![Sound::Hit]);
    }

    #[test]
    fn test_pipe_hit_plays_hit_then_die() {
        let mut state = playing_state();
        state.spawner.last_spawn = Some(ms(0));
        state.pipes.push(PipePair::new(state.bird.rect.x, 450));
        let mut rng = StdRng::seed_from_u64(1);
        let mut audio = SoundLog::default();
        let events = state.tick(
            &InputState::default(),
            ms(10),
            &mut rng,
            &mut NullRenderer,
            &mut audio,
        );
        assert_eq!(events.collision, Some(Collision::Obstacle));
        assert_eq!(audio.0, vec![Sound::Hit, Sound::Die]);
        assert_eq!(state.mode, GameMode::GameOver);
        // Bird keeps falling after a pipe hit
        assert!(state.flying);
    }

    #[test]
    fn test_pipes_frozen_after_game_over() {
        let mut state = playing_state();
        state.spawner.last_spawn = Some(ms(0));
        state.pipes.push(PipePair::new(state.bird.rect.x, 450));
        let x = state.pipes[0].left();
        let mut rng = StdRng::seed_from_u64(1);
        for tick in 1..30 {
            state.tick(
                &InputState::default(),
                ms(tick * 16),
                &mut rng,
                &mut NullRenderer,
                &mut NullAudio,
            );
        }
        assert_eq!(state.pipes.len(), 1);
        assert_eq!(state.pipes[0].left(), x);
    }

    #[test]
    fn test_press_outside_restart_button_is_ignored() {
        let mut state = playing_state();
        state.mode = GameMode::GameOver;
        state.score = 4;
        let mut rng = StdRng::seed_from_u64(1);
        let events = state.tick(
            &InputState::press_at(Point::new(5, 5)),
            ms(0),
            &mut rng,
            &mut NullRenderer,
            &mut NullAudio,
        );
        assert!(!events.restarted);
        assert_eq!(state.mode, GameMode::GameOver);
        assert_eq!(state.score, 4);
    }

    #[test]
    fn test_restart_resumes_flight_after_ground_hit() {
        let mut state = GameState::new();
        state.mode = GameMode::GameOver;
        state.flying = false;
        state.score = 4;
        state.bird.collided = true;
        let mut rng = StdRng::seed_from_u64(1);
        let button = state.restart_button.center();
        let events = state.tick(
            &InputState::press_at(button),
            ms(0),
            &mut rng,
            &mut NullRenderer,
            &mut NullAudio,
        );
        assert!(events.restarted);
        assert!(!events.started);
        assert_eq!(state.mode, GameMode::Playing);
        assert!(state.flying);
        assert_eq!(state.score, 0);
        assert!(!state.bird.collided);
    }
}
