//! Host session
//!
//! Owns the simulation, the sampled input, and the storage-backed pieces
//! (settings, high score). Hosts call [`Game::step`] once per frame and draw
//! [`Game::scene`].

use crate::highscores::HighScore;
use crate::persistence::KeyValueStore;
use crate::platform::InputState;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Hud, Scene, tick};

pub struct Game<S: KeyValueStore> {
    pub state: GameState,
    pub input: InputState,
    /// Paddle plays itself
    pub idle_mode: bool,
    settings: Settings,
    high_score: HighScore,
    store: S,
}

impl<S: KeyValueStore> Game<S> {
    /// Start a run, loading settings and the high score from `store`
    pub fn new(store: S, seed: u64) -> Self {
        let settings = Settings::load(&store);
        let high_score = HighScore::load(&store);
        let state = GameState::with_high_score(seed, high_score.best);
        log::info!("Started new game with seed: {}", seed);

        let mut game = Self {
            state,
            input: InputState::new(),
            idle_mode: false,
            settings: Settings::default(),
            high_score,
            store,
        };
        game.apply_settings(settings);
        game
    }

    /// Advance one tick; returns what happened
    pub fn step(&mut self) -> &[GameEvent] {
        let input = self.input.sample(self.idle_mode);
        tick(&mut self.state, &input);

        for event in &self.state.events {
            match *event {
                GameEvent::GameOver { score, .. } => {
                    if self.high_score.record(&mut self.store, score) {
                        log::info!("New high score: {}", score);
                    }
                }
                GameEvent::LevelComplete { next_level } => {
                    log::info!("Level cleared, entering level {}", next_level);
                }
                GameEvent::PowerupCaught { kind } => {
                    log::debug!("Caught {:?}", kind);
                }
                _ => {}
            }
        }

        &self.state.events
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply settings to the running session without persisting them
    pub fn apply_settings(&mut self, settings: Settings) {
        self.state.max_particles = settings.max_particles();
        self.state.particles.truncate(self.state.max_particles);
        self.input.pointer_disabled = !settings.pointer_control;
        if !settings.pointer_control {
            self.input.pointer_left();
        }
        self.settings = settings;
    }

    /// Apply and persist settings; a storage failure is logged and ignored
    pub fn update_settings(&mut self, settings: Settings) {
        if let Err(err) = settings.save(&mut self.store) {
            log::warn!("Could not save settings: {}", err);
        }
        self.apply_settings(settings);
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best
    }

    pub fn scene(&self) -> Scene {
        Scene::capture(&self.state)
    }

    pub fn hud(&self) -> Hud {
        Hud::capture(&self.state)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
