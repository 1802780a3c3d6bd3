//! Game engine: lifecycle and collaborator wiring
//!
//! The engine owns the simulation state exclusively and runs the
//! idle -> playing -> gameover lifecycle around the pure tick function.
//! Collaborators are injected: a score store for the persisted high score and
//! a sound sink for cosmetic notifications. Both are fire-and-forget from the
//! engine's point of view - their failures never reach the simulation.

use crate::audio::{SoundEvent, SoundSink};
use crate::config::{Config, ConfigError};
use crate::consts::{MAX_DELTA, PROPELLER_SPIN_RATE, RESTART_SETTLE_DELAY};
use crate::persistence::ScoreStore;
use crate::sim::state::{GameEvent, GameState, GameStatus};
use crate::sim::tick::tick;
use crate::wrap_degrees;

/// The simulation engine and its injected collaborators.
pub struct Engine {
    config: Config,
    state: GameState,
    store: Box<dyn ScoreStore>,
    sounds: Box<dyn SoundSink>,
    high_score: u32,
    /// Ticks remaining before a restarted run re-enters `Playing`
    settle_ticks: f32,
}

impl Engine {
    /// Build an engine for the given configuration and collaborators.
    ///
    /// The high score is read from the store once, here; an unavailable store
    /// reads as zero. Degenerate configurations are rejected up front.
    pub fn new(
        config: Config,
        seed: u64,
        store: Box<dyn ScoreStore>,
        sounds: Box<dyn SoundSink>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let high_score = store.get();
        let state = GameState::new(seed, &config);
        log::info!(
            "engine up: {}x{} screen, seed {seed}, high score {high_score}",
            config.screen_width,
            config.screen_height
        );
        Ok(Self {
            config,
            state,
            store,
            sounds,
            high_score,
            settle_ticks: 0.0,
        })
    }

    /// Begin a run. Valid only while idle; a no-op in any other state.
    pub fn start(&mut self) {
        if self.state.status != GameStatus::Idle || self.settle_ticks > 0.0 {
            return;
        }
        self.state.reset(&self.config);
        self.state.status = GameStatus::Playing;
        log::info!("run started");
    }

    /// Reverse the lateral acceleration. Valid only while playing.
    ///
    /// The velocity is damped on the flip so the reversal feels immediate
    /// instead of carrying the full momentum through.
    pub fn tap_or_reverse(&mut self) {
        if self.state.status != GameStatus::Playing {
            return;
        }
        self.state.direction = self.state.direction.flipped();
        self.state.velocity_x *= crate::consts::TAP_DAMPING;
        self.sounds.play(SoundEvent::Tap);
    }

    /// Reset after a game over. The fresh run settles for a few ticks before
    /// physics resumes, so a restarted driver can never collide against stale
    /// geometry from the previous run.
    pub fn restart(&mut self) {
        if self.state.status != GameStatus::GameOver {
            return;
        }
        self.state.reset(&self.config);
        self.settle_ticks = RESTART_SETTLE_DELAY;
        log::info!("restarting after settle delay");
    }

    /// Advance by one tick worth of `delta` frame units.
    ///
    /// While idle only the propeller animates (and a pending restart counts
    /// down); while playing the full simulation steps; after a game over this
    /// is a no-op until `restart`.
    pub fn advance(&mut self, delta: f32) {
        let delta = delta.clamp(0.0, MAX_DELTA);
        match self.state.status {
            GameStatus::Idle => {
                self.state.propeller_phase =
                    wrap_degrees(self.state.propeller_phase + PROPELLER_SPIN_RATE * delta);
                if self.settle_ticks > 0.0 {
                    self.settle_ticks -= delta;
                    if self.settle_ticks <= 0.0 {
                        self.settle_ticks = 0.0;
                        self.state.status = GameStatus::Playing;
                        log::info!("run restarted");
                    }
                }
            }
            GameStatus::Playing => {
                for event in tick(&mut self.state, &self.config, delta) {
                    match event {
                        GameEvent::Scored(total) => self.sounds.play(SoundEvent::Score(total)),
                        GameEvent::Died => {
                            self.sounds.play(SoundEvent::Death);
                            self.record_high_score();
                        }
                    }
                }
            }
            GameStatus::GameOver => {}
        }
    }

    /// Screen geometry changed. Invariants are re-clamped; the platform
    /// window regenerates against the new width as platforms recycle.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.config.screen_width = width;
        self.config.screen_height = height;
        self.state.character_y = self.config.character_y();
        self.state.character_x = self.config.clamp_character_x(self.state.character_x);
        log::debug!("resized to {width}x{height}");
    }

    /// Read-only snapshot of the simulation state, refreshed once per tick.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Best score seen: the persisted high score or the current run's score,
    /// whichever is greater.
    pub fn current_high_score(&self) -> u32 {
        self.high_score.max(self.state.score)
    }

    /// Compare and persist once, at the playing -> gameover edge.
    fn record_high_score(&mut self) {
        if self.state.score > self.high_score {
            self.high_score = self.state.score;
            self.store.set(self.high_score);
            log::info!("new high score: {}", self.high_score);
        }
    }
}
