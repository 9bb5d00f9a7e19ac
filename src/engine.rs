//! External control surface
//!
//! `GameEngine` owns the simulation and the drawing surface. The host calls
//! [`GameEngine::step`] once per display refresh with the measured delta;
//! each step ticks the simulation and renders the result.

use crate::consts::DEFAULT_SEED;
use crate::renderer::{self, Surface};
use crate::sim::state::sanitize_extent;
use crate::sim::wrap::{wrap_bounding, wrap_center};
use crate::sim::{FrameInput, GameState, tick};
use crate::tuning::Tuning;

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Built, not yet driven
    Constructed,
    Running,
    /// Terminal; a retry builds a new engine
    Disposed,
}

pub struct GameEngine<S: Surface> {
    state: GameState,
    surface: S,
    lifecycle: Lifecycle,
}

impl<S: Surface> GameEngine<S> {
    /// Ship centered, initial asteroids and enemies placed
    pub fn new(surface: S, width: f32, height: f32) -> Self {
        Self::with_seed(surface, width, height, DEFAULT_SEED)
    }

    pub fn with_seed(surface: S, width: f32, height: f32, seed: u64) -> Self {
        Self::with_tuning(surface, width, height, seed, Tuning::default())
    }

    pub fn with_tuning(surface: S, width: f32, height: f32, seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::new(seed, width, height, tuning),
            surface,
            lifecycle: Lifecycle::Constructed,
        }
    }

    pub fn start(&mut self) {
        match self.lifecycle {
            Lifecycle::Constructed => {
                self.lifecycle = Lifecycle::Running;
                log::info!("Engine started (seed {})", self.state.seed);
            }
            Lifecycle::Running => {}
            Lifecycle::Disposed => log::warn!("start() on a disposed engine ignored"),
        }
    }

    /// Advance one frame and redraw. Returns false if the engine is not running.
    pub fn step(&mut self, dt: f32, input: &FrameInput) -> bool {
        match self.lifecycle {
            Lifecycle::Running => {}
            Lifecycle::Constructed => return false,
            Lifecycle::Disposed => {
                log::warn!("step() after dispose ignored");
                return false;
            }
        }

        tick(&mut self.state, input, dt);
        renderer::render(&self.state, &mut self.surface);
        true
    }

    /// New play-field bounds; every wrap policy is re-applied at once
    pub fn resize(&mut self, width: f32, height: f32) {
        let (w, h) = (sanitize_extent(width), sanitize_extent(height));
        if w != width || h != height {
            log::warn!("resize({}, {}) clamped to {}x{}", width, height, w, h);
        }
        let state = &mut self.state;
        state.width = w;
        state.height = h;

        wrap_center(&mut state.ship.body.pos, w, h);
        for enemy in &mut state.enemies {
            wrap_center(&mut enemy.body.pos, w, h);
        }
        for asteroid in &mut state.asteroids {
            wrap_bounding(&mut asteroid.body.pos, asteroid.body.size, w, h);
        }
        for power_up in &mut state.power_ups {
            wrap_bounding(&mut power_up.body.pos, power_up.body.size, w, h);
        }
        log::info!("Resized to {}x{}", w, h);
    }

    /// Cancel pending reversions and stop accepting steps for good
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.state.ship.effects.cancel_all();
        self.lifecycle = Lifecycle::Disposed;
        log::info!("Engine disposed at frame {}", self.state.frame);
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts and scenario tests
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
