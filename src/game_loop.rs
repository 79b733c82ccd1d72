//! Fixed-step game loop
//!
//! Owns the single `SimulationState` for a run and drives it one tick at a
//! time. Wall-clock time is accumulated and converted into whole ticks; a tick
//! is never partially applied and never scaled by frame time.

use std::time::Duration;

use crate::config::{ConfigError, GameConfig};
use crate::consts::MAX_CATCHUP_TICKS;
use crate::renderer::{Renderer, Snapshot};
use crate::sim::{PlayerCommand, SimulationState, TickReport, apply_command, tick};

/// Lifecycle of the loop. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// Waiting for the start signal; nothing ticks
    Idle,
    Running,
    /// Host closed; nothing ticks again
    Stopped,
}

/// Drives a `SimulationState` at a fixed rate
#[derive(Debug)]
pub struct GameLoop {
    config: GameConfig,
    seed: u64,
    phase: LoopPhase,
    state: Option<SimulationState>,
    accumulator: Duration,
}

impl GameLoop {
    /// Create an idle loop. Fails if the config cannot drive a fixed-rate run.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            seed,
            phase: LoopPhase::Idle,
            state: None,
            accumulator: Duration::ZERO,
        })
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// The run's state, once started
    pub fn state(&self) -> Option<&SimulationState> {
        self.state.as_ref()
    }

    /// Mutable access for scripted setups between ticks
    pub fn state_mut(&mut self) -> Option<&mut SimulationState> {
        self.state.as_mut()
    }

    /// Begin the run: place the player, spawn wave 1, start ticking.
    ///
    /// Only the first call from `Idle` has an effect.
    pub fn start(&mut self) -> bool {
        if self.phase != LoopPhase::Idle {
            return false;
        }
        let state = match SimulationState::new(self.config.clone(), self.seed) {
            Ok(state) => state,
            Err(err) => {
                log::error!("Cannot start: {err}");
                return false;
            }
        };
        self.state = Some(state);
        self.accumulator = Duration::ZERO;
        self.phase = LoopPhase::Running;
        log::info!("Game started (seed {})", self.seed);
        true
    }

    /// End the run. Idempotent and safe before `start`.
    pub fn stop(&mut self) {
        if self.phase == LoopPhase::Stopped {
            return;
        }
        if let Some(state) = &self.state {
            log::info!(
                "Game stopped at tick {} on wave {}",
                state.time_ticks,
                state.waves.wave()
            );
        }
        self.phase = LoopPhase::Stopped;
        self.accumulator = Duration::ZERO;
    }

    /// Apply an input command immediately. Ignored unless running.
    pub fn handle_input(&mut self, command: PlayerCommand) -> bool {
        if !self.is_running() {
            return false;
        }
        match self.state.as_mut() {
            Some(state) => apply_command(state, command),
            None => false,
        }
    }

    /// Run exactly one tick and render it
    pub fn step(&mut self, renderer: &mut impl Renderer) -> Option<TickReport> {
        if !self.is_running() {
            return None;
        }
        let state = self.state.as_mut()?;
        let report = tick(state);
        renderer.render(&Snapshot::capture(state));
        Some(report)
    }

    /// Feed elapsed wall-clock time and run every whole tick it covers.
    ///
    /// At most `MAX_CATCHUP_TICKS` run per call; time beyond that is dropped.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: Duration, renderer: &mut impl Renderer) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let interval = self.tick_interval();
        self.accumulator += elapsed.min(interval * MAX_CATCHUP_TICKS);

        let mut ticks = 0;
        while self.accumulator >= interval && ticks < MAX_CATCHUP_TICKS {
            if self.step(renderer).is_none() {
                break;
            }
            self.accumulator -= interval;
            ticks += 1;
        }
        ticks
    }

    /// Snapshot of the current state, once started
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.state.as_ref().map(Snapshot::capture)
    }
}
