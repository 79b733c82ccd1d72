//! Zombie Survival - a side-scrolling wave survival simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, waves, tick)
//! - `config`: Tunable constants loaded from JSON
//! - `game_loop`: Fixed-step driver with start/stop lifecycle
//! - `renderer`: Read-only snapshots handed to an external renderer

pub mod config;
pub mod game_loop;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game_loop::{GameLoop, LoopPhase};
pub use renderer::{LogRenderer, Renderer, Snapshot};

/// Fixed geometry and spawn constants (not runtime-configurable)
pub mod consts {
    /// Player sprite box
    pub const PLAYER_WIDTH: f32 = 90.0;
    pub const PLAYER_HEIGHT: f32 = 78.0;
    /// Player spawn x; y is derived from the ground line
    pub const PLAYER_START_X: f32 = 50.0;

    /// Zombie sprite box
    pub const ZOMBIE_WIDTH: f32 = 80.0;
    pub const ZOMBIE_HEIGHT: f32 = 100.0;
    /// Per-zombie speed is drawn from [MIN, MAX)
    pub const ZOMBIE_MIN_SPEED: f32 = 0.5;
    pub const ZOMBIE_MAX_SPEED: f32 = 1.0;

    /// Projectile box (square)
    pub const PROJECTILE_SIZE: f32 = 20.0;

    /// Zombies spawn this far past the right edge, drawn from [MIN, MAX)
    pub const SPAWN_OFFSET_MIN: u32 = 200;
    pub const SPAWN_OFFSET_MAX: u32 = 800;

    /// Maximum ticks run per `GameLoop::advance` call to prevent spiral of death
    pub const MAX_CATCHUP_TICKS: u32 = 8;
}
