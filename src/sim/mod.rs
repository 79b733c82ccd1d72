//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order for zombies, firing order for projectiles)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{CollisionReport, Kill, player_contacts, projectile_hits};
pub use entity::{Entity, Rect};
pub use state::{Facing, Player, Projectile, SimulationState, Zombie};
pub use tick::{PlayerCommand, TickReport, apply_command, tick};
pub use wave::WaveManager;
