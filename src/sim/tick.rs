//! Fixed timestep simulation tick
//!
//! One call advances every entity by one step, resolves collisions and checks
//! for wave completion. There is no delta time: every tick is the same size.

use serde::{Deserialize, Serialize};

use super::collision::{self, CollisionReport};
use super::state::SimulationState;

/// A logical input action, independent of the device that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCommand {
    MoveLeft,
    MoveRight,
    /// Direction key released
    Stop,
    Fire,
}

/// Apply an input command to the player immediately.
///
/// The effect is observed by the next tick. Returns false when the command
/// changed nothing (firing during cooldown).
pub fn apply_command(state: &mut SimulationState, command: PlayerCommand) -> bool {
    let player = &mut state.player;
    match command {
        PlayerCommand::MoveLeft => player.move_left(),
        PlayerCommand::MoveRight => player.move_right(),
        PlayerCommand::Stop => player.stop(),
        PlayerCommand::Fire => return player.shoot(),
    }
    true
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub collisions: CollisionReport,
    /// A new wave was spawned at the end of this tick
    pub wave_advanced: bool,
}

/// Advance the simulation by one fixed step
pub fn tick(state: &mut SimulationState) -> TickReport {
    state.time_ticks += 1;

    state.player.update();
    for zombie in &mut state.enemies {
        zombie.update();
    }

    let collisions = collision::resolve(state);
    let wave_advanced = state.check_wave_advance();
    debug_assert!(
        state.tally_in_sync(),
        "live tally {} does not match {} live zombies",
        state.waves.live_count(),
        state.enemies.len()
    );

    TickReport {
        collisions,
        wave_advanced,
    }
}
