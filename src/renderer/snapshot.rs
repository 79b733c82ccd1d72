//! Read-only view of the simulation handed to renderers
//!
//! Built after a tick has fully completed; never holds references into the
//! live state, so a renderer cannot observe or cause mid-tick mutation.

use serde::Serialize;

use crate::sim::{Entity, Facing, Rect, SimulationState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub bounds: Rect,
    pub facing: Facing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZombieView {
    pub id: u32,
    pub label: String,
    pub bounds: Rect,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub wave: u32,
    /// Live-zombie counter shown in the HUD
    pub live_enemies: u32,
    pub player: PlayerView,
    pub enemies: Vec<ZombieView>,
    pub projectiles: Vec<Rect>,
}

impl Snapshot {
    pub fn capture(state: &SimulationState) -> Self {
        Self {
            tick: state.time_ticks,
            wave: state.waves.wave(),
            live_enemies: state.waves.live_count(),
            player: PlayerView {
                bounds: state.player.bounding_box(),
                facing: state.player.facing,
            },
            enemies: state
                .enemies
                .iter()
                .map(|zombie| ZombieView {
                    id: zombie.id,
                    label: zombie.label.clone(),
                    bounds: zombie.bounding_box(),
                })
                .collect(),
            projectiles: state
                .player
                .projectiles
                .iter()
                .map(|projectile| projectile.bounding_box())
                .collect(),
        }
    }

    /// Serialize for an out-of-process renderer
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
