//! Renderer boundary
//!
//! The core never draws. After each tick it hands a `Snapshot` to whatever
//! `Renderer` the host provides.

pub mod snapshot;

pub use snapshot::{PlayerView, Snapshot, ZombieView};

/// Consumes one snapshot per completed tick
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

/// Headless renderer that writes the HUD to the log every `every` ticks
#[derive(Debug, Clone)]
pub struct LogRenderer {
    every: u64,
    last_wave: u32,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            last_wave: 0,
        }
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        if snapshot.wave != self.last_wave {
            log::info!(
                "Wave: {} | Zombies: {}",
                snapshot.wave,
                snapshot.live_enemies
            );
            self.last_wave = snapshot.wave;
        }
        if snapshot.tick % self.every == 0 {
            let nearest = snapshot
                .enemies
                .iter()
                .map(|zombie| zombie.bounds.x)
                .min_by(|a, b| a.total_cmp(b));
            log::info!(
                "tick {} | player x={:.0} | projectiles {} | zombies {} | nearest {}",
                snapshot.tick,
                snapshot.player.bounds.x,
                snapshot.projectiles.len(),
                snapshot.live_enemies,
                nearest.map_or_else(|| "-".to_string(), |x| format!("{x:.0}"))
            );
        }
    }
}
