//! Wave progression
//!
//! Wave 1 spawns `initial_wave_size` zombies. Whenever the live set empties the
//! next wave starts immediately with `wave_increment` more zombies than the
//! last. There is no final wave.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Zombie;
use crate::config::GameConfig;
use crate::consts::*;

/// Wave counter, target size and live-zombie tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveManager {
    /// Current wave (1-based)
    wave: u32,
    /// Zombies spawned for the current wave
    target_count: u32,
    /// Zombies still alive; mirrors the live set outside a collision pass
    live_count: u32,
    next_zombie_id: u32,
}

impl WaveManager {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            wave: 1,
            target_count: config.initial_wave_size,
            live_count: 0,
            next_zombie_id: 1,
        }
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn target_count(&self) -> u32 {
        self.target_count
    }

    pub fn live_count(&self) -> u32 {
        self.live_count
    }

    /// Spawn the first wave
    pub fn spawn_initial<R: Rng + ?Sized>(
        &mut self,
        config: &GameConfig,
        enemies: &mut Vec<Zombie>,
        rng: &mut R,
    ) {
        self.spawn_batch(config, enemies, rng);
        log::info!("Wave {} started with {} zombies", self.wave, self.target_count);
    }

    /// Start the next wave if no zombie is left alive.
    ///
    /// Returns true when a new wave was spawned.
    pub fn check_advance<R: Rng + ?Sized>(
        &mut self,
        config: &GameConfig,
        enemies: &mut Vec<Zombie>,
        rng: &mut R,
    ) -> bool {
        if !enemies.is_empty() {
            return false;
        }
        self.wave += 1;
        self.target_count += config.wave_increment;
        self.spawn_batch(config, enemies, rng);
        log::info!("Wave {} started with {} zombies", self.wave, self.target_count);
        true
    }

    /// Count one zombie added to the live set
    pub fn record_spawn(&mut self) {
        self.live_count += 1;
    }

    /// Count one zombie killed
    pub fn record_kill(&mut self) {
        debug_assert!(self.live_count > 0, "kill recorded with no live zombies");
        self.live_count = self.live_count.saturating_sub(1);
    }

    fn spawn_batch<R: Rng + ?Sized>(
        &mut self,
        config: &GameConfig,
        enemies: &mut Vec<Zombie>,
        rng: &mut R,
    ) {
        enemies.reserve(self.target_count as usize);
        for i in 1..=self.target_count {
            let zombie = spawn_zombie(config, self.next_zombie_id, i, rng);
            log::debug!(
                "Spawned {} (id {}) at x={:.0} speed={:.2}",
                zombie.label,
                zombie.id,
                zombie.pos.x,
                zombie.speed
            );
            self.next_zombie_id += 1;
            self.record_spawn();
            enemies.push(zombie);
        }
    }
}

/// Place a zombie past the right edge of the playfield, feet on the ground line
fn spawn_zombie<R: Rng + ?Sized>(
    config: &GameConfig,
    id: u32,
    index_in_batch: u32,
    rng: &mut R,
) -> Zombie {
    let offset = rng.random_range(SPAWN_OFFSET_MIN..SPAWN_OFFSET_MAX);
    let pos = Vec2::new(
        config.playfield_width + offset as f32,
        config.ground_y - ZOMBIE_HEIGHT,
    );
    let speed = rng.random_range(ZOMBIE_MIN_SPEED..ZOMBIE_MAX_SPEED);
    Zombie::new(id, format!("Zombie {index_in_batch}"), pos, speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (GameConfig, WaveManager, Vec<Zombie>, Pcg32) {
        let config = GameConfig::default();
        let waves = WaveManager::new(&config);
        (config, waves, Vec::new(), Pcg32::seed_from_u64(42))
    }

    #[test]
    fn test_initial_wave() {
        let (config, mut waves, mut enemies, mut rng) = setup();
        waves.spawn_initial(&config, &mut enemies, &mut rng);

        assert_eq!(waves.wave(), 1);
        assert_eq!(waves.target_count(), 5);
        assert_eq!(waves.live_count(), 5);
        assert_eq!(enemies.len(), 5);

        for (i, zombie) in enemies.iter().enumerate() {
            assert_eq!(zombie.label, format!("Zombie {}", i + 1));
            assert!(zombie.pos.x >= 1060.0 + 200.0 && zombie.pos.x < 1060.0 + 800.0);
            assert_eq!(zombie.pos.x.fract(), 0.0);
            assert_eq!(zombie.pos.y, 700.0);
            assert!(zombie.speed >= 0.5 && zombie.speed < 1.0);
        }
    }

    #[test]
    fn test_no_advance_while_zombies_live() {
        let (config, mut waves, mut enemies, mut rng) = setup();
        waves.spawn_initial(&config, &mut enemies, &mut rng);
        enemies.truncate(1);

        assert!(!waves.check_advance(&config, &mut enemies, &mut rng));
        assert_eq!(waves.wave(), 1);
        assert_eq!(enemies.len(), 1);
    }

    #[test]
    fn test_advance_escalates_by_increment() {
        let (config, mut waves, mut enemies, mut rng) = setup();
        waves.spawn_initial(&config, &mut enemies, &mut rng);

        for expected_wave in 2..=6u32 {
            while enemies.pop().is_some() {
                waves.record_kill();
            }
            assert_eq!(waves.live_count(), 0);
            assert!(waves.check_advance(&config, &mut enemies, &mut rng));
            assert_eq!(waves.wave(), expected_wave);
            assert_eq!(waves.target_count(), 5 * expected_wave);
            assert_eq!(enemies.len() as u32, 5 * expected_wave);
            assert_eq!(waves.live_count(), 5 * expected_wave);
        }
    }

    #[test]
    fn test_labels_restart_and_ids_stay_unique() {
        let (config, mut waves, mut enemies, mut rng) = setup();
        waves.spawn_initial(&config, &mut enemies, &mut rng);
        let first_ids: Vec<u32> = enemies.iter().map(|z| z.id).collect();
        enemies.clear();
        waves.check_advance(&config, &mut enemies, &mut rng);

        assert_eq!(enemies[0].label, "Zombie 1");
        assert_eq!(enemies[9].label, "Zombie 10");
        assert!(enemies.iter().all(|z| !first_ids.contains(&z.id)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no live zombies")]
    fn test_kill_without_live_zombie_is_caught() {
        let (_, mut waves, _, _) = setup();
        waves.record_kill();
    }

    #[test]
    fn test_custom_increment() {
        let config = GameConfig {
            initial_wave_size: 2,
            wave_increment: 3,
            ..Default::default()
        };
        let mut waves = WaveManager::new(&config);
        let mut enemies = Vec::new();
        let mut rng = Pcg32::seed_from_u64(1);
        waves.spawn_initial(&config, &mut enemies, &mut rng);
        assert_eq!(enemies.len(), 2);
        enemies.clear();
        waves.check_advance(&config, &mut enemies, &mut rng);
        assert_eq!(enemies.len(), 5);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let config = GameConfig::default();
        let spawn = |seed| {
            let mut waves = WaveManager::new(&config);
            let mut enemies = Vec::new();
            waves.spawn_initial(&config, &mut enemies, &mut Pcg32::seed_from_u64(seed));
            enemies
        };
        assert_eq!(spawn(9), spawn(9));
    }
}
