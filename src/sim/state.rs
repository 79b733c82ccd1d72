//! Simulation state and entity types
//!
//! Everything a tick reads or writes lives in `SimulationState`, owned by the
//! game loop and passed by `&mut` into each system.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::wave::WaveManager;
use crate::config::{ConfigError, GameConfig};
use crate::consts::*;

/// Horizontal facing, only used by the renderer to pick a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// A projectile fired by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Horizontal travel per tick
    pub speed: f32,
}

impl Projectile {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self { pos, speed }
    }

    pub fn update(&mut self) {
        self.pos.x += self.speed;
    }
}

impl Entity for Projectile {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::splat(PROJECTILE_SIZE)
    }
}

/// A zombie walking toward decreasing x
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zombie {
    pub id: u32,
    /// Display name, e.g. "Zombie 3"
    pub label: String,
    pub pos: Vec2,
    /// Leftward travel per tick, fixed at spawn
    pub speed: f32,
}

impl Zombie {
    pub fn new(id: u32, label: String, pos: Vec2, speed: f32) -> Self {
        Self {
            id,
            label,
            pos,
            speed,
        }
    }

    pub fn update(&mut self) {
        self.pos.x -= self.speed;
    }
}

impl Entity for Zombie {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::new(ZOMBIE_WIDTH, ZOMBIE_HEIGHT)
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub move_speed: f32,
    pub facing: Facing,
    /// Live projectiles in firing order
    pub projectiles: Vec<Projectile>,
    /// Ticks until the next shot is allowed
    pub cooldown: u32,
    pub cooldown_max: u32,
    pub projectile_speed: f32,
}

impl Player {
    /// Create a player standing on the ground line at the start position
    pub fn new(config: &GameConfig) -> Self {
        Self::at(
            Vec2::new(PLAYER_START_X, config.ground_y - PLAYER_HEIGHT),
            config,
        )
    }

    pub fn at(pos: Vec2, config: &GameConfig) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            move_speed: config.player_move_speed,
            facing: Facing::Right,
            projectiles: Vec::new(),
            cooldown: 0,
            cooldown_max: config.cooldown_ticks,
            projectile_speed: config.projectile_speed,
        }
    }

    pub fn move_left(&mut self) {
        self.vel.x = -self.move_speed;
        self.facing = Facing::Left;
    }

    pub fn move_right(&mut self) {
        self.vel.x = self.move_speed;
        self.facing = Facing::Right;
    }

    pub fn stop(&mut self) {
        self.vel.x = 0.0;
    }

    pub fn can_shoot(&self) -> bool {
        self.cooldown == 0
    }

    /// Fire from mid-height if the cooldown has expired.
    ///
    /// Returns whether a projectile was spawned. Firing during cooldown is a
    /// silent no-op; nothing is queued.
    pub fn shoot(&mut self) -> bool {
        if !self.can_shoot() {
            return false;
        }
        let origin = Vec2::new(self.pos.x, self.pos.y + PLAYER_HEIGHT / 2.0);
        self.projectiles.push(Projectile::new(origin, self.projectile_speed));
        self.cooldown = self.cooldown_max;
        true
    }

    /// Advance position, cooldown and owned projectiles by one tick
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.cooldown = self.cooldown.saturating_sub(1);
        for projectile in &mut self.projectiles {
            projectile.update();
        }
    }
}

impl Entity for Player {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Live zombies in spawn order
    pub enemies: Vec<Zombie>,
    pub waves: WaveManager,
    rng: Pcg32,
}

impl SimulationState {
    /// Create a fresh run: player on the ground, first wave spawned
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut state = Self::empty(config, seed)?;
        let SimulationState {
            config,
            enemies,
            waves,
            rng,
            ..
        } = &mut state;
        waves.spawn_initial(config, enemies, rng);
        Ok(state)
    }

    /// A run with the player placed but no wave spawned yet
    pub fn empty(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            player: Player::new(&config),
            enemies: Vec::new(),
            waves: WaveManager::new(&config),
            seed,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            config,
        })
    }

    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Insert a zombie outside the wave spawner (scripted scenarios)
    pub fn add_enemy(&mut self, zombie: Zombie) {
        self.enemies.push(zombie);
        self.waves.record_spawn();
    }

    /// Drop every zombie after the first `len`, counting each as killed
    pub fn truncate_enemies(&mut self, len: usize) {
        while self.enemies.len() > len {
            self.enemies.pop();
            self.waves.record_kill();
        }
    }

    /// Whether the live tally matches the live set
    pub fn tally_in_sync(&self) -> bool {
        self.waves.live_count() as usize == self.enemies.len()
    }

    /// Check wave completion, spawning the next wave if every zombie is dead
    pub fn check_wave_advance(&mut self) -> bool {
        let SimulationState {
            config,
            enemies,
            waves,
            rng,
            ..
        } = self;
        waves.check_advance(config, enemies, rng)
    }
}
