//! Collision detection and resolution
//!
//! Two passes per tick, both plain AABB overlap tests:
//! - player vs zombie: detected and reported, but has no gameplay effect
//! - projectile vs zombie: each projectile destroys at most one zombie
//!
//! Hits are collected during the scan and removals applied afterwards, so the
//! entity vectors are never mutated while being iterated.

use super::entity::Entity;
use super::state::{Player, Projectile, SimulationState, Zombie};
use super::wave::WaveManager;

/// A zombie destroyed by a projectile
#[derive(Debug, Clone, PartialEq)]
pub struct Kill {
    pub zombie_id: u32,
    pub label: String,
}

/// Everything the collision passes found in one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Ids of zombies overlapping the player (inert)
    pub contacts: Vec<u32>,
    pub kills: Vec<Kill>,
}

/// Ids of zombies currently overlapping the player.
///
/// Contact has no consequence yet: no damage, no knockback, no game over.
pub fn player_contacts(player: &Player, enemies: &[Zombie]) -> Vec<u32> {
    let player_box = player.bounding_box();
    enemies
        .iter()
        .filter(|zombie| player_box.intersects(&zombie.bounding_box()))
        .map(|zombie| zombie.id)
        .collect()
}

/// Pair each projectile with the first unclaimed zombie it overlaps.
///
/// Returns `(projectile_index, zombie_index)` pairs in projectile order. Zombies
/// are tested in spawn order and a zombie claimed by an earlier projectile is
/// skipped, so every index appears at most once on each side.
pub fn projectile_hits(projectiles: &[Projectile], enemies: &[Zombie]) -> Vec<(usize, usize)> {
    let mut claimed = vec![false; enemies.len()];
    let mut hits = Vec::new();

    for (p_idx, projectile) in projectiles.iter().enumerate() {
        let bullet_box = projectile.bounding_box();
        let target = enemies
            .iter()
            .enumerate()
            .find(|(z_idx, zombie)| {
                !claimed[*z_idx] && bullet_box.intersects(&zombie.bounding_box())
            })
            .map(|(z_idx, _)| z_idx);

        if let Some(z_idx) = target {
            claimed[z_idx] = true;
            hits.push((p_idx, z_idx));
        }
    }

    hits
}

/// Remove every projectile/zombie pair that collided and update the live tally
pub fn resolve_projectile_hits(
    player: &mut Player,
    enemies: &mut Vec<Zombie>,
    waves: &mut WaveManager,
) -> Vec<Kill> {
    let hits = projectile_hits(&player.projectiles, enemies);
    if hits.is_empty() {
        return Vec::new();
    }

    let mut spent = vec![false; player.projectiles.len()];
    let mut dead = vec![false; enemies.len()];
    let mut kills = Vec::with_capacity(hits.len());

    for &(p_idx, z_idx) in &hits {
        spent[p_idx] = true;
        dead[z_idx] = true;
        let zombie = &enemies[z_idx];
        log::debug!("{} (id {}) destroyed", zombie.label, zombie.id);
        kills.push(Kill {
            zombie_id: zombie.id,
            label: zombie.label.clone(),
        });
    }

    let mut idx = 0;
    player.projectiles.retain(|_| {
        let keep = !spent[idx];
        idx += 1;
        keep
    });

    let mut idx = 0;
    enemies.retain(|_| {
        let keep = !dead[idx];
        idx += 1;
        keep
    });

    for _ in &kills {
        waves.record_kill();
    }

    kills
}

/// Run both collision passes against the current state
pub fn resolve(state: &mut SimulationState) -> CollisionReport {
    let contacts = player_contacts(&state.player, &state.enemies);
    for id in &contacts {
        log::trace!("Zombie {id} touching player (no effect)");
    }

    let kills = resolve_projectile_hits(&mut state.player, &mut state.enemies, &mut state.waves);

    CollisionReport { contacts, kills }
}
