//! Enemy spawner.
//!
//! One enemy is spawned per collected coin, at a spawn marker chosen
//! uniformly at random, moving horizontally at a random speed and dropping
//! slowly. Enemies bounce perfectly off platforms, the level bounds and each
//! other, and are never removed while the session runs.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::levelmap::SpawnPoints;
use crate::resources::rng::SessionRng;

pub const ENEMY_SIZE: Vec2 = Vec2::new(24.0, 24.0);

/// Where and how a new enemy enters the level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyRoll {
    pub spawn_index: usize,
    pub position: Vec2,
    pub velocity: Vec2,
}

pub fn roll_enemy(spawns: &SpawnPoints, config: &GameConfig, rng: &mut SessionRng) -> EnemyRoll {
    let points = spawns.enemies();
    let spawn_index = rng.index(points.len());
    let vx = rng.range_f32(-config.enemy_speed, config.enemy_speed);
    EnemyRoll {
        spawn_index,
        position: points[spawn_index],
        velocity: Vec2::new(vx, config.enemy_drop_velocity),
    }
}

/// Queue a new enemy. The entity exists once `commands` are applied.
pub fn spawn_enemy(
    commands: &mut Commands,
    spawns: &SpawnPoints,
    config: &GameConfig,
    rng: &mut SessionRng,
) -> Entity {
    let roll = roll_enemy(spawns, config, rng);
    let entity = commands
        .spawn((
            Enemy {
                spawn_index: roll.spawn_index,
            },
            MapPosition::from_vec(roll.position),
            RigidBody::with_bounce(1.0)
                .with_velocity(roll.velocity)
                .with_gravity(config.gravity),
            BoxCollider::new(ENEMY_SIZE.x, ENEMY_SIZE.y),
        ))
        .id();
    debug!(
        "Enemy {:?} spawned at marker {} moving {:?}",
        entity, roll.spawn_index, roll.velocity
    );
    entity
}
