//! Overlap events.
//!
//! [`overlap_detector`](crate::systems::collision::overlap_detector) emits a
//! [`CollisionEvent`] for every player overlap it finds.
//! [`collision_observer`](crate::systems::collision::collision_observer)
//! classifies the pair and re-emits it as a [`CoinOverlapEvent`] or an
//! [`EnemyOverlapEvent`], which the coin field and the game-over trigger
//! observe.
use bevy_ecs::prelude::*;

/// Two entities' colliders overlap. No ordering guarantees are provided.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

/// The player touches a coin.
#[derive(Event, Debug, Clone, Copy)]
pub struct CoinOverlapEvent {
    pub player: Entity,
    pub coin: Entity,
}

/// The player touches an enemy.
#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyOverlapEvent {
    pub player: Entity,
    pub enemy: Entity,
}
