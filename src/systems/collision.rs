//! Player overlap detection.
//!
//! The player never physically collides with coins or enemies; it only
//! overlaps them. [`overlap_detector`] finds those overlaps and emits a
//! [`CollisionEvent`] per pair, and [`collision_observer`] routes each pair
//! to the coin field or the game-over trigger.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::boxcollider::BoxCollider;
use crate::components::coin::Coin;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::collision::{CoinOverlapEvent, CollisionEvent, EnemyOverlapEvent};

/// Emit a [`CollisionEvent`] for every player/coin and player/enemy overlap.
///
/// Coins are reported before enemies, so a coin touched on the same tick
/// as an enemy still counts.
pub fn overlap_detector(
    mut commands: Commands,
    players: Query<(Entity, &MapPosition, &BoxCollider), With<Player>>,
    coins: Query<(Entity, &MapPosition, &BoxCollider, &Coin)>,
    enemies: Query<(Entity, &MapPosition, &BoxCollider), With<Enemy>>,
) {
    for (player, player_pos, player_collider) in players.iter() {
        for (coin, coin_pos, coin_collider, coin_state) in coins.iter() {
            if coin_state.alive
                && player_collider.overlaps(player_pos.pos, coin_collider, coin_pos.pos)
            {
                commands.trigger(CollisionEvent { a: player, b: coin });
            }
        }
        for (enemy, enemy_pos, enemy_collider) in enemies.iter() {
            if player_collider.overlaps(player_pos.pos, enemy_collider, enemy_pos.pos) {
                commands.trigger(CollisionEvent { a: player, b: enemy });
            }
        }
    }
}

/// Classify a [`CollisionEvent`] and re-emit it as a typed overlap event.
///
/// Pair ordering is not guaranteed, so both orientations are checked.
/// Pairs that do not involve the player are ignored.
pub fn collision_observer(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    players: Query<(), With<Player>>,
    coins: Query<(), With<Coin>>,
    enemies: Query<(), With<Enemy>>,
) {
    let event = trigger.event();
    let (player, other) = if players.contains(event.a) {
        (event.a, event.b)
    } else if players.contains(event.b) {
        (event.b, event.a)
    } else {
        trace!("Collision between {:?} and {:?} ignored", event.a, event.b);
        return;
    };

    if coins.contains(other) {
        commands.trigger(CoinOverlapEvent {
            player,
            coin: other,
        });
    } else if enemies.contains(other) {
        commands.trigger(EnemyOverlapEvent {
            player,
            enemy: other,
        });
    }
}
