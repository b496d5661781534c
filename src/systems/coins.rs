//! Coin field: layout, spawning and collection.
//!
//! Coins drop from the top of the level at evenly spaced x positions with a
//! random restitution and a small random horizontal jitter. Touching a live
//! coin collects it exactly once: the coin is removed, the score goes up by
//! one, the new score is published on the score channel, and an enemy is
//! spawned.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info};

use crate::components::boxcollider::BoxCollider;
use crate::components::coin::Coin;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::audio::{AudioCmd, FX_COIN};
use crate::events::collision::CoinOverlapEvent;
use crate::events::score::ScoreChangedEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::levelmap::SpawnPoints;
use crate::resources::rng::SessionRng;
use crate::resources::score::Score;
use crate::systems::enemies::spawn_enemy;

pub const COIN_SIZE: Vec2 = Vec2::new(16.0, 16.0);

/// X positions of `count` coins spread over `span` starting at `base`.
///
/// The first coin sits at `base` and the last at `base + span`. A single coin
/// sits at `base`; zero coins yields an empty layout.
pub fn coin_layout(count: u32, base: f32, span: f32) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![base],
        n => {
            let step = span / (n - 1) as f32;
            (0..n).map(|i| base + i as f32 * step).collect()
        }
    }
}

/// Randomised physical properties of a freshly spawned coin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinRoll {
    pub bounce: f32,
    pub velocity_x: f32,
}

pub fn roll_coin(rng: &mut SessionRng, config: &GameConfig) -> CoinRoll {
    CoinRoll {
        bounce: rng.range_f32(config.coin_bounce_min, config.coin_bounce_max),
        velocity_x: rng.range_f32(-config.coin_jitter_vx, config.coin_jitter_vx),
    }
}

/// Spawn the full coin field at the top of the level. Returns the number of
/// coins queued.
pub fn spawn_coin_field(
    commands: &mut Commands,
    config: &GameConfig,
    rng: &mut SessionRng,
) -> usize {
    let layout = coin_layout(
        config.coin_count,
        config.coin_base_offset,
        config.coin_span,
    );
    for (index, x) in layout.iter().enumerate() {
        let roll = roll_coin(rng, config);
        commands.spawn((
            Coin::new(index),
            MapPosition::new(*x, 0.0),
            RigidBody::with_bounce(roll.bounce)
                .with_velocity(Vec2::new(roll.velocity_x, 0.0))
                .with_gravity(config.gravity),
            BoxCollider::new(COIN_SIZE.x, COIN_SIZE.y),
        ));
    }
    layout.len()
}

/// Collect a touched coin.
///
/// A coin that is already collected, or any touch outside of
/// [`GameStates::Running`], is ignored.
#[allow(clippy::too_many_arguments)]
pub fn coin_collection_observer(
    trigger: On<CoinOverlapEvent>,
    mut commands: Commands,
    mut coins: Query<&mut Coin>,
    mut score: ResMut<Score>,
    state: Res<GameState>,
    spawns: Res<SpawnPoints>,
    config: Res<GameConfig>,
    mut rng: ResMut<SessionRng>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let coin_entity = trigger.event().coin;
    if state.get() != GameStates::Running {
        return;
    }
    let Ok(mut coin) = coins.get_mut(coin_entity) else {
        debug!("Coin {:?} no longer exists", coin_entity);
        return;
    };
    if !coin.collect() {
        debug!("Coin {:?} already collected", coin_entity);
        return;
    }

    commands.entity(coin_entity).despawn();
    audio.write(AudioCmd::play_fx(FX_COIN));

    let new_score = score.increment();
    info!("Coin {} collected, score {}", coin.index, new_score);
    commands.trigger(ScoreChangedEvent { score: new_score });

    spawn_enemy(&mut commands, &spawns, &config, &mut rng);
}
