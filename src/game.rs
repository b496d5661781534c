//! Scene setup and session state hooks.
//!
//! - [`spawn_platforms`] builds the static level geometry once.
//! - [`enter_running`] (re)initialises a session: it clears the previous
//!   run's entities, resets the score, and spawns the player and the coin
//!   field.
//! - [`enter_game_over`] tints the player, shows the restart prompt and
//!   swaps the ambient music for the death cue.
//!
//! Both hooks are registered in
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and run by
//! [`observe_gamestate_change_event`](crate::events::gamestate::observe_gamestate_change_event).
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::platform::Platform;
use crate::components::player::{Player, PlayerState};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::events::audio::{AudioCmd, FX_DEATH, MUSIC_AMBIENT};
use crate::events::score::ScoreChangedEvent;
use crate::resources::animationstore::AnimationStore;
use crate::resources::atlas::SpriteAtlas;
use crate::resources::gameconfig::GameConfig;
use crate::resources::hud::Hud;
use crate::resources::levelmap::{LevelMap, SpawnPoints};
use crate::resources::rng::SessionRng;
use crate::resources::score::Score;
use crate::systems::coins::spawn_coin_field;

pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 48.0);

/// Spawn one static [`Platform`] per tile of every collidable layer.
pub fn spawn_platforms(commands: &mut Commands, level: &LevelMap) -> usize {
    let tiles = level.collidable_tiles();
    for tile in tiles.iter() {
        commands.spawn((
            Platform { tile_id: tile.id },
            MapPosition::from_vec(tile.pos),
            BoxCollider::new(tile.size.x, tile.size.y),
            Persistent,
        ));
    }
    tiles.len()
}

/// Spawn the player at `position`, idle and facing right.
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec2,
    config: &GameConfig,
    atlas_key: &str,
    store: &AnimationStore,
) -> Entity {
    let idle = PlayerState::Idle.animation_key();
    let first_frame = store
        .get(idle)
        .and_then(|clip| clip.frames.first().cloned())
        .unwrap_or_default();
    commands
        .spawn((
            Player::default(),
            MapPosition::from_vec(position),
            RigidBody::with_bounce(config.player_bounce).with_gravity(config.gravity),
            BoxCollider::new(PLAYER_SIZE.x, PLAYER_SIZE.y),
            Sprite::new(atlas_key, first_frame, PLAYER_SIZE.x, PLAYER_SIZE.y),
            Animation::new(idle),
            Tint::WHITE,
        ))
        .id()
}

/// Despawn everything a previous run left behind. Platforms carry
/// [`Persistent`] and stay.
pub fn clean_session_entities(
    commands: &mut Commands,
    query: &Query<Entity, (With<MapPosition>, Without<Persistent>)>,
) -> usize {
    let mut count = 0;
    for entity in query.iter() {
        commands.entity(entity).despawn();
        count += 1;
    }
    count
}

/// Hook for entering [`Running`](crate::resources::gamestate::GameStates::Running).
#[allow(clippy::too_many_arguments)]
pub fn enter_running(
    mut commands: Commands,
    stale: Query<Entity, (With<MapPosition>, Without<Persistent>)>,
    mut score: ResMut<Score>,
    mut hud: ResMut<Hud>,
    config: Res<GameConfig>,
    spawns: Res<SpawnPoints>,
    atlas: Res<SpriteAtlas>,
    store: Res<AnimationStore>,
    mut rng: ResMut<SessionRng>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let removed = clean_session_entities(&mut commands, &stale);

    score.reset();
    hud.restart_prompt_visible = false;
    commands.trigger(ScoreChangedEvent { score: 0 });

    spawn_player(&mut commands, spawns.player(), &config, &atlas.key, &store);
    let coins = spawn_coin_field(&mut commands, &config, &mut rng);

    audio.write(AudioCmd::play_music(MUSIC_AMBIENT, true));
    info!(
        "Session started: removed {} stale entities, spawned {} coins, player at {:?}",
        removed,
        coins,
        spawns.player()
    );
}

/// Hook for entering [`GameOver`](crate::resources::gamestate::GameStates::GameOver).
pub fn enter_game_over(
    mut commands: Commands,
    players: Query<Entity, With<Player>>,
    mut hud: ResMut<Hud>,
    score: Res<Score>,
    mut audio: MessageWriter<AudioCmd>,
) {
    for player in players.iter() {
        commands.entity(player).insert(Tint::DEAD);
    }
    hud.restart_prompt_visible = true;
    audio.write(AudioCmd::stop_music(MUSIC_AMBIENT));
    audio.write(AudioCmd::play_fx(FX_DEATH));
    info!("Game over with score {}", score.get());
}
