//! Headless game session.
//!
//! A [`Session`] owns the ECS [`World`] and the per-tick [`Schedule`]. It is
//! the only entry point frontends and tests need:
//!
//! ```no_run
//! use coinbot::resources::atlas::SpriteAtlas;
//! use coinbot::resources::gameconfig::GameConfig;
//! use coinbot::resources::input::InputSnapshot;
//! use coinbot::resources::levelmap::LevelMap;
//! use coinbot::session::Session;
//!
//! let level = LevelMap::load("assets/levels/level1.json")?;
//! let atlas = SpriteAtlas::load("assets/atlas/robot.json")?;
//! let mut session = Session::new(GameConfig::new(), &level, atlas)?;
//! let scores = session.subscribe_score();
//! let cues = session.tick(InputSnapshot::right(), 1.0 / 60.0);
//! # let _ = (scores, cues);
//! # Ok::<(), coinbot::error::LoadError>(())
//! ```
//!
//! # Tick order
//!
//! 1. time advance (outside the schedule, see [`update_world_time`])
//! 2. input sampling
//! 3. pending state check, then restart-on-input while in GameOver
//! 4. physics integration, platform/bounds contacts, body contacts
//! 5. overlap detection (coin collection, enemy spawn, game over)
//! 6. player resolver, then animation playback
//! 7. audio cue drain
//!
//! Every gameplay step from 4 to 6 is gated on
//! [`GameStates::Running`](crate::resources::gamestate::GameStates::Running).
use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;
use glam::Vec2;
use log::{debug, info};

use crate::components::coin::Coin;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Facing, Player, PlayerState};
use crate::components::rigidbody::RigidBody;
use crate::error::LoadError;
use crate::events::audio::AudioCmd;
use crate::events::gamestate::{
    ENTER_GAME_OVER, ENTER_RUNNING, GameStateChangedEvent, observe_gamestate_change_event,
};
use crate::game::{enter_game_over, enter_running, spawn_platforms};
use crate::resources::animationstore::{AnimationStore, ClipSpec};
use crate::resources::atlas::SpriteAtlas;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::hud::Hud;
use crate::resources::input::{InputSnapshot, InputState};
use crate::resources::levelmap::{LevelBounds, LevelMap, SpawnPoints};
use crate::resources::rng::SessionRng;
use crate::resources::score::Score;
use crate::resources::scorefeed::ScoreFeed;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::audio::drain_audio_cmds;
use crate::systems::coins::coin_collection_observer;
use crate::systems::collision::{collision_observer, overlap_detector};
use crate::systems::gamestate::{
    check_pending_state, game_over_observer, restart_on_input, state_is_game_over,
    state_is_running,
};
use crate::systems::input::update_input_state;
use crate::systems::movement::{body_contacts, movement, platform_contacts};
use crate::systems::player::player_controller;
use crate::systems::score::{hud_score_observer, score_feed_observer};
use crate::systems::time::update_world_time;
use crate::view::{RenderView, build_render_view};

/// Read-only view of the player used by frontends and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub entity: Entity,
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
    pub state: PlayerState,
    pub facing: Facing,
}

pub struct Session {
    world: World,
    schedule: Schedule,
}

impl Session {
    /// Build a session with the default robot animation clips and start it.
    pub fn new(config: GameConfig, level: &LevelMap, atlas: SpriteAtlas) -> Result<Self, LoadError> {
        Self::with_clips(config, level, atlas, &ClipSpec::robot_defaults())
    }

    /// Build a session with custom animation clips and start it.
    ///
    /// Fails before any entity is spawned if the level is malformed, has no
    /// enemy spawn marker, or a clip references a frame missing from the
    /// atlas.
    pub fn with_clips(
        config: GameConfig,
        level: &LevelMap,
        atlas: SpriteAtlas,
        clips: &[ClipSpec],
    ) -> Result<Self, LoadError> {
        level.validate()?;
        let spawns = SpawnPoints::from_level(level)?;
        let store = AnimationStore::from_specs(&atlas, clips)?;

        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(SessionRng::with_seed(config.seed));
        world.insert_resource(config);
        world.insert_resource(spawns);
        world.insert_resource(LevelBounds::from_level(level));
        world.insert_resource(store);
        world.insert_resource(atlas);
        world.insert_resource(InputSnapshot::default());
        world.insert_resource(InputState::default());
        world.insert_resource(Score::default());
        world.insert_resource(Hud::default());
        world.insert_resource(ScoreFeed::new());
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.init_resource::<Messages<AudioCmd>>();

        world.add_observer(observe_gamestate_change_event);
        world.add_observer(collision_observer);
        world.add_observer(coin_collection_observer);
        world.add_observer(game_over_observer);
        world.add_observer(hud_score_observer);
        world.add_observer(score_feed_observer);

        let mut systems_store = SystemsStore::new();
        systems_store.insert(ENTER_RUNNING, world.register_system(enter_running));
        systems_store.insert(ENTER_GAME_OVER, world.register_system(enter_game_over));
        world.insert_resource(systems_store);

        let platforms = {
            let mut commands = world.commands();
            spawn_platforms(&mut commands, level)
        };
        world.flush();
        info!(
            "Level {}x{} tiles loaded with {} platform tiles",
            level.map_width, level.map_height, platforms
        );

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                update_input_state,
                check_pending_state,
                restart_on_input.run_if(state_is_game_over),
                movement.run_if(state_is_running),
                platform_contacts.run_if(state_is_running),
                body_contacts.run_if(state_is_running),
                overlap_detector.run_if(state_is_running),
                player_controller.run_if(state_is_running),
                animation.run_if(state_is_running),
            )
                .chain(),
        );

        let mut session = Session { world, schedule };
        session.request_state(GameStates::Running);
        Ok(session)
    }

    /// Request a state change and apply it before returning.
    fn request_state(&mut self, state: GameStates) {
        self.world.resource_mut::<NextGameState>().set(state);
        self.world.trigger(GameStateChangedEvent {});
        self.world.flush();
    }

    /// Advance the simulation by `dt` seconds with the given input and
    /// return the audio cues emitted since the previous call.
    pub fn tick(&mut self, input: InputSnapshot, dt: f32) -> Vec<AudioCmd> {
        *self.world.resource_mut::<InputSnapshot>() = input;
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
        drain_audio_cmds(&mut self.world)
    }

    /// Restart from GameOver. Returns `false` (and does nothing) in any
    /// other state.
    pub fn restart(&mut self) -> bool {
        if self.state() != GameStates::GameOver {
            debug!("Restart ignored in state {:?}", self.state());
            return false;
        }
        self.request_state(GameStates::Running);
        true
    }

    /// Audio cues emitted outside of [`Session::tick`], e.g. by
    /// [`Session::restart`]. [`Session::tick`] also returns them.
    pub fn take_audio(&mut self) -> Vec<AudioCmd> {
        drain_audio_cmds(&mut self.world)
    }

    pub fn state(&self) -> GameStates {
        self.world.resource::<GameState>().get()
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<Score>().get()
    }

    pub fn hud(&self) -> &Hud {
        self.world.resource::<Hud>()
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    /// Receive every score published from now on, in order.
    pub fn subscribe_score(&mut self) -> Receiver<u32> {
        self.world.resource_mut::<ScoreFeed>().subscribe()
    }

    /// Number of coins not yet collected.
    pub fn live_coins(&mut self) -> usize {
        let mut query = self.world.query::<&Coin>();
        query.iter(&self.world).filter(|coin| coin.alive).count()
    }

    pub fn enemy_count(&mut self) -> usize {
        let mut query = self.world.query_filtered::<(), With<Enemy>>();
        query.iter(&self.world).count()
    }

    pub fn player(&mut self) -> Option<PlayerSnapshot> {
        let mut query = self
            .world
            .query::<(Entity, &Player, &MapPosition, &RigidBody)>();
        query
            .iter(&self.world)
            .next()
            .map(|(entity, player, position, body)| PlayerSnapshot {
                entity,
                position: position.pos,
                velocity: body.velocity,
                grounded: body.grounded,
                state: player.state,
                facing: player.facing,
            })
    }

    pub fn render_view(&mut self) -> RenderView {
        build_render_view(&mut self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for frontends and tests. Changes made here skip
    /// the schedule's run conditions.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
