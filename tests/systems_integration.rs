//! System-level integration tests: physics, overlap routing, animation and
//! the player controller, each run in a minimal world.

use bevy_ecs::prelude::*;
use glam::Vec2;
use std::sync::Arc;

use coinbot::components::animation::Animation;
use coinbot::components::boxcollider::BoxCollider;
use coinbot::components::coin::Coin;
use coinbot::components::enemy::Enemy;
use coinbot::components::mapposition::MapPosition;
use coinbot::components::platform::Platform;
use coinbot::components::player::{Player, PlayerState};
use coinbot::components::rigidbody::RigidBody;
use coinbot::components::sprite::Sprite;
use coinbot::events::audio::{AudioCmd, FX_JUMP};
use coinbot::events::collision::{CoinOverlapEvent, EnemyOverlapEvent};
use coinbot::resources::animationstore::{AnimationClip, AnimationStore};
use coinbot::resources::gameconfig::GameConfig;
use coinbot::resources::input::InputState;
use coinbot::resources::levelmap::LevelBounds;
use coinbot::resources::worldtime::WorldTime;
use coinbot::systems::animation::animation;
use coinbot::systems::audio::drain_audio_cmds;
use coinbot::systems::collision::{collision_observer, overlap_detector};
use coinbot::systems::movement::{body_contacts, movement, platform_contacts};
use coinbot::systems::player::player_controller;
use coinbot::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(GameConfig::new());
    world.init_resource::<Messages<AudioCmd>>();
    world
}

fn tick_physics(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems((movement, platform_contacts, body_contacts).chain());
    schedule.run(world);
}

#[derive(Resource, Default)]
struct Seen {
    coins: Vec<Entity>,
    enemies: Vec<Entity>,
}

fn make_overlap_world() -> World {
    let mut world = make_world();
    world.init_resource::<Seen>();
    world.add_observer(collision_observer);
    world.add_observer(|trigger: On<CoinOverlapEvent>, mut seen: ResMut<Seen>| {
        seen.coins.push(trigger.event().coin);
    });
    world.add_observer(|trigger: On<EnemyOverlapEvent>, mut seen: ResMut<Seen>| {
        seen.enemies.push(trigger.event().enemy);
    });
    world.flush();
    world
}

fn tick_overlaps(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(overlap_detector);
    schedule.run(world);
}

#[test]
fn gravity_accelerates_free_bodies() {
    let mut world = make_world();
    let entity = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            RigidBody::new().with_gravity(100.0),
            BoxCollider::new(10.0, 10.0),
        ))
        .id();

    tick_physics(&mut world, 0.5);

    let body = world.get::<RigidBody>(entity).unwrap();
    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(body.velocity.y, 50.0));
    assert!(approx_eq(pos.pos.y, 25.0));
    assert!(!body.grounded);
}

#[test]
fn body_lands_on_platform() {
    let mut world = make_world();
    world.spawn((
        Platform { tile_id: 1 },
        MapPosition::new(0.0, 100.0),
        BoxCollider::new(32.0, 32.0),
    ));
    let entity = world
        .spawn((
            MapPosition::new(5.0, 91.0),
            RigidBody::new().with_velocity(Vec2::new(0.0, 50.0)),
            BoxCollider::new(10.0, 10.0),
        ))
        .id();

    tick_physics(&mut world, 0.1);

    let body = world.get::<RigidBody>(entity).unwrap();
    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.y, 90.0));
    assert!(body.grounded);
    assert_eq!(body.velocity.y, 0.0);
}

#[test]
fn full_bounce_reverses_on_platform() {
    let mut world = make_world();
    world.spawn((
        Platform { tile_id: 1 },
        MapPosition::new(0.0, 100.0),
        BoxCollider::new(32.0, 32.0),
    ));
    let entity = world
        .spawn((
            MapPosition::new(5.0, 91.0),
            RigidBody::with_bounce(1.0).with_velocity(Vec2::new(0.0, 50.0)),
            BoxCollider::new(10.0, 10.0),
        ))
        .id();

    tick_physics(&mut world, 0.1);

    let body = world.get::<RigidBody>(entity).unwrap();
    assert!(approx_eq(body.velocity.y, -50.0));
}

#[test]
fn world_bounds_contain_bodies() {
    let mut world = make_world();
    world.insert_resource(LevelBounds {
        min: Vec2::ZERO,
        max: Vec2::new(100.0, 100.0),
    });
    let entity = world
        .spawn((
            MapPosition::new(95.0, 10.0),
            RigidBody::with_bounce(1.0).with_velocity(Vec2::new(200.0, 0.0)),
            BoxCollider::new(10.0, 10.0),
        ))
        .id();

    tick_physics(&mut world, 0.1);

    let pos = world.get::<MapPosition>(entity).unwrap();
    let body = world.get::<RigidBody>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 90.0));
    assert!(approx_eq(body.velocity.x, -200.0));
}

#[test]
fn enemies_bounce_off_each_other() {
    let mut world = make_world();
    let left = world
        .spawn((
            Enemy { spawn_index: 0 },
            MapPosition::new(0.0, 0.0),
            RigidBody::with_bounce(1.0).with_velocity(Vec2::new(50.0, 0.0)),
            BoxCollider::new(24.0, 24.0),
        ))
        .id();
    let right = world
        .spawn((
            Enemy { spawn_index: 1 },
            MapPosition::new(20.0, 0.0),
            RigidBody::with_bounce(1.0).with_velocity(Vec2::new(-50.0, 0.0)),
            BoxCollider::new(24.0, 24.0),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(body_contacts);
    schedule.run(&mut world);

    let left_pos = world.get::<MapPosition>(left).unwrap().pos;
    let right_pos = world.get::<MapPosition>(right).unwrap().pos;
    assert!(approx_eq(right_pos.x - left_pos.x, 24.0));
    assert!(approx_eq(world.get::<RigidBody>(left).unwrap().velocity.x, -50.0));
    assert!(approx_eq(world.get::<RigidBody>(right).unwrap().velocity.x, 50.0));
}

#[test]
fn player_is_not_pushed_by_coins() {
    let mut world = make_world();
    let player = world
        .spawn((
            Player::default(),
            MapPosition::new(0.0, 0.0),
            RigidBody::new(),
            BoxCollider::new(32.0, 48.0),
        ))
        .id();
    world.spawn((
        Coin::new(0),
        MapPosition::new(10.0, 10.0),
        RigidBody::new(),
        BoxCollider::new(16.0, 16.0),
    ));

    let mut schedule = Schedule::default();
    schedule.add_systems(body_contacts);
    schedule.run(&mut world);

    assert_eq!(world.get::<MapPosition>(player).unwrap().pos, Vec2::ZERO);
}

#[test]
fn overlaps_are_routed_by_kind() {
    let mut world = make_overlap_world();
    world.spawn((
        Player::default(),
        MapPosition::new(0.0, 0.0),
        BoxCollider::new(32.0, 48.0),
    ));
    let coin = world
        .spawn((
            Coin::new(0),
            MapPosition::new(10.0, 10.0),
            BoxCollider::new(16.0, 16.0),
        ))
        .id();
    let enemy = world
        .spawn((
            Enemy { spawn_index: 0 },
            MapPosition::new(20.0, 30.0),
            BoxCollider::new(24.0, 24.0),
        ))
        .id();
    // far away
    world.spawn((
        Coin::new(1),
        MapPosition::new(300.0, 10.0),
        BoxCollider::new(16.0, 16.0),
    ));

    tick_overlaps(&mut world);

    let seen = world.resource::<Seen>();
    assert_eq!(seen.coins, vec![coin]);
    assert_eq!(seen.enemies, vec![enemy]);
}

#[test]
fn collected_coins_are_not_reported() {
    let mut world = make_overlap_world();
    world.spawn((
        Player::default(),
        MapPosition::new(0.0, 0.0),
        BoxCollider::new(32.0, 48.0),
    ));
    let mut coin = Coin::new(0);
    coin.collect();
    world.spawn((coin, MapPosition::new(10.0, 10.0), BoxCollider::new(16.0, 16.0)));

    tick_overlaps(&mut world);

    assert!(world.resource::<Seen>().coins.is_empty());
}

#[test]
fn touching_edges_do_not_overlap() {
    let mut world = make_overlap_world();
    world.spawn((
        Player::default(),
        MapPosition::new(0.0, 0.0),
        BoxCollider::new(32.0, 48.0),
    ));
    world.spawn((
        Enemy { spawn_index: 0 },
        MapPosition::new(32.0, 0.0),
        BoxCollider::new(24.0, 24.0),
    ));

    tick_overlaps(&mut world);

    assert!(world.resource::<Seen>().enemies.is_empty());
}

#[test]
fn animation_advances_sprite_frame() {
    let mut world = make_world();
    let mut store = AnimationStore::new();
    store.insert(AnimationClip {
        key: Arc::from("run"),
        frames: vec!["r0".into(), "r1".into(), "r2".into()],
        fps: 10.0,
        looped: true,
    });
    world.insert_resource(store);
    let entity = world
        .spawn((Animation::new("run"), Sprite::new("robot", "r0", 32.0, 48.0)))
        .id();

    update_world_time(&mut world, 0.15);
    let mut schedule = Schedule::default();
    schedule.add_systems(animation);
    schedule.run(&mut world);

    assert_eq!(world.get::<Animation>(entity).unwrap().frame_index, 1);
    assert_eq!(world.get::<Sprite>(entity).unwrap().frame, "r1");
}

#[test]
fn controller_jumps_from_ground_and_cues_audio() {
    let mut world = make_world();
    let mut input = InputState::default();
    input.jump.update(true);
    input.right.update(true);
    world.insert_resource(input);
    let mut body = RigidBody::new();
    body.grounded = true;
    let entity = world
        .spawn((
            Player::default(),
            body,
            Animation::new("idle"),
            Sprite::new("robot", "", 32.0, 48.0),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(player_controller);
    schedule.run(&mut world);

    let body = world.get::<RigidBody>(entity).unwrap();
    assert_eq!(body.velocity, Vec2::new(150.0, -300.0));
    assert!(!body.grounded);
    assert_eq!(world.get::<Player>(entity).unwrap().state, PlayerState::Jump);
    assert_eq!(world.get::<Animation>(entity).unwrap().animation_key, "jump");
    assert_eq!(drain_audio_cmds(&mut world), vec![AudioCmd::play_fx(FX_JUMP)]);
}

#[test]
fn controller_ignores_jump_in_the_air() {
    let mut world = make_world();
    let mut input = InputState::default();
    input.jump.update(true);
    world.insert_resource(input);
    let entity = world
        .spawn((
            Player::default(),
            RigidBody::new().with_velocity(Vec2::new(0.0, 40.0)),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(player_controller);
    schedule.run(&mut world);

    let body = world.get::<RigidBody>(entity).unwrap();
    assert_eq!(body.velocity, Vec2::new(0.0, 40.0));
    assert_eq!(world.get::<Player>(entity).unwrap().state, PlayerState::Fall);
    assert!(drain_audio_cmds(&mut world).is_empty());
}
