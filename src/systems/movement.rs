//! Arcade physics.
//!
//! Three systems run back to back every tick while the session is running:
//!
//! 1. [`movement`] integrates named acceleration forces (gravity) into
//!    velocity and velocity into position.
//! 2. [`platform_contacts`] pushes bodies out of static platforms and the
//!    level bounds, applying each body's restitution and setting `grounded`
//!    on bodies resting on something.
//! 3. [`body_contacts`] separates overlapping coins and enemies from each
//!    other and exchanges their velocities along the contact axis.
//!
//! The player is deliberately absent from [`body_contacts`]: it only
//! *overlaps* coins and enemies, see [`crate::systems::collision`].
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::coin::Coin;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::components::rigidbody::RigidBody;
use crate::resources::levelmap::LevelBounds;
use crate::resources::worldtime::WorldTime;

/// Rebounds slower than this (px/s) are damped to rest.
pub const REST_SPEED: f32 = 10.0;

/// Semi-implicit Euler step for every body.
///
/// Clears `grounded`; the contact systems set it again for bodies that
/// still rest on something after integration.
pub fn movement(mut query: Query<(&mut MapPosition, &mut RigidBody)>, time: Res<WorldTime>) {
    let dt = time.delta;
    for (mut position, mut rigidbody) in query.iter_mut() {
        rigidbody.grounded = false;
        let acceleration = rigidbody.total_acceleration();
        rigidbody.velocity += acceleration * dt;
        let delta = rigidbody.velocity * dt;
        position.pos += delta;
    }
}

/// Velocity after bouncing off a surface with restitution `bounce`.
pub fn rebound(velocity: f32, bounce: f32) -> f32 {
    let reflected = -velocity * bounce;
    if reflected.abs() < REST_SPEED {
        0.0
    } else {
        reflected
    }
}

/// Apply a separation `push` (as returned by
/// [`BoxCollider::separation`]) to a body hitting a static surface.
pub fn resolve_static_contact(position: &mut Vec2, body: &mut RigidBody, push: Vec2) {
    *position += push;
    if push.y < 0.0 {
        // landed on top
        body.grounded = true;
        if body.velocity.y > 0.0 {
            body.velocity.y = rebound(body.velocity.y, body.bounce);
        }
    } else if push.y > 0.0 {
        if body.velocity.y < 0.0 {
            body.velocity.y = rebound(body.velocity.y, body.bounce);
        }
    } else if push.x < 0.0 {
        if body.velocity.x > 0.0 {
            body.velocity.x = rebound(body.velocity.x, body.bounce);
        }
    } else if push.x > 0.0 && body.velocity.x < 0.0 {
        body.velocity.x = rebound(body.velocity.x, body.bounce);
    }
}

/// Keep a body inside `bounds`. The floor of the level counts as ground.
pub fn clamp_to_bounds(
    position: &mut Vec2,
    body: &mut RigidBody,
    collider: &BoxCollider,
    bounds: &LevelBounds,
) {
    let (min, max) = collider.aabb(*position);
    if min.x < bounds.min.x {
        resolve_static_contact(position, body, Vec2::new(bounds.min.x - min.x, 0.0));
    } else if max.x > bounds.max.x {
        resolve_static_contact(position, body, Vec2::new(bounds.max.x - max.x, 0.0));
    }
    if min.y < bounds.min.y {
        resolve_static_contact(position, body, Vec2::new(0.0, bounds.min.y - min.y));
    } else if max.y > bounds.max.y {
        resolve_static_contact(position, body, Vec2::new(0.0, bounds.max.y - max.y));
    }
}

/// Resolve dynamic bodies against platforms and the level bounds.
pub fn platform_contacts(
    mut bodies: Query<(&mut MapPosition, &mut RigidBody, &BoxCollider), Without<Platform>>,
    platforms: Query<(&MapPosition, &BoxCollider), With<Platform>>,
    bounds: Option<Res<LevelBounds>>,
) {
    for (mut position, mut body, collider) in bodies.iter_mut() {
        let mut pos = position.pos;
        for (platform_pos, platform_collider) in platforms.iter() {
            if let Some(push) = collider.separation(pos, platform_collider, platform_pos.pos) {
                resolve_static_contact(&mut pos, &mut body, push);
            }
        }
        if body.collide_world_bounds
            && let Some(bounds) = bounds.as_deref()
        {
            clamp_to_bounds(&mut pos, &mut body, collider, bounds);
        }
        if pos != position.pos {
            position.pos = pos;
        }
    }
}

/// Velocities along `normal` after an equal-mass collision with
/// restitution `e`.
pub fn exchange_velocities(va: f32, vb: f32, e: f32) -> (f32, f32) {
    let sum = va + vb;
    ((sum + e * (vb - va)) * 0.5, (sum + e * (va - vb)) * 0.5)
}

/// Separate overlapping coins and enemies.
///
/// Each pair is pushed apart by half the penetration each. If the bodies
/// are approaching along the contact axis their velocities are exchanged
/// with the larger of the two restitutions.
pub fn body_contacts(
    mut bodies: Query<
        (&mut MapPosition, &mut RigidBody, &BoxCollider),
        Or<(With<Coin>, With<Enemy>)>,
    >,
) {
    let mut combos = bodies.iter_combinations_mut();
    while let Some([(mut pos_a, mut body_a, collider_a), (mut pos_b, mut body_b, collider_b)]) =
        combos.fetch_next()
    {
        let Some(push) = collider_a.separation(pos_a.pos, collider_b, pos_b.pos) else {
            continue;
        };
        pos_a.pos += push * 0.5;
        pos_b.pos -= push * 0.5;

        let normal = push.normalize_or_zero();
        if normal == Vec2::ZERO {
            continue;
        }
        let va = body_a.velocity.dot(normal);
        let vb = body_b.velocity.dot(normal);
        if va - vb >= 0.0 {
            // already separating
            continue;
        }
        let e = body_a.bounce.max(body_b.bounce);
        let (new_va, new_vb) = exchange_velocities(va, vb, e);
        body_a.velocity += normal * (new_va - va);
        body_b.velocity += normal * (new_vb - vb);
        if normal.y < 0.0 {
            body_a.grounded = true;
        } else if normal.y > 0.0 {
            body_b.grounded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebound_damps_slow_bounces() {
        assert_eq!(rebound(5.0, 1.0), 0.0);
        assert_eq!(rebound(100.0, 0.5), -50.0);
        assert_eq!(rebound(100.0, 0.0), 0.0);
    }

    #[test]
    fn landing_sets_grounded_and_stops_without_bounce() {
        let mut pos = Vec2::new(0.0, 10.0);
        let mut body = RigidBody::new().with_velocity(Vec2::new(30.0, 120.0));
        resolve_static_contact(&mut pos, &mut body, Vec2::new(0.0, -2.0));
        assert_eq!(pos, Vec2::new(0.0, 8.0));
        assert!(body.grounded);
        assert_eq!(body.velocity, Vec2::new(30.0, 0.0));
    }

    #[test]
    fn full_bounce_reflects_wall_hit() {
        let mut pos = Vec2::ZERO;
        let mut body = RigidBody::with_bounce(1.0).with_velocity(Vec2::new(-200.0, 0.0));
        resolve_static_contact(&mut pos, &mut body, Vec2::new(3.0, 0.0));
        assert_eq!(body.velocity.x, 200.0);
        assert!(!body.grounded);
    }

    #[test]
    fn ceiling_hit_does_not_ground() {
        let mut pos = Vec2::ZERO;
        let mut body = RigidBody::new().with_velocity(Vec2::new(0.0, -300.0));
        resolve_static_contact(&mut pos, &mut body, Vec2::new(0.0, 4.0));
        assert!(!body.grounded);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn bounds_floor_grounds_body() {
        let bounds = LevelBounds {
            min: Vec2::ZERO,
            max: Vec2::new(100.0, 100.0),
        };
        let collider = BoxCollider::new(10.0, 10.0);
        let mut pos = Vec2::new(50.0, 95.0);
        let mut body = RigidBody::new().with_velocity(Vec2::new(0.0, 50.0));
        clamp_to_bounds(&mut pos, &mut body, &collider, &bounds);
        assert_eq!(pos, Vec2::new(50.0, 90.0));
        assert!(body.grounded);
    }

    #[test]
    fn exchange_is_momentum_preserving() {
        let (a, b) = exchange_velocities(-100.0, 50.0, 1.0);
        assert_eq!((a, b), (50.0, -100.0));
        let (a, b) = exchange_velocities(-100.0, 0.0, 0.0);
        assert_eq!((a, b), (-50.0, -50.0));
    }
}
