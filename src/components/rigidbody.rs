//! Arcade body component with named acceleration forces.
//!
//! The [`RigidBody`] component stores velocity, a bounce coefficient and
//! named acceleration forces for an entity (gravity is simply the force
//! named `"gravity"`).
//!
//! The physics systems in [`crate::systems::movement`] integrate bodies and
//! write back the `grounded` contact flag each tick.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Name of the acceleration force used for level gravity.
pub const GRAVITY_FORCE: &str = "gravity";

/// Arcade body storing velocity, restitution and contact state.
///
/// # Fields
/// - `velocity` - Current velocity in world units per second
/// - `forces` - Named accelerations in world units per second squared
/// - `bounce` - Restitution applied on contact (0.0 = dead stop, 1.0 = fully elastic)
/// - `collide_world_bounds` - Keep the body inside the level rectangle
/// - `grounded` - Resting on a surface below it, written by contact resolution
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::with_bounce(0.6).with_gravity(290.0);
/// rb.add_force("wind", Vec2::new(15.0, 0.0));
/// ```
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    pub velocity: Vec2,
    pub forces: FxHashMap<String, Vec2>,
    pub bounce: f32,
    pub collide_world_bounds: bool,
    pub grounded: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity, no bounce and no forces.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            forces: FxHashMap::default(),
            bounce: 0.0,
            collide_world_bounds: true,
            grounded: false,
        }
    }

    /// Create a RigidBody with the given restitution, clamped to `[0, 1]`.
    pub fn with_bounce(bounce: f32) -> Self {
        Self {
            bounce: bounce.clamp(0.0, 1.0),
            ..Self::new()
        }
    }

    /// Builder-style velocity setter.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Builder-style gravity force.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.add_force(GRAVITY_FORCE, Vec2::new(0.0, gravity));
        self
    }

    /// Add or update a named acceleration force.
    pub fn add_force(&mut self, name: &str, value: Vec2) {
        self.forces.insert(name.to_string(), value);
    }

    /// Sum of every acceleration force.
    pub fn total_acceleration(&self) -> Vec2 {
        self.forces
            .values()
            .fold(Vec2::ZERO, |total, force| total + *force)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_new() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity, Vec2::ZERO);
        assert!(rb.forces.is_empty());
        assert!(approx_eq(rb.bounce, 0.0));
        assert!(rb.collide_world_bounds);
        assert!(!rb.grounded);
    }

    #[test]
    fn test_with_bounce_clamps() {
        assert!(approx_eq(RigidBody::with_bounce(1.5).bounce, 1.0));
        assert!(approx_eq(RigidBody::with_bounce(-0.2).bounce, 0.0));
        assert!(approx_eq(RigidBody::with_bounce(0.6).bounce, 0.6));
    }

    #[test]
    fn test_with_gravity_adds_force() {
        let rb = RigidBody::new().with_gravity(290.0);
        assert_eq!(rb.forces.get(GRAVITY_FORCE), Some(&Vec2::new(0.0, 290.0)));
        assert_eq!(rb.total_acceleration(), Vec2::new(0.0, 290.0));
    }

    #[test]
    fn test_add_force_overwrites() {
        let mut rb = RigidBody::new();
        rb.add_force("wind", Vec2::new(1.0, 0.0));
        rb.add_force("wind", Vec2::new(2.0, 0.0));
        assert_eq!(rb.forces.len(), 1);
        assert_eq!(rb.total_acceleration(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_total_acceleration_sums_forces() {
        let mut rb = RigidBody::new().with_velocity(Vec2::new(3.0, 4.0));
        rb.add_force(GRAVITY_FORCE, Vec2::new(0.0, 100.0));
        rb.add_force("wind", Vec2::new(50.0, 0.0));
        assert_eq!(rb.total_acceleration(), Vec2::new(50.0, 100.0));
        assert_eq!(rb.velocity, Vec2::new(3.0, 4.0));
    }
}
