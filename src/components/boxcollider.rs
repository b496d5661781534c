//! Axis-aligned box collider.
//!
//! Used both for contact resolution against platforms and for the
//! non-physical overlap checks that drive coin collection and game-over.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let far = position + self.size;
        (position.min(far), position.max(far))
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    /// Touching edges do not count as overlap.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Minimum translation that pushes this box out of `other`.
    ///
    /// Returns `None` when the boxes do not overlap. The vector has exactly
    /// one non-zero axis, the one with the smallest penetration.
    pub fn separation(&self, position: Vec2, other: &Self, other_position: Vec2) -> Option<Vec2> {
        if !self.overlaps(position, other, other_position) {
            return None;
        }
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);

        let push_left = max_a.x - min_b.x;
        let push_right = max_b.x - min_a.x;
        let push_up = max_a.y - min_b.y;
        let push_down = max_b.y - min_a.y;

        let dx = if push_left < push_right {
            -push_left
        } else {
            push_right
        };
        let dy = if push_up < push_down { -push_up } else { push_down };

        if dx.abs() < dy.abs() {
            Some(Vec2::new(dx, 0.0))
        } else {
            Some(Vec2::new(0.0, dy))
        }
    }
}
