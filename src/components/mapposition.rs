//! World-space position component.
//!
//! [`MapPosition`] stores the top-left corner of an entity in level pixels.
//! Colliders extend from this point and the render view copies it as-is.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Top-left world position of an entity, in level pixels.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    pub fn from_vec(pos: Vec2) -> Self {
        Self { pos }
    }
}
