use bevy_ecs::prelude::Component;

/// Static collidable level geometry, spawned from collidable tile layers.
///
/// Platforms carry a [`MapPosition`](super::mapposition::MapPosition) and a
/// [`BoxCollider`](super::boxcollider::BoxCollider) but never a rigid body.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Tileset-local tile id the platform was built from.
    pub tile_id: u32,
}
