use bevy_ecs::prelude::Component;

/// Roaming hazard released by a coin collection.
///
/// `spawn_index` is the index of the spawn point it appeared at, kept for
/// logging and tests.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub spawn_index: usize,
}
