//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive a session restart.
//! Platforms built from the level map and the global observers carry it;
//! players, coins and enemies do not.

use bevy_ecs::prelude::Component;

/// Tag component for entities that must outlive a restart.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Persistent;
