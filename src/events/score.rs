//! Score channel event.
//!
//! Published once per collection with the post-increment score, and once
//! with `0` when a session (re)starts. Delivery is synchronous: every
//! observer has seen a value before the next collection is processed.
use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChangedEvent {
    pub score: u32,
}
