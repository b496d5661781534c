//! Per-entity animation playback state.
//!
//! The clip data itself lives in
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore); this
//! component only remembers which clip is active and how far into it the
//! entity is.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Component, Serialize, Deserialize, PartialEq)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
    /// Set once a non-looping clip reaches its last frame.
    pub finished: bool,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            finished: false,
        }
    }

    /// Switch to another clip, restarting playback from the first frame.
    /// Playing the active clip again is a no-op.
    pub fn play(&mut self, animation_key: &str) {
        if self.animation_key == animation_key {
            return;
        }
        self.animation_key = animation_key.to_string();
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        self.finished = false;
    }
}
