//! Heads-up display state.
//!
//! The score line is only ever written by the score observer; the restart
//! prompt by the session state hooks. Frontends read this resource and draw
//! it as they see fit.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    /// Last score delivered on the score channel.
    pub score: u32,
    pub restart_prompt_visible: bool,
}

impl Hud {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}
