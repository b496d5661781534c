//! Audio cue messages.
//!
//! Gameplay never plays sound itself. It writes fire-and-forget [`AudioCmd`]
//! messages, which [`Session::tick`](crate::session::Session::tick) drains and
//! hands to whatever frontend is attached.

use bevy_ecs::message::Message;

pub const FX_JUMP: &str = "jump";
pub const FX_COIN: &str = "coin";
pub const FX_DEATH: &str = "death";
pub const MUSIC_AMBIENT: &str = "ambient";

/// Commands for the audio backend.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum AudioCmd {
    PlayFx { id: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
}

impl AudioCmd {
    pub fn play_fx(id: &str) -> Self {
        AudioCmd::PlayFx { id: id.to_string() }
    }

    pub fn play_music(id: &str, looped: bool) -> Self {
        AudioCmd::PlayMusic {
            id: id.to_string(),
            looped,
        }
    }

    pub fn stop_music(id: &str) -> Self {
        AudioCmd::StopMusic { id: id.to_string() }
    }
}
