//! Audio cue plumbing on the simulation side.
//!
//! Gameplay writes [`AudioCmd`] messages through `MessageWriter`. The
//! session drains the queue once per tick with [`drain_audio_cmds`] and
//! returns the cues to its caller; a windowed frontend forwards them to its
//! audio thread (see `frontend::audio`).
use bevy_ecs::prelude::*;

use crate::events::audio::AudioCmd;

/// Take every queued [`AudioCmd`], oldest first.
pub fn drain_audio_cmds(world: &mut World) -> Vec<AudioCmd> {
    match world.get_resource_mut::<Messages<AudioCmd>>() {
        Some(mut msgs) => msgs.drain().collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::audio::{FX_COIN, FX_JUMP};

    #[test]
    fn drain_returns_cues_in_order_and_empties_queue() {
        let mut world = World::new();
        world.init_resource::<Messages<AudioCmd>>();
        {
            let mut msgs = world.resource_mut::<Messages<AudioCmd>>();
            msgs.write(AudioCmd::play_fx(FX_JUMP));
            msgs.write(AudioCmd::play_fx(FX_COIN));
        }
        assert_eq!(
            drain_audio_cmds(&mut world),
            vec![AudioCmd::play_fx(FX_JUMP), AudioCmd::play_fx(FX_COIN)]
        );
        assert!(drain_audio_cmds(&mut world).is_empty());
    }

    #[test]
    fn drain_without_queue_is_empty() {
        let mut world = World::new();
        assert!(drain_audio_cmds(&mut world).is_empty());
    }
}
