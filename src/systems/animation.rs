//! Animation playback.
//!
//! [`animation`] advances each entity's [`Animation`] by the tick delta and
//! copies the current frame name into its [`Sprite`]. Clip selection happens
//! elsewhere (see [`crate::systems::player::player_controller`]).
use bevy_ecs::prelude::*;
use log::warn;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::{AnimationClip, AnimationStore};
use crate::resources::worldtime::WorldTime;

/// Advance `anim` through `clip` by `dt` seconds.
///
/// Looping clips wrap to the first frame; one-shot clips hold the last frame
/// and set `finished`.
pub fn advance(anim: &mut Animation, clip: &AnimationClip, dt: f32) {
    let frame_count = clip.frame_count();
    if frame_count <= 1 || clip.fps <= 0.0 {
        anim.frame_index = 0;
        anim.finished = !clip.looped;
        return;
    }
    if anim.finished {
        return;
    }

    anim.elapsed_time += dt;
    let frame_duration = 1.0 / clip.fps;
    while anim.elapsed_time >= frame_duration {
        anim.elapsed_time -= frame_duration;
        if anim.frame_index + 1 < frame_count {
            anim.frame_index += 1;
        } else if clip.looped {
            anim.frame_index = 0;
        } else {
            anim.frame_index = frame_count - 1; // stay on last frame
            anim.elapsed_time = 0.0;
            anim.finished = true;
            break;
        }
    }
}

/// Advance animation playback and update the sprite frame.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        let Some(clip) = animation_store.get(&anim_comp.animation_key) else {
            warn!("Animation '{}' not found in store", anim_comp.animation_key);
            continue;
        };
        advance(&mut anim_comp, clip, time.delta);
        if let Some(frame) = clip.frames.get(anim_comp.frame_index)
            && sprite.frame != *frame
        {
            sprite.frame = frame.clone();
        }
    }
}
