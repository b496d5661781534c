//! Player state resolver and controller.
//!
//! Every tick the player's horizontal velocity is set from input, a jump is
//! applied when requested while grounded, and the animation state is
//! resolved from the resulting body state:
//!
//! | grounded | velocity                     | state  |
//! |----------|------------------------------|--------|
//! | no       | vy < 0 (moving up)           | `Jump` |
//! | no       | vy >= 0                      | `Fall` |
//! | yes      | vx != 0                      | `Run`  |
//! | yes      | vx == 0                      | `Idle` |
//!
//! `Walk` and `Cheer` clips exist in the animation store but no rule
//! selects them.
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::animation::Animation;
use crate::components::player::{Facing, Player, PlayerState};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::events::audio::{AudioCmd, FX_JUMP};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{HorizontalIntent, InputState};

/// Map body state to an animation state. Total over all inputs.
pub fn resolve_player_state(grounded: bool, velocity: Vec2) -> PlayerState {
    if !grounded {
        if velocity.y < 0.0 {
            PlayerState::Jump
        } else {
            PlayerState::Fall
        }
    } else if velocity.x != 0.0 {
        PlayerState::Run
    } else {
        PlayerState::Idle
    }
}

/// Horizontal velocity commanded by `intent`.
pub fn horizontal_command(intent: HorizontalIntent, speed: f32) -> f32 {
    intent.sign() * speed
}

/// New facing for horizontal velocity `vx`; unchanged when standing still.
pub fn resolve_facing(previous: Facing, vx: f32) -> Facing {
    if vx < 0.0 {
        Facing::Left
    } else if vx > 0.0 {
        Facing::Right
    } else {
        previous
    }
}

/// Result of one resolver step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStep {
    pub velocity: Vec2,
    pub grounded: bool,
    pub state: PlayerState,
    pub facing: Facing,
    pub jumped: bool,
}

/// Pure resolver step shared by [`player_controller`] and tests.
///
/// The jump impulse fires only when `jump` is requested and the body is
/// grounded; a jumping body counts as airborne for the rest of the tick.
pub fn step_player(
    intent: HorizontalIntent,
    jump: bool,
    grounded: bool,
    velocity: Vec2,
    facing: Facing,
    config: &GameConfig,
) -> PlayerStep {
    let mut velocity = Vec2::new(horizontal_command(intent, config.player_speed), velocity.y);
    let mut grounded = grounded;
    let jumped = jump && grounded;
    if jumped {
        velocity.y = config.jump_velocity;
        grounded = false;
    }
    PlayerStep {
        velocity,
        grounded,
        state: resolve_player_state(grounded, velocity),
        facing: resolve_facing(facing, velocity.x),
        jumped,
    }
}

/// Apply input to the player body and select its animation.
pub fn player_controller(
    mut query: Query<(
        &mut Player,
        &mut RigidBody,
        Option<&mut Animation>,
        Option<&mut Sprite>,
    )>,
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut audio: MessageWriter<AudioCmd>,
) {
    for (mut player, mut body, animation, sprite) in query.iter_mut() {
        let step = step_player(
            input.horizontal(),
            input.jump.active,
            body.grounded,
            body.velocity,
            player.facing,
            &config,
        );
        body.velocity = step.velocity;
        body.grounded = step.grounded;
        if step.jumped {
            audio.write(AudioCmd::play_fx(FX_JUMP));
        }
        if step.state != player.state {
            debug!("Player state {:?} -> {:?}", player.state, step.state);
            player.state = step.state;
        }
        player.facing = step.facing;

        if let Some(mut animation) = animation {
            animation.play(step.state.animation_key());
        }
        if let Some(mut sprite) = sprite {
            let flip = step.facing == Facing::Left;
            if sprite.flip_h != flip {
                sprite.flip_h = flip;
            }
        }
    }
}
