//! Player-controlled robot.
//!
//! The [`Player`] component holds the resolved [`PlayerState`] and the
//! current [`Facing`]. Both are written once per tick by
//! [`crate::systems::player::player_controller`].

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Animation-driving state of the player. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerState {
    #[default]
    Idle,
    Walk,
    Run,
    Jump,
    Fall,
    Cheer,
}

impl PlayerState {
    pub const ALL: [PlayerState; 6] = [
        PlayerState::Idle,
        PlayerState::Walk,
        PlayerState::Run,
        PlayerState::Jump,
        PlayerState::Fall,
        PlayerState::Cheer,
    ];

    /// Key of the clip registered for this state in the
    /// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
    pub fn animation_key(self) -> &'static str {
        match self {
            PlayerState::Idle => "idle",
            PlayerState::Walk => "walk",
            PlayerState::Run => "run",
            PlayerState::Jump => "jump",
            PlayerState::Fall => "fall",
            PlayerState::Cheer => "cheer",
        }
    }
}

/// Horizontal facing used to mirror the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Marker + state for the single player entity.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player {
    pub state: PlayerState,
    pub facing: Facing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_keys_are_unique() {
        let mut keys: Vec<&str> = PlayerState::ALL.iter().map(|s| s.animation_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), PlayerState::ALL.len());
    }

    #[test]
    fn default_player_is_idle_facing_right() {
        let player = Player::default();
        assert_eq!(player.state, PlayerState::Idle);
        assert_eq!(player.facing, Facing::Right);
    }
}
