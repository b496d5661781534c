//! Session state systems, run conditions and the game-over trigger.
//!
//! Gameplay systems are gated with [`state_is_running`], so once the
//! session is in [`GameStates::GameOver`] no physics, overlap or player
//! system runs and the world stays frozen until a restart.
use crate::events::collision::EnemyOverlapEvent;
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use crate::resources::input::InputState;
use bevy_ecs::prelude::*;
use log::{debug, info};

/// Fire [`GameStateChangedEvent`] when a transition was requested by writing
/// [`NextGameState`] directly.
pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_running(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Running)
}

pub fn state_is_game_over(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::GameOver)
}

/// Restart the session when the restart key goes down during GameOver.
///
/// Only scheduled behind [`state_is_game_over`]; a restart press while
/// running never reaches this system.
pub fn restart_on_input(
    mut commands: Commands,
    input: Res<InputState>,
    mut next_state: ResMut<NextGameState>,
) {
    if input.restart.just_pressed {
        info!("Restart requested from input");
        next_state.set(GameStates::Running);
        commands.trigger(GameStateChangedEvent {});
    }
}

/// Game-over trigger.
///
/// The first enemy touch while running requests [`GameStates::GameOver`] and
/// applies it immediately, so later systems in the same tick already see the
/// frozen state. Further touches in the same tick are ignored.
pub fn game_over_observer(
    trigger: On<EnemyOverlapEvent>,
    mut commands: Commands,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    let event = trigger.event();
    if state.get() != GameStates::Running {
        debug!(
            "Ignoring enemy {:?} touch outside of Running ({:?})",
            event.enemy,
            state.get()
        );
        return;
    }
    if next_state.get() == NextGameStates::Pending(GameStates::GameOver) {
        return;
    }
    info!("Player {:?} hit enemy {:?}", event.player, event.enemy);
    next_state.set(GameStates::GameOver);
    commands.trigger(GameStateChangedEvent {});
}
