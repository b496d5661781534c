//! Session state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the enter hook stored in
//! [`crate::resources::systemsstore::SystemsStore`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Hook run when entering [`GameStates::Running`].
pub const ENTER_RUNNING: &str = "enter_running";
/// Hook run when entering [`GameStates::GameOver`].
pub const ENTER_GAME_OVER: &str = "enter_game_over";

/// Event used to indicate that a pending state transition should be applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs the enter hook, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Whether the session may move from `from` to `to`.
///
/// Running is entered from the initial state or from GameOver (restart);
/// GameOver only from Running.
pub fn is_valid_transition(from: GameStates, to: GameStates) -> bool {
    matches!(
        (from, to),
        (GameStates::None, GameStates::Running)
            | (GameStates::GameOver, GameStates::Running)
            | (GameStates::Running, GameStates::GameOver)
    )
}

/// Observer that applies a pending session state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`] and always clears it.
/// - Invalid transitions (see [`is_valid_transition`]) are dropped with a
///   warning.
/// - Otherwise the new value is copied into [`GameState`] and the enter
///   hook of the new state is run.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: ResMut<NextGameState>,
    mut game_state: ResMut<GameState>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    match next_game_state.get() {
        Pending(new_state) => {
            next_game_state.reset();
            let old_state = game_state.get();
            if !is_valid_transition(old_state, new_state) {
                warn!(
                    "Ignoring transition from {:?} to {:?}",
                    old_state, new_state
                );
                return;
            }
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state);
            on_state_exit(old_state);
            on_state_enter(new_state, &mut commands, &systems_store);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Internal: run the state-specific "enter" system for the given state.
fn on_state_enter(state: GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let hook = match state {
        GameStates::None => return,
        GameStates::Running => ENTER_RUNNING,
        GameStates::GameOver => ENTER_GAME_OVER,
    };
    match systems_store.get(hook) {
        Some(id) => commands.run_system(*id),
        None => warn!("Hook '{}' not found in SystemsStore", hook),
    }
}

fn on_state_exit(state: GameStates) {
    debug!("Exited {:?} state", state);
}
