//! Simulation systems and observers.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animation clips
//! - [`audio`] – drain queued audio cues
//! - [`coins`] – coin field layout, spawning and collection
//! - [`collision`] – player overlap detection and routing
//! - [`enemies`] – enemy spawner
//! - [`gamestate`] – state run conditions, restart input and the game-over trigger
//! - [`input`] – turn the tick's input snapshot into [`crate::resources::input::InputState`]
//! - [`movement`] – gravity, integration and contact resolution
//! - [`player`] – player state resolver and controller
//! - [`score`] – score channel listeners
//! - [`time`] – advance simulation time

pub mod animation;
pub mod audio;
pub mod coins;
pub mod collision;
pub mod enemies;
pub mod gamestate;
pub mod input;
pub mod movement;
pub mod player;
pub mod score;
pub mod time;
