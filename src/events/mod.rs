//! Event types exchanged across systems and observers.
//!
//! Events decouple the system that detects something (an overlap, a score
//! change, a state request) from the code that reacts to it.
//!
//! Submodules:
//! - [`audio`] – fire-and-forget audio cue messages
//! - [`collision`] – raw and classified overlap notifications
//! - [`gamestate`] – session state transitions and their observer
//! - [`score`] – the score channel
pub mod audio;
pub mod collision;
pub mod gamestate;
pub mod score;
