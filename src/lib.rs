//! coinbot library.
//!
//! A single-level platformer slice: a robot runs and jumps across platforms
//! collecting falling coins, every coin releases a bouncing enemy, and
//! touching an enemy ends the run until it is restarted.
//!
//! The simulation is headless and driven through [`session::Session`]. The
//! raylib window lives behind the `windowed` feature in [`frontend`].

pub mod components;
pub mod error;
pub mod events;
#[cfg(feature = "windowed")]
pub mod frontend;
pub mod game;
pub mod resources;
pub mod session;
pub mod systems;
pub mod view;
