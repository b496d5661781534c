//! ECS components for entities.
//!
//! Components are plain data records; the behaviour lives in
//! [`crate::systems`] and the observers in [`crate::events`].
//!
//! Submodules overview:
//! - [`animation`] – playback state of the active clip
//! - [`boxcollider`] – axis-aligned rectangular collider for contacts and overlaps
//! - [`coin`] – collectible with a one-shot `alive` flag
//! - [`enemy`] – roaming hazard released by a collection
//! - [`mapposition`] – world-space position of an entity
//! - [`persistent`] – marker for entities that survive a restart
//! - [`platform`] – static level geometry
//! - [`player`] – player state and facing
//! - [`rigidbody`] – arcade body storing velocity, bounce and contacts
//! - [`sprite`] – displayed atlas frame and mirroring
//! - [`tint`] – color modulation for rendering

pub mod animation;
pub mod boxcollider;
pub mod coin;
pub mod enemy;
pub mod mapposition;
pub mod persistent;
pub mod platform;
pub mod player;
pub mod rigidbody;
pub mod sprite;
pub mod tint;
