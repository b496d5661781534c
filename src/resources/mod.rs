//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems and observers during a tick: input, timing, session
//! state, level data and the UI-facing outputs.
//!
//! Overview
//! - `animationstore` – immutable clips resolved against the sprite atlas
//! - `atlas` – named frames of the sprite atlas
//! - `gameconfig` – window and gameplay tunables loaded from INI
//! - `gamestate` – authoritative and pending session state
//! - `hud` – score text and restart prompt visibility
//! - `input` – per-tick input snapshot and derived key edges
//! - `levelmap` – tile layers, spawn markers and level bounds
//! - `rng` – seeded random source of the session
//! - `score` – coins collected since the last (re)start
//! - `scorefeed` – channel subscribers outside the ECS world
//! - `systemsstore` – registry of state hook systems by name
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod atlas;
pub mod gameconfig;
pub mod gamestate;
pub mod hud;
pub mod input;
pub mod levelmap;
pub mod rng;
pub mod score;
pub mod scorefeed;
pub mod systemsstore;
pub mod worldtime;
