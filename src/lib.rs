//! Blockfall: a terminal falling-block game.
//!
//! The crate splits into a pure core (`core`, `types`) that owns all game
//! truth, and a thin terminal host (`input`, `term`, the binary) that polls
//! keys, drives the engine clock, and renders read-only snapshots.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
