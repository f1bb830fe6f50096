//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules and state management.
//! It has zero dependencies on UI or I/O.

pub mod board;
pub mod config;
pub mod engine;
pub mod rng;
pub mod shape;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use engine::{ActivePiece, Engine};
pub use rng::{PieceSource, ScriptedSource, SimpleRng};
pub use shape::ShapeMatrix;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
