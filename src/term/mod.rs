//! Terminal host layer: pure view projection plus the raw-mode renderer.

pub mod game_view;
pub mod renderer;

pub use game_view::{Frame, GameView};
pub use renderer::TerminalRenderer;
