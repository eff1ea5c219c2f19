//! Gapwing - a one-button terminal arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pillars, scoring, lifecycle)
//! - `renderer`: Terminal rendering over crossterm
//! - `input`: Terminal events to game actions
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use sim::{GameState, Phase, Snapshot, step};
pub use tuning::Tuning;

/// Game loop constants
pub mod consts {
    use std::time::Duration;

    /// Target frame duration (~60 FPS)
    pub const FRAME: Duration = Duration::from_millis(16);
    /// Largest delta time fed into one simulation step; stalls and
    /// debugger pauses are clamped instead of teleporting the player
    pub const MAX_DT: f32 = 0.1;
}
