//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Variable timestep, but the same seed and the same dt sequence always
//!   reproduce the same run
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod state;
pub mod step;

pub use collision::{Aabb, sphere_intersects_aabb};
pub use obstacles::{Pillar, PillarField};
pub use state::{GameState, Phase, Snapshot};
pub use step::step;
