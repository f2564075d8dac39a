//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Contact, Overlap, aabb_overlap, check_contact};
pub use state::{GameState, Mission, Platform, PlatformMotion, Rocket};
pub use tick::{TickInput, advance_frame, apply_input, tick};
