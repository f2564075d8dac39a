//! Lunar Lander - a fixed-timestep 2D landing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, mission state)
//! - `atlas`: Sprite-sheet frame addressing
//! - `platform`: Frontend abstraction (clock, input, draw sink)
//! - `render`: State -> draw command translation
//! - `tuning`: Data-driven game balance

pub mod atlas;
pub mod platform;
pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz physics)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame-present cap (frames per second)
    pub const TARGET_FPS: u32 = 120;

    /// Screen dimensions (world units == pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Landing pad tile size
    pub const TILE_SIZE: f32 = 40.0;
    /// Number of static landing pads
    pub const NUM_LANDING_PADS: usize = 3;

    /// Rocket sprite/collider extent
    pub const ROCKET_SIZE: f32 = 25.0;
    /// Rocket spawn point (upper-left quadrant, clear of the pads)
    pub const ROCKET_SPAWN_X: f32 = 200.0;
    pub const ROCKET_SPAWN_Y: f32 = 100.0;

    /// Seconds the end overlay stays up before the run terminates
    pub const END_OVERLAY_SECS: f64 = 5.0;
}
