//! Data-driven game balance
//!
//! All physics constants the simulation is tuned with. Loadable from a
//! JSON file so balance passes don't require a rebuild; defaults are the
//! shipped tuning.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Balance values the simulation runs with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Constant downward acceleration (px/s²)
    pub gravity: f32,
    /// Lateral thrust acceleration at full intent (px/s²).
    /// Must exceed gravity so a full tank can meaningfully steer descent.
    pub thrust_accel: f32,
    /// Maximum descent speed for a safe landing (px/s)
    pub safe_descent_speed: f32,
    /// Maximum lateral speed for a safe landing (px/s)
    pub safe_lateral_speed: f32,
    /// Fuel in the tank at spawn
    pub initial_fuel: f32,
    /// Fuel burned per input poll with thrust held
    pub fuel_per_thrust: f32,
    /// Moving platform patrol half-width (px)
    pub patrol_amplitude: f32,
    /// Moving platform angular rate (rad/s)
    pub patrol_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 50.0,
            thrust_accel: 130.0,
            safe_descent_speed: 80.0,
            safe_lateral_speed: 50.0,
            initial_fuel: 100.0,
            fuel_per_thrust: 0.1,
            patrol_amplitude: 220.0,
            patrol_rate: 0.9,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
