//! Sprite-sheet frame addressing
//!
//! The rocket sheet is a 4x4 grid with one row of four frames per facing.
//! Addressing only: frame selection beyond stepping through a row is out
//! of scope.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rocket sprite-sheet file name
pub const ROCKET_SHEET: &str = "spritesheet.png";
/// Landing pad texture file name (single frame)
pub const PAD_TEXTURE: &str = "landing_area.png";

/// Which way the rocket sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Down,
    Right,
    Left,
    Up,
}

impl Facing {
    /// The four atlas frame indices for this facing (one row each)
    pub fn frames(&self) -> [usize; 4] {
        match self {
            Facing::Down => [0, 1, 2, 3],
            Facing::Right => [4, 5, 6, 7],
            Facing::Left => [8, 9, 10, 11],
            Facing::Up => [12, 13, 14, 15],
        }
    }

    /// Facing derived from the rocket's pending movement intent.
    /// Lateral thrust wins; the coasting marker reads as Down.
    pub fn from_intent(intent: Vec2) -> Self {
        if intent.x < 0.0 {
            Facing::Left
        } else if intent.x > 0.0 {
            Facing::Right
        } else if intent.y < 0.0 {
            Facing::Up
        } else {
            Facing::Down
        }
    }
}

/// A fixed-grid sprite atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteAtlas {
    pub cols: usize,
    pub rows: usize,
}

/// The rocket sheet layout
pub const ROCKET_ATLAS: SpriteAtlas = SpriteAtlas { cols: 4, rows: 4 };

/// Ticks each animation frame is held (10 frames/s at the 60 Hz step)
const TICKS_PER_FRAME: u64 = 6;

impl SpriteAtlas {
    /// Normalized UV rect `[u, v, w, h]` of a frame, indexed row-major
    pub fn frame_uv(&self, index: usize) -> [f32; 4] {
        let col = index % self.cols;
        let row = (index / self.cols) % self.rows;
        let w = 1.0 / self.cols as f32;
        let h = 1.0 / self.rows as f32;
        [col as f32 * w, row as f32 * h, w, h]
    }

    /// Current frame of a facing's row for the given tick counter
    pub fn frame_for(&self, facing: Facing, ticks: u64) -> usize {
        let frames = facing.frames();
        frames[((ticks / TICKS_PER_FRAME) % frames.len() as u64) as usize]
    }
}
