//! Frontend abstraction layer
//!
//! The seam between the simulation and whatever presents it:
//! - Monotonic time
//! - Per-frame key state
//! - Draw-command sink (which also owns the frame-rate wait)
//!
//! The sim never sees backend types, so any windowing/drawing stack can
//! sit behind this trait. The headless frontend here drives tests and the
//! native binary.

use crate::consts::TARGET_FPS;
use crate::render::DrawCommand;

/// Key state for one frame's poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub thrust_left: bool,
    pub thrust_right: bool,
    pub quit: bool,
}

/// Clock, input and draw seam between the driver and a backend
pub trait Frontend {
    /// Monotonic seconds since startup
    fn now(&self) -> f64;
    /// Current key state for this frame
    fn poll(&mut self) -> InputSnapshot;
    /// Present one frame; implies the frame-present wait
    fn present(&mut self, commands: &[DrawCommand]);
    /// Whether the backend asked to close (window close button etc.)
    fn close_requested(&self) -> bool;
}

/// Scripted, windowless frontend. Plays back a per-frame input script at a
/// fixed frame cadence; frames past the script coast.
pub struct HeadlessFrontend {
    script: Vec<InputSnapshot>,
    frame: u64,
    frame_dt: f64,
    /// Last presented draw list, kept for inspection
    pub last_frame: Vec<DrawCommand>,
}

impl HeadlessFrontend {
    pub fn new(script: Vec<InputSnapshot>) -> Self {
        Self {
            script,
            frame: 0,
            frame_dt: 1.0 / f64::from(TARGET_FPS),
            last_frame: Vec::new(),
        }
    }

    /// A frontend that only ever coasts
    pub fn idle() -> Self {
        Self::new(Vec::new())
    }
}

impl Frontend for HeadlessFrontend {
    fn now(&self) -> f64 {
        self.frame as f64 * self.frame_dt
    }

    fn poll(&mut self) -> InputSnapshot {
        self.script
            .get(self.frame as usize)
            .copied()
            .unwrap_or_default()
    }

    fn present(&mut self, commands: &[DrawCommand]) {
        self.last_frame = commands.to_vec();
        self.frame += 1;
    }

    fn close_requested(&self) -> bool {
        false
    }
}
