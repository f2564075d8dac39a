//! Lunar Lander entry point
//!
//! Owns the run loop: poll input, advance the fixed-timestep sim, render,
//! and terminate on quit or five seconds after the end overlay first shows.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use lunar_lander::Tuning;
use lunar_lander::consts::*;
use lunar_lander::platform::{Frontend, HeadlessFrontend, InputSnapshot};
use lunar_lander::render::draw_frame;
use lunar_lander::sim::{GameState, TickInput, advance_frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunStatus {
    Running,
    Terminated,
}

/// Driver state for one run: simulation plus frame bookkeeping
struct Game {
    state: GameState,
    accumulator: f32,
    last_time: f64,
    /// When the end overlay was first presented
    end_overlay_shown_at: Option<f64>,
    status: RunStatus,
}

impl Game {
    fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::with_tuning(seed, tuning),
            accumulator: 0.0,
            last_time: 0.0,
            end_overlay_shown_at: None,
            status: RunStatus::Running,
        }
    }

    /// One iteration of the run loop
    fn frame(&mut self, frontend: &mut impl Frontend) {
        let input = frontend.poll();
        if input.quit || frontend.close_requested() {
            self.status = RunStatus::Terminated;
            return;
        }

        let now = frontend.now();
        let dt = if self.last_time > 0.0 {
            ((now - self.last_time) as f32).min(0.1)
        } else {
            SIM_DT
        };
        self.last_time = now;

        let tick_input = TickInput {
            thrust_left: input.thrust_left,
            thrust_right: input.thrust_right,
        };
        advance_frame(&mut self.state, &tick_input, &mut self.accumulator, dt);

        let commands = draw_frame(&self.state, now);
        frontend.present(&commands);

        if self.state.rocket.mission.decided() && self.end_overlay_shown_at.is_none() {
            self.end_overlay_shown_at = Some(now);
            if self.state.rocket.mission.succeeded() {
                log::info!("Mission accomplished at {now:.1} s");
            } else {
                log::info!("Mission failed at {now:.1} s");
            }
        }

        if let Some(shown_at) = self.end_overlay_shown_at {
            if now - shown_at >= END_OVERLAY_SECS {
                self.status = RunStatus::Terminated;
            }
        }
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    let tuning = Tuning::load(Path::new("tuning.json"));

    log::info!("Lunar Lander starting (seed {seed})");

    // No windowing backend in this build: play back a short demo flight on
    // the headless frontend (hold right thrust, then coast in)
    let script = vec![
        InputSnapshot {
            thrust_right: true,
            ..Default::default()
        };
        90
    ];
    let mut frontend = HeadlessFrontend::new(script);

    let mut game = Game::new(seed, tuning);
    while game.status == RunStatus::Running {
        game.frame(&mut frontend);
    }

    log::info!(
        "Run over after {:.1} s, fuel remaining {:.1}",
        frontend.now(),
        game.state.rocket.fuel
    );
}
