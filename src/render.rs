//! Render-phase translation
//!
//! Turns game state into backend-agnostic draw commands: sprites for the
//! entities, the fuel/time HUD, and the end overlay once the mission is
//! decided. Keeping this as pure data lets any drawing backend present it.

use glam::Vec2;

use crate::atlas::{Facing, PAD_TEXTURE, ROCKET_ATLAS, ROCKET_SHEET};
use crate::consts::SCREEN_HEIGHT;
use crate::sim::GameState;

/// End overlay messages
pub const SUCCESS_TEXT: &str = "MISSION ACCOMPLISHED";
pub const FAILURE_TEXT: &str = "MISSION FAILED";

/// Full-texture UV rect for single-frame textures
const FULL_UV: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// One drawing instruction for the frontend
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        texture: &'static str,
        pos: Vec2,
        scale: Vec2,
        uv: [f32; 4],
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
    },
}

/// Build the draw list for one frame. `elapsed_secs` feeds the HUD timer,
/// shown only while the mission is undecided.
pub fn draw_frame(state: &GameState, elapsed_secs: f64) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.pads.len() + 4);

    let facing = Facing::from_intent(state.rocket.intent);
    let frame = ROCKET_ATLAS.frame_for(facing, state.time_ticks);
    commands.push(DrawCommand::Sprite {
        texture: ROCKET_SHEET,
        pos: state.rocket.pos,
        scale: state.rocket.scale,
        uv: ROCKET_ATLAS.frame_uv(frame),
    });

    for pad in state.pads.iter().chain(std::iter::once(&state.moving_platform)) {
        commands.push(DrawCommand::Sprite {
            texture: PAD_TEXTURE,
            pos: pad.pos,
            scale: pad.scale,
            uv: FULL_UV,
        });
    }

    commands.push(DrawCommand::Text {
        text: format!("Fuel: {:.1}", state.rocket.fuel),
        pos: Vec2::new(40.0, 40.0),
        size: 20.0,
    });

    if state.rocket.mission.decided() {
        let msg = if state.rocket.mission.succeeded() {
            SUCCESS_TEXT
        } else {
            FAILURE_TEXT
        };
        commands.push(DrawCommand::Text {
            text: msg.to_string(),
            pos: Vec2::new(200.0, SCREEN_HEIGHT / 2.0 - 48.0),
            size: 48.0,
        });
    } else {
        commands.push(DrawCommand::Text {
            text: format!("Time: {:.1} s", elapsed_secs),
            pos: Vec2::new(40.0, 60.0),
            size: 20.0,
        });
    }

    commands
}
