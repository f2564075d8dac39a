//! Fixed timestep simulation advance
//!
//! One input poll per frame feeds the rocket's movement intent; physics
//! then catches up in fixed increments so trajectories are identical
//! regardless of frame rate.

use glam::Vec2;

use super::collision::{Contact, aabb_overlap, check_contact};
use super::state::GameState;
use crate::consts::*;

/// Input commands for a single frame poll (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub thrust_left: bool,
    pub thrust_right: bool,
}

/// Apply one input poll to the rocket: clear the previous intent, apply
/// fuel-gated thrust (left wins over a contradictory left+right), and fall
/// back to coasting when no thrust landed.
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    let cost = state.tuning.fuel_per_thrust;
    let rocket = &mut state.rocket;

    rocket.reset_intent();

    let applied = if input.thrust_left {
        rocket.thrust_left(cost)
    } else if input.thrust_right {
        rocket.thrust_right(cost)
    } else {
        false
    };

    rocket.normalize_intent();

    if !applied {
        rocket.coast();
    }
}

/// Advance the simulation by one fixed step: integrate the rocket under
/// gravity plus lateral thrust, then resolve contacts against every
/// landing surface. Physics freezes once the mission is decided.
pub fn tick(state: &mut GameState, dt: f32) {
    state.time_ticks += 1;

    if state.rocket.mission.decided() {
        return;
    }

    let tuning = state.tuning;

    // Semi-implicit Euler: velocity first, then position
    let rocket = &mut state.rocket;
    let accel = rocket.accel + Vec2::new(rocket.intent.x * tuning.thrust_accel, 0.0);
    rocket.vel += accel * dt;
    rocket.pos += rocket.vel * dt;

    // Static pads have no self-motion; the call keeps all surfaces on the
    // same per-step cadence
    for pad in &mut state.pads {
        pad.advance(dt);
    }

    let rocket_box = state.rocket.aabb();
    let vel = state.rocket.vel;

    let mut contact = None;
    for pad in state.pads.iter().chain(std::iter::once(&state.moving_platform)) {
        let pad_box = pad.aabb();
        if let Some(overlap) = aabb_overlap(&rocket_box, &pad_box) {
            contact = Some(check_contact(&rocket_box, vel, &pad_box, &overlap, &tuning));
            break;
        }
    }

    match contact {
        Some(Contact::Landed { rest_y }) => {
            let rocket = &mut state.rocket;
            rocket.pos.y = rest_y;
            rocket.vel = Vec2::ZERO;
            rocket.mission.decide(true);
        }
        Some(Contact::Crashed) => {
            state.rocket.mission.decide(false);
        }
        None => {}
    }
}

/// Advance one rendered frame worth of simulation.
///
/// Polls input once, runs as many fixed steps as the accumulated wall time
/// covers (bounded by `MAX_SUBSTEPS`), carries the remainder, then advances
/// the moving platform exactly once and applies the out-of-bounds rule.
pub fn advance_frame(
    state: &mut GameState,
    input: &TickInput,
    accumulator: &mut f32,
    frame_dt: f32,
) {
    apply_input(state, input);

    *accumulator += frame_dt;
    if *accumulator >= SIM_DT {
        let mut substeps = 0;
        while *accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, SIM_DT);
            *accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    // Visually driven, decoupled from the physics substeps
    state.moving_platform.advance(SIM_DT);

    // Leaving the screen sideways or below ends the run as a crash
    let pos = state.rocket.pos;
    if pos.x < 0.0 || pos.x > SCREEN_WIDTH || pos.y > SCREEN_HEIGHT {
        state.rocket.mission.decide(false);
    }
}
