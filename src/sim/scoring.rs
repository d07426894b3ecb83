//! Score accrual: a continuous per-tick increment that grows with speed,
//! plus a one-time bonus per cleared obstacle.

use crate::core::config::Tuning;
use crate::core::game_state::GameState;

/// Per-tick score at a given speed.
pub fn tick_increment(speed: f64, tuning: &Tuning) -> f64 {
    tuning.score_base_increment + tuning.score_speed_bonus_factor * (speed - tuning.base_speed)
}

/// Add this tick's time-based score. Returns the amount added.
pub fn accrue(state: &mut GameState, tuning: &Tuning) -> f64 {
    let gained = tick_increment(state.speed, tuning);
    state.score += gained;
    gained
}

/// Award the pass bonus for every obstacle whose trailing edge is strictly
/// left of the actor's leading edge and has not been awarded yet.
/// Returns the number of bonuses awarded this call.
pub fn award_pass_bonuses(state: &mut GameState, tuning: &Tuning) -> u32 {
    let actor_left = state.actor.x;
    let mut awarded = 0;

    for obstacle in state.obstacles.iter_mut() {
        if !obstacle.passed && obstacle.right() < actor_left {
            obstacle.passed = true;
            state.score += tuning.pass_bonus;
            awarded += 1;
        }
    }

    state.obstacles_passed += awarded;
    awarded
}
