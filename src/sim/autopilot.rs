//! Headless play: a simple jump policy and a session runner for batch
//! simulation.

use crate::core::config::Tuning;
use crate::core::game_state::GameState;
use crate::core::tick::tick;
use crate::input::Command;
use rand::Rng;
use serde::Serialize;

/// Jump when the nearest obstacle's leading edge is this many ticks of
/// travel away from the actor's trailing edge.
pub const LOOKAHEAD_TICKS: f64 = 12.0;

/// Decide whether to jump this tick.
pub fn should_jump(state: &GameState) -> bool {
    if !state.running || !state.actor.grounded {
        return false;
    }

    let actor = &state.actor;
    let actor_right = actor.x + actor.width;
    let lookahead = state.speed * LOOKAHEAD_TICKS;

    state
        .obstacles
        .iter()
        .filter(|o| o.right() >= actor.x)
        .map(|o| o.x - actor_right)
        .any(|gap| gap <= lookahead)
}

/// Outcome of one headless session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub ticks: u64,
    pub score: u64,
    pub obstacles_passed: u32,
    pub final_speed: f64,
    /// False if the session hit the tick limit without colliding.
    pub collided: bool,
}

/// Play one session with the autopilot until collision or `max_ticks`.
pub fn play_session<R: Rng>(seed: u64, tuning: &Tuning, max_ticks: u64, rng: &mut R) -> SessionSummary {
    let mut state = GameState::new(tuning);
    let mut commands = Vec::with_capacity(1);

    while state.running && state.tick_count < max_ticks {
        commands.clear();
        if should_jump(&state) {
            commands.push(Command::Jump);
        }
        tick(&mut state, &commands, tuning, rng);
    }

    SessionSummary {
        seed,
        ticks: state.tick_count,
        score: state.display_score(),
        obstacles_passed: state.obstacles_passed,
        final_speed: state.speed,
        collided: !state.running,
    }
}
