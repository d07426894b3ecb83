//! The per-tick simulation pipeline.
//!
//! Stage order is fixed: commands, difficulty, scroll, gravity, collision,
//! score, spawn, prune. A collision ends the tick before scoring.

use super::config::Tuning;
use super::game_state::GameState;
use crate::input::{apply_command, Command, CommandOutcome};
use crate::sim::{collision, difficulty, obstacles, physics, scoring};
use rand::Rng;

/// Everything that happened during one call to [`tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// A simulation step ran (false while stopped or after a restart).
    pub stepped: bool,
    /// A jump command took effect.
    pub jumped: bool,
    /// A restart command reset the session.
    pub restarted: bool,
    /// The actor hit an obstacle; the session is now stopped.
    pub collided: bool,
    pub spawned: bool,
    pub pruned: usize,
    pub bonuses_awarded: u32,
    /// Total score added (time-based plus bonuses).
    pub score_gained: f64,
}

/// Apply queued commands, then advance the session by one tick.
///
/// A restart that takes effect ends the call: the fresh session's first
/// step happens on the next tick.
pub fn tick<R: Rng>(
    state: &mut GameState,
    commands: &[Command],
    tuning: &Tuning,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();

    for &command in commands {
        match apply_command(state, command, tuning) {
            CommandOutcome::Jumped => result.jumped = true,
            CommandOutcome::Restarted => result.restarted = true,
            CommandOutcome::Ignored => {}
        }
    }

    if result.restarted || !state.running {
        return result;
    }

    step(state, tuning, rng, &mut result);
    result
}

fn step<R: Rng>(state: &mut GameState, tuning: &Tuning, rng: &mut R, result: &mut TickResult) {
    result.stepped = true;
    state.tick_count += 1;

    // 1. Difficulty ramp and derived spawn cadence
    difficulty::ramp(state, tuning);

    // 2. Scroll
    obstacles::advance(&mut state.obstacles, state.speed);

    // 3. Gravity
    physics::apply_gravity(&mut state.actor, tuning);

    // 4. Collision: first hit stops the session and the tick
    if let Some(index) = collision::first_collision(&state.actor, &state.obstacles) {
        state.running = false;
        result.collided = true;
        log::info!(
            "Collision on tick {} with obstacle at x={:.1}, final score {}",
            state.tick_count,
            state.obstacles[index].x,
            state.display_score()
        );
        return;
    }

    // 5. Score
    let score_before = state.score;
    scoring::accrue(state, tuning);
    result.bonuses_awarded = scoring::award_pass_bonuses(state, tuning);
    result.score_gained = state.score - score_before;

    // 6. Spawn
    result.spawned = obstacles::tick_spawner(state, tuning, rng);
    if result.spawned {
        if let Some(o) = state.obstacles.last() {
            log::debug!(
                "Spawned {}x{} obstacle on tick {} (interval {})",
                o.width,
                o.height,
                state.tick_count,
                state.spawn_interval
            );
        }
    }

    // 7. Prune
    result.pruned = obstacles::prune(&mut state.obstacles, tuning);
}
