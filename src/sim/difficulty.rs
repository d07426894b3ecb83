//! Difficulty ramp. Speed is the single source of truth; the spawn cadence
//! is derived from it.

use crate::core::config::Tuning;
use crate::core::game_state::GameState;

/// Spawn interval in ticks for a given speed.
///
/// `max(min, base - floor((speed - base_speed) * slope))`. Non-increasing in
/// speed and never below `spawn_interval_min`, however large speed gets.
pub fn spawn_interval_for(speed: f64, tuning: &Tuning) -> u32 {
    let reduction = ((speed - tuning.base_speed) * tuning.spawn_interval_slope)
        .floor()
        .max(0.0);
    // Float-to-int casts saturate, so unbounded speed stays well-defined.
    tuning
        .spawn_interval_base
        .saturating_sub(reduction as u32)
        .max(tuning.spawn_interval_min)
}

/// Advance the ramp by one tick and refresh the derived spawn interval.
pub fn ramp(state: &mut GameState, tuning: &Tuning) {
    state.speed += tuning.speed_ramp_rate;
    state.spawn_interval = spawn_interval_for(state.speed, tuning);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_speed_gives_base_interval() {
        let tuning = Tuning::default();
        assert_eq!(spawn_interval_for(tuning.base_speed, &tuning), 75);
    }

    #[test]
    fn test_interval_shrinks_with_speed() {
        let tuning = Tuning::default();
        // (8 - 6) * 3 = 6
        assert_eq!(spawn_interval_for(8.0, &tuning), 69);
        // (10.5 - 6) * 3 = 13.5 -> 13
        assert_eq!(spawn_interval_for(10.5, &tuning), 62);
    }

    #[test]
    fn test_interval_floor() {
        let tuning = Tuning::default();
        assert_eq!(spawn_interval_for(50.0, &tuning), 40);
        assert_eq!(spawn_interval_for(1.0e12, &tuning), 40);
        assert_eq!(spawn_interval_for(f64::MAX, &tuning), 40);
    }

    #[test]
    fn test_interval_non_increasing() {
        let tuning = Tuning::default();
        let mut previous = u32::MAX;
        let mut speed = tuning.base_speed;
        while speed < 30.0 {
            let interval = spawn_interval_for(speed, &tuning);
            assert!(interval <= previous);
            assert!(interval >= tuning.spawn_interval_min);
            previous = interval;
            speed += 0.05;
        }
    }

    #[test]
    fn test_ramp_increases_speed() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);

        for _ in 0..1000 {
            ramp(&mut state, &tuning);
        }

        let expected = tuning.base_speed + 1000.0 * tuning.speed_ramp_rate;
        assert!((state.speed - expected).abs() < 1e-9);
        // (7.2 - 6) * 3 = 3.6 -> 3
        assert_eq!(state.spawn_interval, 72);
    }
}
