//! Vertical kinematics for the actor.

use crate::core::config::Tuning;
use crate::core::game_state::Actor;

/// Integrate one tick of gravity, then clamp to the ground line.
pub fn apply_gravity(actor: &mut Actor, tuning: &Tuning) {
    actor.vy += tuning.gravity;
    actor.y += actor.vy;

    let rest_y = tuning.ground_rest_y();
    if actor.y >= rest_y {
        actor.y = rest_y;
        actor.vy = 0.0;
        actor.grounded = true;
    } else {
        actor.grounded = false;
    }
}

/// Start a jump. Only a grounded actor in a running session can jump;
/// returns whether the jump happened.
pub fn jump(actor: &mut Actor, running: bool, tuning: &Tuning) -> bool {
    if !(actor.grounded && running) {
        return false;
    }
    actor.vy = tuning.jump_velocity;
    actor.grounded = false;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rest_actor() -> (Actor, Tuning) {
        let tuning = Tuning::default();
        (Actor::at_rest(&tuning), tuning)
    }

    #[test]
    fn test_grounded_actor_stays_put() {
        let (mut actor, tuning) = rest_actor();

        for _ in 0..10 {
            apply_gravity(&mut actor, &tuning);
        }

        assert!(actor.grounded);
        assert_eq!(actor.vy, 0.0);
        assert!((actor.y - tuning.ground_rest_y()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jump_sets_velocity() {
        let (mut actor, tuning) = rest_actor();

        assert!(jump(&mut actor, true, &tuning));
        assert_eq!(actor.vy, tuning.jump_velocity);
        assert!(!actor.grounded);
    }

    #[test]
    fn test_no_jump_when_not_running() {
        let (mut actor, tuning) = rest_actor();

        assert!(!jump(&mut actor, false, &tuning));
        assert_eq!(actor.vy, 0.0);
        assert!(actor.grounded);
    }

    #[test]
    fn test_no_double_jump() {
        let (mut actor, tuning) = rest_actor();
        jump(&mut actor, true, &tuning);
        apply_gravity(&mut actor, &tuning);
        let vy_before = actor.vy;

        assert!(!jump(&mut actor, true, &tuning));
        assert_eq!(actor.vy, vy_before);
    }

    #[test]
    fn test_jump_arc_lands() {
        let (mut actor, tuning) = rest_actor();
        jump(&mut actor, true, &tuning);

        let mut highest = actor.y;
        let mut ticks = 0;
        while !actor.grounded && ticks < 200 {
            apply_gravity(&mut actor, &tuning);
            highest = highest.min(actor.y);
            ticks += 1;
        }

        // -10.5 start, +0.55 per tick: airborne for 38 ticks, apex ~95 units up
        assert_eq!(ticks, 38);
        assert!(tuning.ground_rest_y() - highest > 90.0);
        assert!(actor.grounded);
        assert_eq!(actor.vy, 0.0);
        assert!((actor.y - tuning.ground_rest_y()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_never_below_ground() {
        let (mut actor, tuning) = rest_actor();
        actor.y = tuning.ground_rest_y() - 1.0;
        actor.vy = 500.0;
        actor.grounded = false;

        apply_gravity(&mut actor, &tuning);

        assert!(actor.y <= tuning.ground_rest_y());
        assert!(actor.grounded);
        assert_eq!(actor.vy, 0.0);
    }

    #[test]
    fn test_airborne_clears_grounded() {
        let (mut actor, tuning) = rest_actor();
        actor.y = 50.0;

        apply_gravity(&mut actor, &tuning);

        assert!(!actor.grounded);
        assert!(actor.vy > 0.0);
    }
}
