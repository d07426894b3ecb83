//! Obstacle lifecycle: spawn at the right edge, scroll left, prune once
//! fully past the left edge.

use crate::core::config::Tuning;
use crate::core::game_state::{GameState, Obstacle};
use rand::Rng;

/// Push one obstacle just past the right edge with random dimensions.
/// Height is drawn before width so a seed always yields the same sequence.
pub fn spawn_obstacle<R: Rng>(obstacles: &mut Vec<Obstacle>, tuning: &Tuning, rng: &mut R) {
    let height = rng.gen_range(tuning.obstacle_min_height..tuning.obstacle_max_height) as f64;
    let width = rng.gen_range(tuning.obstacle_min_width..tuning.obstacle_max_width) as f64;

    obstacles.push(Obstacle {
        x: tuning.field_width + tuning.obstacle_spawn_offset,
        y: tuning.ground_y - height,
        width,
        height,
        passed: false,
    });
}

/// Scroll every obstacle left by `speed`.
pub fn advance(obstacles: &mut [Obstacle], speed: f64) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;
    }
}

/// Drop obstacles whose right edge is at or beyond the prune margin left of
/// the field. Returns how many were removed.
pub fn prune(obstacles: &mut Vec<Obstacle>, tuning: &Tuning) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| o.right() > -tuning.obstacle_prune_margin);
    before - obstacles.len()
}

/// Count one tick toward the next spawn; spawns and resets the timer when
/// it reaches the current interval. Returns true if an obstacle spawned.
pub fn tick_spawner<R: Rng>(state: &mut GameState, tuning: &Tuning, rng: &mut R) -> bool {
    state.spawn_timer += 1;
    if state.spawn_timer < state.spawn_interval {
        return false;
    }
    spawn_obstacle(&mut state.obstacles, tuning, rng);
    state.spawn_timer = 0;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn obstacle_at(x: f64, width: f64) -> Obstacle {
        Obstacle {
            x,
            y: 190.0,
            width,
            height: 30.0,
            passed: false,
        }
    }

    #[test]
    fn test_spawn_obstacle_geometry() {
        let tuning = Tuning::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut obstacles = Vec::new();

        for _ in 0..500 {
            spawn_obstacle(&mut obstacles, &tuning, &mut rng);
        }

        for o in &obstacles {
            assert!((o.x - 730.0).abs() < f64::EPSILON);
            assert!(o.width >= 14.0 && o.width < 36.0);
            assert!(o.height >= 20.0 && o.height < 50.0);
            assert_eq!(o.width.fract(), 0.0);
            // Base sits exactly on the ground line
            assert!((o.y + o.height - tuning.ground_y).abs() < f64::EPSILON);
            assert!(!o.passed);
        }
    }

    #[test]
    fn test_spawn_is_reproducible() {
        let tuning = Tuning::default();
        let mut a = Vec::new();
        let mut b = Vec::new();
        let mut rng_a = ChaCha8Rng::seed_from_u64(7);
        let mut rng_b = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20 {
            spawn_obstacle(&mut a, &tuning, &mut rng_a);
            spawn_obstacle(&mut b, &tuning, &mut rng_b);
        }

        assert_eq!(a, b);
    }

    #[test]
    fn test_advance_moves_left() {
        let mut obstacles = vec![obstacle_at(100.0, 20.0), obstacle_at(400.0, 14.0)];

        advance(&mut obstacles, 6.5);

        assert!((obstacles[0].x - 93.5).abs() < f64::EPSILON);
        assert!((obstacles[1].x - 393.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_prune_keeps_partially_visible() {
        let tuning = Tuning::default();
        let mut obstacles = vec![
            obstacle_at(-5.0, 20.0),  // right edge 15, still visible
            obstacle_at(-25.0, 20.0), // right edge -5, inside the margin
            obstacle_at(-30.0, 20.0), // right edge -10, gone
            obstacle_at(-80.0, 20.0), // long gone
        ];

        let removed = prune(&mut obstacles, &tuning);

        assert_eq!(removed, 2);
        assert_eq!(obstacles.len(), 2);
        assert!((obstacles[0].x + 5.0).abs() < f64::EPSILON);
        assert!((obstacles[1].x + 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spawner_cadence() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..74 {
            assert!(!tick_spawner(&mut state, &tuning, &mut rng));
        }
        assert!(tick_spawner(&mut state, &tuning, &mut rng));
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.spawn_timer, 0);
    }

    #[test]
    fn test_spawner_respects_shorter_interval() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        state.spawn_interval = 40;

        let spawned = (0..120)
            .filter(|_| tick_spawner(&mut state, &tuning, &mut rng))
            .count();

        assert_eq!(spawned, 3);
    }
}
