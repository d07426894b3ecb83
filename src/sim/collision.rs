//! Axis-aligned bounding-box collision between the actor and obstacles.

use crate::core::game_state::{Actor, Obstacle, Rect};

/// True unless the rectangles are strictly separated on some axis.
/// Touching edges count as overlap. Symmetric in its arguments.
pub fn overlap(a: &Rect, b: &Rect) -> bool {
    !(a.right() < b.x || a.x > b.right() || a.bottom() < b.y || a.y > b.bottom())
}

/// Index of the first obstacle touching the actor, if any.
pub fn first_collision(actor: &Actor, obstacles: &[Obstacle]) -> Option<usize> {
    let actor_rect = actor.rect();
    obstacles
        .iter()
        .position(|o| overlap(&actor_rect, &o.rect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Tuning;

    #[test]
    fn test_disjoint_pair() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert!(!overlap(&a, &b));
        assert!(!overlap(&b, &a));
    }

    #[test]
    fn test_overlapping_pair() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlap(&a, &b));
        assert!(overlap(&b, &a));
    }

    #[test]
    fn test_separated_on_one_axis_only() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Same rows, far apart horizontally
        let b = Rect::new(50.0, 0.0, 10.0, 10.0);
        assert!(!overlap(&a, &b));
        // Same columns, far apart vertically
        let c = Rect::new(0.0, 50.0, 10.0, 10.0);
        assert!(!overlap(&a, &c));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(overlap(&a, &b));
        assert!(overlap(&b, &a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlap(&outer, &inner));
        assert!(overlap(&inner, &outer));
    }

    #[test]
    fn test_symmetry_grid() {
        let a = Rect::new(50.0, 50.0, 20.0, 30.0);
        for dx in -6..=6 {
            for dy in -6..=6 {
                let b = Rect::new(50.0 + dx as f64 * 7.0, 50.0 + dy as f64 * 7.0, 14.0, 9.0);
                assert_eq!(overlap(&a, &b), overlap(&b, &a));
            }
        }
    }

    #[test]
    fn test_first_collision_finds_overlapping_obstacle() {
        let tuning = Tuning::default();
        let actor = Actor::at_rest(&tuning);
        let far = Obstacle {
            x: 500.0,
            y: 190.0,
            width: 20.0,
            height: 30.0,
            passed: false,
        };
        let hit = Obstacle { x: 70.0, ..far.clone() };

        assert_eq!(first_collision(&actor, &[far.clone()]), None);
        assert_eq!(first_collision(&actor, &[far, hit]), Some(1));
    }

    #[test]
    fn test_jumping_actor_clears_low_obstacle() {
        let tuning = Tuning::default();
        let mut actor = Actor::at_rest(&tuning);
        // Bottom of actor at y = 160, obstacle top at 200
        actor.y = 120.0;
        actor.grounded = false;
        let low = Obstacle {
            x: 60.0,
            y: 200.0,
            width: 20.0,
            height: 20.0,
            passed: false,
        };

        assert_eq!(first_collision(&actor, &[low]), None);
    }
}
