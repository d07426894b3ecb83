//! Session state: the actor, live obstacles, score and difficulty.
//!
//! `GameState` exclusively owns everything that changes during a session.
//! The render side only ever sees a [`Snapshot`].

use super::config::Tuning;

/// Axis-aligned rectangle in field units (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// The player-controlled runner. Only `y` moves; `x` is fixed for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub x: f64,
    /// Top edge. Never greater than the ground-resting y.
    pub y: f64,
    /// Vertical velocity in units/tick (negative = upward).
    pub vy: f64,
    pub width: f64,
    pub height: f64,
    /// On the ground line; implies `vy == 0`.
    pub grounded: bool,
}

impl Actor {
    /// Actor standing still on the ground line.
    pub fn at_rest(tuning: &Tuning) -> Self {
        Self {
            x: tuning.actor_x,
            y: tuning.ground_rest_y(),
            vy: 0.0,
            width: tuning.actor_width,
            height: tuning.actor_height,
            grounded: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A ground obstacle scrolling toward the actor.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    /// Top edge; the base sits on the ground line.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Trailing edge has cleared the actor's leading edge (bonus awarded).
    pub passed: bool,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Complete state of one session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// False from the collision tick until a restart.
    pub running: bool,
    /// Accumulated fractional score. Display with [`GameState::display_score`].
    pub score: f64,
    /// Scroll speed in units/tick. Never decreases within a session.
    pub speed: f64,
    /// Ticks simulated this session.
    pub tick_count: u64,
    /// Ticks since the last spawn.
    pub spawn_timer: u32,
    /// Ticks between spawns, derived from `speed`.
    pub spawn_interval: u32,
    pub actor: Actor,
    pub obstacles: Vec<Obstacle>,
    /// Obstacles whose pass bonus has been awarded.
    pub obstacles_passed: u32,
}

impl GameState {
    /// Fresh session: grounded actor, no obstacles, base speed, zero score.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            running: true,
            score: 0.0,
            speed: tuning.base_speed,
            tick_count: 0,
            spawn_timer: 0,
            spawn_interval: tuning.spawn_interval_base,
            actor: Actor::at_rest(tuning),
            obstacles: Vec::new(),
            obstacles_passed: 0,
        }
    }

    /// Score as shown to the player.
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }

    /// Read-only copy of everything the render sink draws.
    pub fn snapshot(&self, tuning: &Tuning) -> Snapshot {
        Snapshot {
            field_width: tuning.field_width,
            field_height: tuning.field_height,
            ground_y: tuning.ground_y,
            actor: self.actor.rect(),
            obstacles: self.obstacles.iter().map(Obstacle::rect).collect(),
            score: self.display_score(),
            speed: self.speed,
            running: self.running,
            tick_count: self.tick_count,
            spawn_interval: self.spawn_interval,
            obstacles_passed: self.obstacles_passed,
        }
    }
}

/// What the render sink receives once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub field_width: f64,
    pub field_height: f64,
    pub ground_y: f64,
    pub actor: Rect,
    pub obstacles: Vec<Rect>,
    /// Floored score.
    pub score: u64,
    pub speed: f64,
    pub running: bool,
    pub tick_count: u64,
    pub spawn_interval: u32,
    pub obstacles_passed: u32,
}
