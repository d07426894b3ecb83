// Frame timing
pub const FRAME_MS: u64 = 16; // ~60 FPS, one tick per frame
pub const MAX_FRAME_GAP_MS: u64 = 100; // clamp after suspend/lag

// Play field (field units, y grows downward)
pub const FIELD_WIDTH: f64 = 720.0;
pub const FIELD_HEIGHT: f64 = 260.0;
pub const GROUND_Y: f64 = FIELD_HEIGHT - 40.0;
pub const GROUND_THICKNESS: f64 = 4.0;

// Actor
pub const ACTOR_X: f64 = 60.0;
pub const ACTOR_WIDTH: f64 = 32.0;
pub const ACTOR_HEIGHT: f64 = 40.0;

// Physics
pub const GRAVITY: f64 = 0.55;
pub const JUMP_VELOCITY: f64 = -10.5;

// Difficulty ramp
pub const BASE_SPEED: f64 = 6.0;
pub const SPEED_RAMP_RATE: f64 = 0.0012;

// Spawn cadence: max(MIN, BASE - floor((speed - BASE_SPEED) * SLOPE))
pub const SPAWN_INTERVAL_BASE: u32 = 75;
pub const SPAWN_INTERVAL_MIN: u32 = 40;
pub const SPAWN_INTERVAL_SLOPE: f64 = 3.0;

// Obstacles (half-open ranges)
pub const OBSTACLE_MIN_WIDTH: u32 = 14;
pub const OBSTACLE_MAX_WIDTH: u32 = 36;
pub const OBSTACLE_MIN_HEIGHT: u32 = 20;
pub const OBSTACLE_MAX_HEIGHT: u32 = 50;
pub const OBSTACLE_SPAWN_OFFSET: f64 = 10.0; // spawn this far past the right edge
pub const OBSTACLE_PRUNE_MARGIN: f64 = 10.0; // prune once x + w <= -margin

// Scoring
pub const SCORE_BASE_INCREMENT: f64 = 0.2;
pub const SCORE_SPEED_BONUS_FACTOR: f64 = 0.02;
pub const PASS_BONUS: f64 = 5.0;
