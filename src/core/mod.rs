//! Session state, tuning, the tick pipeline and the frame driver.

pub mod config;
pub mod constants;
pub mod driver;
pub mod game_state;
pub mod tick;

pub use config::{Tuning, TuningSource};
pub use driver::{Driver, FrameClock, RenderSink};
pub use game_state::{Actor, GameState, Obstacle, Rect, Snapshot};
pub use tick::{tick, TickResult};
