//! Jump Runner - terminal side-scrolling obstacle runner.
//!
//! The simulation core (`core`, `sim`, `input`) has no terminal dependency
//! beyond event types; `ui` renders snapshots with ratatui.

pub mod build_info;
pub mod cli;
pub mod core;
pub mod input;
pub mod sim;
pub mod ui;

pub use crate::core::{Driver, GameState, RenderSink, Snapshot, Tuning};
pub use input::Command;
