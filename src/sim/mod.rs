//! Simulation rules: physics, obstacles, collision, scoring, difficulty.
//!
//! Everything here is infallible and deterministic given the random source.

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod obstacles;
pub mod physics;
pub mod scoring;
