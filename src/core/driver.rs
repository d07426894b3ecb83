//! Frame driver: turns host frame opportunities into ticks and renders.
//!
//! While the session runs, every frame is one tick followed by one render.
//! The frame on which the session stops still renders (the frozen terminal
//! frame with its overlay); after that the driver stops scheduling until a
//! restart re-arms it.

use super::config::Tuning;
use super::constants::{FRAME_MS, MAX_FRAME_GAP_MS};
use super::game_state::{GameState, Snapshot};
use super::tick::{tick, TickResult};
use crate::input::{apply_command, Command, CommandOutcome};
use rand::Rng;
use std::io;
use std::time::Duration;

/// Consumer of per-frame snapshots. Nothing flows back into game state.
pub trait RenderSink {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

/// Converts elapsed wall time into a number of due fixed-cadence frames.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulated_us: u64,
}

impl FrameClock {
    const FRAME_US: u64 = FRAME_MS * 1000;
    const MAX_GAP_US: u64 = MAX_FRAME_GAP_MS * 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Add elapsed time and take the frames now due. Pending time, partial
    /// frame included, is capped at `MAX_FRAME_GAP_MS`, so a stall yields
    /// at most `MAX_FRAME_GAP_MS / FRAME_MS` frames.
    pub fn due_frames(&mut self, elapsed: Duration) -> u32 {
        let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.accumulated_us = self
            .accumulated_us
            .saturating_add(elapsed_us)
            .min(Self::MAX_GAP_US);

        let frames = self.accumulated_us / Self::FRAME_US;
        self.accumulated_us %= Self::FRAME_US;
        frames as u32
    }

    /// Time until the next frame is due.
    pub fn until_next_frame(&self) -> Duration {
        Duration::from_micros(Self::FRAME_US.saturating_sub(self.accumulated_us))
    }

    /// Drop any partial frame (used while nothing is scheduled).
    pub fn reset(&mut self) {
        self.accumulated_us = 0;
    }
}

/// Owns the session, its tuning and its random source.
pub struct Driver<R: Rng> {
    state: GameState,
    tuning: Tuning,
    rng: R,
    pending: Vec<Command>,
    scheduled: bool,
}

impl<R: Rng> Driver<R> {
    pub fn new(tuning: Tuning, rng: R) -> Self {
        Self {
            state: GameState::new(&tuning),
            tuning,
            rng,
            pending: Vec::new(),
            scheduled: true,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot(&self.tuning)
    }

    /// Whether the next frame opportunity will run a tick.
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Deliver a command from the input source.
    ///
    /// While scheduled, commands queue for the next tick boundary. While
    /// stopped only Restart is actionable: it resets the session at once and
    /// re-arms the driver. Returns true if the driver was re-armed.
    pub fn dispatch(&mut self, command: Command) -> bool {
        if self.scheduled {
            self.pending.push(command);
            return false;
        }

        if apply_command(&mut self.state, command, &self.tuning) == CommandOutcome::Restarted {
            self.pending.clear();
            self.scheduled = true;
            return true;
        }
        false
    }

    /// One frame: tick, then render. Returns `None` when not scheduled.
    pub fn frame<S: RenderSink>(&mut self, sink: &mut S) -> io::Result<Option<TickResult>> {
        if !self.scheduled {
            return Ok(None);
        }

        let commands = std::mem::take(&mut self.pending);
        let result = tick(&mut self.state, &commands, &self.tuning, &mut self.rng);
        sink.render(&self.snapshot())?;

        if !self.state.running {
            self.scheduled = false;
        }
        Ok(Some(result))
    }

    /// Run up to `frames` frames, stopping early if the session stops.
    /// Returns the number of frames that ran.
    pub fn run_frames<S: RenderSink>(&mut self, frames: u32, sink: &mut S) -> io::Result<u32> {
        let mut ran = 0;
        for _ in 0..frames {
            if self.frame(sink)?.is_none() {
                break;
            }
            ran += 1;
        }
        Ok(ran)
    }

    /// Repaint the current state without ticking (first paint, resize).
    pub fn redraw<S: RenderSink>(&self, sink: &mut S) -> io::Result<()> {
        sink.render(&self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::Obstacle;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<Snapshot>,
    }

    impl RenderSink for RecordingSink {
        fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
            self.frames.push(snapshot.clone());
            Ok(())
        }
    }

    fn driver() -> Driver<ChaCha8Rng> {
        Driver::new(Tuning::default(), ChaCha8Rng::seed_from_u64(42))
    }

    fn force_collision(driver: &mut Driver<ChaCha8Rng>) {
        let tuning = driver.tuning.clone();
        driver.state.obstacles.push(Obstacle {
            x: tuning.actor_x,
            y: tuning.ground_y - 30.0,
            width: 20.0,
            height: 30.0,
            passed: false,
        });
    }

    #[test]
    fn test_frame_clock_counts_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.due_frames(Duration::from_millis(10)), 0);
        assert_eq!(clock.due_frames(Duration::from_millis(10)), 1);
        assert_eq!(clock.due_frames(Duration::from_millis(48)), 3);
    }

    #[test]
    fn test_frame_clock_clamps_gaps() {
        let mut clock = FrameClock::new();
        // 10 seconds of stall still only yields 100ms worth of frames
        assert_eq!(clock.due_frames(Duration::from_secs(10)), 6);
    }

    #[test]
    fn test_frame_clock_stall_after_partial_frame() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.due_frames(Duration::from_millis(15)), 0);
        // The 15ms already pending does not add a seventh frame
        assert_eq!(clock.due_frames(Duration::from_secs(10)), 6);
        assert_eq!(clock.until_next_frame(), Duration::from_millis(12));
    }

    #[test]
    fn test_frame_clock_reset() {
        let mut clock = FrameClock::new();
        clock.due_frames(Duration::from_millis(15));
        clock.reset();
        assert_eq!(clock.due_frames(Duration::from_millis(2)), 0);
        assert_eq!(clock.until_next_frame(), Duration::from_millis(14));
    }

    #[test]
    fn test_frame_ticks_then_renders() {
        let mut driver = driver();
        let mut sink = RecordingSink::default();

        let result = driver.frame(&mut sink).unwrap().unwrap();

        assert!(result.stepped);
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(sink.frames[0].tick_count, 1);
    }

    #[test]
    fn test_one_final_render_then_stops() {
        let mut driver = driver();
        let mut sink = RecordingSink::default();
        force_collision(&mut driver);

        let result = driver.frame(&mut sink).unwrap().unwrap();
        assert!(result.collided);
        assert!(!driver.is_scheduled());
        assert_eq!(sink.frames.len(), 1);
        assert!(!sink.frames[0].running);

        assert!(driver.frame(&mut sink).unwrap().is_none());
        assert_eq!(driver.run_frames(10, &mut sink).unwrap(), 0);
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn test_queued_jump_applies_on_next_frame() {
        let mut driver = driver();
        let mut sink = RecordingSink::default();

        assert!(!driver.dispatch(Command::Jump));
        assert!(driver.state().actor.grounded);

        let result = driver.frame(&mut sink).unwrap().unwrap();
        assert!(result.jumped);
        assert!(!driver.state().actor.grounded);
    }

    #[test]
    fn test_restart_rearms() {
        let mut driver = driver();
        let mut sink = RecordingSink::default();
        force_collision(&mut driver);
        driver.frame(&mut sink).unwrap();
        assert!(!driver.is_scheduled());

        // Jump does nothing while stopped
        assert!(!driver.dispatch(Command::Jump));
        assert!(!driver.is_scheduled());

        assert!(driver.dispatch(Command::Restart));
        assert!(driver.is_scheduled());
        assert_eq!(driver.state(), &GameState::new(&Tuning::default()));

        assert_eq!(driver.run_frames(3, &mut sink).unwrap(), 3);
        assert_eq!(driver.state().tick_count, 3);
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut driver = driver();
        let mut sink = RecordingSink::default();
        driver.run_frames(5, &mut sink).unwrap();

        driver.dispatch(Command::Restart);
        let result = driver.frame(&mut sink).unwrap().unwrap();

        assert!(!result.restarted);
        assert_eq!(driver.state().tick_count, 6);
    }

    #[test]
    fn test_redraw_does_not_tick() {
        let driver = driver();
        let mut sink = RecordingSink::default();

        driver.redraw(&mut sink).unwrap();

        assert_eq!(sink.frames.len(), 1);
        assert_eq!(driver.state().tick_count, 0);
    }
}
