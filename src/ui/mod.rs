pub mod game_common;
pub mod runner_scene;

use crate::core::driver::RenderSink;
use crate::core::game_state::Snapshot;
use crate::input::PointerTargets;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout, Write};

/// Raw mode, alternate screen and mouse capture on stdout.
///
/// On error the terminal may be partly set up; call [`restore_terminal`].
pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Undo [`setup_terminal`]. Every step is attempted even if an earlier one
/// fails; the first error is returned.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let mouse = out.execute(DisableMouseCapture).map(|_| ());
    let screen = out.execute(LeaveAlternateScreen).map(|_| ());
    let cursor = out.execute(Show).map(|_| ());
    raw.and(mouse).and(screen).and(cursor)
}

/// Renders snapshots into a ratatui terminal and remembers where the
/// pointer-sensitive regions ended up on screen.
pub struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
    seed: u64,
    targets: PointerTargets,
}

impl<B: Backend> TerminalSink<B> {
    pub fn new(terminal: Terminal<B>, seed: u64) -> Self {
        Self {
            terminal,
            seed,
            targets: PointerTargets::default(),
        }
    }

    /// Regions from the most recent draw.
    pub fn pointer_targets(&self) -> PointerTargets {
        self.targets
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> RenderSink for TerminalSink<B> {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let seed = self.seed;
        let mut targets = PointerTargets::default();
        self.terminal.draw(|frame| {
            let area = frame.size();
            targets = runner_scene::render_runner_scene(frame, area, snapshot, seed);
        })?;
        self.targets = targets;
        Ok(())
    }
}
