//! Input handling: logical game commands and their terminal bindings.
//!
//! Only two commands reach the game: Jump and Restart. Each is gated on the
//! session state (Jump needs a running session, Restart a stopped one).
//! Quitting is a host concern and never touches game state.

use crate::core::config::Tuning;
use crate::core::game_state::GameState;
use crate::sim::physics;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Logical commands understood by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    Restart,
}

/// What a command did when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Jumped,
    Restarted,
    /// Not actionable in the current state (airborne, stopped, or running).
    Ignored,
}

/// Apply one command to the session.
///
/// Restart replaces the whole state with a fresh session rather than
/// patching fields, so nothing from the previous run survives.
pub fn apply_command(state: &mut GameState, command: Command, tuning: &Tuning) -> CommandOutcome {
    match command {
        Command::Jump => {
            if physics::jump(&mut state.actor, state.running, tuning) {
                CommandOutcome::Jumped
            } else {
                CommandOutcome::Ignored
            }
        }
        Command::Restart => {
            if state.running {
                return CommandOutcome::Ignored;
            }
            log::info!(
                "Restart after {} ticks with score {}",
                state.tick_count,
                state.display_score()
            );
            *state = GameState::new(tuning);
            CommandOutcome::Restarted
        }
    }
}

/// UI-agnostic result of mapping a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostInput {
    Command(Command),
    Quit,
    Other,
}

/// Screen regions a pointer press can act on, reported by the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerTargets {
    /// The play surface; a press here is a jump.
    pub play_field: Option<Rect>,
    /// The game-over restart button; a press here restarts.
    pub restart_button: Option<Rect>,
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Map a key press.
pub fn map_key(key: &KeyEvent) -> HostInput {
    if key.kind != KeyEventKind::Press {
        return HostInput::Other;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => HostInput::Quit,
            _ => HostInput::Other,
        };
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => {
            HostInput::Command(Command::Jump)
        }
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
            HostInput::Command(Command::Restart)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => HostInput::Quit,
        _ => HostInput::Other,
    }
}

/// Map a mouse event. Only left-button presses count; the restart button
/// wins over the play field it is drawn on top of.
pub fn map_mouse(mouse: &MouseEvent, targets: &PointerTargets) -> HostInput {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return HostInput::Other;
    }

    let (column, row) = (mouse.column, mouse.row);
    if let Some(button) = targets.restart_button {
        if contains(button, column, row) {
            return HostInput::Command(Command::Restart);
        }
    }
    if let Some(field) = targets.play_field {
        if contains(field, column, row) {
            return HostInput::Command(Command::Jump);
        }
    }
    HostInput::Other
}
