//! Key-event translation.
//!
//! Two bindings feed the same session commands:
//! - keyboard: arrow keys move by `keyboard_step`, Space fires once per press
//! - buttons: `a` / `d` move by `button_step`, `w` fires; all repeatable
//!
//! Restart (`r`) and quit (`q`, Esc, Ctrl-C) are shared.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::ControlsConfig;

/// A state change requested of the game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveLeft(i32),
    MoveRight(i32),
    Fire,
    Restart,
}

/// Everything an input source can ask of the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Command(Command),
    Quit,
}

/// Translate one key event, or `None` if it is unbound for its kind.
pub fn translate(event: &KeyEvent, controls: &ControlsConfig) -> Option<Control> {
    let repeat = match event.kind {
        KeyEventKind::Press => false,
        KeyEventKind::Repeat => true,
        KeyEventKind::Release => return None,
    };

    let command = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Control::Quit);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(Control::Quit),

        // Keyboard binding
        KeyCode::Left => Command::MoveLeft(controls.keyboard_step),
        KeyCode::Right => Command::MoveRight(controls.keyboard_step),
        KeyCode::Char(' ') if !repeat => Command::Fire,

        // Button binding
        KeyCode::Char('a') | KeyCode::Char('A') => Command::MoveLeft(controls.button_step),
        KeyCode::Char('d') | KeyCode::Char('D') => Command::MoveRight(controls.button_step),
        KeyCode::Char('w') | KeyCode::Char('W') => Command::Fire,

        KeyCode::Char('r') | KeyCode::Char('R') if !repeat => Command::Restart,
        _ => return None,
    };
    Some(Control::Command(command))
}
