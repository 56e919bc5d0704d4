use alien_wave::config::ControlsConfig;
use alien_wave::input::*;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
}

fn repeat(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

fn cmd(c: Command) -> Option<Control> {
    Some(Control::Command(c))
}

#[test]
fn arrows_use_keyboard_step() {
    let c = ControlsConfig::default();
    assert_eq!(translate(&press(KeyCode::Left), &c), cmd(Command::MoveLeft(25)));
    assert_eq!(translate(&press(KeyCode::Right), &c), cmd(Command::MoveRight(25)));
    // held arrows keep moving
    assert_eq!(translate(&repeat(KeyCode::Left), &c), cmd(Command::MoveLeft(25)));
}

#[test]
fn space_fires_once_per_press() {
    let c = ControlsConfig::default();
    assert_eq!(translate(&press(KeyCode::Char(' ')), &c), cmd(Command::Fire));
    assert_eq!(translate(&repeat(KeyCode::Char(' ')), &c), None);
}

#[test]
fn buttons_use_button_step_and_repeat() {
    let c = ControlsConfig::default();
    assert_eq!(translate(&press(KeyCode::Char('a')), &c), cmd(Command::MoveLeft(10)));
    assert_eq!(translate(&repeat(KeyCode::Char('d')), &c), cmd(Command::MoveRight(10)));
    assert_eq!(translate(&repeat(KeyCode::Char('w')), &c), cmd(Command::Fire));
}

#[test]
fn steps_follow_config() {
    let c = ControlsConfig { keyboard_step: 7, button_step: 3 };
    assert_eq!(translate(&press(KeyCode::Right), &c), cmd(Command::MoveRight(7)));
    assert_eq!(translate(&press(KeyCode::Char('A')), &c), cmd(Command::MoveLeft(3)));
}

#[test]
fn restart_and_quit() {
    let c = ControlsConfig::default();
    assert_eq!(translate(&press(KeyCode::Char('r')), &c), cmd(Command::Restart));
    assert_eq!(translate(&press(KeyCode::Char('R')), &c), cmd(Command::Restart));
    assert_eq!(translate(&repeat(KeyCode::Char('r')), &c), None);
    assert_eq!(translate(&press(KeyCode::Char('q')), &c), Some(Control::Quit));
    assert_eq!(translate(&press(KeyCode::Esc), &c), Some(Control::Quit));

    let ctrl_c = KeyEvent::new_with_kind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
    assert_eq!(translate(&ctrl_c, &c), Some(Control::Quit));
}

#[test]
fn releases_and_unbound_keys_are_ignored() {
    let c = ControlsConfig::default();
    assert_eq!(translate(&release(KeyCode::Char(' ')), &c), None);
    assert_eq!(translate(&release(KeyCode::Left), &c), None);
    assert_eq!(translate(&press(KeyCode::Char('x')), &c), None);
    assert_eq!(translate(&press(KeyCode::Char('c')), &c), None);
    assert_eq!(translate(&press(KeyCode::Up), &c), None);
}
