//! Frame layout.
//!
//! The core only knows how to describe a frame in field pixels; a `Surface`
//! decides what those primitives look like on an actual screen.

use std::io;

use crossterm::style::Color;

use crate::config::GameConfig;
use crate::entities::{GameState, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Ship,
    Alien,
}

/// A 2D drawing target addressed in field pixels.
pub trait Surface {
    fn clear(&mut self) -> io::Result<()>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()>;
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) -> io::Result<()>;
    /// `(x, y)` is the text baseline start; `size` is the nominal font size.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: u16, color: Color)
        -> io::Result<()>;
}

const C_BULLET: Color = Color::White;
const C_SCORE: Color = Color::White;
const C_GAME_OVER: Color = Color::Red;

const SCORE_POS: (i32, i32) = (10, 20);
const SCORE_SIZE: u16 = 20;
const GAME_OVER_SIZE: u16 = 50;
const PROMPT_SIZE: u16 = 30;

/// Draw one in-play frame: ship, wave, bullet, then the score line on top.
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState) -> io::Result<()> {
    surface.clear()?;
    surface.draw_sprite(Sprite::Ship, state.player.rect())?;

    for alien in &state.aliens {
        surface.draw_sprite(Sprite::Alien, alien.rect())?;
    }

    if state.bullet.active {
        surface.fill_rect(state.bullet.rect(), C_BULLET)?;
    }

    surface.draw_text(
        &format!("Score: {}", state.score),
        SCORE_POS.0,
        SCORE_POS.1,
        SCORE_SIZE,
        C_SCORE,
    )
}

/// The screen shown once the round is over.
pub fn draw_game_over<S: Surface + ?Sized>(surface: &mut S, config: &GameConfig) -> io::Result<()> {
    let (w, h) = (config.field.width, config.field.height);
    surface.clear()?;
    surface.draw_text("Game Over", w / 4, h / 2, GAME_OVER_SIZE, C_GAME_OVER)?;
    // height / 1.5
    surface.draw_text("Press R to Restart", w / 4, h * 2 / 3, PROMPT_SIZE, C_GAME_OVER)
}
