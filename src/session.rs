//! The game session: owns all mutable world state and drives the game loop.

use std::io;

use tracing::{debug, info};

use crate::compute;
use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus};
use crate::input::{Command, Control};
use crate::render::{self, Surface};

/// What `GameSession::run` needs from the outside world: somewhere to draw,
/// a queue of controls, and a frame clock.
pub trait Frontend {
    type Surface: Surface;

    fn surface(&mut self) -> &mut Self::Surface;

    /// Drain every control queued since the last call without blocking.
    fn poll_controls(&mut self) -> io::Result<Vec<Control>>;

    /// Block until the next control arrives. A closed input source is `Quit`.
    fn wait_control(&mut self) -> io::Result<Control>;

    /// Make the frame drawn so far visible.
    fn present(&mut self) -> io::Result<()>;

    /// Start timing a new round's first frame.
    fn start_round(&mut self);

    /// Sleep out the remainder of the current frame.
    fn wait_next_frame(&mut self);
}

pub struct GameSession {
    config: GameConfig,
    state: GameState,
}

impl GameSession {
    /// Build the session and its first wave.
    pub fn new(config: GameConfig) -> Self {
        let state = compute::spawn_wave(&compute::init_state(&config), &config);
        info!(
            columns = state.columns,
            rows = state.rows,
            aliens = state.aliens.len(),
            "session started"
        );
        Self { config, state }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn move_left(&mut self, step: i32) {
        self.state = compute::move_player_left(&self.state, &self.config, step);
    }

    pub fn move_right(&mut self, step: i32) {
        self.state = compute::move_player_right(&self.state, &self.config, step);
    }

    pub fn fire(&mut self) {
        self.state = compute::fire(&self.state);
    }

    /// Throw away the whole world and start over with a fresh first wave.
    /// Safe in either status.
    pub fn restart(&mut self) {
        self.state = compute::spawn_wave(&compute::init_state(&self.config), &self.config);
        info!(aliens = self.state.aliens.len(), "session restarted");
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft(step) => self.move_left(step),
            Command::MoveRight(step) => self.move_right(step),
            Command::Fire => self.fire(),
            Command::Restart => self.restart(),
        }
    }

    /// One simulation frame.
    pub fn step(&mut self) {
        let next = compute::tick(&self.state, &self.config);

        if next.score > self.state.score {
            debug!(score = next.score, frame = next.frame, "alien destroyed");
        }
        if next.columns > self.state.columns {
            info!(columns = next.columns, rows = next.rows, "wave cleared");
        }
        if next.status == GameStatus::GameOver && self.state.status == GameStatus::Playing {
            info!(score = next.score, frame = next.frame, "game over");
        }

        self.state = next;
    }

    /// Run rounds until the frontend asks to quit.
    ///
    /// Each round renders once, then loops apply-step-render while playing.
    /// On game over the loop exits, the game-over screen is shown and only
    /// restart or quit is honoured.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> io::Result<()> {
        loop {
            render::draw_frame(frontend.surface(), &self.state)?;
            frontend.present()?;
            frontend.start_round();

            while self.state.status == GameStatus::Playing {
                for control in frontend.poll_controls()? {
                    match control {
                        Control::Quit => return Ok(()),
                        Control::Command(Command::Restart) => {
                            debug!("restart ignored while playing");
                        }
                        Control::Command(command) => self.apply(command),
                    }
                }

                self.step();
                render::draw_frame(frontend.surface(), &self.state)?;
                frontend.present()?;
                frontend.wait_next_frame();
            }

            render::draw_game_over(frontend.surface(), &self.config)?;
            frontend.present()?;

            // Presses queued during play must not count as the restart.
            for control in frontend.poll_controls()? {
                if control == Control::Quit {
                    return Ok(());
                }
            }

            // Restart is armed by the transition above and consumed by its first press.
            loop {
                match frontend.wait_control()? {
                    Control::Quit => return Ok(()),
                    Control::Command(Command::Restart) => break,
                    Control::Command(_) => {}
                }
            }
            self.restart();
        }
    }
}
