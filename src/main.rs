mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Stdout};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing_subscriber::EnvFilter;

use alien_wave::config::{ControlsConfig, GameConfig};
use alien_wave::input::{self, Control};
use alien_wave::session::{Frontend, GameSession};

use display::TerminalSurface;

#[derive(Parser, Debug)]
#[command(name = "alien_wave", about = "Shoot down the descending alien wave")]
struct Cli {
    /// RON file overriding any subset of the game constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write tracing output here (the terminal itself belongs to the game).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Target frames per second; overrides `frame_millis`.
    #[arg(long)]
    fps: Option<u64>,

    /// Print the effective configuration as RON and exit.
    #[arg(long)]
    print_config: bool,
}

// ── Terminal frontend ─────────────────────────────────────────────────────────

/// Input comes from a dedicated reader thread through `rx`; frames go to
/// the alternate screen through `surface`.
struct TerminalFrontend {
    surface: TerminalSurface<BufWriter<Stdout>>,
    rx: mpsc::Receiver<Event>,
    controls: ControlsConfig,
    frame: Duration,
    frame_start: Instant,
}

impl TerminalFrontend {
    fn control_for(&self, ev: Event) -> Option<Control> {
        match ev {
            Event::Key(key) => input::translate(&key, &self.controls),
            _ => None,
        }
    }
}

impl Frontend for TerminalFrontend {
    type Surface = TerminalSurface<BufWriter<Stdout>>;

    fn surface(&mut self) -> &mut Self::Surface {
        &mut self.surface
    }

    fn poll_controls(&mut self) -> std::io::Result<Vec<Control>> {
        let mut controls = Vec::new();
        while let Ok(ev) = self.rx.try_recv() {
            controls.extend(self.control_for(ev));
        }
        Ok(controls)
    }

    fn wait_control(&mut self) -> std::io::Result<Control> {
        loop {
            match self.rx.recv() {
                Ok(ev) => {
                    if let Some(control) = self.control_for(ev) {
                        return Ok(control);
                    }
                }
                // reader thread gone → nothing more can arrive
                Err(_) => return Ok(Control::Quit),
            }
        }
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.surface.flush_frame()
    }

    fn start_round(&mut self) {
        // Time spent on the game-over screen is not part of any frame.
        self.frame_start = Instant::now();
    }

    fn wait_next_frame(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame {
            thread::sleep(self.frame - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(fps) = cli.fps {
        anyhow::ensure!(fps > 0, "--fps must be positive");
        config.frame_millis = (1000 / fps).max(1);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.print_config {
        println!("{}", config.to_ron_string()?);
        return Ok(());
    }
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    terminal::enable_raw_mode().context("enabling raw mode")?;

    let result = run(BufWriter::new(stdout()), config);

    // Always restore the terminal; popping flags that were never pushed is a no-op
    let mut out = stdout();
    let _ = out.execute(PopKeyboardEnhancementFlags);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run(mut out: BufWriter<Stdout>, config: GameConfig) -> anyhow::Result<()> {
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-repeat events so fire can ignore held Space.
    // Terminals without the kitty protocol fall back gracefully.
    let _ = out.execute(PushKeyboardEnhancementFlags(
        KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
    ));

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let surface = TerminalSurface::new(out, config.field.width, config.field.height)
        .context("querying terminal size")?;
    let mut frontend = TerminalFrontend {
        surface,
        rx,
        controls: config.controls.clone(),
        frame: Duration::from_millis(config.frame_millis),
        frame_start: Instant::now(),
    };

    let mut session = GameSession::new(config);
    session.run(&mut frontend).context("terminal I/O failed")?;
    tracing::info!(score = session.state().score, "quit");
    Ok(())
}
