mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing_subscriber::EnvFilter;

use alien_invasion::assets::{default_resource_dir, SpriteArt};
use alien_invasion::clock::FrameClock;
use alien_invasion::compute::tick;
use alien_invasion::game::{Command, Flow, GameState};
use alien_invasion::settings::{Settings, DEFAULT_FPS};

use display::{Art, PLAYFIELD_TOP};

/// Rows taken by the HUD above and the hint line below the playfield.
const CHROME_ROWS: u16 = 2;

/// Without key-release events a direction key counts as held if its last
/// press/repeat arrived within this many frames.  The OS key-repeat rate is
/// ≥ 15 Hz, so 4 frames (≈133 ms at 30 FPS) is refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

#[derive(Parser, Debug)]
#[command(name = "alien_invasion")]
#[command(about = "Shoot down the alien fleet before it lands")]
struct Cli {
    /// Playfield width in cells (default: terminal width)
    #[arg(long)]
    width: Option<u16>,
    /// Playfield height in cells (default: terminal height minus HUD rows)
    #[arg(long)]
    height: Option<u16>,
    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,
    /// Resource directory holding `images/ship.txt` and `images/alien.txt`
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Write tracing output to this file (filtered by RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Tracks the direction keys.  With keyboard enhancement the terminal sends
/// releases; otherwise keys expire after `HOLD_WINDOW` frames of silence.
struct KeyState {
    enhanced: bool,
    last_seen: HashMap<KeyCode, u64>,
}

impl KeyState {
    fn new(enhanced: bool) -> Self {
        KeyState {
            enhanced,
            last_seen: HashMap::new(),
        }
    }

    fn press(&mut self, code: KeyCode, frame: u64) {
        self.last_seen.insert(code, frame);
    }

    fn release(&mut self, code: KeyCode) {
        self.last_seen.remove(&code);
    }

    fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&code)
            .map(|&last| self.enhanced || frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }
}

/// Translate one terminal event into game commands.
fn decode(event: Event, keys: &mut KeyState, frame: u64) -> Vec<Command> {
    match event {
        Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
            KeyEventKind::Press => {
                keys.press(code, frame);
                match code {
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => vec![Command::Quit],
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        vec![Command::Quit]
                    }
                    KeyCode::Char(' ') => vec![Command::Fire],
                    KeyCode::Char('p') | KeyCode::Char('P') => vec![Command::Start],
                    _ => Vec::new(),
                }
            }
            KeyEventKind::Repeat => {
                keys.press(code, frame);
                Vec::new()
            }
            KeyEventKind::Release => {
                keys.release(code);
                Vec::new()
            }
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => vec![Command::Click {
            x: column as i32,
            y: row as i32 - PLAYFIELD_TOP as i32,
        }],
        _ => Vec::new(),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    art: &Art,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> std::io::Result<()> {
    let mut clock = FrameClock::new(state.settings.fps);
    let mut keys = KeyState::new(keyboard_enhanced);
    let mut frame: u64 = 0;
    let mut mouse_captured = false;

    loop {
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            for command in decode(event, &mut keys, frame) {
                if state.handle(command) == Flow::Quit {
                    return Ok(());
                }
            }
        }

        // ── Direction intents from held keys ──────────────────────────────────
        state.handle(Command::MoveLeft(keys.is_held(KeyCode::Left, frame)));
        state.handle(Command::MoveRight(keys.is_held(KeyCode::Right, frame)));

        tick(state);

        // The pointer is only live while the PLAY button is up.
        if state.mouse_visible != mouse_captured {
            if state.mouse_visible {
                out.execute(EnableMouseCapture)?;
            } else {
                out.execute(DisableMouseCapture)?;
            }
            mouse_captured = state.mouse_visible;
        }
        display::render(out, state, art)?;

        clock.tick();
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let assets = cli.assets.clone().unwrap_or_else(default_resource_dir);
    let art = Art {
        ship: SpriteArt::load(&assets, "ship").context("loading ship sprite")?,
        alien: SpriteArt::load(&assets, "alien").context("loading alien sprite")?,
    };

    let (term_width, term_height) = terminal::size().context("querying terminal size")?;
    let width = cli.width.unwrap_or(term_width);
    let height = cli
        .height
        .unwrap_or_else(|| term_height.saturating_sub(CHROME_ROWS));
    let mut settings = Settings::new(width as i32, height as i32);
    settings.fps = cli.fps;
    tracing::info!(width, height, fps = settings.fps, assets = %assets.display(), "starting");

    let mut state = GameState::new(settings, art.ship.size(), art.alien.size());

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to HOLD_WINDOW.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut state, &art, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    tracing::info!(high_score = state.stats.high_score, "quit");
    result.context("terminal I/O failed")
}
