use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use space_invaders::assets::AssetBundle;
use space_invaders::compute::{Flow, Game};
use space_invaders::config::Args;
use space_invaders::display::{self, Viewport};
use space_invaders::input::InputTracker;

// ── Logging ───────────────────────────────────────────────────────────────────

/// Route tracing output to a file; stdout belongs to the game screen.
fn init_logging(args: &Args) -> Result<()> {
    let file = File::create(&args.log_file)
        .with_context(|| format!("creating log file {}", args.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the game asks to stop.  Each frame: drain pending key events,
/// update once, render once, then sleep off the rest of the frame.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    assets: &AssetBundle,
    args: &Args,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut input = InputTracker::new();
    let frame = args.frame();

    loop {
        let frame_start = Instant::now();
        input.next_frame();

        while let Ok(ev) = rx.try_recv() {
            input.handle(&ev);
        }

        let intents = input.intents();
        if game.update(&intents, frame_start, &mut rng) == Flow::Stop {
            return Ok(());
        }

        let view = Viewport::from_terminal()?;
        display::render(out, &game.snapshot(), assets, &game.config, view)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    // Missing or broken assets are fatal before the terminal is touched.
    let assets = AssetBundle::embedded().context("decoding embedded assets")?;
    let mut game = Game::on_title_screen(args.to_config(), assets.metrics());
    info!(seed = ?args.seed, fps = args.fps, "starting");

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads live on their own thread so the loop never stalls on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut game, &assets, &args, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match &result {
        Ok(()) => info!(score = game.score, "stopped"),
        Err(err) => error!(error = %err, "fatal error"),
    }
    result
}
