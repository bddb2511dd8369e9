//! Terminal falling-block runner (default binary).
//!
//! A tokio runtime drives gravity in the background while this thread polls
//! crossterm for keys and redraws the framebuffer-based view whenever the
//! session changes.
//!
//! Configuration comes from the environment (see [`EngineConfig::from_env`]).
//! Logs go to the file named by `TETRIS_LOG_PATH`, since stdout belongs to the
//! game screen.

use std::fs::File;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tokio::runtime::Runtime;
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use termtris::engine::{Engine, EngineConfig, EngineSnapshot};
use termtris::input::{handle_key_event, should_quit};
use termtris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use termtris::types::FRAME_MS;

fn main() -> Result<()> {
    init_tracing()?;

    let config = EngineConfig::from_env();
    let engine = Engine::new(&config).context("invalid field size")?;

    let runtime = Runtime::new().context("failed to start tokio runtime")?;
    let ticker = {
        let _enter = runtime.enter();
        engine.spawn_ticker()
    };

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&engine, &mut term));

    // Always try to restore terminal state.
    let _ = term.exit();
    ticker.abort();
    info!(games = engine.score_history().len(), "exiting");
    result
}

/// Install a file logger when `TETRIS_LOG_PATH` is set.
///
/// `TETRIS_LOG_LEVEL` picks the level (`error` .. `trace`, default `info`).
fn init_tracing() -> Result<()> {
    let Ok(path) = std::env::var("TETRIS_LOG_PATH") else {
        return Ok(());
    };
    let level = std::env::var("TETRIS_LOG_LEVEL")
        .ok()
        .and_then(|s| Level::from_str(s.trim()).ok())
        .unwrap_or(Level::INFO);
    let file = File::create(&path).with_context(|| format!("cannot open log file {path}"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
    info!(%level, "logging initialized");
    Ok(())
}

fn run(engine: &Engine, term: &mut TerminalRenderer) -> Result<()> {
    let view = GameView::default();
    let mut snap = EngineSnapshot::default();
    let mut fb = FrameBuffer::default();
    let frame = Duration::from_millis(FRAME_MS);

    // Redraw only when something visible changed.
    let mut drawn: Option<(u64, Option<u64>, (u16, u16))> = None;

    loop {
        engine.snapshot_into(&mut snap);
        let size = crossterm::terminal::size().unwrap_or((80, 24));
        let countdown = snap.restart_in.map(|d| d.as_millis().div_ceil(1000) as u64);
        let key = (snap.game.revision, countdown, size);

        if drawn != Some(key) {
            if drawn.map(|(_, _, s)| s) != Some(size) {
                term.invalidate();
            }
            view.render_into(&snap, Viewport::new(size.0, size.1), &mut fb);
            term.draw_swap(&mut fb)?;
            drawn = Some(key);
        }

        if !event::poll(frame)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    engine.apply(action);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
