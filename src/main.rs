//! Terminal runner (default binary).
//!
//! Tuning comes from `MATCHQUBE_*` environment variables (see
//! [`EngineConfig::from_env`]). The highscore is kept in the JSON file named by
//! `MATCHQUBE_HIGHSCORE_PATH`. Setting `MATCHQUBE_LOG` to a path writes
//! `RUST_LOG`-filtered traces there; the terminal itself is never logged to.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use match_qube::core::{EngineConfig, JsonFileStore, Session, SessionSnapshot};
use match_qube::engine::{Game, TracingAudio};
use match_qube::input::{handle_key_event, should_quit, to_ndc, PointerEvent, PointerTracker, Rect};
use match_qube::term::{CubeView, FrameBuffer, Hud, TerminalRenderer, Viewport};
use match_qube::types::{HostAction, TICK_MS};

const DEFAULT_HIGHSCORE_PATH: &str = "matchqube.highscore.json";

fn main() -> Result<()> {
    init_logging()?;

    let config = EngineConfig::from_env();
    let path = std::env::var("MATCHQUBE_HIGHSCORE_PATH")
        .unwrap_or_else(|_| DEFAULT_HIGHSCORE_PATH.to_string());
    info!(?config, highscore_path = %path, "starting");
    let session = Session::new(config, Box::new(JsonFileStore::new(path)));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Game::new(session, TracingAudio));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("MATCHQUBE_LOG") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut game: Game<TracingAudio>) -> Result<()> {
    let view = CubeView::default();
    let mut pointer = PointerTracker::new();
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let epoch = Instant::now();
    let tick = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let layout = view.layout(viewport);
        let cube = Rect::new(layout.x, layout.y, layout.width, layout.height);

        game.snapshot_into(&mut snap);
        let hud = Hud {
            facing: game.facing(),
            status: game.status().text(),
        };
        view.render_into(&snap, &hud, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(HostAction::Start) => {
                            game.start();
                        }
                        Some(HostAction::CycleFacing) => game.cycle_facing(),
                        None => {}
                    }
                }
                Event::Mouse(mouse) => match pointer.handle_mouse(mouse) {
                    Some(PointerEvent::Pressed) => game.pointer_pressed(),
                    Some(PointerEvent::Cancelled) => game.pointer_cancelled(),
                    Some(PointerEvent::Clicked { col, row }) => {
                        game.click(to_ndc(col, row, cube));
                    }
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            let delta_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            let now_ms = u64::try_from(epoch.elapsed().as_millis()).unwrap_or(u64::MAX);
            game.frame(delta_ms, now_ms);
        }
    }
}
