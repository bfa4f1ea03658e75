//! Terminal memory-game runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. The game
//! core runs on a fixed logical tick fed from the frame loop.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_recall::core::GameSession;
use tui_recall::input::{handle_key_event, should_quit};
use tui_recall::store::FileScoreStore;
use tui_recall::term::{GridView, TerminalBell, TerminalRenderer, TileSurface, Viewport};
use tui_recall::types::TICK_MS;

fn main() -> Result<()> {
    env_logger::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = FileScoreStore::at_default_path()
        .unwrap_or_else(|_| FileScoreStore::new(std::env::temp_dir().join("tui-recall-best")));

    let mut session = GameSession::new(TileSurface::new(), TerminalBell::default(), store, seed());

    let view = GridView::default();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(session.presenter(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        session.apply(command);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
            session.presenter_mut().tick(TICK_MS);
        }
    }
}

fn seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
