//! Terminal memory-match runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! All timing goes through the engine's `GameDriver`.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_memory::core::SessionSnapshot;
use tui_memory::engine::{EngineConfig, GameDriver};
use tui_memory::input::{handle_key_event, should_quit, GridCursor, InputAction};
use tui_memory::logging;
use tui_memory::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Upper bound on how long we block for input when no tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    logging::init_from_env()?;

    let config = EngineConfig::from_env();
    tracing::info!(
        pair_count = config.pair_count,
        flip_delay_ms = config.flip_delay_ms,
        seeded = config.seed.is_some(),
        "starting game"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &EngineConfig) -> Result<()> {
    let mut driver = GameDriver::from_config(config);
    let view = GameView::default();

    let mut snap = SessionSnapshot::default();
    let mut deal = driver.session().deck().clone();
    let mut cursor = GridCursor::for_cards(deal.len());
    let mut fb = FrameBuffer::new(80, 24);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        driver.snapshot_into(&mut snap);
        view.render_into(&snap, Some(cursor.position()), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = driver.time_until_next_tick().unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }

                    match handle_key_event(key) {
                        Some(InputAction::MoveCursor(dir)) => cursor.step(dir),
                        Some(action) => {
                            if let Some(game_action) = action.into_game_action(cursor.position()) {
                                driver.apply(game_action);
                            }
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        driver.poll();

        // A restart deals a new deck.
        if !driver.session().deck().same_deal(&deal) {
            deal = driver.session().deck().clone();
            cursor.reset(deal.len());
        }
    }

    driver.shutdown();
    tracing::info!(
        status = driver.session().status().as_str(),
        moves = driver.session().moves(),
        "quit"
    );
    Ok(())
}
