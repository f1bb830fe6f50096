//! Terminal Blockfall runner.
//!
//! The host loop owns the clock and the RNG seed: it polls crossterm for
//! keys, translates them to engine commands, calls `advance` once per fixed
//! tick, and renders a snapshot afterwards. The engine is never mutated from
//! anywhere else.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Engine, EngineConfig, GameSnapshot, SimpleRng};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{Frame, GameView, TerminalRenderer};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut engine = Engine::new(EngineConfig::default(), Box::new(SimpleRng::new(seed)))?;

    let view = GameView;
    let mut snapshot = GameSnapshot::empty(engine.board().width(), engine.board().height());
    let mut frame = Frame::new(1, 1);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        engine.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, &mut frame);
        term.draw(&frame)?;

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
                        engine.apply(command);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.advance(TICK_MS);
        }
    }
}
