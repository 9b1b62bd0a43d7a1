//! Terminal runner.
//!
//! Owns the gravity timer (period `1000ms / level`) and feeds key presses to
//! the engine. The engine itself never keeps time.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::scoring::gravity_interval_ms;
use blockfall::core::Game;
use blockfall::input::{map_key, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(clock_seed());
    let view = GameView::default();

    let mut last_step = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        let step_period = Duration::from_millis(gravity_interval_ms(game.level()) as u64);

        // Input with timeout until the next gravity step.
        let timeout = step_period
            .checked_sub(last_step.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        game.apply(action);
                    }
                }
                _ => {}
            }
        }

        if last_step.elapsed() >= step_period {
            last_step = Instant::now();
            game.step();
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
