//! Terminal Snake runner.
//!
//! Uses crossterm for input and a framebuffer-based renderer. The loop
//! renders, polls input until the next tick deadline, then advances the
//! engine and reacts to its events (score persistence, pace re-arming).

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::engine::TickScheduler;
use tui_snake::input::{map_key, should_quit, InputCommand};
use tui_snake::storage::ScoreStore;
use tui_snake::term::{GameView, TerminalRenderer, Viewport, LEADERBOARD_LINES};
use tui_snake::types::{GameAction, GameEvent};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(wall_clock_seed());
    let mut scores = ScoreStore::open(ScoreStore::default_path());
    let mut view = GameView::default();
    let mut scheduler = TickScheduler::new(game.tick_interval_ms());
    let mut snap = GameSnapshot::default();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snap, &scores.top(LEADERBOARD_LINES), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next tick deadline.
        if event::poll(scheduler.timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match map_key(key.code) {
                        Some(InputCommand::Game(action)) => {
                            game.apply_action(action);
                            if action == GameAction::Restart {
                                scheduler.arm(game.tick_interval_ms());
                            }
                        }
                        Some(InputCommand::CycleSkin) => view.cycle_skin(),
                        Some(InputCommand::ClearScores) => scores.clear()?,
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if scheduler.due() {
            scheduler.advance();
            let outcome = game.tick();
            for event in &outcome.events {
                match *event {
                    GameEvent::GameOver { score } => scores.append(score)?,
                    GameEvent::PaceChanged(ms) => scheduler.arm(ms),
                    GameEvent::FoodEaten | GameEvent::PowerUpCollected(_) => {}
                }
            }
        }
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}
