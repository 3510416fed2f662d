//! Terminal gridfall runner.
//!
//! The engine is a pure fold of actions over immutable snapshots; everything
//! impure lives here: the event loop, the simulation and gravity clocks,
//! pause/restart handling, and terminal I/O via the framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::engine::State;
use gridfall::input::{intent_for, should_quit, InputHandler, Intent};
use gridfall::term::{GameView, TermRenderer, Viewport};
use gridfall::types::{drop_period_ms, Action, Axis, CELL_HEIGHT, TICK_RATE_MS};

fn main() -> Result<()> {
    let seed = parse_seed()?;

    let mut term = TermRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore the terminal.
    let _ = term.exit();
    result
}

/// Parse `--seed N` from argv; any other argument is an error.
fn parse_seed() -> Result<u32> {
    let mut args = std::env::args().skip(1);
    let mut seed = 1;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().unwrap_or_default();
                seed = match value.parse() {
                    Ok(n) => n,
                    Err(_) => bail!("--seed expects an unsigned integer, got {value:?}"),
                };
            }
            other => bail!("unknown argument {other:?} (usage: gridfall [--seed N])"),
        }
    }
    Ok(seed)
}

fn run(term: &mut TermRenderer, seed: u32) -> Result<()> {
    let start = Instant::now();
    // The initial tick promotes the first preview into play.
    let mut state = State::new(seed).apply(Action::Tick { time_ms: 0 });

    let view = GameView::default();
    let mut handler = InputHandler::new();

    let sim_period = Duration::from_millis(TICK_RATE_MS);
    let mut next_sim = Instant::now() + sim_period;
    let mut next_gravity = Instant::now() + Duration::from_millis(drop_period_ms(state.level));
    let mut paused = false;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut fb = view.render(&state, paused, Viewport::new(w, h));
        term.draw_swap(&mut fb)?;
        // The clear flash has been shown for this frame.
        state = state.drain_cleared();

        let now = Instant::now();
        let deadline = if paused || state.game_end {
            now + sim_period
        } else {
            next_sim.min(next_gravity)
        };
        let timeout = deadline.saturating_duration_since(now);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        let Some(intent) = intent_for(key) else {
                            continue;
                        };
                        match intent {
                            Intent::Pause => {
                                paused = !paused;
                                handler.reset();
                                if !paused {
                                    next_sim = Instant::now() + sim_period;
                                    next_gravity = Instant::now()
                                        + Duration::from_millis(drop_period_ms(state.level));
                                }
                            }
                            Intent::Restart => {
                                state = state
                                    .restart()
                                    .apply(Action::Tick { time_ms: now_ms(start) });
                                handler.reset();
                                paused = false;
                                next_sim = Instant::now() + sim_period;
                                next_gravity = Instant::now()
                                    + Duration::from_millis(drop_period_ms(state.level));
                            }
                            gameplay => {
                                if paused || state.game_end {
                                    continue;
                                }
                                if let Some(action) =
                                    handler.handle_press(gameplay).and_then(Intent::engine_action)
                                {
                                    state = state.apply(action);
                                }
                            }
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(intent) = intent_for(key) {
                            handler.handle_release(intent);
                        }
                    }
                    // Terminal auto-repeat is ignored; DAS/ARR repeats instead.
                    KeyEventKind::Repeat => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if paused || state.game_end {
            continue;
        }

        if Instant::now() >= next_sim {
            next_sim += sim_period;

            for repeat in handler.update(TICK_RATE_MS as u32) {
                if let Some(action) = repeat.engine_action() {
                    state = state.apply(action);
                }
            }

            state = state.apply(Action::Tick { time_ms: now_ms(start) });
            if state.change_in_level {
                next_gravity = Instant::now() + Duration::from_millis(drop_period_ms(state.level));
            }
        }

        if Instant::now() >= next_gravity {
            next_gravity = Instant::now() + Duration::from_millis(drop_period_ms(state.level));
            // Settle first so a supported piece locks before gravity pulls.
            state = state.apply(Action::Collision);
            state = state.apply(Action::Move {
                axis: Axis::Y,
                offset: CELL_HEIGHT,
            });
        }
    }
}

fn now_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
