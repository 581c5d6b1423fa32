//! Terminal shape-sorting game (default binary).
//!
//! Drag shapes from the tray onto the zone that expects them. Uses crossterm
//! for keyboard and mouse input and the framebuffer renderer from `term`.
//!
//! Configuration comes from `SHAPI_*` environment variables (see
//! `core::config`). Logs go to stderr when `RUST_LOG` is set, so redirect
//! stderr while playing, e.g. `RUST_LOG=info tui-shapi 2>shapi.log`.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_shapi::core::{GameConfig, GameSession};
use tui_shapi::input::{handle_key_event, pointer_event, should_quit};
use tui_shapi::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_shapi::types::TICK_MS;

fn main() -> Result<()> {
    env_logger::init();

    // Configuration errors are fatal before the terminal is touched.
    let config = GameConfig::from_env().map_err(|e| anyhow!(e))?;
    info!("starting with {:?}", config);
    let session = GameSession::new(config).map_err(|e| anyhow!(e))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: GameSession) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut play_area = (0.0, 0.0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let area = view.play_area(viewport);
        if area != play_area {
            session.layout(area.0, area.1);
            play_area = area;
        }

        view.render_into(&session, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action).map_err(|e| anyhow!(e))?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(pointer) = pointer_event(mouse, |col, row| view.to_layout(col, row)) {
                        session.handle_pointer(pointer);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}
