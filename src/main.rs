//! Terminal runner (default binary).
//!
//! Fixed ~16ms frames: keys pressed during a frame are queued as intents and
//! handed to the session together with the elapsed time, then the snapshot is
//! rendered through the diffing framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_blockfall::cli::{parse_args, CliCommand, USAGE};
use tui_blockfall::core::{GameConfig, GameSnapshot, Session};
use tui_blockfall::event_log::EventLog;
use tui_blockfall::input::{collect_intents, is_restart, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args, GameConfig::from_env())? {
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Play(config) => config,
    };

    let mut session = Session::new(config);
    if let Some(log) = EventLog::from_env()? {
        session.add_observer(Box::new(log));
    }

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|_| run(&mut term, &mut session));

    // Always try to restore terminal state.
    let _ = term.exit();

    let config = session.config();
    eprintln!(
        "[Session] board {}x{}, drop {}ms, seed {}",
        config.width, config.height, config.drop_interval_ms, config.seed
    );
    eprintln!(
        "[Session] games {}, final score {}, lines {}{}",
        session.games(),
        session.state().score(),
        session.state().lines(),
        if session.is_game_over() { " (game over)" } else { "" }
    );
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut intents: Vec<GameAction> = Vec::with_capacity(16);

    let frame_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) {
                        intents.clear();
                        session.start();
                    } else {
                        collect_intents([key], &mut intents);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Frame.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame_duration {
            last_frame = Instant::now();
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;

            session.frame(elapsed_ms, &intents);
            intents.clear();

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            session.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
