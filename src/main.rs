//! Terminal Tetris runner (default binary).
//!
//! Polls crossterm for key presses until the next frame is due, feeds the
//! session a millisecond timestamp, and redraws through the framebuffer
//! renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use cyber_tetris::cli::{parse_args, CliCommand, USAGE};
use cyber_tetris::core::{GameConfig, GameSnapshot, GameState};
use cyber_tetris::input::{handle_key_event, should_quit};
use cyber_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use cyber_tetris::types::{GameAction, FRAME_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args)? {
        CliCommand::Play(config) => config,
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let game = result?;
    eprintln!(
        "[cyber-tetris] {}x{} board, seed {}",
        config.cols,
        config.rows,
        config
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string())
    );
    eprintln!(
        "[cyber-tetris] final score {} (level {}, {} lines, {} resets)",
        game.score(),
        game.level(),
        game.lines(),
        game.episode_id()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<GameState> {
    let mut game = GameState::with_config(config);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let launched = Instant::now();
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut next_frame = launched;

    loop {
        // Input until the next frame is due.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(game);
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Reset) => {
                            game.reset();
                            game.start();
                        }
                        Some(action) => {
                            game.apply_action(action);
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            continue;
        }

        // Frame.
        next_frame = Instant::now() + frame;
        game.tick(launched.elapsed().as_millis() as u64);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
