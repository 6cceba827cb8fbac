//! Terminal runner (default binary).
//!
//! Configuration comes from `POWERUP_TETRIS_*` environment variables and is
//! then overridden by command line flags.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use powerup_tetris::core::BombBlast;
use powerup_tetris::engine::{Game, GameConfig, Randomizer};
use powerup_tetris::input::{handle_key_event, should_quit};
use powerup_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// How long a bomb explosion stays on screen.
const BOMB_FLASH_MS: u32 = 250;

#[derive(Parser, Debug)]
#[command(
    name = "powerup-tetris",
    about = "Falling-block puzzle with hold, hard drop and power-ups",
    after_help = "keys: arrows/wasd move and rotate, space hard drop, c hold,\n      \
                  1/2/3 use a power-up, !/@/# buy one, n new game, p/esc pause, q quit"
)]
struct Args {
    /// RNG seed for the brick sequence.
    #[arg(long)]
    seed: Option<u32>,

    /// Board height, hidden spawn rows included.
    #[arg(long)]
    rows: Option<usize>,

    /// Board width.
    #[arg(long)]
    cols: Option<usize>,

    /// Deal bricks from shuffled 7-bags instead of uniform draws.
    #[arg(long)]
    bag: bool,
}

impl Args {
    /// Apply the flags that were given on top of `config`.
    fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if self.bag {
            config.randomizer = Randomizer::Bag;
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.apply(GameConfig::from_env());

    let mut game = Game::new(config).context("failed to create board")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    eprintln!("[powerup-tetris] final score {}", game.score());
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick_duration = Duration::from_millis(game.config().tick_ms as u64);
    let mut last_tick = Instant::now();
    let mut flash: Option<(BombBlast, u32)> = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let blast = flash.as_ref().map(|(blast, _)| blast);
        view.render_into(game, blast, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if let Some(blast) = game.take_bomb_blast() {
            flash = Some((blast, BOMB_FLASH_MS));
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            game.tick(elapsed_ms);

            if let Some((_, remaining)) = flash.as_mut() {
                *remaining = remaining.saturating_sub(elapsed_ms);
                if *remaining == 0 {
                    flash = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("powerup-tetris").chain(args.iter().copied()))
    }

    #[test]
    fn test_flags_override_config() {
        let args = parse(&["--seed", "9", "--bag", "--rows", "30", "--cols", "12"]).unwrap();
        let config = args.apply(GameConfig::default());
        assert_eq!(config.seed, 9);
        assert_eq!(config.randomizer, Randomizer::Bag);
        assert_eq!((config.rows, config.cols), (30, 12));
    }

    #[test]
    fn test_missing_flags_keep_config() {
        let base = GameConfig {
            seed: 77,
            randomizer: Randomizer::Bag,
            ..GameConfig::default()
        };
        let config = parse(&[]).unwrap().apply(base);
        assert_eq!(config, base);
    }

    #[test]
    fn test_bad_arguments_are_errors() {
        assert!(parse(&["--seed"]).is_err());
        assert!(parse(&["--rows", "many"]).is_err());
        assert!(parse(&["--fast"]).is_err());
    }

    #[test]
    fn test_help() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
