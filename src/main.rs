//! Terminal Bubble Match runner.
//!
//! Crossterm input (keys plus mouse drags) drives a pure `core::GameState`;
//! a framebuffer-based renderer flushes diffed frames to the terminal.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event;

use tui_bubble_match::audio::{AudioSink, TerminalBell};
use tui_bubble_match::core::{GameSnapshot, GameState};
use tui_bubble_match::input::{map_event, UiEvent};
use tui_bubble_match::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_bubble_match::types::{GameAction, MAX_PLAYERS, MIN_PLAYERS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    players: Option<u8>,
    seed: Option<u32>,
    muted: bool,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut opts = Options {
        players: None,
        seed: None,
        muted: false,
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--players" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --players"))?;
                let n = v
                    .parse::<u8>()
                    .map_err(|_| anyhow!("invalid --players value: {}", v))?;
                if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
                    return Err(anyhow!(
                        "--players must be between {} and {}",
                        MIN_PLAYERS,
                        MAX_PLAYERS
                    ));
                }
                opts.players = Some(n);
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                let seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                opts.seed = Some(seed);
            }
            "--muted" => {
                opts.muted = true;
            }
            other => {
                return Err(anyhow!(
                    "unknown argument: {} (usage: [--players 2..4] [--seed N] [--muted])",
                    other
                ));
            }
        }
        i += 1;
    }

    Ok(opts)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &opts);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, opts: &Options) -> Result<()> {
    let seed = opts.seed.unwrap_or_else(clock_seed);
    let mut game_state = GameState::new(seed);
    if let Some(n) = opts.players {
        game_state.apply_action(GameAction::SelectPlayers(n));
    }
    if opts.muted {
        game_state.apply_action(GameAction::ToggleMute);
    }

    let view = GameView::new();
    let mut sink = TerminalBell;
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let ev = event::read()?;
            match map_event(&ev, game_state.phase()) {
                Some(UiEvent::Quit) => return Ok(()),
                Some(UiEvent::Action(action)) => {
                    game_state.apply_action(action);
                }
                Some(UiEvent::PointerDown { col, row }) => {
                    let (x, y) = viewport.cell_to_pct(col, row);
                    game_state.pointer_down(x, y);
                }
                Some(UiEvent::PointerMove { col, row }) => {
                    let (x, y) = viewport.cell_to_pct(col, row);
                    game_state.pointer_move(x, y);
                }
                Some(UiEvent::PointerUp { col, row }) => {
                    let (x, y) = viewport.cell_to_pct(col, row);
                    game_state.pointer_up(x, y);
                }
                Some(UiEvent::Resize { .. }) => {
                    term.invalidate();
                }
                None => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game_state.tick(TICK_MS);
        }

        let muted = game_state.muted();
        for sound in game_state.take_sounds() {
            if !muted {
                sink.play(sound);
            }
        }
    }
}
