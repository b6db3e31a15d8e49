//! Terminal Math Chompers runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no widget toolkit). `generate` runs headless instead.

mod cli;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use math_chompers::core::{
    generate_grid, random_rule, CellValue, FeedbackSink, NullSink, Session, SessionSnapshot,
};
use math_chompers::input::{handle_key_event, handle_mouse_event, is_repeatable, should_quit};
use math_chompers::term::{BellSink, FrameBuffer, GameView, TerminalRenderer, Viewport};
use math_chompers::types::{GameAction, Mode, TICK_MS};

use cli::{Args, Command, GenerateArgs};

/// One line of `generate` output.
#[derive(Serialize)]
struct GeneratedGrid<'a> {
    mode: Mode,
    rule: i64,
    cells: &'a [CellValue],
}

fn main() -> Result<()> {
    let args = Args::parse();
    cli::init_logging(args.debug);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed={seed}");
    let rng = ChaCha8Rng::seed_from_u64(seed);

    match args.command {
        Some(Command::Generate(ref opts)) => generate(opts, rng),
        None => play(&args, rng),
    }
}

fn generate(args: &GenerateArgs, mut rng: ChaCha8Rng) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for i in 0..args.count {
        let rule = args.rule.unwrap_or_else(|| random_rule(args.mode, &mut rng));
        let grid = generate_grid(args.mode, rule, &mut rng)
            .with_context(|| format!("cannot generate grid {} of {}", i + 1, args.count))?;
        debug!("grid {i}: mode={} rule={rule}", args.mode.as_str());

        let line = GeneratedGrid {
            mode: args.mode,
            rule,
            cells: &grid,
        };
        serde_json::to_writer(&mut out, &line)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn play(args: &Args, rng: ChaCha8Rng) -> Result<()> {
    let sink: Box<dyn FeedbackSink> = if args.no_bell {
        Box::new(NullSink)
    } else {
        Box::new(BellSink::stdout())
    };
    let mut session = Session::with_random_rule(args.mode, rng, sink)
        .context("cannot build the starting grid")?;

    let mut term = TerminalRenderer::new().with_mouse(!args.no_mouse);
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("final score {}", session.score());
    result
}

fn run<R: Rng, F: FeedbackSink>(
    term: &mut TerminalRenderer,
    session: &mut Session<R, F>,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = SessionSnapshot::default();
    let mut drawn: Option<(SessionSnapshot, Viewport)> = None;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render only when something visible changed.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        if drawn != Some((snap, viewport)) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            drawn = Some((snap, viewport));
        }

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        // Auto-repeat slides the muncher but never eats.
                        if key.kind == KeyEventKind::Press || is_repeatable(&action) {
                            apply(session, action)?;
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    let hit = |x, y| view.hit_test(viewport, x, y);
                    if let Some(action) = handle_mouse_event(mouse, hit) {
                        apply(session, action)?;
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    drawn = None;
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}

fn apply<R: Rng, F: FeedbackSink>(session: &mut Session<R, F>, action: GameAction) -> Result<()> {
    let outcome = session.apply_action(action)?;
    debug!("{:?} -> {:?} (score {})", action, outcome, session.score());
    Ok(())
}
