//! Gapwing entry point
//!
//! Terminal setup, the frame loop, and input dispatch live here; everything
//! gameplay-related is in the library crate.

use std::io::{self, BufWriter, Write, stdout};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    terminal,
};

use gapwing::consts::{FRAME, MAX_DT};
use gapwing::input::{Action, action_for_key, action_for_mouse};
use gapwing::renderer::{self, Viewport};
use gapwing::sim::{GameState, step};
use gapwing::tuning::Tuning;

/// Nanosecond clock seed for unseeded runs.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Quit keys live here rather than in the input map: they concern the shell,
/// not the game.
fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn run<W: Write>(out: &mut W, mut state: GameState) -> io::Result<()> {
    let mut best: u32 = 0;
    let mut last_phase = state.phase;
    let mut last_revision = state.pillars.revision();
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) if is_quit(&key) => return Ok(()),
                Event::Key(key) => match action_for_key(key) {
                    Some(Action::Flap) => state.flap(),
                    Some(Action::Restart) => {
                        log::info!("Run restarted at score {}", state.score);
                        state.restart();
                    }
                    None => {}
                },
                Event::Mouse(mouse) => {
                    if action_for_mouse(mouse) == Some(Action::Flap) {
                        state.flap();
                    }
                }
                _ => {}
            }
        }

        // Stalls (resizes, suspended terminals) are clamped, not replayed
        let dt = frame_start
            .duration_since(last_frame)
            .as_secs_f32()
            .min(MAX_DT);
        last_frame = frame_start;
        step(&mut state, dt);

        best = best.max(state.score);
        if state.phase != last_phase {
            if state.running() {
                log::info!("Run started");
            } else if state.dead() {
                log::info!("Run ended at score {} (best {best})", state.score);
            }
            last_phase = state.phase;
        }
        let revision = state.pillars.revision();
        if revision != last_revision {
            log::debug!(
                "Pillar field changed: revision {revision}, {} live",
                state.pillars.len()
            );
            last_revision = revision;
        }

        let (width, height) = terminal::size()?;
        renderer::render(out, &state, best, Viewport::new(width, height))?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    env_logger::init();

    let tuning = Tuning::load_or_default();
    let seed = match std::env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(seed) => seed,
            Err(_) => {
                log::warn!("Ignoring non-numeric seed argument {arg:?}");
                clock_seed()
            }
        },
        None => clock_seed(),
    };
    log::info!("Gapwing starting with seed {seed}");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    let result = run(&mut out, GameState::new(seed, tuning));

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
