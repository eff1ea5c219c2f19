//! Terminal rendering
//!
//! Translates simulation state into crossterm commands. Each function takes
//! a mutable writer and never touches game logic, so the whole module can
//! render into a plain byte buffer in tests.

use std::io::{self, Write};

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};

use crate::sim::GameState;
use crate::tuning::Tuning;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BIRD: Color = Color::Yellow;
const C_BIRD_DEAD: Color = Color::Red;
const C_PILLAR: Color = Color::Green;
const C_BOUND: Color = Color::DarkBlue;
const C_SCORE: Color = Color::Yellow;
const C_SEED: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;
const C_READY: Color = Color::White;

// ── World-to-screen mapping ───────────────────────────────────────────────────

/// Left edge of the rendered slice of the world.
pub const VIEW_LEFT: f32 = -6.0;
/// Right edge of the rendered slice; pillars spawn exactly on it.
pub const VIEW_RIGHT: f32 = 18.0;

/// Character-cell viewport plus the world-to-screen transform.
///
/// Row 0 is the HUD, row 1 and `height - 2` are the playfield bounds, the
/// last row is the controls hint. The playfield proper spans the rows in
/// between with +y pointing up.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// First playfield row.
    pub fn play_top(&self) -> i32 {
        2
    }

    /// Last playfield row.
    pub fn play_bottom(&self) -> i32 {
        self.height as i32 - 3
    }

    /// Screen column for a world x. May fall outside the screen.
    pub fn col(&self, x: f32) -> i32 {
        let t = (x - VIEW_LEFT) / (VIEW_RIGHT - VIEW_LEFT);
        (t * (self.width.saturating_sub(1)) as f32).round() as i32
    }

    /// Screen row for a world y. May fall outside the playfield.
    pub fn row(&self, y: f32, tuning: &Tuning) -> i32 {
        let span = tuning.upper_bound - tuning.lower_bound;
        let t = (tuning.upper_bound - y) / span;
        let rows = (self.play_bottom() - self.play_top()) as f32;
        self.play_top() + (t * rows).round() as i32
    }

    /// World y at a playfield row, the inverse of [`Viewport::row`].
    pub fn world_y(&self, row: i32, tuning: &Tuning) -> f32 {
        let rows = (self.play_bottom() - self.play_top()) as f32;
        let t = (row - self.play_top()) as f32 / rows;
        let span = tuning.upper_bound - tuning.lower_bound;
        tuning.upper_bound - t * span
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    best: u32,
    view: Viewport,
) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if view.width < 24 || view.height < 10 {
        out.queue(cursor::MoveTo(0, 0))?;
        out.queue(Print("Terminal too small"))?;
        out.flush()?;
        return Ok(());
    }

    draw_bounds(out, view)?;
    for pillar in state.pillars.pillars() {
        draw_pillar(out, view, pillar.x, pillar.gap_center, &state.tuning)?;
    }
    draw_bird(out, view, state)?;
    draw_hud(out, view, state, best)?;
    draw_controls_hint(out, view)?;

    if !state.started() {
        draw_ready_hint(out, view)?;
    }
    if state.dead() {
        draw_death_overlay(out, view, state.score, best)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Playfield bounds ──────────────────────────────────────────────────────────

fn draw_bounds<W: Write>(out: &mut W, view: Viewport) -> io::Result<()> {
    let bar = "─".repeat(view.width as usize);

    out.queue(style::SetForegroundColor(C_BOUND))?;
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(&bar))?;
    out.queue(cursor::MoveTo(0, view.height - 2))?;
    out.queue(Print(&bar))?;
    Ok(())
}

// ── Pillars ───────────────────────────────────────────────────────────────────

fn draw_pillar<W: Write>(
    out: &mut W,
    view: Viewport,
    x: f32,
    gap_center: f32,
    tuning: &Tuning,
) -> io::Result<()> {
    let half_w = tuning.pillar_width / 2.0;
    let lo = view.col(x - half_w).max(0);
    let hi = view.col(x + half_w).min(view.width as i32 - 1);
    if lo > hi {
        return Ok(());
    }

    let gap_top = gap_center + tuning.gap_height / 2.0;
    let gap_bottom = gap_center - tuning.gap_height / 2.0;
    let run = "█".repeat((hi - lo + 1) as usize);

    out.queue(style::SetForegroundColor(C_PILLAR))?;
    for row in view.play_top()..=view.play_bottom() {
        let y = view.world_y(row, tuning);
        if y >= gap_top || y <= gap_bottom {
            out.queue(cursor::MoveTo(lo as u16, row as u16))?;
            out.queue(Print(&run))?;
        }
    }
    Ok(())
}

// ── Bird ──────────────────────────────────────────────────────────────────────

fn draw_bird<W: Write>(out: &mut W, view: Viewport, state: &GameState) -> io::Result<()> {
    let col = view.col(state.tuning.player_x);
    // Clamp so the death frame stays visible even past a bound
    let row = view
        .row(state.position, &state.tuning)
        .clamp(view.play_top(), view.play_bottom());

    let (glyph, color) = if state.dead() {
        ("✖", C_BIRD_DEAD)
    } else {
        ("◉", C_BIRD)
    };
    out.queue(cursor::MoveTo(col as u16, row as u16))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: Viewport, state: &GameState, best: u32) -> io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    if best > 0 {
        out.queue(Print(format!("Score:{:>5}  Best:{:>5}", state.score, best)))?;
    } else {
        out.queue(Print(format!("Score:{:>5}", state.score)))?;
    }

    let seed_str = format!("Seed:{}", state.seed);
    let col = view
        .width
        .saturating_sub(seed_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(col, 0))?;
    out.queue(style::SetForegroundColor(C_SEED))?;
    out.queue(Print(seed_str))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height - 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE / ↑ / click : Flap   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn print_centered<W: Write>(
    out: &mut W,
    view: Viewport,
    row: u16,
    text: &str,
    color: Color,
) -> io::Result<()> {
    let col = (view.width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_ready_hint<W: Write>(out: &mut W, view: Viewport) -> io::Result<()> {
    let row = view.height / 2;
    print_centered(out, view, row, "Press SPACE to start", C_READY)
}

fn draw_death_overlay<W: Write>(
    out: &mut W,
    view: Viewport,
    score: u32,
    best: u32,
) -> io::Result<()> {
    let box_lines = [
        "╔══════════════════╗",
        "║    GAME  OVER    ║",
        "╚══════════════════╝",
    ];
    let score_line = format!("Score: {:>5}", score);
    let new_best = score >= best && score > 0;
    let best_line = if new_best {
        format!("★ New best: {:>4} ★", best)
    } else {
        format!("Best:  {:>5}", best)
    };

    let start = (view.height / 2).saturating_sub(3);
    for (i, line) in box_lines.iter().enumerate() {
        print_centered(out, view, start + i as u16, line, Color::Red)?;
    }
    print_centered(out, view, start + 3, &score_line, Color::Yellow)?;
    let best_color = if new_best { Color::Yellow } else { Color::DarkGrey };
    print_centered(out, view, start + 4, &best_line, best_color)?;
    print_centered(out, view, start + 5, "R - Restart   Q - Quit", Color::White)?;
    Ok(())
}
