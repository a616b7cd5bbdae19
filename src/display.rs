//! Rendering layer: all terminal output lives here.
//!
//! Each function receives a writer and an immutable [`Snapshot`].  Logical
//! screen units are scaled onto whatever terminal size the host reports; no
//! game logic happens here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::assets::{AssetBundle, Sprite};
use crate::compute::Snapshot;
use crate::config::{Config, MAX_LIVES};
use crate::entities::{AlienKind, GameStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::Rgb { r: 28, g: 3, b: 51 };
const C_BORDER: Color = Color::DarkBlue;
const C_SCORE: Color = Color::Rgb { r: 150, g: 150, b: 200 };
const C_LIVES: Color = Color::Red;
const C_SHIP: Color = Color::White;
const C_OCTOPUS: Color = Color::Magenta;
const C_CRAB: Color = Color::Cyan;
const C_SQUID: Color = Color::Green;
const C_LASER: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Terminal area the logical screen is mapped onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn from_terminal() -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self { cols, rows })
    }

    /// Cell for a logical position.  Row 0 and the last row are reserved for
    /// the HUD and the controls hint; the border takes one cell on each side.
    pub fn cell(&self, x: f32, y: f32, config: &Config) -> (u16, u16) {
        let inner_w = self.cols.saturating_sub(2).max(1) as f32;
        let inner_h = self.rows.saturating_sub(4).max(1) as f32;
        let col = 1.0 + (x / config.screen_width * inner_w).floor();
        let row = 2.0 + (y / config.screen_height * inner_h).floor();
        (
            col.clamp(1.0, inner_w) as u16,
            row.clamp(2.0, inner_h + 1.0) as u16,
        )
    }

    fn play_bottom(&self) -> u16 {
        self.rows.saturating_sub(2)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    snapshot: &Snapshot,
    assets: &AssetBundle,
    config: &Config,
    view: Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_lives(out, snapshot)?;

    match snapshot.status {
        GameStatus::Title => draw_title(out, view)?,
        GameStatus::Playing | GameStatus::GameOver => {
            for &(kind, x, y) in &snapshot.aliens {
                let (col, row) = view.cell(x, y, config);
                draw_sprite(out, assets.alien(kind), col, row, alien_color(kind), view)?;
            }
            for &(x, y) in snapshot.player_lasers.iter().chain(&snapshot.alien_lasers) {
                draw_laser(out, view.cell(x, y, config))?;
            }
            let (col, row) = view.cell(snapshot.ship.0, snapshot.ship.1, config);
            draw_sprite(out, &assets.ship, col, row, C_SHIP, view)?;
            draw_score(out, snapshot.score, assets, config, view)?;
        }
    }

    if snapshot.status == GameStatus::GameOver {
        draw_game_over(out, snapshot, view)?;
    }

    draw_controls_hint(out, view)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn alien_color(kind: AlienKind) -> Color {
    match kind {
        AlienKind::Octopus => C_OCTOPUS,
        AlienKind::Crab => C_CRAB,
        AlienKind::Squid => C_SQUID,
    }
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, view.play_bottom()))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..view.play_bottom() {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_lives<W: Write>(out: &mut W, snapshot: &Snapshot) -> std::io::Result<()> {
    let hearts = "♥".repeat(snapshot.lives.clamp(0, MAX_LIVES) as usize);
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_LIVES))?;
    out.queue(Print(format!("Lives: {}", hearts)))?;
    Ok(())
}

/// Score in the top-right corner.  Uses the block font when the font size
/// maps to at least as many rows as a glyph is tall, plain digits otherwise.
fn draw_score<W: Write>(
    out: &mut W,
    score: u32,
    assets: &AssetBundle,
    config: &Config,
    view: Viewport,
) -> std::io::Result<()> {
    let text = format!("{:05}", score);
    let font_rows = config.font_size / config.screen_height * view.rows as f32;

    out.queue(style::SetForegroundColor(C_SCORE))?;

    if font_rows >= assets.font.height as f32 {
        for (i, line) in assets.font.render(&text).iter().enumerate() {
            let col = view.cols.saturating_sub(line.chars().count() as u16 + 2);
            out.queue(cursor::MoveTo(col, 2 + i as u16))?;
            out.queue(Print(line))?;
        }
    } else {
        let col = view.cols.saturating_sub(text.len() as u16 + 1);
        out.queue(cursor::MoveTo(col, 0))?;
        out.queue(Print(&text))?;
    }

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_sprite<W: Write>(
    out: &mut W,
    sprite: &Sprite,
    col: u16,
    row: u16,
    color: Color,
    view: Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    for (i, line) in sprite.rows.iter().enumerate() {
        let y = row + i as u16;
        if y >= view.play_bottom() {
            break;
        }
        // Clip on the right so art never overwrites the border.
        let room = view.cols.saturating_sub(col + 1) as usize;
        let visible: String = line.chars().take(room).collect();
        out.queue(cursor::MoveTo(col, y))?;
        out.queue(Print(visible))?;
    }
    Ok(())
}

fn draw_laser<W: Write>(out: &mut W, (col, row): (u16, u16)) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_LASER))?;
    out.queue(Print("│"))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   ESC / Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    lines: &[(&str, Color)],
    view: Viewport,
) -> std::io::Result<()> {
    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_title<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    draw_centered(
        out,
        &[
            ("S P A C E   I N V A D E R S", Color::Green),
            ("", Color::Reset),
            ("ENTER / SPACE : Start", Color::White),
        ],
        view,
    )
}

fn draw_game_over<W: Write>(
    out: &mut W,
    snapshot: &Snapshot,
    view: Viewport,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:05}", snapshot.score);
    draw_centered(
        out,
        &[
            ("╔══════════════════╗", Color::Red),
            ("║    GAME  OVER    ║", Color::Red),
            ("╚══════════════════╝", Color::Red),
            (score_line.as_str(), Color::Yellow),
            ("ENTER - Title   Q - Quit", Color::White),
        ],
        view,
    )
}
