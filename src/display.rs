/// Presentation layer.  All terminal I/O lives here.
///
/// The frame is composed on a `Canvas` by the library; this module only turns
/// canvas pixels and a few state fields into terminal commands.  Each text
/// cell shows two canvas pixels: an upper-half block coloured with the top
/// pixel over a background coloured with the bottom one.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use side_scroller::canvas::{Canvas, Rgb};
use side_scroller::entities::GameState;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_STAGE: Color = Color::Cyan;
const C_HUD_BOSS: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Rows reserved above the playfield.
pub const HUD_ROWS: u16 = 1;

/// Canvas size that fills a `cols`×`rows` terminal below the HUD.
pub fn canvas_size(cols: u16, rows: u16) -> (u32, u32) {
    (cols as u32, rows.saturating_sub(HUD_ROWS) as u32 * 2)
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Present one complete frame.
pub fn present<W: Write>(out: &mut W, canvas: &Canvas, state: &GameState) -> std::io::Result<()> {
    draw_hud(out, state, canvas.width() as u16)?;
    draw_playfield(out, canvas)?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, width: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;

    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(" Score:{:>5} ", state.score)))?;

    out.queue(style::SetForegroundColor(C_HUD_STAGE))?;
    out.queue(Print(format!(" [ STAGE {} ] ", state.stage.number())))?;

    if let Some(boss) = &state.boss {
        out.queue(style::SetForegroundColor(C_HUD_BOSS))?;
        out.queue(Print(format!(" BOSS HP:{:>4} ", boss.hp())))?;
    }

    let hint = "← → / A D : Move   ↑ / W / SPACE : Jump   ESC / Q : Quit";
    let hx = width.saturating_sub(hint.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(hx, 0))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;

    Ok(())
}

// ── Playfield ─────────────────────────────────────────────────────────────────

fn draw_playfield<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    let mut last: Option<(Rgb, Rgb)> = None;
    let mut row = 0;
    while row * 2 < canvas.height() {
        out.queue(cursor::MoveTo(0, HUD_ROWS + row as u16))?;
        for x in 0..canvas.width() {
            let top = canvas.pixel(x, row * 2).unwrap_or_default();
            let bottom = canvas.pixel(x, row * 2 + 1).unwrap_or_default();
            // Only emit colour changes; most neighbouring cells share them.
            if last != Some((top, bottom)) {
                out.queue(style::SetForegroundColor(rgb(top)))?;
                out.queue(style::SetBackgroundColor(rgb(bottom)))?;
                last = Some((top, bottom));
            }
            out.queue(Print('▀'))?;
        }
        row += 1;
    }
    Ok(())
}

fn rgb([r, g, b]: Rgb) -> Color {
    Color::Rgb { r, g, b }
}
