/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use alien_invasion::assets::SpriteArt;
use alien_invasion::entities::Rect;
use alien_invasion::game::{GameState, Phase};
use alien_invasion::settings::Rgb;

/// Screen row of the playfield's top edge; row 0 is the HUD.
pub const PLAYFIELD_TOP: u16 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::Black;
const C_SHIP: Color = Color::DarkBlue;
const C_ALIEN: Color = Color::DarkGreen;
const C_BUTTON_BG: Color = Color::DarkGreen;
const C_BUTTON_FG: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

/// Sprite art for everything drawn from an asset.
pub struct Art {
    pub ship: SpriteArt,
    pub alien: SpriteArt,
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, art: &Art) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(rgb(state.settings.bg_color)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state, art)?;

    for alien in &state.fleet.aliens {
        draw_sprite(out, state, &art.alien, alien.rect, C_ALIEN)?;
    }
    for bullet in &state.bullets {
        draw_bullet(out, state, bullet.rect)?;
    }
    draw_sprite(out, state, &art.ship, state.ship.rect, C_SHIP)?;

    if state.phase() == Phase::Idle {
        draw_play_button(out, state)?;
    }
    draw_controls_hint(out, state)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

/// Terminal cell of playfield point (`x`, `y`), or `None` if off screen.
fn to_screen(state: &GameState, x: i32, y: i32) -> Option<(u16, u16)> {
    let s = &state.settings;
    if x < 0 || y < 0 || x >= s.screen_width || y >= s.screen_height {
        return None;
    }
    Some((x as u16, y as u16 + PLAYFIELD_TOP))
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, art: &Art) -> std::io::Result<()> {
    let board = &state.scoreboard;
    let width = state.settings.screen_width.max(0) as u16;
    out.queue(style::SetForegroundColor(C_HUD))?;

    // Ships left — left
    let icon = art
        .ship
        .rows
        .first()
        .and_then(|row| row.chars().find(|c| !c.is_whitespace()))
        .unwrap_or('^');
    let ships: String = std::iter::repeat(icon).take(board.ships as usize).collect();
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(&ships))?;

    // High score — centre
    let high = format!("Best {}", board.high_score_text);
    out.queue(cursor::MoveTo(
        (width / 2).saturating_sub(high.chars().count() as u16 / 2),
        0,
    ))?;
    out.queue(Print(&high))?;

    // Score and level — right
    let right = format!("Score {}  Level {}", board.score_text, board.level_text);
    out.queue(cursor::MoveTo(
        width.saturating_sub(right.chars().count() as u16 + 1),
        0,
    ))?;
    out.queue(Print(&right))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_sprite<W: Write>(
    out: &mut W,
    state: &GameState,
    art: &SpriteArt,
    rect: Rect,
    color: Color,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    for (dy, row) in art.rows.iter().enumerate() {
        for (dx, ch) in row.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            if let Some((col, line)) = to_screen(state, rect.x + dx as i32, rect.y + dy as i32) {
                out.queue(cursor::MoveTo(col, line))?;
                out.queue(Print(ch))?;
            }
        }
    }
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, state: &GameState, rect: Rect) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(rgb(state.settings.bullet_color)))?;
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            if let Some((col, line)) = to_screen(state, x, y) {
                out.queue(cursor::MoveTo(col, line))?;
                out.queue(Print("║"))?;
            }
        }
    }
    Ok(())
}

// ── Play button ───────────────────────────────────────────────────────────────

fn draw_play_button<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let button = &state.play_button;
    let rect = button.rect;
    let label_row = rect.top() + rect.height / 2;
    let label_col = rect.center_x() - button.label.chars().count() as i32 / 2;

    out.queue(style::SetBackgroundColor(C_BUTTON_BG))?;
    out.queue(style::SetForegroundColor(C_BUTTON_FG))?;
    for y in rect.top()..rect.bottom() {
        if let Some((col, line)) = to_screen(state, rect.left(), y) {
            let text = if y == label_row {
                let pad = (label_col - rect.left()).max(0) as usize;
                format!("{:pad$}{:<rest$}", "", button.label, rest = rect.width as usize - pad)
            } else {
                " ".repeat(rect.width.max(0) as usize)
            };
            out.queue(cursor::MoveTo(col, line))?;
            out.queue(Print(text))?;
        }
    }
    out.queue(style::SetBackgroundColor(rgb(state.settings.bg_color)))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let row = state.settings.screen_height.max(0) as u16 + PLAYFIELD_TOP;
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → : Move   SPACE : Shoot   P : Play   ESC : Quit"))?;
    Ok(())
}
