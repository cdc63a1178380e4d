//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, GameSnapshot, Piece};
use crate::engine::Preview;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::theme::ThemeConfig;
use crate::types::{Cell, BOARD_SIZE, PIECES_PER_SET};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(15, 23, 42);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const INVALID: Rgb = Rgb::new(239, 68, 68);

pub const HINT: &str = "arrows move  1-3 pick  enter place  t theme  r restart  q quit";

/// A lightweight terminal renderer for the block puzzle.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        preview: Option<&Preview>,
        theme: &ThemeConfig,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).into_cell(' '));

        let board_px_w = BOARD_SIZE as u16 * self.cell_w;
        let board_px_h = BOARD_SIZE as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // Board, feedback line and hint line stacked vertically.
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 2) / 2;

        let border = CellStyle::new(Rgb::new(100, 116, 139), PANEL_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            board_px_w,
            board_px_h,
            ' ',
            CellStyle::new(Rgb::new(71, 85, 105), BOARD_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (r, row) in snap.board.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                self.draw_board_cell(fb, start_x, start_y, r as u16, c as u16, *cell, theme);
            }
        }

        if let Some(preview) = preview {
            self.draw_preview(fb, snap, preview, theme, start_x, start_y);
        }

        self.draw_side_panel(fb, snap, preview, theme, viewport, start_x + frame_w + 2, start_y);

        let below = start_y + frame_h;
        if let Some(feedback) = snap.feedback {
            let style = if feedback.mega {
                CellStyle::new(Rgb::new(253, 224, 71), PANEL_BG).bold()
            } else {
                CellStyle::new(Rgb::new(165, 243, 252), PANEL_BG).bold()
            };
            put_centered(fb, start_x, frame_w, below, feedback.message, style);
        }
        put_centered(
            fb,
            0,
            viewport.width,
            below.saturating_add(1),
            HINT,
            CellStyle::new(Rgb::new(100, 116, 139), PANEL_BG).dim(),
        );

        if snap.game_over {
            self.draw_game_over(fb, snap, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        preview: Option<&Preview>,
        theme: &ThemeConfig,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, preview, theme, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        (
            start_x + 1 + col * self.cell_w,
            start_y + 1 + row * self.cell_h,
        )
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        cell: Cell,
        theme: &ThemeConfig,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, row, col);
        if cell.exploding {
            let g = theme.gradient(cell.color);
            let style = CellStyle::new(g.from, Rgb::new(248, 250, 252)).bold();
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '*', style);
            return;
        }
        match cell.color {
            Some(_) => self.draw_gradient_block(fb, px, py, cell.color, theme, false),
            None => {
                let style = CellStyle::new(Rgb::new(71, 85, 105), BOARD_BG).dim();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                fb.put_char(px, py, theme.icon(None), style);
            }
        }
    }

    /// Left half in the gradient's first stop, right half in the second.
    fn draw_gradient_block(
        &self,
        fb: &mut FrameBuffer,
        px: u16,
        py: u16,
        color: Option<crate::types::BlockColor>,
        theme: &ThemeConfig,
        dim: bool,
    ) {
        let g = theme.gradient(color);
        let (from, to) = if dim {
            (g.from.scaled(110), g.to.scaled(110))
        } else {
            (g.from, g.to)
        };
        let split = (self.cell_w / 2).max(1);
        let fg = Rgb::new(255, 255, 255);
        fb.fill_rect(px, py, split, self.cell_h, ' ', CellStyle::new(fg, from));
        fb.fill_rect(
            px + split,
            py,
            self.cell_w - split,
            self.cell_h,
            ' ',
            CellStyle::new(fg, to),
        );
        fb.put_char(px, py, theme.icon(color), CellStyle::new(fg, from).bold());
    }

    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        preview: &Preview,
        theme: &ThemeConfig,
        start_x: u16,
        start_y: u16,
    ) {
        let shape = get_shape(preview.piece.kind);
        for &(dr, dc) in shape.cells {
            let r = preview.row as i16 + dr as i16;
            let c = preview.col as i16 + dc as i16;
            if r < 0 || c < 0 || r >= BOARD_SIZE as i16 || c >= BOARD_SIZE as i16 {
                continue;
            }
            let (px, py) = self.cell_origin(start_x, start_y, r as u16, c as u16);
            if preview.valid {
                self.draw_gradient_block(fb, px, py, Some(preview.piece.color), theme, true);
            } else {
                let under = snap.board[r as usize][c as usize];
                let bg = if under.occupied() {
                    theme.gradient(under.color).from.scaled(90)
                } else {
                    BOARD_BG
                };
                fb.fill_rect(px, py, self.cell_w, self.cell_h, 'x', CellStyle::new(INVALID, bg).bold());
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        preview: Option<&Preview>,
        theme: &ThemeConfig,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(148, 163, 184), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(241, 245, 249), PANEL_BG).bold();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x + 7, y, snap.score, value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "BEST", label);
        fb.put_u32(panel_x + 7, y, snap.high_score, value);
        y = y.saturating_add(2);

        let selected = preview.map(|p| p.piece.id);
        for slot in 0..PIECES_PER_SET {
            if y >= viewport.height {
                break;
            }
            let marker_style = CellStyle::new(Rgb::new(253, 224, 71), PANEL_BG).bold();
            let number = char::from(b'1' + slot as u8);
            match snap.pieces[slot] {
                Some(piece) => {
                    let is_selected = selected == Some(piece.id);
                    if is_selected {
                        fb.put_char(panel_x, y, '>', marker_style);
                    }
                    fb.put_char(panel_x + 1, y, number, label);
                    let rows = self.draw_mini_piece(fb, piece, theme, panel_x + 3, y, !is_selected);
                    y = y.saturating_add(rows.max(1) + 1);
                }
                None => {
                    fb.put_char(panel_x + 1, y, number, label.dim());
                    fb.put_char(panel_x + 3, y, '-', label.dim());
                    y = y.saturating_add(2);
                }
            }
        }
    }

    /// Returns the number of rows drawn.
    fn draw_mini_piece(
        &self,
        fb: &mut FrameBuffer,
        piece: Piece,
        theme: &ThemeConfig,
        x: u16,
        y: u16,
        dim: bool,
    ) -> u16 {
        let shape = get_shape(piece.kind);
        for &(dr, dc) in shape.cells {
            let px = x + dc as u16 * 2;
            let py = y + dr as u16;
            let g = theme.gradient(Some(piece.color));
            let (from, to) = if dim {
                (g.from.scaled(150), g.to.scaled(150))
            } else {
                (g.from, g.to)
            };
            fb.put_char(px, py, ' ', CellStyle::new(from, from));
            fb.put_char(px + 1, py, ' ', CellStyle::new(to, to));
        }
        shape.rows as u16
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let banner = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(127, 29, 29)).bold();
        let text = CellStyle::new(Rgb::new(241, 245, 249), PANEL_BG);
        put_centered(fb, start_x, frame_w, mid_y.saturating_sub(2), "NO MOVES LEFT", banner);
        put_centered(fb, start_x, frame_w, mid_y.saturating_sub(1), "GAME OVER", banner);

        let score_x = start_x.saturating_add(frame_w.saturating_sub(digit_count(snap.score)) / 2);
        fb.put_u32(score_x, mid_y, snap.score, text.bold());
        put_centered(fb, start_x, frame_w, mid_y.saturating_add(1), "r: restart", text);
    }
}

/// Side panel width reserved when centering the layout.
const PANEL_W: u16 = 18;

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '╭', style);
    fb.put_char(x + w - 1, y, '╮', style);
    fb.put_char(x, y + h - 1, '╰', style);
    fb.put_char(x + w - 1, y + h - 1, '╯', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn put_centered(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let cx = x.saturating_add(w.saturating_sub(text_w) / 2);
    fb.put_str(cx, y, text, style);
}

fn digit_count(mut value: u32) -> u16 {
    let mut len = 1;
    while value >= 10 {
        value /= 10;
        len += 1;
    }
    len
}
