//! GameView: maps a session snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! ```text
//!                 MATH CHOMPERS
//!     Mode: EQUALITY | Rule: 7 | Score: 3
//!
//! ┌─────────────────────────────────────────────────┐
//! │ ┌cell┐ ┌cell┐ ┌cell┐ ┌cell┐ ┌cell┐              │
//! │   ...  5 rows of 5 cells, 3 terminal rows each  │
//! └─────────────────────────────────────────────────┘
//!
//! 1 Multiples  2 Factors  3 Primes  4 Equalities  5 Inequalities
//!     arrows move · enter eat · click a cell · q quit
//! ```

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::{CellValue, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Mode, CELL_COUNT, GRID_SIZE};

const TITLE: &str = "MATH CHOMPERS";
const HELP: &str = "arrows move · enter eat · click a cell · q quit";

/// Rows above the grid frame: title, status, spacer.
const HEADER_ROWS: u16 = 3;
/// Rows below the grid frame: spacer, mode legend, help.
const FOOTER_ROWS: u16 = 3;

const SCREEN: CellStyle = CellStyle::new(Rgb::new(200, 230, 200), Rgb::new(10, 24, 12));
const BOARD: Rgb = Rgb::new(22, 48, 24);
const BOARD_FLASH: Rgb = Rgb::new(120, 140, 30);
const CELL: CellStyle = CellStyle::new(Rgb::new(225, 245, 210), Rgb::new(48, 96, 44));
const MUNCHER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 170, 70)).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(120, 190, 120), Rgb::new(10, 24, 12));

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

/// Screen positions derived from the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the grid frame.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Top-left corner of cell 0.
    pub grid_x: u16,
    pub grid_y: u16,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Cell width in terminal columns. Wide enough for `"12 * 12"`.
    cell_w: u16,
    /// Cell height in terminal rows.
    cell_h: u16,
    /// Blank columns between neighbouring cells.
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 9x3 keeps cells roughly square in a typical terminal font.
        Self {
            cell_w: 9,
            cell_h: 3,
            gap: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16, gap: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            gap,
        }
    }

    fn grid_w(&self) -> u16 {
        GRID_SIZE as u16 * self.cell_w + (GRID_SIZE as u16 - 1) * self.gap
    }

    fn grid_h(&self) -> u16 {
        GRID_SIZE as u16 * self.cell_h
    }

    /// Place the frame centered in the viewport, header above and legend below.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        // One blank column of padding inside the border on each side.
        let frame_w = self.grid_w() + 4;
        let frame_h = self.grid_h() + 2;
        let total_h = HEADER_ROWS + frame_h + FOOTER_ROWS;

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = viewport.height.saturating_sub(total_h) / 2 + HEADER_ROWS;

        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            grid_x: frame_x + 2,
            grid_y: frame_y + 1,
        }
    }

    /// Top-left terminal position of cell `index`.
    fn cell_origin(&self, layout: &Layout, index: usize) -> (u16, u16) {
        let row = (index / GRID_SIZE) as u16;
        let col = (index % GRID_SIZE) as u16;
        (
            layout.grid_x + col * (self.cell_w + self.gap),
            layout.grid_y + row * self.cell_h,
        )
    }

    /// Grid index under terminal position `(x, y)`, if any.
    ///
    /// Gaps between cells and everything outside the grid miss.
    pub fn hit_test(&self, viewport: Viewport, x: u16, y: u16) -> Option<usize> {
        let layout = self.layout(viewport);
        if x < layout.grid_x || y < layout.grid_y {
            return None;
        }
        let dx = x - layout.grid_x;
        let dy = y - layout.grid_y;

        let pitch = self.cell_w + self.gap;
        let col = (dx / pitch) as usize;
        let row = (dy / self.cell_h) as usize;
        if col >= GRID_SIZE || row >= GRID_SIZE || dx % pitch >= self.cell_w {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(SCREEN.cell(' '));

        let layout = self.layout(viewport);
        let board_bg = if snap.flash { BOARD_FLASH } else { BOARD };

        self.draw_header(fb, snap, viewport, &layout);

        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            SCREEN.on(board_bg),
        );
        self.draw_border(fb, &layout);

        for index in 0..CELL_COUNT {
            let style = if index == snap.cursor { MUNCHER } else { CELL };
            self.draw_cell(fb, &layout, index, &snap.grid[index], style);
        }

        self.draw_footer(fb, snap, viewport, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let Some(top) = layout.frame_y.checked_sub(HEADER_ROWS) else {
            return;
        };
        fb.put_str_centered(0, top, viewport.width, TITLE, SCREEN.bold());

        let mut status: ArrayString<96> = ArrayString::new();
        let _ = status.try_push_str("Mode: ");
        for ch in snap.mode.as_str().chars() {
            let _ = status.try_push(ch.to_ascii_uppercase());
        }
        let _ = if snap.has_rule() {
            write!(status, " | Rule: {} | Score: {}", snap.rule, snap.score)
        } else {
            write!(status, " | Rule: - | Score: {}", snap.score)
        };
        fb.put_str_centered(0, top + 1, viewport.width, &status, SCREEN);
    }

    fn draw_footer(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let legend_y = layout.frame_y + layout.frame_h + 1;

        let mut legend_w: u16 = 0;
        for (i, mode) in Mode::ALL.iter().enumerate() {
            if i > 0 {
                legend_w += 2;
            }
            legend_w += 2 + mode.label().len() as u16;
        }

        let mut x = viewport.width.saturating_sub(legend_w) / 2;
        for mode in Mode::ALL {
            let style = if mode == snap.mode { MUNCHER } else { SCREEN.dim() };
            let key = char::from(b'1' + mode.index() as u8);
            fb.put_char(x, legend_y, key, SCREEN.bold());
            fb.put_str(x + 2, legend_y, mode.label(), style);
            x += 2 + mode.label().len() as u16 + 2;
        }

        fb.put_str_centered(0, legend_y + 1, viewport.width, HELP, SCREEN.dim());
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        index: usize,
        value: &CellValue,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(layout, index);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let mut text: ArrayString<32> = ArrayString::new();
        let _ = write!(text, "{}", value);
        fb.put_str_centered(px, py + self.cell_h / 2, self.cell_w, &text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Expression;
    use crate::types::{Operator, CENTER_INDEX};

    fn snap_with(grid_value: impl Fn(usize) -> CellValue) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        for (i, cell) in snap.grid.iter_mut().enumerate() {
            *cell = grid_value(i);
        }
        snap
    }

    #[test]
    fn layout_fits_a_standard_terminal() {
        let view = GameView::default();
        let layout = view.layout(Viewport::new(80, 24));
        assert!(layout.frame_x + layout.frame_w <= 80);
        assert!(layout.frame_y >= HEADER_ROWS);
        assert!(layout.frame_y + layout.frame_h + FOOTER_ROWS <= 24);
    }

    #[test]
    fn hit_test_finds_every_cell_origin() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let layout = view.layout(vp);
        for index in 0..CELL_COUNT {
            let (x, y) = view.cell_origin(&layout, index);
            assert_eq!(view.hit_test(vp, x, y), Some(index));
            assert_eq!(view.hit_test(vp, x + 8, y + 2), Some(index));
        }
    }

    #[test]
    fn hit_test_misses_gaps_and_border() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let layout = view.layout(vp);
        // Gap column right of cell 0.
        assert_eq!(view.hit_test(vp, layout.grid_x + 9, layout.grid_y), None);
        assert_eq!(view.hit_test(vp, layout.frame_x, layout.frame_y), None);
        assert_eq!(view.hit_test(vp, 0, 0), None);
        assert_eq!(view.hit_test(vp, 79, 23), None);
    }

    #[test]
    fn expressions_fit_in_cells() {
        let widest = Expression::new(12, Operator::Mul, 12).to_string();
        assert!(widest.len() as u16 <= GameView::default().cell_w);
    }

    #[test]
    fn cell_text_is_centered_in_its_box() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let snap = snap_with(|i| CellValue::Number(i as i64 + 10));
        let fb = view.render(&snap, vp);

        let layout = view.layout(vp);
        let (x, y) = view.cell_origin(&layout, 0);
        // "10" centered in 9 columns starts 3 columns in.
        assert_eq!(fb.get(x + 3, y + 1).unwrap().ch, '1');
        assert_eq!(fb.get(x + 4, y + 1).unwrap().ch, '0');
    }

    #[test]
    fn muncher_cell_is_highlighted() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let snap = snap_with(|_| CellValue::Number(1));
        let fb = view.render(&snap, vp);
        let layout = view.layout(vp);

        let (mx, my) = view.cell_origin(&layout, CENTER_INDEX);
        let (ox, oy) = view.cell_origin(&layout, 0);
        assert_eq!(fb.get(mx, my).unwrap().style, MUNCHER);
        assert_eq!(fb.get(ox, oy).unwrap().style, CELL);
    }

    #[test]
    fn flash_changes_board_background() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let mut snap = snap_with(|_| CellValue::Number(1));
        let layout = view.layout(vp);
        let probe = (layout.frame_x + 1, layout.frame_y + 1);

        let calm = view.render(&snap, vp);
        snap.flash = true;
        let flashing = view.render(&snap, vp);
        assert_eq!(calm.get(probe.0, probe.1).unwrap().style.bg, BOARD);
        assert_eq!(flashing.get(probe.0, probe.1).unwrap().style.bg, BOARD_FLASH);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let snap = snap_with(|_| CellValue::Number(1));
        let fb = view.render(&snap, Viewport::new(10, 4));
        assert_eq!((fb.width(), fb.height()), (10, 4));
        assert_eq!(view.hit_test(Viewport::new(0, 0), 0, 0), None);
    }
}
