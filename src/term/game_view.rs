//! GameView: maps a `GameSnapshot` into a character frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::GameSnapshot;
use crate::types::ShapeKind;

/// Board cell width in terminal columns.
/// 2x1 helps compensate for typical terminal glyph aspect ratio.
const CELL_W: u16 = 2;

/// Width reserved for the score panel right of the board.
const PANEL_W: u16 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Display color for each piece kind.
pub fn kind_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::I => Rgb::new(0, 255, 255),
        ShapeKind::O => Rgb::new(255, 255, 0),
        ShapeKind::T => Rgb::new(255, 0, 255),
        ShapeKind::L => Rgb::new(255, 165, 0),
        ShapeKind::J => Rgb::new(0, 0, 255),
        ShapeKind::S => Rgb::new(0, 255, 0),
        ShapeKind::Z => Rgb::new(255, 0, 0),
    }
}

/// One character of output with an optional foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCell {
    pub ch: char,
    pub fg: Option<Rgb>,
}

impl Default for FrameCell {
    fn default() -> Self {
        Self { ch: ' ', fg: None }
    }
}

/// A rectangular character buffer the renderer flushes to the terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<FrameCell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![FrameCell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> FrameCell {
        if x >= self.width || y >= self.height {
            return FrameCell::default();
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u16, y: u16, cell: FrameCell) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = cell;
    }

    fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = FrameCell::default();
        }
    }

    fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Option<Rgb>) {
        for (i, ch) in text.chars().enumerate() {
            self.set(x + i as u16, y, FrameCell { ch, fg });
        }
    }

    /// Row `y` as plain text, colors dropped. Test helper.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width).map(|x| self.get(x, y).ch).collect()
    }
}

/// Projects snapshots into frames: bordered board on the left, score panel
/// on the right, game-over banner when the engine is dead.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Frame dimensions for a given board size.
    pub fn frame_size(snap: &GameSnapshot) -> (u16, u16) {
        let board_px_w = snap.width as u16 * CELL_W;
        (board_px_w + 2 + PANEL_W, snap.height as u16 + 2)
    }

    pub fn render(&self, snap: &GameSnapshot) -> Frame {
        let (w, h) = Self::frame_size(snap);
        let mut frame = Frame::new(w, h);
        self.render_into(snap, &mut frame);
        frame
    }

    /// Render into an existing frame; callers reuse one frame across ticks.
    pub fn render_into(&self, snap: &GameSnapshot, frame: &mut Frame) {
        let (w, h) = Self::frame_size(snap);
        if frame.width != w || frame.height != h {
            *frame = Frame::new(w, h);
        } else {
            frame.clear();
        }

        let board_px_w = snap.width as u16 * CELL_W;
        self.draw_border(frame, board_px_w + 2, snap.height as u16 + 2);

        // Locked cells.
        for y in 0..snap.height {
            for x in 0..snap.width {
                if let Some(kind) = snap.cell(x, y) {
                    self.draw_cell(frame, x as i8, y as i8, kind);
                }
            }
        }

        // Active piece; cells above the top are simply not drawn.
        if let Some(active) = &snap.active {
            for &(x, y) in active.cells.iter() {
                if y >= 0 {
                    self.draw_cell(frame, x, y, active.kind);
                }
            }
        }

        // Side panel.
        let panel_x = board_px_w + 4;
        frame.put_str(panel_x, 1, &format!("score {}", snap.score), None);
        frame.put_str(panel_x, 2, &format!("lines {}", snap.lines), None);
        if snap.game_over {
            let red = Some(kind_color(ShapeKind::Z));
            frame.put_str(panel_x, 4, "GAME OVER", red);
            frame.put_str(panel_x, 5, "r restart  q quit", None);
        }
    }

    fn draw_cell(&self, frame: &mut Frame, x: i8, y: i8, kind: ShapeKind) {
        let fg = Some(kind_color(kind));
        let px = 1 + x as u16 * CELL_W;
        let py = 1 + y as u16;
        for dx in 0..CELL_W {
            frame.set(px + dx, py, FrameCell { ch: '█', fg });
        }
    }

    fn draw_border(&self, frame: &mut Frame, w: u16, h: u16) {
        let line = |ch| FrameCell { ch, fg: None };
        for x in 1..w - 1 {
            frame.set(x, 0, line('─'));
            frame.set(x, h - 1, line('─'));
        }
        for y in 1..h - 1 {
            frame.set(0, y, line('│'));
            frame.set(w - 1, y, line('│'));
        }
        frame.set(0, 0, line('┌'));
        frame.set(w - 1, 0, line('┐'));
        frame.set(0, h - 1, line('└'));
        frame.set(w - 1, h - 1, line('┘'));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
    use arrayvec::ArrayVec;

    fn snapshot() -> GameSnapshot {
        GameSnapshot::empty(10, 20)
    }

    #[test]
    fn test_frame_size_matches_board() {
        let snap = snapshot();
        let frame = GameView.render(&snap);
        assert_eq!(frame.width(), 10 * CELL_W + 2 + PANEL_W);
        assert_eq!(frame.height(), 22);
    }

    #[test]
    fn test_border_corners() {
        let frame = GameView.render(&snapshot());
        assert_eq!(frame.get(0, 0).ch, '┌');
        assert_eq!(frame.get(21, 0).ch, '┐');
        assert_eq!(frame.get(0, 21).ch, '└');
        assert_eq!(frame.get(21, 21).ch, '┘');
    }

    #[test]
    fn test_locked_cell_drawn_with_kind_color() {
        let mut snap = snapshot();
        snap.cells[19 * 10] = Some(ShapeKind::I);
        let frame = GameView.render(&snap);
        // Board cell (0, 19) maps to frame columns 1-2, row 20.
        assert_eq!(frame.get(1, 20).ch, '█');
        assert_eq!(frame.get(2, 20).ch, '█');
        assert_eq!(frame.get(1, 20).fg, Some(kind_color(ShapeKind::I)));
        assert_eq!(frame.get(3, 20).ch, ' ');
    }

    #[test]
    fn test_active_cells_above_top_are_skipped() {
        let mut snap = snapshot();
        let mut cells = ArrayVec::new();
        cells.extend([(3, -1), (3, 0), (4, 0), (5, 0)]);
        snap.active = Some(ActiveSnapshot {
            kind: ShapeKind::J,
            cells,
        });
        let frame = GameView.render(&snap);
        // y = -1 is off-frame, y = 0 lands on frame row 1.
        assert_eq!(frame.get(7, 1).ch, '█');
        assert_eq!(frame.row_text(0).chars().filter(|c| *c == '█').count(), 0);
    }

    #[test]
    fn test_score_panel_text() {
        let mut snap = snapshot();
        snap.score = 300;
        snap.lines = 3;
        let frame = GameView.render(&snap);
        assert!(frame.row_text(1).contains("score 300"));
        assert!(frame.row_text(2).contains("lines 3"));
        assert!(!frame.row_text(4).contains("GAME OVER"));
    }

    #[test]
    fn test_game_over_banner() {
        let mut snap = snapshot();
        snap.game_over = true;
        let frame = GameView.render(&snap);
        assert!(frame.row_text(4).contains("GAME OVER"));
        assert!(frame.row_text(5).contains("r restart"));
    }

    #[test]
    fn test_render_into_reuses_frame() {
        let snap = snapshot();
        let mut frame = Frame::new(1, 1);
        GameView.render_into(&snap, &mut frame);
        let (w, h) = GameView::frame_size(&snap);
        assert_eq!((frame.width(), frame.height()), (w, h));
    }
}
