//! ASCII terminal renderer for a board snapshot.
//!
//! Rendering only reads the board; pacing delays when a frame is shown and
//! never feeds back into the simulation.

use std::io::{self, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};

use crate::deltalife::{Board, Bounds};

const CLEAR_SCREEN: &str = "\x1b[2J";
const CURSOR_HOME: &str = "\x1b[;H";

/// Box shown for an empty board.
const EMPTY_BOUNDS: Bounds = Bounds {
    min_x: 0,
    min_y: 0,
    max_x: 1,
    max_y: 1,
};

/// Largest frame side in cells. Wider boxes are cut to their top-left corner.
const MAX_FRAME_SIDE: i64 = 512;

pub struct Renderer {
    frame_interval: Duration,
    clear_screen: bool,
    alive_glyph: char,
    last_frame: Option<Instant>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// 30 frames per second, clearing the screen, `@` for live cells.
    pub fn new() -> Self {
        Self {
            frame_interval: Duration::from_millis(1000 / 30),
            clear_screen: true,
            alive_glyph: '@',
            last_frame: None,
        }
    }

    pub fn fps(self, fps: u32) -> Self {
        let interval = Duration::from_secs(1) / fps.max(1);
        self.frame_interval(interval)
    }

    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn alive_glyph(mut self, glyph: char) -> Self {
        self.alive_glyph = glyph;
        self
    }

    /// The board inside its bounding box, top row (largest y) first.
    ///
    /// At most `MAX_FRAME_SIDE` columns and rows are drawn, starting from the
    /// top-left corner of the box.
    pub fn frame(&self, board: &Board) -> String {
        let b = board.bounds().unwrap_or(EMPTY_BOUNDS);
        let max_x = b.min_x.saturating_add(MAX_FRAME_SIDE - 1).min(b.max_x);
        let min_y = b.max_y.saturating_sub(MAX_FRAME_SIDE - 1).max(b.min_y);
        let width = usize::try_from(max_x.abs_diff(b.min_x)).unwrap_or(0) + 1;
        let height = usize::try_from(b.max_y.abs_diff(min_y)).unwrap_or(0) + 1;
        let mut out = String::with_capacity((width + 1) * height);
        for y in (min_y..=b.max_y).rev() {
            for x in b.min_x..=max_x {
                out.push(if board.get_cell(x, y) {
                    self.alive_glyph
                } else {
                    ' '
                });
            }
            out.push('\n');
        }
        out
    }

    /// Write one frame, then block until the frame interval has elapsed
    /// since the previous one.
    pub fn draw<W: Write>(&mut self, board: &Board, out: &mut W) -> io::Result<()> {
        if self.clear_screen {
            out.write_all(CLEAR_SCREEN.as_bytes())?;
            out.write_all(CURSOR_HOME.as_bytes())?;
        }
        out.write_all(self.frame(board).as_bytes())?;
        out.flush()?;
        self.pace();
        Ok(())
    }

    fn pace(&mut self) {
        if let Some(last) = self.last_frame {
            let elapsed = last.elapsed();
            if elapsed < self.frame_interval {
                sleep(self.frame_interval - elapsed);
            }
        }
        self.last_frame = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{MAX_FRAME_SIDE, Renderer};
    use crate::deltalife::Board;
    use crate::patterns::GLIDER;

    #[test]
    fn frame_draws_rows_top_down() {
        let board = Board::from_cells(GLIDER.iter().copied());
        let frame = Renderer::new().frame(&board);
        assert_eq!(frame, " @ \n  @\n@@@\n");
    }

    #[test]
    fn empty_board_draws_blank_box() {
        let frame = Renderer::new().frame(&Board::new());
        assert_eq!(frame, "  \n  \n");
    }

    #[test]
    fn frame_is_clipped_for_huge_boxes() {
        let board = Board::from_cells([(i64::MIN, 0), (i64::MAX, 0), (0, i64::MIN)]);
        let frame = Renderer::new().frame(&board);
        let side = MAX_FRAME_SIDE as usize;
        let rows: Vec<&str> = frame.lines().collect();
        assert_eq!(rows.len(), side);
        assert!(rows.iter().all(|row| row.chars().count() == side));
        // Top-left corner is (i64::MIN, 0).
        assert!(rows[0].starts_with('@'));
        assert_eq!(frame.matches('@').count(), 1);
    }

    #[test]
    fn draw_prefixes_escape_codes_only_when_clearing() {
        let board = Board::from_cells([(0, 0)]);
        let mut renderer = Renderer::new()
            .frame_interval(Duration::ZERO)
            .alive_glyph('#');

        let mut out = Vec::new();
        renderer.draw(&board, &mut out).expect("write to vec");
        assert_eq!(out, b"\x1b[2J\x1b[;H#\n");

        let mut renderer = renderer.clear_screen(false);
        let mut out = Vec::new();
        renderer.draw(&board, &mut out).expect("write to vec");
        assert_eq!(out, b"#\n");
    }
}
