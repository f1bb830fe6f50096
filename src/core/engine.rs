//! Engine module - composes the board with the active piece
//!
//! The engine is the sole holder of game truth. The host drives it with
//! discrete commands (move/rotate/soft-drop) and a per-tick `advance` call;
//! rejected operations are silent no-ops returning `false`. The only fatal
//! transition is the terminal `game_over` flag, raised when a piece locks
//! above the top or the spawn position is blocked.

use crate::core::config::{ConfigError, EngineConfig};
use crate::core::rng::PieceSource;
use crate::core::shape::{ShapeMatrix, ShapeOffsets};
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::core::Board;
use crate::types::{GameCommand, ShapeKind, LINE_SCORE};

/// The currently falling piece. Exactly one exists while the game runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub matrix: ShapeMatrix,
    /// Anchor position (top-left of the bounding box) in grid coordinates.
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// New piece horizontally centered on the board, at the top.
    fn spawn(kind: ShapeKind, board_width: u8) -> Self {
        let matrix = ShapeMatrix::template(kind);
        let x = (board_width / 2) as i8 - (matrix.cols() / 2) as i8;
        Self {
            kind,
            matrix,
            x,
            y: 0,
        }
    }

    /// Occupied cells in board coordinates.
    pub fn cells(&self) -> ShapeOffsets {
        let mut out = self.matrix.offsets();
        for (dx, dy) in out.iter_mut() {
            *dx += self.x;
            *dy += self.y;
        }
        out
    }
}

/// Board + active piece + score + fall-timing state machine.
pub struct Engine {
    board: Board,
    active: Option<ActivePiece>,
    pieces: Box<dyn PieceSource>,
    score: u32,
    lines: u32,
    fall_timer_ms: u32,
    fall_interval_ms: u32,
    game_over: bool,
}

impl Engine {
    /// Build an engine and spawn the first piece.
    ///
    /// Construction is the only fallible operation; everything afterwards is
    /// a total function over valid state.
    pub fn new(config: EngineConfig, pieces: Box<dyn PieceSource>) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut engine = Self {
            board: Board::new(config.width, config.height)?,
            active: None,
            pieces,
            score: 0,
            lines: 0,
            fall_timer_ms: 0,
            fall_interval_ms: config.fall_interval_ms,
            game_over: false,
        };
        engine.spawn_piece();
        Ok(engine)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Difficulty knob: hosts may shorten the interval as play progresses.
    pub fn set_fall_interval_ms(&mut self, interval_ms: u32) {
        self.fall_interval_ms = interval_ms.max(1);
    }

    /// Validity test: every occupied cell of `matrix` translated to
    /// (x, y) must be free per `Board::is_occupied`. Off-top cells pass.
    fn can_place(&self, matrix: &ShapeMatrix, x: i8, y: i8) -> bool {
        matrix
            .offsets()
            .iter()
            .all(|&(dx, dy)| !self.board.is_occupied(x + dx, y + dy))
    }

    /// Try to translate the active piece; commits only if the target is
    /// valid. Returns whether the move was applied.
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if !self.can_place(&active.matrix, active.x + dx, active.y + dy) {
            return false;
        }
        self.active = Some(ActivePiece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Try a 90-degree clockwise rotation in place. No wall kicks: if the
    /// rotated matrix does not fit at the current anchor, nothing changes.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let rotated = active.matrix.rotated();
        if !self.can_place(&rotated, active.x, active.y) {
            return false;
        }
        self.active = Some(ActivePiece {
            matrix: rotated,
            ..active
        });
        true
    }

    /// Apply a host command. `Restart` always succeeds; the rest report
    /// whether the piece actually moved.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::SoftDrop => self.soft_drop(),
            GameCommand::Rotate => self.rotate(),
            GameCommand::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Advance the fall clock by `elapsed_ms`.
    ///
    /// When the accumulated time reaches the fall interval, the accumulator
    /// resets and the piece attempts one downward step; a refused step locks
    /// the piece. At most one gravity step happens per call.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.game_over {
            return;
        }
        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms {
            return;
        }
        self.fall_timer_ms = 0;
        if !self.try_move(0, 1) {
            self.lock_active();
        }
    }

    /// Commit the active piece into the board, clear rows, spawn the next.
    ///
    /// In-bounds cells are locked even when some cell sits above the top;
    /// any off-top cell then ends the game without clearing or respawning.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let mut overflowed = false;
        for &(x, y) in active.cells().iter() {
            if y < 0 {
                overflowed = true;
            } else {
                self.board.set(x, y, Some(active.kind));
            }
        }
        if overflowed {
            self.game_over = true;
            return;
        }

        let cleared = self.board.clear_full_rows();
        self.score += cleared as u32 * LINE_SCORE;
        self.lines += cleared as u32;

        self.spawn_piece();
    }

    /// Draw the next kind and place it at the spawn position. A blocked
    /// spawn ends the game before the piece ever accepts a command.
    fn spawn_piece(&mut self) {
        let piece = ActivePiece::spawn(self.pieces.next_kind(), self.board.width());
        if !self.can_place(&piece.matrix, piece.x, piece.y) {
            self.game_over = true;
            return;
        }
        self.active = Some(piece);
    }

    /// Reset board, score, and timers; keep the piece source and interval.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.fall_timer_ms = 0;
        self.game_over = false;
        self.spawn_piece();
    }

    /// Fill `out` with a render-ready view of the current state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.active = self.active.as_ref().map(|piece| ActiveSnapshot {
            kind: piece.kind,
            cells: piece.cells(),
        });
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::empty(self.board.width(), self.board.height());
        self.snapshot_into(&mut out);
        out
    }
}
