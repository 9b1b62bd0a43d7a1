//! Game module - the engine that owns the whole session
//!
//! Ties board, pieces, RNG, and scoring together: spawning, command
//! application, the shared gravity/lock/clear pipeline, and the
//! Idle -> Running -> GameOver lifecycle. Invalid moves are silent no-ops;
//! the only terminal condition is the game-over phase.

use crate::core::pieces::{canonical_shape, Shape};
use crate::core::rng::SimpleRng;
use crate::core::scoring::{level_for_lines, line_clear_score};
use crate::core::snapshot::GameSnapshot;
use crate::core::Board;
use crate::types::{GameAction, PieceKind, BOARD_WIDTH};

/// Engine lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the first `start()`.
    Idle,
    Running,
    /// Frozen until restart.
    GameOver,
}

/// A falling piece: kind, current shape matrix, and top-left board position.
///
/// Value type. Candidate moves/rotations are built as new `Piece` values and
/// committed only after they pass the collision check, so the engine never
/// holds a colliding piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at its spawn position: horizontally centered, top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = canonical_shape(kind);
        let x = (BOARD_WIDTH as i8 - shape.width() as i8) / 2;
        Self { kind, shape, x, y: 0 }
    }

    /// The piece shifted by (dx, dy).
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The piece turned 90 degrees clockwise, position unchanged.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }

    /// Pure collision check against walls, floor, and locked cells.
    ///
    /// Cells above the visible board (y < 0) only collide with the side
    /// bounds, never with grid content; pieces may straddle the top edge.
    pub fn collides(&self, board: &Board) -> bool {
        self.shape.cells().any(|(dx, dy)| {
            let x = self.x + dx;
            let y = self.y + dy;
            if x < 0 || x >= board.width() as i8 || y >= board.height() as i8 {
                return true;
            }
            y >= 0 && board.is_occupied(x, y)
        })
    }
}

/// Complete game session: grid, active/next pieces, score, lines, level, phase.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    rng: SimpleRng,
    score: u32,
    lines: u32,
    level: u32,
    phase: Phase,
}

impl Game {
    /// Create an idle engine with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            rng: SimpleRng::new(seed),
            score: 0,
            lines: 0,
            level: 1,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_piece(&self) -> Option<Piece> {
        self.next
    }

    /// Start a fresh game. No-op while a game is already running; from
    /// GameOver (or Idle) this resets the whole session and spawns the first
    /// active and next pieces.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.phase = Phase::Running;
        self.active = Some(Piece::spawn(self.rng.draw_kind()));
        self.next = Some(Piece::spawn(self.rng.draw_kind()));
    }

    /// Stop the session and return to Idle. The explicit reset surface for
    /// drivers; `start()` alone will not interrupt a running game.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.next = None;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.phase = Phase::Idle;
    }

    /// Gravity tick. Identical semantics to `move_down()`; exists so drivers
    /// and input dispatch read naturally at their call sites.
    pub fn step(&mut self) {
        self.move_down();
    }

    /// Move the active piece down one row. If the new position collides, the
    /// move is reverted and the piece locks instead, running the full
    /// lock/clear/promote pipeline.
    pub fn move_down(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        let dropped = active.translated(0, 1);
        if dropped.collides(&self.board) {
            self.lock(active);
        } else {
            self.active = Some(dropped);
        }
    }

    pub fn move_left(&mut self) {
        self.try_shift(-1);
    }

    pub fn move_right(&mut self) {
        self.try_shift(1);
    }

    /// Horizontal moves never trigger a lock; they are simply rejected at
    /// walls or against locked cells.
    fn try_shift(&mut self, dx: i8) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        let moved = active.translated(dx, 0);
        if !moved.collides(&self.board) {
            self.active = Some(moved);
        }
    }

    /// Rotate the active piece clockwise. The rotation is applied only if the
    /// turned piece is collision-free; otherwise the prior shape stands.
    /// Atomic from the caller's perspective: no kick search, no partial state.
    pub fn rotate(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        let turned = active.rotated();
        if !turned.collides(&self.board) {
            self.active = Some(turned);
        }
    }

    /// Drop the active piece to its lowest valid position, then lock it via
    /// the shared `move_down()` pipeline.
    pub fn hard_drop(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        let mut landed = active;
        loop {
            let below = landed.translated(0, 1);
            if below.collides(&self.board) {
                break;
            }
            landed = below;
        }
        self.active = Some(landed);

        // Landed piece cannot move down, so this locks immediately.
        self.move_down();
    }

    /// Dispatch a driver/input command.
    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Start => self.start(),
        }
    }

    /// Merge the active piece into the grid, clear lines, update the score,
    /// and promote the next piece.
    fn lock(&mut self, piece: Piece) {
        // Any cell still above the visible board means the stack has reached
        // the top: the piece locks partially off-grid and the game ends.
        let mut above_top = false;
        for (dx, dy) in piece.shape.cells() {
            let y = piece.y + dy;
            if y < 0 {
                above_top = true;
                continue;
            }
            self.board.set(piece.x + dx, y, Some(piece.kind));
        }
        self.active = None;

        if above_top {
            self.phase = Phase::GameOver;
            return;
        }

        let cleared = self.board.clear_full_rows().len();
        if cleared > 0 {
            // Score uses the level in effect before the clear is tallied.
            self.score = self.score.saturating_add(line_clear_score(cleared, self.level));
            self.lines += cleared as u32;
            self.level = level_for_lines(self.lines);
        }

        let Some(incoming) = self.next.take() else {
            return;
        };
        if incoming.collides(&self.board) {
            // Spawn position already occupied: instant game over.
            self.phase = Phase::GameOver;
            return;
        }
        self.active = Some(incoming);
        self.next = Some(Piece::spawn(self.rng.draw_kind()));
    }

    /// Fill a render snapshot from the current state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_cells(&mut out.board);
        out.active = self.active;
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.phase = self.phase;
    }

    /// Build a fresh render snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }

    #[cfg(test)]
    pub(crate) fn set_lines(&mut self, lines: u32) {
        self.lines = lines;
        self.level = level_for_lines(lines);
    }
}
