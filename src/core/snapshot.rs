//! Read-only render snapshot of the engine.
//!
//! The presentation layer draws from this value instead of reaching into the
//! engine, so the renderer and the game loop stay decoupled.

use crate::core::game::{Phase, Piece};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    /// Locked cells, row-major.
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<Piece>,
    pub next: Option<Piece>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            score: 0,
            lines: 0,
            level: 1,
            phase: Phase::Idle,
        }
    }
}
