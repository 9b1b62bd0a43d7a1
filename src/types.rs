//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 12;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity timing: a gravity step fires every `BASE_DROP_MS / level`.
pub const BASE_DROP_MS: u32 = 1000;

/// Points awarded per cleared line, multiplied by the level at clear time.
pub const POINTS_PER_LINE: u32 = 100;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All seven kinds, in a fixed order (used for uniform random draws).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Fixed RGB color bound to this kind.
    pub const fn color(self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (231, 76, 60),
            PieceKind::O => (52, 152, 219),
            PieceKind::T => (46, 204, 113),
            PieceKind::L => (155, 89, 182),
            PieceKind::J => (241, 196, 15),
            PieceKind::S => (230, 126, 34),
            PieceKind::Z => (26, 188, 156),
        }
    }

    /// Single-letter label for panels and debug output.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }
}

/// Cell on the board (None = empty, Some = locked block of that kind)
pub type Cell = Option<PieceKind>;

/// Player/driver commands accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    HardDrop,
    Start,
}
