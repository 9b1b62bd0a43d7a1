//! Core module - pure game logic with no I/O
//!
//! Everything the engine needs lives here: the grid, the piece shapes and
//! their rotation, collision, line clearing, scoring, and the session state
//! machine. Nothing in this module draws, reads input, or keeps time.

pub mod board;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game::{Game, Phase, Piece};
pub use pieces::{canonical_shape, Shape};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
