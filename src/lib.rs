//! blockfall - a terminal falling-block puzzle game.
//!
//! The crate splits cleanly in two: [`core`] is the pure game-state engine
//! (grid, pieces, collision, line clears, scoring, lifecycle) and knows
//! nothing about terminals; [`term`] and [`input`] are the thin presentation
//! layer that draws snapshots and feeds commands.
//!
//! # Example
//!
//! ```
//! use blockfall::core::Game;
//! use blockfall::types::GameAction;
//!
//! let mut game = Game::new(12345);
//! game.apply(GameAction::Start);
//! game.apply(GameAction::MoveLeft);
//! game.apply(GameAction::HardDrop);
//!
//! // One drop on an empty board can't complete a row.
//! assert_eq!(game.lines(), 0);
//! assert!(game.is_running());
//! ```

pub mod core;
pub mod input;
pub mod term;
pub mod types;
