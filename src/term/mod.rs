//! Terminal presentation layer: framebuffer, renderer, and game view.
//!
//! The view is pure (snapshot in, framebuffer out); only `TerminalRenderer`
//! touches the real terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
