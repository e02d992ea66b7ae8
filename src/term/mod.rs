//! Terminal presentation: framebuffer, renderer, and the game view.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, LEADERBOARD_LINES};
pub use renderer::TerminalRenderer;
