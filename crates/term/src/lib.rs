//! Terminal presentation module.
//!
//! Rendering is split in two: [`GameView`] is a pure mapping from an engine
//! snapshot to a [`FrameBuffer`], and [`TermRenderer`] flushes framebuffers
//! to the real terminal with diffed output.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TermRenderer;
