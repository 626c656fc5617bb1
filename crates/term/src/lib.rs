//! Terminal render adapter.
//!
//! A small, game-oriented rendering layer: the engine never touches the
//! terminal, and the terminal code never reaches into game rules.
//!
//! - [`fb`]: a framebuffer of styled character cells (the drawing surface)
//! - [`game_view`]: pure `Game` -> framebuffer projection (full rebuild per
//!   frame)
//! - [`renderer`]: crossterm-backed flusher (raw mode, alternate screen)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
