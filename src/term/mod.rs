//! Terminal frontend module.
//!
//! Renders into a simple framebuffer that is flushed to the terminal,
//! with the presentation model (`TileSurface`) kept separate from both
//! the core and the renderer so it can be unit-tested.

pub mod bell;
pub mod fb;
pub mod renderer;
pub mod surface;
pub mod view;

pub use bell::TerminalBell;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use surface::{TileSurface, TileVisual, MARK_FLASH_MS};
pub use view::{GridView, Viewport};
