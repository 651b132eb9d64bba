//! Terminal presentation for the game core.

pub mod terminal_renderer;
pub mod viewport;

pub use terminal_renderer::TerminalRenderer;
pub use viewport::Viewport;
