//! Traits for view rendering in the DevOps Center TUI.

use ratatui::{buffer::Buffer, layout::Rect};

use crate::App;

/// Trait for section views that can render themselves.
///
/// Views draw onto an off-screen buffer as tall as [`ViewRenderer::height`]
/// reports; the app copies the visible slice into the frame so long
/// sections can scroll.
pub trait ViewRenderer {
    /// Render the full view into `area`.
    fn render(&self, area: Rect, buf: &mut Buffer, app: &App);

    /// Rows the view needs at the given width.
    fn height(&self, width: u16, app: &App) -> u16;

    /// Get the view's title for display.
    fn title(&self) -> &str;
}
