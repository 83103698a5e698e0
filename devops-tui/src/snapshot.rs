//! Headless rendering of a section to plain text.

use std::io;

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect, text::Span};

use crate::app::{App, TuiConfig};
use crate::views::{Section, view_for};
use crate::widgets::{NAV_HEIGHT, STATUS_HEIGHT};

/// Renders `section` as it would appear in a `width` column terminal.
///
/// Without a `height` the snapshot is tall enough to show the whole
/// section. Trailing spaces are trimmed from each line.
pub fn render_snapshot(section: Section, width: u16, height: Option<u16>) -> io::Result<String> {
    let mut app = App::with_config(TuiConfig {
        initial_section: section,
        ..Default::default()
    });
    app.viewport = Rect::new(0, 0, width, 0);

    let height = height.unwrap_or_else(|| {
        NAV_HEIGHT + view_for(section).height(width, &app) + STATUS_HEIGHT
    });
    app.viewport.height = height;

    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| app.render(f))?;

    Ok(buffer_to_text(terminal.backend().buffer()))
}

/// Converts a buffer to text, one line per row.
fn buffer_to_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut x = area.left();
        while x < area.right() {
            let symbol = buf[(x, y)].symbol();
            line.push_str(symbol);
            // Wide glyphs own the cells that follow them.
            x += Span::raw(symbol).width().max(1) as u16;
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
