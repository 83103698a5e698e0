//! Key binding help overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::Theme;

/// Rows of the help overlay: key column and description.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "Next / previous section"),
    ("1-4", "Jump to section"),
    ("m", "Section menu"),
    ("j/k  ↑/↓", "Scroll"),
    ("g / G", "Top / bottom"),
    ("h/l  ←/→", "Switch inner tab"),
    ("n / p", "Next / previous config file"),
    ("Enter / Space", "Expand or collapse file"),
    ("y", "Copy template"),
    ("s", "Download template"),
    ("Esc", "Close overlay"),
    ("q", "Quit"),
];

/// Renders the help overlay centered on the screen.
pub fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let width = 48u16.min(area.width.saturating_sub(2));
    let height = (HELP_ENTRIES.len() as u16 + 2).min(area.height);
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    let dialog_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));

    let lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .map(|(key, description)| {
            Line::from(vec![
                Span::styled(format!("{:<17}", key), Style::default().fg(theme.primary)),
                Span::styled(*description, Style::default().fg(theme.fg)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), dialog_area);
}
