//! Inner tab strip used inside cards.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Tabs, Widget},
};

use crate::Theme;

/// A one-row strip of tab titles with the selected one highlighted.
pub struct TabStrip<'a> {
    titles: &'a [&'a str],
    selected: usize,
    theme: &'a Theme,
}

impl<'a> TabStrip<'a> {
    pub fn new(titles: &'a [&'a str], selected: usize, theme: &'a Theme) -> Self {
        Self {
            titles,
            selected,
            theme,
        }
    }
}

impl Widget for TabStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Tabs::new(self.titles.iter().copied())
            .select(self.selected)
            .style(self.theme.dim)
            .highlight_style(
                Style::default()
                    .fg(self.theme.fg)
                    .bg(self.theme.selection)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│")
            .render(area, buf);
    }
}
