//! Card containers and feature tiles.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::Theme;
use crate::catalog::FeatureCard;

/// Rows a card's border adds around its content.
pub const CARD_CHROME: u16 = 2;

/// Bordered card with an optional icon in the title.
pub fn card(title: &str, icon: Option<&str>, theme: &Theme) -> Block<'static> {
    let mut spans = vec![Span::raw(" ")];
    if let Some(icon) = icon {
        spans.push(Span::styled(
            format!("{} ", icon),
            Style::default().fg(theme.primary),
        ));
    }
    spans.push(Span::styled(title.to_string(), theme.bold));
    spans.push(Span::raw(" "));

    Block::default()
        .title(Line::from(spans))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
}

/// Plain bordered box used for tiles nested inside a card.
pub fn tile_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
}

/// Centered tile with an icon, a title and a description.
pub struct FeatureTile<'a> {
    card: &'a FeatureCard,
    theme: &'a Theme,
}

impl<'a> FeatureTile<'a> {
    /// Rows a feature tile needs.
    pub const HEIGHT: u16 = 4;

    pub fn new(card: &'a FeatureCard, theme: &'a Theme) -> Self {
        Self { card, theme }
    }
}

impl Widget for FeatureTile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", self.card.icon),
                    Style::default().fg(self.theme.primary),
                ),
                Span::styled(self.card.title, self.theme.bold),
            ])
            .centered(),
            Line::styled(self.card.description, self.theme.dim).centered(),
        ];

        Paragraph::new(lines)
            .block(tile_block(self.theme))
            .render(area, buf);
    }
}
