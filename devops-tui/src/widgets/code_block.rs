//! Bordered, unwrapped block of template text.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::Theme;

/// Renders preformatted text inside a border. Long lines are clipped,
/// never wrapped, so the height is the line count plus the border.
pub struct CodeBlock<'a> {
    text: &'a str,
    theme: &'a Theme,
}

impl<'a> CodeBlock<'a> {
    pub fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self { text, theme }
    }

    /// Rows needed to show `text` in full.
    pub fn height(text: &str) -> u16 {
        text.lines().count() as u16 + 2
    }
}

impl Widget for CodeBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.surface));

        let lines: Vec<Line> = self
            .text
            .lines()
            .map(|line| Line::styled(line, self.theme.dim))
            .collect();

        Paragraph::new(Text::from(lines))
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devops_default;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn height_counts_lines_and_border() {
        assert_eq!(CodeBlock::height("a\nb\nc"), 5);
        assert_eq!(CodeBlock::height(""), 2);
    }

    #[test]
    fn renders_each_line_inside_border() {
        let theme = devops_default();
        let text = "FROM node:18-alpine\nWORKDIR /app";
        let area = Rect::new(0, 0, 30, CodeBlock::height(text));
        let mut buf = Buffer::empty(area);

        CodeBlock::new(text, &theme).render(area, &mut buf);

        assert!(row(&buf, 1).contains("FROM node:18-alpine"));
        assert!(row(&buf, 2).contains("WORKDIR /app"));
        assert!(row(&buf, 0).starts_with('┌'));
    }

    #[test]
    fn long_lines_are_clipped_not_wrapped() {
        let theme = devops_default();
        let text = "0123456789abcdefghij";
        let area = Rect::new(0, 0, 10, CodeBlock::height(text));
        let mut buf = Buffer::empty(area);

        CodeBlock::new(text, &theme).render(area, &mut buf);

        assert!(row(&buf, 1).contains("01234567"));
        assert!(!row(&buf, 2).contains('8'));
    }
}
