//! Footer status bar.
//!
//! Shows the key hints for the current section on the left and either the
//! latest status message or the section position on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::Theme;
use crate::views::Section;

/// Rows taken by the status bar.
pub const STATUS_HEIGHT: u16 = 1;

pub struct StatusBar<'a> {
    section: Section,
    message: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(section: Section, message: Option<&'a str>, theme: &'a Theme) -> Self {
        Self {
            section,
            message,
            theme,
        }
    }

    /// Key hints relevant to `section`.
    pub fn hints(section: Section) -> &'static [(&'static str, &'static str)] {
        match section {
            Section::Dashboard | Section::Monitoring => &[
                ("Tab", "next"),
                ("1-4", "jump"),
                ("j/k", "scroll"),
                ("?", "help"),
                ("q", "quit"),
            ],
            Section::CiCd => &[
                ("Tab", "next"),
                ("h/l", "template"),
                ("y", "copy"),
                ("s", "download"),
                ("j/k", "scroll"),
                ("?", "help"),
                ("q", "quit"),
            ],
            Section::Guide => &[
                ("Tab", "next"),
                ("h/l", "steps"),
                ("n/p", "file"),
                ("Enter", "expand"),
                ("y", "copy"),
                ("s", "download"),
                ("?", "help"),
                ("q", "quit"),
            ],
        }
    }

    fn hint_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, label) in Self::hints(self.section) {
            spans.push(Span::styled(*key, Style::default().fg(self.theme.primary)));
            spans.push(Span::styled(format!(" {}  ", label), self.theme.dim));
        }
        Line::from(spans)
    }

    fn right_line(&self) -> Line<'static> {
        match self.message {
            Some(message) => Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(self.theme.warning),
            )),
            None => Line::from(Span::styled(
                format!("{}/{}", self.section.index() + 1, Section::ALL.len()),
                self.theme.dim,
            )),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.surface));

        let right = self.right_line();
        let right_width = (right.width() as u16 + 1).min(area.width);
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area);

        self.hint_line().render(left_area, buf);
        right.render(right_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devops_default;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(section: Section, message: Option<&str>) -> String {
        let theme = devops_default();
        let backend = TestBackend::new(120, STATUS_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                f.render_widget(StatusBar::new(section, message, &theme), area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn shows_section_position_without_message() {
        let content = render(Section::Monitoring, None);
        assert!(content.contains("3/4"), "Expected '3/4' in: {}", content);
    }

    #[test]
    fn message_replaces_position() {
        let content = render(Section::CiCd, Some("Copied to clipboard"));
        assert!(content.contains("Copied to clipboard"));
        assert!(!content.contains("2/4"));
    }

    #[test]
    fn cicd_hints_mention_copy_and_download() {
        let content = render(Section::CiCd, None);
        assert!(content.contains("copy"));
        assert!(content.contains("download"));
    }

    #[test]
    fn dashboard_hints_do_not_offer_copy() {
        let content = render(Section::Dashboard, None);
        assert!(!content.contains("copy"));
        assert!(content.contains("quit"));
    }
}
