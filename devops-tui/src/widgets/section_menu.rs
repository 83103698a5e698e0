//! Section menu overlay for compact navigation.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::Theme;
use crate::views::Section;

/// Highlight state of the section menu.
#[derive(Debug, Clone, Default)]
pub struct SectionMenu {
    highlighted: usize,
}

impl SectionMenu {
    /// Opens the menu with `current` highlighted.
    pub fn open_at(&mut self, current: Section) {
        self.highlighted = current.index();
    }

    /// The section under the cursor.
    pub fn highlighted(&self) -> Section {
        Section::from_index(self.highlighted).unwrap_or_default()
    }

    /// Moves the cursor down, wrapping at the end.
    pub fn select_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % Section::ALL.len();
    }

    /// Moves the cursor up, wrapping at the start.
    pub fn select_prev(&mut self) {
        if self.highlighted == 0 {
            self.highlighted = Section::ALL.len() - 1;
        } else {
            self.highlighted -= 1;
        }
    }

    /// Renders the menu as a box pinned below the navigation bar.
    pub fn render(&self, frame: &mut Frame, current: Section, theme: &Theme) {
        let area = frame.area();
        let width = 28u16.min(area.width);
        let height = (Section::ALL.len() as u16 + 2).min(area.height);
        let x = area.width.saturating_sub(width);
        let menu_area = Rect::new(x, area.y.saturating_add(1), width, height)
            .intersection(area);

        frame.render_widget(Clear, menu_area);

        let block = Block::default()
            .title(" Sections ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));

        let lines: Vec<Line> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let marker = if *section == current { "● " } else { "  " };
                let style = if i == self.highlighted {
                    Style::default().fg(theme.fg).bg(theme.selection)
                } else if *section == current {
                    Style::default().fg(theme.primary)
                } else {
                    Style::default().fg(theme.fg)
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.primary)),
                    Span::styled(format!("{} {}", i + 1, section.label()), style),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), menu_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devops_default;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn open_at_highlights_current_section() {
        let mut menu = SectionMenu::default();
        menu.open_at(Section::Monitoring);
        assert_eq!(menu.highlighted(), Section::Monitoring);
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut menu = SectionMenu::default();
        menu.select_prev();
        assert_eq!(menu.highlighted(), Section::Guide);
        menu.select_next();
        assert_eq!(menu.highlighted(), Section::Dashboard);
    }

    #[test]
    fn renders_every_section() {
        let theme = devops_default();
        let menu = SectionMenu::default();
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| menu.render(f, Section::CiCd, &theme))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Sections"));
        for section in Section::ALL {
            assert!(content.contains(section.label()));
        }
        assert!(content.contains("● 2 CI/CD"));
    }
}
