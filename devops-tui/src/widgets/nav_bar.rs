//! Navigation bar across the top of the screen.
//!
//! Wide terminals get the brand plus a tab per section. Narrow terminals get
//! the brand, the current section and a hint for the section menu.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs, Widget},
};

use crate::Theme;
use crate::views::Section;

/// Rows taken by the navigation bar, including its bottom border.
pub const NAV_HEIGHT: u16 = 2;

/// Terminals narrower than this get the compact navigation bar.
pub const COMPACT_WIDTH: u16 = 80;

pub const BRAND: &str = "DevOps Center";

const MENU_HINT: &str = "[m] menu";

pub struct NavBar<'a> {
    current: Section,
    compact: bool,
    theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    pub fn new(current: Section, compact: bool, theme: &'a Theme) -> Self {
        Self {
            current,
            compact,
            theme,
        }
    }

    fn brand(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("🚀 ", Style::default().fg(self.theme.primary)),
            Span::styled(BRAND, self.theme.heading),
        ])
    }

    /// The compact hint. The section label is dropped when it would push
    /// the menu key into the brand.
    fn menu_hint(&self, width: u16, brand_width: u16) -> Line<'static> {
        let menu = Span::styled(MENU_HINT, self.theme.dim);
        let label = self.current.label();
        let full_width = brand_width + (label.len() + 2 + MENU_HINT.len()) as u16;
        if width < full_width {
            return Line::from(menu);
        }
        Line::from(vec![
            Span::styled(label, self.theme.bold),
            Span::raw("  "),
            menu,
        ])
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        block.render(area, buf);

        let brand = self.brand();
        if self.compact {
            let hint = self.menu_hint(inner.width, brand.width() as u16 + 2);
            let hint_width = (hint.width() as u16).min(inner.width);
            let [brand_area, hint_area] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(hint_width)])
                    .areas(inner);
            brand.render(brand_area, buf);
            hint.right_aligned().render(hint_area, buf);
            return;
        }

        let brand_width = brand.width() as u16 + 2;
        let [brand_area, rest] =
            Layout::horizontal([Constraint::Length(brand_width), Constraint::Min(0)]).areas(inner);
        brand.render(brand_area, buf);

        let titles = Section::ALL
            .iter()
            .map(|s| format!("{} {}", s.index() + 1, s.label()));

        Tabs::new(titles)
            .select(self.current.index())
            .style(Style::default().fg(self.theme.muted))
            .highlight_style(
                Style::default()
                    .fg(self.theme.bg)
                    .bg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(" ")
            .render(rest, buf);
    }
}
