//! View system for the DevOps Center TUI.
//!
//! This module provides:
//! - `Section` and `SectionSelector` for the single current selection
//! - `ViewRenderer` trait for section rendering
//! - The four section views (Dashboard, CI/CD, Monitoring, Deploy Guide)

mod cicd;
mod dashboard;
mod guide;
mod layout;
mod monitoring;
mod selector;
mod traits;

pub use cicd::{CiCdView, WORKFLOW_TABS, workflow_template};
pub use dashboard::DashboardView;
pub use guide::{CONFIG_FILES, ConfigFile, GuideView};
pub use layout::{LARGE_WIDTH, MEDIUM_WIDTH, columns, render_scrolled};
pub use monitoring::MonitoringView;
pub use selector::{Section, SectionSelector, UnknownSection};
pub use traits::ViewRenderer;

/// The renderer for `section`.
pub fn view_for(section: Section) -> &'static dyn ViewRenderer {
    match section {
        Section::Dashboard => &DashboardView,
        Section::CiCd => &CiCdView,
        Section::Monitoring => &MonitoringView,
        Section::Guide => &GuideView,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{buffer::Buffer, layout::Rect};

    use super::ViewRenderer;
    use crate::App;

    /// Renders `view` at its full height and returns each row as text.
    pub fn render_lines(view: &dyn ViewRenderer, width: u16, app: &App) -> Vec<String> {
        let area = Rect::new(0, 0, width, view.height(width, app));
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, app);

        (0..area.height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_a_view_with_matching_title() {
        for section in Section::ALL {
            assert_eq!(view_for(section).title(), section.label());
        }
    }
}
