//! Application state for the TUI.

use crate::views::{CONFIG_FILES, Section, SectionSelector};
use crate::widgets::{Accordion, SectionMenu};

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Section menu overlay (compact navigation).
    Menu,
    /// Key binding help overlay.
    Help,
}

/// Which half of the stack an inner tab strip shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackTab {
    #[default]
    Frontend,
    Backend,
}

impl StackTab {
    pub const ALL: [StackTab; 2] = [StackTab::Frontend, StackTab::Backend];

    pub fn index(&self) -> usize {
        match self {
            Self::Frontend => 0,
            Self::Backend => 1,
        }
    }

    /// The other tab. With two tabs, next and previous coincide.
    pub fn toggled(&self) -> StackTab {
        match self {
            Self::Frontend => Self::Backend,
            Self::Backend => Self::Frontend,
        }
    }
}

/// Core application state.
///
/// The section selector lives here and nowhere else; views read it through
/// `&App` and changes go through `App::select`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub selector: SectionSelector,
    pub mode: Mode,
    pub menu: SectionMenu,
    /// Workflow template tab on the CI/CD section.
    pub workflow_tab: StackTab,
    /// Deployment steps tab on the guide section.
    pub steps_tab: StackTab,
    /// Configuration files accordion on the guide section.
    pub config_files: Accordion,
    /// Body scroll offset of the current section, in rows.
    pub scroll: u16,
    /// Animation frame counter, advanced on every tick.
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selector: SectionSelector::new(),
            mode: Mode::default(),
            menu: SectionMenu::default(),
            workflow_tab: StackTab::default(),
            steps_tab: StackTab::default(),
            config_files: Accordion::new(CONFIG_FILES.len()),
            scroll: 0,
            tick: 0,
        }
    }
}

impl AppState {
    /// Creates state showing `section` first.
    pub fn starting_at(section: Section) -> Self {
        Self {
            selector: SectionSelector::starting_at(section),
            ..Default::default()
        }
    }

    /// Resets per-section UI state after the section changed.
    ///
    /// Each section opens scrolled to the top with its inner tabs on their
    /// first entry and every accordion item collapsed.
    pub fn reset_section_state(&mut self) {
        self.scroll = 0;
        self.workflow_tab = StackTab::default();
        self.steps_tab = StackTab::default();
        self.config_files.collapse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_defaults_to_normal() {
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn stack_tab_defaults_to_frontend() {
        assert_eq!(StackTab::default(), StackTab::Frontend);
    }

    #[test]
    fn stack_tab_toggles_between_both_tabs() {
        assert_eq!(StackTab::Frontend.toggled(), StackTab::Backend);
        assert_eq!(StackTab::Backend.toggled(), StackTab::Frontend);
    }

    #[test]
    fn stack_tab_index_matches_all() {
        for (i, tab) in StackTab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
        }
    }

    #[test]
    fn app_state_defaults_to_dashboard() {
        let state = AppState::default();
        assert_eq!(state.selector.current(), Section::Dashboard);
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.scroll, 0);
        assert_eq!(state.config_files.open(), None);
    }

    #[test]
    fn starting_at_sets_initial_section() {
        let state = AppState::starting_at(Section::Guide);
        assert_eq!(state.selector.current(), Section::Guide);
    }

    #[test]
    fn reset_section_state_restores_defaults() {
        let mut state = AppState {
            scroll: 12,
            workflow_tab: StackTab::Backend,
            steps_tab: StackTab::Backend,
            ..Default::default()
        };
        state.config_files.toggle();

        state.reset_section_state();

        assert_eq!(state.scroll, 0);
        assert_eq!(state.workflow_tab, StackTab::Frontend);
        assert_eq!(state.steps_tab, StackTab::Frontend);
        assert_eq!(state.config_files.open(), None);
    }
}
