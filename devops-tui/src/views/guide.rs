//! Deploy guide view.
//!
//! Platforms, step-by-step instructions for each half of the stack, the
//! configuration file accordion, the security checklist and reference links.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::cicd::action_hints;
use super::layout::{PAGE_HEADER_HEIGHT, columns, grid, grid_height, page_header, split_row, stack};
use super::traits::ViewRenderer;
use crate::catalog::guide::{
    BACKEND_HEADING, BACKEND_SECURITY, BACKEND_STEPS, FRONTEND_HEADING, FRONTEND_SECURITY,
    FRONTEND_STEPS, PLATFORMS, Platform, RESOURCES, SUBTITLE, TITLE,
};
use crate::state::StackTab;
use crate::templates::Template;
use crate::widgets::{
    BadgeVariant, CARD_CHROME, CodeBlock, TabStrip, badge, card, tile_block,
};
use crate::{App, Theme};

const TILE_HEIGHT: u16 = 4;
const STEP_TABS: [&str; 2] = ["Frontend", "Backend"];

/// An entry in the configuration files accordion.
#[derive(Debug, Clone, Copy)]
pub struct ConfigFile {
    pub template: Template,
    pub description: Option<&'static str>,
}

pub const CONFIG_FILES: &[ConfigFile] = &[
    ConfigFile {
        template: Template::EnvFile,
        description: Some("Copy this template and update with your values"),
    },
    ConfigFile {
        template: Template::Dockerfile,
        description: Some("Docker configuration for containerized deployment"),
    },
    ConfigFile {
        template: Template::PackageScripts,
        description: None,
    },
];

fn steps_for(tab: StackTab) -> (&'static str, &'static [&'static str]) {
    match tab {
        StackTab::Frontend => (FRONTEND_HEADING, FRONTEND_STEPS),
        StackTab::Backend => (BACKEND_HEADING, BACKEND_STEPS),
    }
}

#[derive(Debug, Clone, Default)]
pub struct GuideView;

impl GuideView {
    fn heights(&self, width: u16, app: &App) -> [u16; 6] {
        let (_, steps) = steps_for(app.state.steps_tab);
        [
            PAGE_HEADER_HEIGHT,
            CARD_CHROME + grid_height(PLATFORMS.len(), columns(width, 2, 3), TILE_HEIGHT),
            CARD_CHROME + 2 + steps.len() as u16,
            CARD_CHROME + config_files_height(app),
            CARD_CHROME + security_height(width),
            CARD_CHROME + grid_height(RESOURCES.len(), columns(width, 2, 2), TILE_HEIGHT),
        ]
    }

    fn render_platform(platform: &Platform, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = tile_block(theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let [name_row, kind_row] = Layout::vertical([Constraint::Length(1); 2]).areas(inner);
        Line::from(vec![
            Span::raw(format!("{} ", platform.logo)),
            Span::styled(platform.name, theme.bold),
        ])
        .render(name_row, buf);
        split_row(
            kind_row,
            buf,
            Line::styled(platform.kind, theme.dim),
            Line::from(badge(platform.badge, BadgeVariant::Secondary, theme)),
        );
    }

    fn render_steps(area: Rect, buf: &mut Buffer, app: &App) {
        let theme = &app.theme;
        let block = card("Step-by-Step Deployment", Some("☰"), theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let [tabs_row, heading_row, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        TabStrip::new(&STEP_TABS, app.state.steps_tab.index(), theme).render(tabs_row, buf);

        let (heading, steps) = steps_for(app.state.steps_tab);
        Line::styled(heading, theme.heading).render(heading_row, buf);

        let lines: Vec<Line> = steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), Style::default().fg(theme.bg).bg(theme.primary)),
                    Span::raw(" "),
                    Span::styled(*step, Style::default().fg(theme.fg)),
                ])
            })
            .collect();
        Paragraph::new(lines).render(list_area, buf);
    }

    fn render_config_files(area: Rect, buf: &mut Buffer, app: &App) {
        let theme = &app.theme;
        let accordion = &app.state.config_files;
        let block = card("Configuration Files", Some("▤"), theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let heights: Vec<u16> = CONFIG_FILES
            .iter()
            .enumerate()
            .map(|(i, file)| item_height(file, accordion.is_open(i)))
            .collect();

        for (i, (file, item_area)) in CONFIG_FILES.iter().zip(stack(inner, &heights)).enumerate() {
            let header = accordion.header_line(i, file.template.title(), theme);
            if !accordion.is_open(i) {
                header.render(item_area, buf);
                continue;
            }

            let description_rows = u16::from(file.description.is_some());
            let [header_row, description_row, code_area] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(description_rows),
                Constraint::Min(0),
            ])
            .areas(item_area);

            split_row(header_row, buf, header, action_hints(theme));
            if let Some(description) = file.description {
                Line::styled(format!("  {}", description), theme.dim).render(description_row, buf);
            }
            let contents = file.template.contents();
            CodeBlock::new(&contents, theme).render(code_area, buf);
        }
    }

    fn render_security(area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = card("Security Checklist", Some("⛨"), theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let lists = [
            ("Backend Security", BACKEND_SECURITY),
            ("Frontend Security", FRONTEND_SECURITY),
        ];
        let cols = columns(area.width, 2, 2);
        let cells = grid(inner, lists.len(), cols, checklist_height());

        for ((heading, items), cell) in lists.iter().zip(cells) {
            let mut lines = vec![Line::styled(*heading, theme.bold)];
            lines.extend(items.iter().map(|item| {
                Line::from(vec![
                    Span::styled("✔ ", Style::default().fg(theme.success)),
                    Span::styled(*item, Style::default().fg(theme.fg)),
                ])
            }));
            Paragraph::new(lines).render(cell, buf);
        }
    }
}

fn item_height(file: &ConfigFile, open: bool) -> u16 {
    if !open {
        return 1;
    }
    let contents = file.template.contents();
    1 + u16::from(file.description.is_some()) + CodeBlock::height(&contents)
}

fn config_files_height(app: &App) -> u16 {
    CONFIG_FILES
        .iter()
        .enumerate()
        .map(|(i, file)| item_height(file, app.state.config_files.is_open(i)))
        .sum()
}

fn checklist_height() -> u16 {
    1 + BACKEND_SECURITY.len().max(FRONTEND_SECURITY.len()) as u16
}

fn security_height(width: u16) -> u16 {
    grid_height(2, columns(width, 2, 2), checklist_height())
}

impl ViewRenderer for GuideView {
    fn render(&self, area: Rect, buf: &mut Buffer, app: &App) {
        let theme = &app.theme;
        let areas = stack(area, &self.heights(area.width, app));

        page_header(areas[0], buf, TITLE, SUBTITLE, Some("Download Guide"), theme);

        let block = card("Deployment Platforms", Some("☁"), theme);
        let inner = block.inner(areas[1]);
        block.render(areas[1], buf);
        let cells = grid(inner, PLATFORMS.len(), columns(area.width, 2, 3), TILE_HEIGHT);
        for (platform, cell) in PLATFORMS.iter().zip(cells) {
            Self::render_platform(platform, cell, buf, theme);
        }

        Self::render_steps(areas[2], buf, app);
        Self::render_config_files(areas[3], buf, app);
        Self::render_security(areas[4], buf, theme);

        let block = card("Useful Resources", Some("↗"), theme);
        let inner = block.inner(areas[5]);
        block.render(areas[5], buf);
        let cells = grid(inner, RESOURCES.len(), columns(area.width, 2, 2), TILE_HEIGHT);
        for (resource, cell) in RESOURCES.iter().zip(cells) {
            Paragraph::new(vec![
                Line::styled(resource.name, theme.bold),
                Line::styled(resource.url, Style::default().fg(theme.info)),
            ])
            .block(tile_block(theme))
            .render(cell, buf);
        }
    }

    fn height(&self, width: u16, app: &App) -> u16 {
        self.heights(width, app).iter().sum()
    }

    fn title(&self) -> &str {
        "Deploy Guide"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::render_lines;

    #[test]
    fn renders_platforms_and_frontend_steps() {
        let app = App::new();
        let content = render_lines(&GuideView, 120, &app).join("\n");

        assert!(content.contains("Deployment Guide"));
        assert!(content.contains("[ Download Guide ]"));
        for platform in PLATFORMS {
            assert!(content.contains(platform.name));
        }
        assert!(content.contains(FRONTEND_HEADING));
        assert!(content.contains(" 1  Install dependencies and build the project"));
        assert!(!content.contains(BACKEND_HEADING));
    }

    #[test]
    fn backend_tab_shows_backend_steps() {
        let mut app = App::new();
        app.state.steps_tab = StackTab::Backend;
        let content = render_lines(&GuideView, 120, &app).join("\n");

        assert!(content.contains(BACKEND_HEADING));
        assert!(content.contains("Set up MongoDB Atlas cluster"));
        assert!(!content.contains(FRONTEND_HEADING));
    }

    #[test]
    fn config_files_start_collapsed() {
        let app = App::new();
        let content = render_lines(&GuideView, 120, &app).join("\n");

        for file in CONFIG_FILES {
            assert!(content.contains(&format!("▸ {}", file.template.title())));
        }
        assert!(!content.contains("FROM node:18-alpine"));
    }

    #[test]
    fn opening_an_item_shows_its_contents_and_grows_the_view() {
        let mut app = App::new();
        let collapsed = GuideView.height(120, &app);

        app.state.config_files.focus_next();
        app.state.config_files.toggle();
        let content = render_lines(&GuideView, 120, &app).join("\n");

        assert!(content.contains("▾ Dockerfile for Backend"));
        assert!(content.contains("Docker configuration for containerized deployment"));
        assert!(content.contains("FROM node:18-alpine"));
        assert!(content.contains("[y] Copy  [s] Download"));

        let expected = 1 + CodeBlock::height(&Template::Dockerfile.contents());
        assert_eq!(GuideView.height(120, &app) - collapsed, expected);
    }

    #[test]
    fn security_checklist_lists_both_sides() {
        let app = App::new();
        let content = render_lines(&GuideView, 120, &app).join("\n");

        assert!(content.contains("Backend Security"));
        assert!(content.contains("Frontend Security"));
        assert!(content.contains("✔ Implement rate limiting"));
        assert!(content.contains("✔ Configure CSP headers"));
    }

    #[test]
    fn resources_show_links() {
        let app = App::new();
        let content = render_lines(&GuideView, 120, &app).join("\n");

        for resource in RESOURCES {
            assert!(content.contains(resource.url));
        }
    }

    #[test]
    fn config_files_match_guide_templates() {
        let templates: Vec<_> = CONFIG_FILES.iter().map(|f| f.template).collect();
        assert_eq!(
            templates,
            [Template::EnvFile, Template::Dockerfile, Template::PackageScripts]
        );
    }
}
