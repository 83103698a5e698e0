//! CI/CD view: workflow runs, workflow templates and per-environment
//! configuration.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::layout::{PAGE_HEADER_HEIGHT, columns, grid, grid_height, page_header, split_row, stack};
use super::traits::ViewRenderer;
use crate::catalog::cicd::{ENVIRONMENT_CONFIGS, SUBTITLE, TITLE, WORKFLOWS, Workflow};
use crate::state::StackTab;
use crate::templates::Template;
use crate::widgets::{
    BadgeVariant, CARD_CHROME, CodeBlock, TabStrip, badge, card, run_glyph, tile_block,
};
use crate::{App, Theme};

const WORKFLOW_ROWS: u16 = 2;
const CONFIG_BOX_HEIGHT: u16 = 5;
/// Tab strip plus the template heading row.
const TEMPLATE_CHROME: u16 = 2;

pub const WORKFLOW_TABS: [&str; 2] = ["Frontend Deploy", "Backend Deploy"];

/// Template shown under the given workflow tab.
pub fn workflow_template(tab: StackTab) -> Template {
    match tab {
        StackTab::Frontend => Template::FrontendWorkflow,
        StackTab::Backend => Template::BackendWorkflow,
    }
}

#[derive(Debug, Clone, Default)]
pub struct CiCdView;

impl CiCdView {
    fn heights(&self, width: u16, app: &App) -> [u16; 4] {
        let template = workflow_template(app.state.workflow_tab).contents();
        [
            PAGE_HEADER_HEIGHT,
            CARD_CHROME + WORKFLOWS.len() as u16 * WORKFLOW_ROWS,
            CARD_CHROME + TEMPLATE_CHROME + CodeBlock::height(&template),
            CARD_CHROME
                + grid_height(
                    ENVIRONMENT_CONFIGS.len(),
                    columns(width, 3, 3),
                    CONFIG_BOX_HEIGHT,
                ),
        ]
    }

    fn render_workflow(workflow: &Workflow, area: Rect, buf: &mut Buffer, app: &App) {
        let theme = &app.theme;
        let [top, bottom] = Layout::vertical([Constraint::Length(1); 2]).areas(area);

        split_row(
            top,
            buf,
            Line::from(vec![
                run_glyph(workflow.status, app.state.tick, theme),
                Span::raw(" "),
                Span::styled(workflow.name, theme.bold),
            ]),
            Line::from(badge(
                workflow.status.as_str(),
                BadgeVariant::from(workflow.status),
                theme,
            )),
        );
        split_row(
            bottom,
            buf,
            Line::styled(
                format!(
                    "  {} • {} • {}",
                    workflow.file, workflow.last_run, workflow.duration
                ),
                theme.dim,
            ),
            Line::from(vec![
                Span::styled("⎇ ", Style::default().fg(theme.primary)),
                Span::styled(workflow.branch, theme.dim),
            ]),
        );
    }

    fn render_templates(area: Rect, buf: &mut Buffer, app: &App) {
        let theme = &app.theme;
        let block = card("Workflow Templates", Some("▦"), theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let [tabs_row, heading_row, code_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        TabStrip::new(&WORKFLOW_TABS, app.state.workflow_tab.index(), theme)
            .render(tabs_row, buf);

        let template = workflow_template(app.state.workflow_tab);
        split_row(
            heading_row,
            buf,
            Line::styled(template.file_name(), theme.bold),
            action_hints(theme),
        );

        let contents = template.contents();
        CodeBlock::new(&contents, theme).render(code_area, buf);
    }

    fn render_configs(area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = card("Environment Configuration", Some("⚙"), theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let cells = grid(
            inner,
            ENVIRONMENT_CONFIGS.len(),
            columns(area.width, 3, 3),
            CONFIG_BOX_HEIGHT,
        );
        for (config, cell) in ENVIRONMENT_CONFIGS.iter().zip(cells) {
            let lines: Vec<Line> = config
                .settings
                .iter()
                .map(|setting| {
                    Line::from(vec![
                        Span::styled(format!("{}: ", setting.key), theme.dim),
                        Span::styled(setting.value, Style::default().fg(theme.fg)),
                    ])
                })
                .collect();
            Paragraph::new(lines)
                .block(tile_block(theme).title(Span::styled(format!(" {} ", config.name), theme.bold)))
                .render(cell, buf);
        }
    }
}

/// Right-aligned key hints for the copy and download actions.
pub(super) fn action_hints(theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("[y]", Style::default().fg(theme.primary)),
        Span::styled(" Copy  ", theme.dim),
        Span::styled("[s]", Style::default().fg(theme.primary)),
        Span::styled(" Download", theme.dim),
    ])
}

impl ViewRenderer for CiCdView {
    fn render(&self, area: Rect, buf: &mut Buffer, app: &App) {
        let theme = &app.theme;
        let areas = stack(area, &self.heights(area.width, app));

        page_header(areas[0], buf, TITLE, SUBTITLE, Some("Configure"), theme);

        let block = card("Workflow Status", Some("⟳"), theme);
        let inner = block.inner(areas[1]);
        block.render(areas[1], buf);
        let rows = stack(inner, &vec![WORKFLOW_ROWS; WORKFLOWS.len()]);
        for (workflow, row) in WORKFLOWS.iter().zip(rows) {
            Self::render_workflow(workflow, row, buf, app);
        }

        Self::render_templates(areas[2], buf, app);
        Self::render_configs(areas[3], buf, theme);
    }

    fn height(&self, width: u16, app: &App) -> u16 {
        self.heights(width, app).iter().sum()
    }

    fn title(&self) -> &str {
        "CI/CD"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::render_lines;

    #[test]
    fn lists_workflows_with_status_badges() {
        let app = App::new();
        let content = render_lines(&CiCdView, 120, &app).join("\n");

        assert!(content.contains("CI/CD Pipeline"));
        assert!(content.contains("[ Configure ]"));
        for workflow in WORKFLOWS {
            assert!(content.contains(workflow.name));
            assert!(content.contains(workflow.file));
            assert!(content.contains(&format!(" {} ", workflow.status.as_str())));
        }
    }

    #[test]
    fn frontend_template_is_shown_by_default() {
        let app = App::new();
        let content = render_lines(&CiCdView, 120, &app).join("\n");

        assert!(content.contains("frontend.yml"));
        assert!(content.contains("name: Frontend Deployment"));
        assert!(!content.contains("name: Backend Deployment"));
        assert!(content.contains("[y] Copy  [s] Download"));
    }

    #[test]
    fn backend_tab_swaps_template_and_height() {
        let mut app = App::new();
        let frontend_height = CiCdView.height(120, &app);
        app.state.workflow_tab = StackTab::Backend;

        let content = render_lines(&CiCdView, 120, &app).join("\n");
        assert!(content.contains("backend.yml"));
        assert!(content.contains("name: Backend Deployment"));
        assert!(!content.contains("name: Frontend Deployment"));

        let backend = Template::BackendWorkflow.contents();
        let frontend = Template::FrontendWorkflow.contents();
        let delta = backend.lines().count() as i32 - frontend.lines().count() as i32;
        assert_eq!(
            CiCdView.height(120, &app) as i32 - frontend_height as i32,
            delta
        );
    }

    #[test]
    fn environment_configs_show_every_setting() {
        let app = App::new();
        let content = render_lines(&CiCdView, 120, &app).join("\n");

        for config in ENVIRONMENT_CONFIGS {
            assert!(content.contains(config.name));
            for setting in config.settings {
                assert!(content.contains(setting.key));
            }
        }
    }

    #[test]
    fn workflow_template_follows_tab() {
        assert_eq!(workflow_template(StackTab::Frontend), Template::FrontendWorkflow);
        assert_eq!(workflow_template(StackTab::Backend), Template::BackendWorkflow);
    }
}
