//! Dashboard view - the default landing section.
//!
//! Quick metrics, the deployment pipeline with per-step progress, the
//! environment status list and a row of quick actions.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Gauge, Widget},
};

use super::layout::{PAGE_HEADER_HEIGHT, columns, grid, grid_height, page_header, split_row, stack};
use super::traits::ViewRenderer;
use crate::catalog::{Health, Tone};
use crate::catalog::dashboard::{
    DEPLOYMENT_STEPS, ENVIRONMENTS, METRICS, QUICK_ACTIONS, QuickMetric, SUBTITLE, TITLE,
};
use crate::widgets::{
    BadgeVariant, CARD_CHROME, FeatureTile, badge, card, dot, step_glyph, tile_block,
};
use crate::{App, Theme};

const METRIC_HEIGHT: u16 = 4;
const ENVIRONMENT_ROWS: u16 = 2;
const GAUGE_WIDTH: u16 = 24;

/// Overview of the deployment pipeline and environments.
#[derive(Debug, Clone, Default)]
pub struct DashboardView;

impl DashboardView {
    fn heights(&self, width: u16) -> [u16; 5] {
        [
            PAGE_HEADER_HEIGHT,
            grid_height(METRICS.len(), columns(width, 4, 4), METRIC_HEIGHT),
            CARD_CHROME + DEPLOYMENT_STEPS.len() as u16,
            CARD_CHROME + ENVIRONMENTS.len() as u16 * ENVIRONMENT_ROWS,
            grid_height(QUICK_ACTIONS.len(), columns(width, 3, 3), FeatureTile::HEIGHT),
        ]
    }

    fn render_metric(metric: &QuickMetric, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = tile_block(theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let [name_row, value_row] = Layout::vertical([Constraint::Length(1); 2]).areas(inner);
        Line::styled(metric.name, theme.dim).render(name_row, buf);
        split_row(
            value_row,
            buf,
            Line::styled(metric.value, theme.heading),
            Line::styled(metric.trend.glyph(), Style::default().fg(tone_color(metric.tone, theme))),
        );
    }

    fn render_pipeline(area: Rect, buf: &mut Buffer, app: &App) {
        let theme = &app.theme;
        let block = card("Deployment Pipeline", Some("⎇"), theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = stack(inner, &vec![1; DEPLOYMENT_STEPS.len()]);
        let gauge_width = GAUGE_WIDTH.min(inner.width / 3);

        for (step, row) in DEPLOYMENT_STEPS.iter().zip(rows) {
            let [glyph_area, name_area, gauge_area, percent_area] = Layout::horizontal([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(gauge_width),
                Constraint::Length(6),
            ])
            .areas(row);

            Line::from(step_glyph(step.status, app.state.tick, theme)).render(glyph_area, buf);
            Line::styled(step.name, theme.bold).render(name_area, buf);
            Gauge::default()
                .percent(step.progress.min(100))
                .label("")
                .use_unicode(true)
                .gauge_style(Style::default().fg(theme.primary).bg(theme.track))
                .render(gauge_area, buf);
            Line::styled(format!("{}%", step.progress), theme.dim)
                .right_aligned()
                .render(percent_area, buf);
        }
    }

    fn render_environments(area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = card("Environment Status", Some("▤"), theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = stack(inner, &vec![ENVIRONMENT_ROWS; ENVIRONMENTS.len()]);
        for (env, row) in ENVIRONMENTS.iter().zip(rows) {
            let [top, bottom] = Layout::vertical([Constraint::Length(1); 2]).areas(row);
            let health_color = match env.health {
                Health::Healthy => theme.success,
                Health::Warning => theme.warning,
                Health::Down => theme.error,
            };
            let status = badge(env.health.as_str(), BadgeVariant::from(env.health), theme);

            split_row(
                top,
                buf,
                Line::from(vec![dot(health_color), Span::raw(" "), Span::styled(env.name, theme.bold)]),
                Line::from(status),
            );
            split_row(
                bottom,
                buf,
                Line::styled(format!("  {}", env.url), theme.dim),
                Line::styled(format!("{} uptime", env.uptime), theme.dim),
            );
        }
    }
}

fn tone_color(tone: Tone, theme: &Theme) -> Color {
    match tone {
        Tone::Success => theme.success,
        Tone::Info => theme.info,
        Tone::Warning => theme.warning,
    }
}

impl ViewRenderer for DashboardView {
    fn render(&self, area: Rect, buf: &mut Buffer, app: &App) {
        let theme = &app.theme;
        let areas = stack(area, &self.heights(area.width));

        page_header(areas[0], buf, TITLE, SUBTITLE, Some("Deploy Now"), theme);

        let metric_cells = grid(areas[1], METRICS.len(), columns(area.width, 4, 4), METRIC_HEIGHT);
        for (metric, cell) in METRICS.iter().zip(metric_cells) {
            Self::render_metric(metric, cell, buf, theme);
        }

        Self::render_pipeline(areas[2], buf, app);
        Self::render_environments(areas[3], buf, theme);

        let action_cells = grid(
            areas[4],
            QUICK_ACTIONS.len(),
            columns(area.width, 3, 3),
            FeatureTile::HEIGHT,
        );
        for (action, cell) in QUICK_ACTIONS.iter().zip(action_cells) {
            FeatureTile::new(action, theme).render(cell, buf);
        }
    }

    fn height(&self, width: u16, _app: &App) -> u16 {
        self.heights(width).iter().sum()
    }

    fn title(&self) -> &str {
        "Dashboard"
    }
}
