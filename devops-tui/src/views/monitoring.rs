//! Monitoring view: resource usage, application metrics, uptime and alerts.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Widget},
};

use super::layout::{PAGE_HEADER_HEIGHT, columns, grid, grid_height, page_header, split_row, stack};
use super::traits::ViewRenderer;
use crate::catalog::ResourceStatus;
use crate::catalog::monitoring::{
    ALERTS, APP_METRICS, AppMetric, SUBTITLE, SYSTEM_METRICS, SystemMetric, TITLE, TOOLS, UPTIME,
};
use crate::widgets::{
    BadgeVariant, CARD_CHROME, FeatureTile, badge, card, dot, tile_block,
};
use crate::{App, Theme};

const METRIC_HEIGHT: u16 = 5;
const ALERT_ROWS: u16 = 2;

#[derive(Debug, Clone, Default)]
pub struct MonitoringView;

impl MonitoringView {
    fn heights(&self, width: u16) -> [u16; 6] {
        let metric_cols = columns(width, 2, 4);
        [
            PAGE_HEADER_HEIGHT,
            CARD_CHROME + grid_height(SYSTEM_METRICS.len(), metric_cols, METRIC_HEIGHT),
            CARD_CHROME + grid_height(APP_METRICS.len(), metric_cols, METRIC_HEIGHT),
            CARD_CHROME + UPTIME.len() as u16,
            CARD_CHROME + ALERTS.len() as u16 * ALERT_ROWS,
            grid_height(TOOLS.len(), columns(width, 3, 3), FeatureTile::HEIGHT),
        ]
    }

    fn render_system_metric(metric: &SystemMetric, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = tile_block(theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let [name_row, gauge_row, value_row] =
            Layout::vertical([Constraint::Length(1); 3]).areas(inner);
        split_row(
            name_row,
            buf,
            Line::styled(metric.name, theme.bold),
            Line::from(badge(
                metric.status.as_str(),
                BadgeVariant::from(metric.status),
                theme,
            )),
        );

        let fill = match metric.status {
            ResourceStatus::Good => theme.primary,
            ResourceStatus::Warning => theme.warning,
        };
        let ratio = if metric.max == 0 {
            0.0
        } else {
            (f64::from(metric.value) / f64::from(metric.max)).clamp(0.0, 1.0)
        };
        Gauge::default()
            .ratio(ratio)
            .label("")
            .use_unicode(true)
            .gauge_style(Style::default().fg(fill).bg(theme.track))
            .render(gauge_row, buf);

        Line::styled(format!("{}% of {}%", metric.value, metric.max), theme.dim)
            .render(value_row, buf);
    }

    fn render_app_metric(metric: &AppMetric, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = tile_block(theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let [name_row, value_row, change_row] =
            Layout::vertical([Constraint::Length(1); 3]).areas(inner);
        Line::styled(metric.name, theme.dim).render(name_row, buf);
        // Both directions are improvements for the sampled metrics.
        split_row(
            value_row,
            buf,
            Line::styled(metric.current, theme.heading),
            Line::styled(metric.trend.glyph(), Style::default().fg(theme.success)),
        );
        Line::styled(metric.change_label(), theme.dim).render(change_row, buf);
    }

    fn render_uptime(area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = card("Service Uptime", Some("◷"), theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = stack(inner, &vec![1; UPTIME.len()]);
        for (service, row) in UPTIME.iter().zip(rows) {
            split_row(
                row,
                buf,
                Line::from(vec![
                    dot(theme.success),
                    Span::raw(" "),
                    Span::styled(service.service, theme.bold),
                ]),
                Line::from(vec![
                    Span::styled(format!("{}  ", service.uptime), Style::default().fg(theme.fg)),
                    badge(service.status, BadgeVariant::Default, theme),
                ]),
            );
        }
    }

    fn render_alerts(area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = card("Recent Alerts", Some("⚠"), theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = stack(inner, &vec![ALERT_ROWS; ALERTS.len()]);
        for (alert, row) in ALERTS.iter().zip(rows) {
            let [top, bottom] = Layout::vertical([Constraint::Length(1); 2]).areas(row);
            Line::from(vec![
                badge(alert.kind.as_str(), BadgeVariant::from(alert.kind), theme),
                Span::raw(" "),
                Span::styled(alert.message, Style::default().fg(theme.fg)),
            ])
            .render(top, buf);
            Line::styled(format!("  {} • {}", alert.service, alert.time), theme.dim)
                .render(bottom, buf);
        }
    }
}

impl ViewRenderer for MonitoringView {
    fn render(&self, area: Rect, buf: &mut Buffer, app: &App) {
        let theme = &app.theme;
        let areas = stack(area, &self.heights(area.width));
        let metric_cols = columns(area.width, 2, 4);

        page_header(areas[0], buf, TITLE, SUBTITLE, Some("Alerts"), theme);

        let block = card("System Resources", Some("▣"), theme);
        let inner = block.inner(areas[1]);
        block.render(areas[1], buf);
        let cells = grid(inner, SYSTEM_METRICS.len(), metric_cols, METRIC_HEIGHT);
        for (metric, cell) in SYSTEM_METRICS.iter().zip(cells) {
            Self::render_system_metric(metric, cell, buf, theme);
        }

        let block = card("Application Metrics", Some("◆"), theme);
        let inner = block.inner(areas[2]);
        block.render(areas[2], buf);
        let cells = grid(inner, APP_METRICS.len(), metric_cols, METRIC_HEIGHT);
        for (metric, cell) in APP_METRICS.iter().zip(cells) {
            Self::render_app_metric(metric, cell, buf, theme);
        }

        Self::render_uptime(areas[3], buf, theme);
        Self::render_alerts(areas[4], buf, theme);

        let cells = grid(areas[5], TOOLS.len(), columns(area.width, 3, 3), FeatureTile::HEIGHT);
        for (tool, cell) in TOOLS.iter().zip(cells) {
            FeatureTile::new(tool, theme).render(cell, buf);
        }
    }

    fn height(&self, width: u16, _app: &App) -> u16 {
        self.heights(width).iter().sum()
    }

    fn title(&self) -> &str {
        "Monitoring"
    }
}
