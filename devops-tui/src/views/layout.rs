//! Layout helpers shared by the section views.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::traits::ViewRenderer;
use crate::{App, Theme};

/// Rows of a page header: title, subtitle and a blank spacer.
pub const PAGE_HEADER_HEIGHT: u16 = 3;

/// Width at which two-column grids kick in.
pub const MEDIUM_WIDTH: u16 = 80;
/// Width at which the widest grids kick in.
pub const LARGE_WIDTH: u16 = 120;

/// Number of grid columns for `width`, given the medium and large counts.
pub fn columns(width: u16, medium: usize, large: usize) -> usize {
    if width >= LARGE_WIDTH {
        large
    } else if width >= MEDIUM_WIDTH {
        medium
    } else {
        1
    }
}

/// Rows needed for `count` items of `row_height` in `cols` columns.
pub fn grid_height(count: usize, cols: usize, row_height: u16) -> u16 {
    let cols = cols.max(1);
    count.div_ceil(cols) as u16 * row_height
}

/// Splits `area` into `count` cells laid out left to right, top to bottom.
pub fn grid(area: Rect, count: usize, cols: usize, row_height: u16) -> Vec<Rect> {
    let cols = cols.max(1);
    let rows = count.div_ceil(cols);
    let row_areas = Layout::vertical(vec![Constraint::Length(row_height); rows]).split(area);
    let col_constraints = vec![Constraint::Ratio(1, cols as u32); cols];

    row_areas
        .iter()
        .flat_map(|row| Layout::horizontal(col_constraints.clone()).split(*row).to_vec())
        .take(count)
        .collect()
}

/// Splits `area` into consecutive rows of the given heights.
pub fn stack(area: Rect, heights: &[u16]) -> Vec<Rect> {
    Layout::vertical(heights.iter().map(|h| Constraint::Length(*h)))
        .split(area)
        .to_vec()
}

/// Renders `left` and a right-aligned `right` on the same row.
pub fn split_row(area: Rect, buf: &mut Buffer, left: Line<'_>, right: Line<'_>) {
    let right_width = (right.width() as u16).min(area.width);
    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area);
    left.render(left_area, buf);
    right.render(right_area, buf);
}

/// Renders a page title and subtitle, with an optional action button on
/// the right of the title row. The button is hidden when it would crowd
/// the title.
pub fn page_header(
    area: Rect,
    buf: &mut Buffer,
    title: &str,
    subtitle: &str,
    action: Option<&str>,
    theme: &Theme,
) {
    let [title_row, subtitle_row, _] = Layout::vertical([Constraint::Length(1); 3]).areas(area);

    let title = Line::from(Span::styled(title.to_string(), theme.heading));
    let room = title_row.width as usize;
    let action = match action {
        Some(label) if title.width() + label.len() + 5 <= room => Line::from(Span::styled(
            format!("[ {} ]", label),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        _ => Line::default(),
    };
    split_row(title_row, buf, title, action);
    Line::styled(subtitle.to_string(), theme.dim).render(subtitle_row, buf);
}

/// Renders `view` into `area`, starting `scroll` rows down.
///
/// The view is drawn into a scratch buffer of its full height and the
/// visible window is copied over. Scroll past the end is clamped so the
/// last page stays in view.
pub fn render_scrolled(view: &dyn ViewRenderer, area: Rect, buf: &mut Buffer, app: &App, scroll: u16) {
    if area.is_empty() {
        return;
    }

    let height = view.height(area.width, app).max(1);
    let canvas_area = Rect::new(0, 0, area.width, height);
    let mut canvas = Buffer::empty(canvas_area);
    view.render(canvas_area, &mut canvas, app);

    let offset = scroll.min(height.saturating_sub(area.height));
    let visible = area.height.min(height - offset);
    for row in 0..visible {
        for col in 0..area.width {
            if let (Some(src), Some(dst)) = (
                canvas.cell((col, offset + row)),
                buf.cell_mut((area.x + col, area.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }
}
