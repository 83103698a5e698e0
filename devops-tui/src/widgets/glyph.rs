//! Status glyphs and the activity spinner.

use ratatui::{style::Style, text::Span};

use crate::Theme;
use crate::catalog::{RunStatus, StepStatus};

/// Frames of the spinner drawn next to in-progress items.
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Spinner frame for the given tick count.
pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Glyph for a deployment step.
pub fn step_glyph(status: StepStatus, tick: u64, theme: &Theme) -> Span<'static> {
    match status {
        StepStatus::Complete => Span::styled("✔", Style::default().fg(theme.success)),
        StepStatus::Active => Span::styled(spinner(tick), Style::default().fg(theme.primary)),
        StepStatus::Pending => Span::styled("○", Style::default().fg(theme.muted)),
    }
}

/// Glyph for a workflow run.
pub fn run_glyph(status: RunStatus, tick: u64, theme: &Theme) -> Span<'static> {
    match status {
        RunStatus::Success => Span::styled("✔", Style::default().fg(theme.success)),
        RunStatus::Running => Span::styled(spinner(tick), Style::default().fg(theme.primary)),
        RunStatus::Failed => Span::styled("✖", Style::default().fg(theme.error)),
    }
}

/// Filled status dot in `color`.
pub fn dot(color: ratatui::style::Color) -> Span<'static> {
    Span::styled("●", Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devops_default;

    #[test]
    fn spinner_cycles_through_frames() {
        assert_eq!(spinner(0), "◐");
        assert_eq!(spinner(1), "◓");
        assert_eq!(spinner(4), spinner(0));
        assert_eq!(spinner(u64::MAX), SPINNER_FRAMES[3]);
    }

    #[test]
    fn active_step_glyph_animates() {
        let theme = devops_default();
        let a = step_glyph(StepStatus::Active, 0, &theme);
        let b = step_glyph(StepStatus::Active, 1, &theme);
        assert_ne!(a.content, b.content);
    }

    #[test]
    fn complete_step_glyph_is_static() {
        let theme = devops_default();
        let a = step_glyph(StepStatus::Complete, 0, &theme);
        let b = step_glyph(StepStatus::Complete, 3, &theme);
        assert_eq!(a.content, b.content);
        assert_eq!(a.style.fg, Some(theme.success));
    }

    #[test]
    fn failed_run_glyph_uses_error_color() {
        let theme = devops_default();
        let glyph = run_glyph(RunStatus::Failed, 0, &theme);
        assert_eq!(glyph.content, "✖");
        assert_eq!(glyph.style.fg, Some(theme.error));
    }
}
