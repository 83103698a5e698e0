//! Color theme for the DevOps Center dashboard.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// Holds every color the views use so that semantic states (healthy,
/// warning, failed) render consistently across sections.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub primary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub surface: Color,
    pub selection: Color,
    pub track: Color,

    // Text styles
    pub bold: Style,
    pub dim: Style,
    pub heading: Style,
}

/// Creates the default DevOps Center theme.
///
/// Dark slate background with a violet primary, matching the dashboard's
/// design tokens:
/// - Primary violet (#8b5cf6) for headings, icons and the active tab
/// - Green (#22c55e) for healthy and successful states
/// - Amber (#f59e0b) for warnings, red (#ef4444) for failures
pub fn devops_default() -> Theme {
    let fg = Color::Rgb(226, 232, 240); // #e2e8f0
    let primary = Color::Rgb(139, 92, 246); // #8b5cf6

    Theme {
        name: "devops".into(),

        bg: Color::Rgb(15, 23, 42),       // #0f172a
        fg,
        muted: Color::Rgb(148, 163, 184), // #94a3b8
        primary,

        success: Color::Rgb(34, 197, 94),  // #22c55e
        warning: Color::Rgb(245, 158, 11), // #f59e0b
        info: Color::Rgb(59, 130, 246),    // #3b82f6
        error: Color::Rgb(239, 68, 68),    // #ef4444

        border: Color::Rgb(51, 65, 85),    // #334155
        surface: Color::Rgb(30, 41, 59),   // #1e293b
        selection: Color::Rgb(76, 29, 149), // #4c1d95
        track: Color::Rgb(51, 65, 85),     // #334155

        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(Color::Rgb(148, 163, 184)),
        heading: Style::default().fg(primary).add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devops_default_has_correct_name() {
        assert_eq!(devops_default().name, "devops");
    }

    #[test]
    fn devops_default_has_violet_primary() {
        assert_eq!(devops_default().primary, Color::Rgb(139, 92, 246));
    }

    #[test]
    fn heading_style_uses_primary_and_bold() {
        let theme = devops_default();
        assert_eq!(theme.heading.fg, Some(theme.primary));
        assert!(theme.heading.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn dim_style_uses_muted_color() {
        let theme = devops_default();
        assert_eq!(theme.dim.fg, Some(theme.muted));
    }

    #[test]
    fn semantic_colors_are_distinct() {
        let theme = devops_default();
        assert_ne!(theme.success, theme.warning);
        assert_ne!(theme.warning, theme.error);
        assert_ne!(theme.info, theme.success);
    }
}
