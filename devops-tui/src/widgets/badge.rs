//! Inline status badges.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::Theme;
use crate::catalog::{AlertKind, Health, ResourceStatus, RunStatus};

/// Visual weight of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Filled with the primary color.
    Default,
    /// Muted text on the surface color.
    Secondary,
    /// Filled with the error color.
    Destructive,
}

impl From<Health> for BadgeVariant {
    fn from(health: Health) -> Self {
        match health {
            Health::Healthy => Self::Default,
            Health::Warning | Health::Down => Self::Secondary,
        }
    }
}

impl From<RunStatus> for BadgeVariant {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => Self::Default,
            RunStatus::Running => Self::Secondary,
            RunStatus::Failed => Self::Destructive,
        }
    }
}

impl From<ResourceStatus> for BadgeVariant {
    fn from(status: ResourceStatus) -> Self {
        match status {
            ResourceStatus::Good => Self::Default,
            ResourceStatus::Warning => Self::Secondary,
        }
    }
}

impl From<AlertKind> for BadgeVariant {
    fn from(kind: AlertKind) -> Self {
        match kind {
            AlertKind::Error => Self::Destructive,
            AlertKind::Warning => Self::Secondary,
            AlertKind::Info => Self::Default,
        }
    }
}

/// Builds a padded badge span.
pub fn badge(text: &str, variant: BadgeVariant, theme: &Theme) -> Span<'static> {
    let style = match variant {
        BadgeVariant::Default => filled(theme.primary, theme),
        BadgeVariant::Secondary => Style::default().fg(theme.fg).bg(theme.surface),
        BadgeVariant::Destructive => filled(theme.error, theme),
    };
    Span::styled(format!(" {} ", text), style)
}

fn filled(color: Color, theme: &Theme) -> Style {
    Style::default()
        .fg(theme.bg)
        .bg(color)
        .add_modifier(Modifier::BOLD)
}
