use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use devops_tui::{Section, TuiConfig};

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawDevopsConfig {
    #[serde(default)]
    pub ui: RawUiConfig,

    #[serde(default)]
    pub export: RawExportConfig,
}

/// UI config as stored in TOML (optional fields for proper merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawUiConfig {
    /// Section shown at startup
    pub initial_section: Option<String>,

    /// Milliseconds between spinner frames
    pub tick_rate_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawExportConfig {
    /// Directory templates are downloaded to
    pub dir: Option<PathBuf>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevopsConfig {
    pub ui: UiConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Section shown at startup; unknown ids fall back to the dashboard
    pub initial_section: String,

    /// Milliseconds between spinner frames
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_section: Section::default().id().to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: devops_paths::export_dir(),
        }
    }
}

impl Default for DevopsConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl DevopsConfig {
    /// Startup options for the dashboard.
    pub fn tui_config(&self) -> TuiConfig {
        TuiConfig {
            initial_section: Section::resolve(&self.ui.initial_section),
            tick_rate: Duration::from_millis(self.ui.tick_rate_ms.max(MIN_TICK_RATE_MS)),
            export_dir: self.export.dir.clone(),
        }
    }
}

/// Default spinner interval
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Lower bound for the spinner interval
pub const MIN_TICK_RATE_MS: u64 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = DevopsConfig::default();
        assert_eq!(config.ui.initial_section, "dashboard");
        assert_eq!(config.ui.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert!(config.export.dir.ends_with("devops-center/exports"));
    }

    #[test]
    fn test_raw_config_parses_partial_toml() {
        let raw: RawDevopsConfig = toml::from_str("[ui]\ninitial_section = \"guide\"\n").unwrap();
        assert_eq!(raw.ui.initial_section.as_deref(), Some("guide"));
        assert!(raw.ui.tick_rate_ms.is_none());
        assert!(raw.export.dir.is_none());
    }

    #[test]
    fn test_raw_config_parses_empty_toml() {
        let raw: RawDevopsConfig = toml::from_str("").unwrap();
        assert!(raw.ui.initial_section.is_none());
    }

    #[test]
    fn test_tui_config_resolves_section() {
        let mut config = DevopsConfig::default();
        config.ui.initial_section = "monitoring".to_string();
        assert_eq!(config.tui_config().initial_section, Section::Monitoring);
    }

    #[test]
    fn test_tui_config_unknown_section_falls_back_to_dashboard() {
        let mut config = DevopsConfig::default();
        config.ui.initial_section = "billing".to_string();
        assert_eq!(config.tui_config().initial_section, Section::Dashboard);
    }

    #[test]
    fn test_tui_config_clamps_tick_rate() {
        let mut config = DevopsConfig::default();
        config.ui.tick_rate_ms = 0;
        assert_eq!(
            config.tui_config().tick_rate,
            Duration::from_millis(MIN_TICK_RATE_MS)
        );
    }

    #[test]
    fn test_serializes_to_toml_sections() {
        let toml_str = toml::to_string_pretty(&DevopsConfig::default()).unwrap();
        assert!(toml_str.contains("[ui]"));
        assert!(toml_str.contains("initial_section = \"dashboard\""));
        assert!(toml_str.contains("tick_rate_ms = 250"));
        assert!(toml_str.contains("[export]"));
    }
}
