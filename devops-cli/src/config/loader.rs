use super::types::{
    DevopsConfig, ExportConfig, RawDevopsConfig, RawExportConfig, RawUiConfig, UiConfig,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<DevopsConfig> {
        Self::load_layers(&[Self::user_config_path(), Self::project_config_path()])
    }

    /// Load and merge the given files in order; later files win.
    /// Missing files are skipped.
    pub fn load_layers(paths: &[PathBuf]) -> Result<DevopsConfig> {
        let mut raw = RawDevopsConfig::default();

        for path in paths {
            if let Some(layer) = Self::read_raw(path)? {
                tracing::debug!(path = %path.display(), "loaded config layer");
                raw = Self::merge_raw(raw, layer);
            }
        }

        // Convert to final config with defaults applied
        Ok(Self::finalize(raw))
    }

    fn read_raw(path: &Path) -> Result<Option<RawDevopsConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let raw = toml::from_str(&contents)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(Some(raw))
    }

    /// Get user config path (`$XDG_CONFIG_HOME/devops-center/config.toml`)
    pub fn user_config_path() -> PathBuf {
        devops_paths::config_dir().join("config.toml")
    }

    /// Get project config path
    /// Can be overridden with DEVOPS_CENTER_PROJECT_CONFIG_DIR env var (useful for isolated e2e tests)
    pub fn project_config_path() -> PathBuf {
        match std::env::var_os("DEVOPS_CENTER_PROJECT_CONFIG_DIR") {
            Some(dir) => PathBuf::from(dir).join("config.toml"),
            None => PathBuf::from(".devops-center/config.toml"),
        }
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawDevopsConfig, overlay: RawDevopsConfig) -> RawDevopsConfig {
        RawDevopsConfig {
            ui: RawUiConfig {
                initial_section: overlay.ui.initial_section.or(base.ui.initial_section),
                tick_rate_ms: overlay.ui.tick_rate_ms.or(base.ui.tick_rate_ms),
            },
            export: RawExportConfig {
                dir: overlay.export.dir.or(base.export.dir),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawDevopsConfig) -> DevopsConfig {
        let ui_defaults = UiConfig::default();
        DevopsConfig {
            ui: UiConfig {
                initial_section: raw
                    .ui
                    .initial_section
                    .unwrap_or(ui_defaults.initial_section),
                tick_rate_ms: raw.ui.tick_rate_ms.unwrap_or(ui_defaults.tick_rate_ms),
            },
            export: raw
                .export
                .dir
                .map(|dir| ExportConfig { dir })
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    // ==================== Merge Tests ====================

    #[test]
    fn test_merge_overlay_wins_when_set() {
        let base = RawDevopsConfig {
            ui: RawUiConfig {
                initial_section: Some("cicd".to_string()),
                tick_rate_ms: Some(100),
            },
            ..Default::default()
        };
        let overlay = RawDevopsConfig {
            ui: RawUiConfig {
                initial_section: Some("guide".to_string()),
                tick_rate_ms: None,
            },
            ..Default::default()
        };

        let merged = ConfigLoader::merge_raw(base, overlay);

        assert_eq!(merged.ui.initial_section.as_deref(), Some("guide"));
        assert_eq!(merged.ui.tick_rate_ms, Some(100));
    }

    #[test]
    fn test_merge_keeps_base_export_dir() {
        let base = RawDevopsConfig {
            export: RawExportConfig {
                dir: Some(PathBuf::from("/srv/exports")),
            },
            ..Default::default()
        };

        let merged = ConfigLoader::merge_raw(base, RawDevopsConfig::default());

        assert_eq!(merged.export.dir, Some(PathBuf::from("/srv/exports")));
    }

    // ==================== Finalize Tests ====================

    #[test]
    fn test_finalize_applies_defaults() {
        let config = ConfigLoader::finalize(RawDevopsConfig::default());

        assert_eq!(config.ui.initial_section, "dashboard");
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.export.dir, devops_paths::export_dir());
    }

    // ==================== Load Tests ====================

    #[test]
    fn test_load_layers_skips_missing_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigLoader::load_layers(&[temp_dir.path().join("missing.toml")]).unwrap();

        assert_eq!(config.ui.initial_section, "dashboard");
    }

    #[test]
    fn test_load_layers_project_overrides_user() {
        let temp_dir = TempDir::new().unwrap();
        let user = write(
            &temp_dir,
            "user.toml",
            "[ui]\ninitial_section = \"monitoring\"\ntick_rate_ms = 500\n",
        );
        let project = write(&temp_dir, "project.toml", "[ui]\ninitial_section = \"guide\"\n");

        let config = ConfigLoader::load_layers(&[user, project]).unwrap();

        assert_eq!(config.ui.initial_section, "guide");
        assert_eq!(config.ui.tick_rate_ms, 500);
    }

    #[test]
    fn test_load_layers_reads_export_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "config.toml", "[export]\ndir = \"/tmp/devops-out\"\n");

        let config = ConfigLoader::load_layers(&[path]).unwrap();

        assert_eq!(config.export.dir, PathBuf::from("/tmp/devops-out"));
    }

    #[test]
    fn test_load_layers_reports_invalid_toml_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = write(&temp_dir, "config.toml", "[ui\ninitial_section = ");

        let err = ConfigLoader::load_layers(&[path.clone()]).unwrap_err();

        assert!(format!("{:#}", err).contains(&path.display().to_string()));
    }

    // ==================== Path Tests ====================

    #[test]
    #[serial]
    fn test_project_config_path_honours_env_override() {
        let temp_dir = TempDir::new().unwrap();
        // SAFETY: serialized with the other env-var tests.
        unsafe {
            std::env::set_var("DEVOPS_CENTER_PROJECT_CONFIG_DIR", temp_dir.path());
        }

        let path = ConfigLoader::project_config_path();

        unsafe {
            std::env::remove_var("DEVOPS_CENTER_PROJECT_CONFIG_DIR");
        }
        assert_eq!(path, temp_dir.path().join("config.toml"));
    }

    #[test]
    #[serial]
    fn test_project_config_path_defaults_to_dot_dir() {
        unsafe {
            std::env::remove_var("DEVOPS_CENTER_PROJECT_CONFIG_DIR");
        }
        assert_eq!(
            ConfigLoader::project_config_path(),
            PathBuf::from(".devops-center/config.toml")
        );
    }

    #[test]
    #[serial]
    fn test_user_config_path_lives_in_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let path = ConfigLoader::user_config_path();

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
        assert_eq!(
            path,
            temp_dir.path().join("devops-center").join("config.toml")
        );
    }
}
