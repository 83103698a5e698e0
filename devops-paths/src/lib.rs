//! XDG Base Directory paths for devops-center.
//!
//! The dashboard keeps its config and exported templates under XDG paths on
//! every platform, the same layout tools like gh and kubectl use.

use std::path::PathBuf;

/// Directory name used under the XDG base directories.
pub const APP_DIR: &str = "devops-center";

/// Get the devops-center config directory.
///
/// Returns `$XDG_CONFIG_HOME/devops-center` if set, otherwise
/// `~/.config/devops-center`.
///
/// # Examples
///
/// ```
/// use devops_paths::config_dir;
///
/// let config_file = config_dir().join("config.toml");
/// assert!(config_file.ends_with("devops-center/config.toml"));
/// ```
pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config")
}

/// Get the devops-center data directory.
///
/// Returns `$XDG_DATA_HOME/devops-center` if set, otherwise
/// `~/.local/share/devops-center`. Log files and exported templates
/// live here.
pub fn data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", ".local/share")
}

/// Default directory for exported templates.
pub fn export_dir() -> PathBuf {
    data_dir().join("exports")
}

/// Path of the log file written while the dashboard owns the terminal.
pub fn log_file() -> PathBuf {
    data_dir().join("devops-center.log")
}

fn xdg_dir(var: &str, home_fallback: &str) -> PathBuf {
    match std::env::var_os(var) {
        Some(base) if !base.is_empty() => PathBuf::from(base).join(APP_DIR),
        _ => match dirs::home_dir() {
            Some(home) => home.join(home_fallback).join(APP_DIR),
            None => PathBuf::from(home_fallback).join(APP_DIR),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn config_dir_ends_with_app_dir() {
        assert!(config_dir().ends_with(APP_DIR));
    }

    #[test]
    #[serial]
    fn data_dir_ends_with_app_dir() {
        assert!(data_dir().ends_with(APP_DIR));
    }

    #[test]
    #[serial]
    fn config_dir_respects_xdg_env() {
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "/tmp/test-config");
        }
        let path = config_dir();
        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
        assert_eq!(path, PathBuf::from("/tmp/test-config/devops-center"));
    }

    #[test]
    #[serial]
    fn data_dir_respects_xdg_env() {
        unsafe {
            std::env::set_var("XDG_DATA_HOME", "/tmp/test-data");
        }
        let exports = export_dir();
        let log = log_file();
        unsafe {
            std::env::remove_var("XDG_DATA_HOME");
        }
        assert_eq!(exports, PathBuf::from("/tmp/test-data/devops-center/exports"));
        assert_eq!(
            log,
            PathBuf::from("/tmp/test-data/devops-center/devops-center.log")
        );
    }

    #[test]
    #[serial]
    fn empty_xdg_var_falls_back_to_home() {
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "");
        }
        let path = config_dir();
        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
        assert!(path.ends_with(".config/devops-center"));
    }
}
