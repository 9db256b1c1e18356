use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ToastError, ToastResult};

const APP_DIR: &str = "toast-presenter";
const TOAST_CONFIG_FILE: &str = "toast.json";

pub const DEFAULT_DURATION_MS: u64 = 20_000;

/// What a new `show` does to a deferred hide that has not fired yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Earlier deferred hides stay scheduled and still fire.
    #[default]
    Independent,
    /// Only the most recent deferred hide may fire.
    CancelPrevious,
}

/// Settings read from `toast.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,
    #[serde(default)]
    pub overlap: OverlapPolicy,
}

impl ToastConfig {
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_DURATION_MS,
            overlap: OverlapPolicy::default(),
        }
    }
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

/// Loads the user config, falling back to defaults when it is unreadable.
pub fn load_toast_config() -> ToastConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_toast_config_with(xdg_config_home.as_deref(), home.as_deref()).unwrap_or_else(|err| {
        tracing::warn!(?err, "failed to load toast config; using defaults");
        ToastConfig::default()
    })
}

pub fn load_toast_config_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ToastResult<ToastConfig> {
    let path = app_config_path(APP_DIR, TOAST_CONFIG_FILE, xdg_config_home, home)?;
    if !path.exists() {
        return Ok(ToastConfig::default());
    }

    let contents = std::fs::read_to_string(&path).map_err(|source| ToastError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let config: ToastConfig = serde_json::from_str(&contents)?;
    tracing::debug!(?path, ?config, "loaded toast config");
    Ok(config)
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ToastResult<PathBuf> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(xdg_config_home: Option<&Path>, home: Option<&Path>) -> ToastResult<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ToastError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("toast-presenter-config-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    fn write_config(root: &Path, contents: &str) {
        let dir = root.join(APP_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(TOAST_CONFIG_FILE), contents).unwrap();
    }

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            APP_DIR,
            TOAST_CONFIG_FILE,
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(
            path,
            PathBuf::from("/tmp/config-root/toast-presenter/toast.json")
        );
    }

    #[test]
    fn app_config_path_falls_back_to_home_dot_config() {
        let path = app_config_path(
            APP_DIR,
            TOAST_CONFIG_FILE,
            Some(Path::new("")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(
            path,
            PathBuf::from("/tmp/home/.config/toast-presenter/toast.json")
        );
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path(APP_DIR, TOAST_CONFIG_FILE, None, None).unwrap_err();
        assert!(matches!(error, ToastError::MissingHomeDirectory));
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        with_temp_root(|root| {
            let config = load_toast_config_with(Some(root), None).unwrap();
            assert_eq!(config, ToastConfig::default());
            assert_eq!(config.default_duration(), Duration::from_millis(20_000));
            assert_eq!(config.overlap, OverlapPolicy::Independent);
        });
    }

    #[test]
    fn config_parses_duration_and_overlap_policy() {
        with_temp_root(|root| {
            write_config(
                root,
                r#"{ "default_duration_ms": 5000, "overlap": "cancel_previous" }"#,
            );
            let config = load_toast_config_with(Some(root), None).unwrap();
            assert_eq!(config.default_duration_ms, 5_000);
            assert_eq!(config.overlap, OverlapPolicy::CancelPrevious);
        });
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        with_temp_root(|root| {
            write_config(root, r#"{ "overlap": "independent" }"#);
            let config = load_toast_config_with(Some(root), None).unwrap();
            assert_eq!(config.default_duration_ms, DEFAULT_DURATION_MS);
        });
    }

    #[test]
    fn invalid_config_is_reported_as_parse_error() {
        with_temp_root(|root| {
            write_config(root, r#"{ "overlap": "sometimes" }"#);
            let err = load_toast_config_with(Some(root), None).unwrap_err();
            assert!(matches!(err, ToastError::ParseConfig(_)));
        });
    }
}
