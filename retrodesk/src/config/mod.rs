//! `retrodesk` general configuration

mod checks;
mod default;

use anyhow::Result;
use retrodesk_core::models::Rect;
use retrodesk_core::WindowConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use xdg::BaseDirectories;

pub use checks::Problem;

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub desktop_width: i32,
    pub desktop_height: i32,
    pub taskbar_height: i32,
    pub start_button_width: i32,
    pub taskbar_button_width: i32,
    /// Height used for windows whose height is `"auto"`.
    pub auto_height: i32,
    pub minimize_duration_ms: u64,
    pub icon_click_delay_ms: u64,
    pub windows: Vec<WindowConfig>,
}

#[must_use]
pub fn load() -> Config {
    load_from_file()
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.toml, or if config.toml cannot be read or parsed.
fn load_from_file() -> Result<Config> {
    let path = BaseDirectories::with_prefix("retrodesk")?;
    let config_filename = path.place_config_file("config.toml")?;
    load_or_create(&config_filename)
}

/// Read the config at `path`, writing the default config there first if
/// nothing exists yet.
///
/// # Errors
///
/// Will error if the file cannot be read, written or parsed.
pub fn load_or_create(path: &Path) -> Result<Config> {
    if path.exists() {
        return load_from_path(path);
    }
    let config = Config::default();
    fs::write(path, toml::to_string(&config)?)?;
    Ok(config)
}

/// # Errors
///
/// Will error if the file cannot be read or is not valid TOML for a `Config`.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

impl retrodesk_core::Config for Config {
    fn windows(&self) -> Vec<WindowConfig> {
        self.windows.clone()
    }

    fn desktop(&self) -> Rect {
        Rect::new(0, 0, self.desktop_width, self.desktop_height)
    }

    fn taskbar_height(&self) -> i32 {
        self.taskbar_height
    }

    fn start_button_width(&self) -> i32 {
        self.start_button_width
    }

    fn taskbar_button_width(&self) -> i32 {
        self.taskbar_button_width
    }

    fn auto_height(&self) -> i32 {
        self.auto_height
    }

    fn minimize_duration(&self) -> Duration {
        Duration::from_millis(self.minimize_duration_ms)
    }

    fn icon_click_delay(&self) -> Duration {
        Duration::from_millis(self.icon_click_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retrodesk_core::models::{Dimension, Point};
    use retrodesk_core::AppKind;

    #[test]
    fn missing_config_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = load_or_create(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
        assert_eq!(load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn partial_config_keeps_defaults_for_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
minimize_duration_ms = 150

[[windows]]
id = "notepad"
title = "Notes"
app = "Notepad"
position = { x = 10, y = 20 }
size = { width = "320px", height = "auto" }
"#,
        )
        .unwrap();

        let config = load_or_create(&path).unwrap();
        assert_eq!(config.minimize_duration_ms, 150);
        assert_eq!(config.taskbar_height, Config::default().taskbar_height);
        assert_eq!(config.windows.len(), 1);
        let notepad = &config.windows[0];
        assert_eq!(notepad.app, AppKind::Notepad);
        assert_eq!(notepad.position, Point::new(10, 20));
        assert_eq!(notepad.size.width, Dimension::Pixel(320));
        assert_eq!(notepad.size.height, Dimension::Auto);
    }

    #[test]
    fn explicit_missing_path_is_an_error_and_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cofnig.toml");
        assert!(load_from_path(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "taskbar_height = \"tall\"").unwrap();
        assert!(load_or_create(&path).is_err());
    }

    #[test]
    fn core_config_reads_the_file_values() {
        use retrodesk_core::Config as _;
        let config = Config {
            desktop_width: 800,
            desktop_height: 600,
            minimize_duration_ms: 120,
            ..Config::default()
        };
        assert_eq!(config.desktop(), Rect::new(0, 0, 800, 600));
        assert_eq!(config.minimize_duration(), Duration::from_millis(120));
        assert_eq!(config.windows().len(), config.windows.len());
    }
}
