use super::Config;
use retrodesk_core::models::Dimension;
use retrodesk_core::AppKind;
use std::collections::HashSet;
use std::fmt;
use tracing_subscriber::EnvFilter;

/// Something in the config that would stop the shell from behaving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub window: Option<String>,
    pub message: String,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.window {
            Some(id) => write!(f, "window `{id}`: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

fn problem(window: Option<&str>, message: impl Into<String>) -> Problem {
    Problem {
        window: window.map(str::to_owned),
        message: message.into(),
    }
}

impl Config {
    pub fn check_log_level(&self, verbose: bool) {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) if verbose => println!("Log level is ok."),
            Ok(_) => {}
            Err(err) => println!("Log level is invalid: {err}"),
        }
    }

    /// Everything wrong with the layout and timing settings.
    #[must_use]
    pub fn problems(&self) -> Vec<Problem> {
        let mut found = vec![];
        if self.desktop_width <= 0 || self.desktop_height <= 0 {
            found.push(problem(None, "desktop size must be positive"));
        }
        if self.taskbar_height <= 0 || self.taskbar_height >= self.desktop_height {
            found.push(problem(
                None,
                "taskbar height must be positive and smaller than the desktop",
            ));
        }
        if self.taskbar_button_width <= 0 || self.auto_height <= 0 {
            found.push(problem(
                None,
                "taskbar button width and auto height must be positive",
            ));
        }
        if self.minimize_duration_ms == 0 {
            found.push(problem(None, "minimize_duration_ms must not be zero"));
        }
        if self.icon_click_delay_ms == 0 {
            found.push(problem(None, "icon_click_delay_ms must not be zero"));
        }
        if self.windows.is_empty() {
            found.push(problem(None, "no windows are configured"));
        }
        found.append(&mut self.window_problems());
        found
    }

    fn window_problems(&self) -> Vec<Problem> {
        let mut found = vec![];
        let mut seen = HashSet::new();
        for window in &self.windows {
            let id = window.id.as_str();
            if id.is_empty() || id.contains(char::is_whitespace) {
                found.push(problem(Some(id), "ids must be a single non-empty word"));
            }
            if !seen.insert(id) {
                found.push(problem(Some(id), "id is used more than once"));
            }
            for (axis, dimension) in [("width", window.size.width), ("height", window.size.height)] {
                if matches!(dimension, Dimension::Pixel(x) if x <= 0) {
                    found.push(problem(Some(id), format!("{axis} must be positive")));
                }
            }
        }
        let task_managers = self
            .windows
            .iter()
            .filter(|w| w.app == AppKind::TaskManager)
            .count();
        if task_managers > 1 {
            found.push(problem(None, "only one task manager window may be configured"));
        }
        found
    }
}
