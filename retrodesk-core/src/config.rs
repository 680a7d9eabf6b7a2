use crate::apps::AppKind;
use crate::models::{Point, Rect, WindowId, WindowSize};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One of the fixed windows the shell knows about.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub id: WindowId,
    pub title: String,
    pub position: Point,
    pub size: WindowSize,
    pub app: AppKind,
}

pub trait Config {
    /// Every window the shell can open, in taskbar order.
    fn windows(&self) -> Vec<WindowConfig>;

    fn desktop(&self) -> Rect;

    fn taskbar_height(&self) -> i32 {
        28
    }

    fn start_button_width(&self) -> i32 {
        60
    }

    fn taskbar_button_width(&self) -> i32 {
        160
    }

    /// Height measured for windows sized `auto`.
    fn auto_height(&self) -> i32 {
        300
    }

    fn minimize_duration(&self) -> Duration {
        Duration::from_millis(300)
    }

    /// How long a single click on a desktop icon waits for a second click.
    fn icon_click_delay(&self) -> Duration {
        Duration::from_millis(200)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::Dimension;

    #[allow(clippy::module_name_repetitions)]
    pub struct TestConfig {
        pub windows: Vec<WindowConfig>,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            let window = |id: &str, title: &str, x: i32, app: AppKind| WindowConfig {
                id: id.into(),
                title: title.to_owned(),
                position: Point::new(x, x),
                size: WindowSize::new(Dimension::Pixel(500), Dimension::Auto),
                app,
            };
            Self {
                windows: vec![
                    window("about", "About Me", 50, AppKind::About),
                    window("taskManager", "Task Manager", 100, AppKind::TaskManager),
                    window("snake", "Snake", 150, AppKind::Snake),
                    window("notepad", "Notepad", 200, AppKind::Notepad),
                    window("musicPlayer", "Music Player", 250, AppKind::MusicPlayer),
                    window("cmd", "Command Prompt", 300, AppKind::Cmd),
                ],
            }
        }
    }

    impl Config for TestConfig {
        fn windows(&self) -> Vec<WindowConfig> {
            self.windows.clone()
        }

        fn desktop(&self) -> Rect {
            Rect::new(0, 0, 1024, 768)
        }
    }
}
