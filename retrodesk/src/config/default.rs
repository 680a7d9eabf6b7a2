use super::Config;
use retrodesk_core::models::{Dimension, Point, WindowSize};
use retrodesk_core::{AppKind, WindowConfig};

fn window(id: &str, title: &str, (x, y): (i32, i32), size: WindowSize, app: AppKind) -> WindowConfig {
    WindowConfig {
        id: id.into(),
        title: title.to_owned(),
        position: Point::new(x, y),
        size,
        app,
    }
}

impl Default for Config {
    fn default() -> Self {
        let auto = |width| WindowSize::new(Dimension::Pixel(width), Dimension::Auto);
        let px = WindowSize::pixels;
        Self {
            log_level: "info".to_owned(),
            desktop_width: 1024,
            desktop_height: 768,
            taskbar_height: 28,
            start_button_width: 60,
            taskbar_button_width: 160,
            auto_height: 300,
            minimize_duration_ms: 300,
            icon_click_delay_ms: 200,
            windows: vec![
                window("about", "About Me", (50, 50), auto(500), AppKind::About),
                window("projects", "Linux Projects", (100, 100), auto(500), AppKind::Projects),
                window("contact", "Contact", (150, 150), auto(500), AppKind::Contact),
                window("taskManager", "Task Manager", (200, 100), auto(400), AppKind::TaskManager),
                window("snake", "Snake", (250, 150), px(400, 400), AppKind::Snake),
                window("notepad", "Notepad", (300, 200), px(500, 400), AppKind::Notepad),
                window(
                    "displayProperties",
                    "Display Properties",
                    (350, 100),
                    px(400, 450),
                    AppKind::DisplayProperties,
                ),
                window("musicPlayer", "Music Player", (200, 150), px(400, 500), AppKind::MusicPlayer),
                window("cmd", "Command Prompt", (400, 200), px(500, 400), AppKind::Cmd),
                window("flappyBird", "Flappy Bird", (220, 80), px(400, 500), AppKind::FlappyBird),
                window("tetris", "Tetris", (260, 60), px(360, 560), AppKind::Tetris),
                window("doom", "Doom", (180, 90), px(660, 520), AppKind::Doom),
            ],
        }
    }
}
