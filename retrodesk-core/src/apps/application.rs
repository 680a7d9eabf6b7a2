use super::{AppView, HostedApp};
use crate::config::WindowConfig;
use serde::{Deserialize, Serialize};

/// Which application a window hosts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    About,
    Projects,
    Contact,
    TaskManager,
    DisplayProperties,
    Notepad,
    Cmd,
    MusicPlayer,
    Snake,
    FlappyBird,
    Tetris,
    Doom,
}

impl AppKind {
    #[must_use]
    pub const fn is_game(self) -> bool {
        matches!(
            self,
            AppKind::Snake | AppKind::FlappyBird | AppKind::Tetris | AppKind::Doom
        )
    }
}

/// Lifecycle of one of the arcade games. The game mechanics live elsewhere;
/// this only knows whether the loop may tick.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    pub active: bool,
    pub game_over: bool,
    pub score: u32,
    focused: bool,
}

impl GameSession {
    pub fn reset(&mut self) {
        self.game_over = false;
        self.score = 0;
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn end(&mut self) {
        self.active = false;
        self.game_over = true;
    }

    /// The simulation loop only runs for an active game in a focused, visible window.
    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        self.active && self.focused && !self.game_over
    }
}

/// The notepad's edit buffer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotepadBuffer {
    pub content: String,
    pub filename: String,
    pub modified: bool,
}

impl Default for NotepadBuffer {
    fn default() -> Self {
        Self {
            content: String::new(),
            filename: "Untitled.txt".to_owned(),
            modified: false,
        }
    }
}

impl NotepadBuffer {
    pub fn edit(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.modified = true;
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Playback {
    pub playing: bool,
    pub current_track: Option<usize>,
}

impl Playback {
    pub fn play(&mut self, track: usize) {
        self.current_track = Some(track);
        self.playing = true;
    }
}

/// The closed set of applications the shell ships with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Application {
    /// Content that has no lifecycle of its own.
    Panel(AppKind),
    Notepad(NotepadBuffer),
    MusicPlayer(Playback),
    Game(AppKind, GameSession),
}

impl Application {
    #[must_use]
    pub const fn kind(&self) -> AppKind {
        match self {
            Application::Panel(kind) | Application::Game(kind, _) => *kind,
            Application::Notepad(_) => AppKind::Notepad,
            Application::MusicPlayer(_) => AppKind::MusicPlayer,
        }
    }
}

impl HostedApp for Application {
    fn new(window: &WindowConfig) -> Self {
        match window.app {
            AppKind::Notepad => Application::Notepad(NotepadBuffer::default()),
            AppKind::MusicPlayer => Application::MusicPlayer(Playback::default()),
            kind if kind.is_game() => Application::Game(kind, GameSession::default()),
            kind => Application::Panel(kind),
        }
    }

    fn on_open(&mut self) {
        if let Application::Game(_, game) = self {
            game.reset();
        }
    }

    fn on_close(&mut self) {
        match self {
            Application::Game(_, game) => game.active = false,
            // An unsaved buffer is discarded rather than prompting.
            Application::Notepad(buffer) if buffer.modified => *buffer = NotepadBuffer::default(),
            Application::MusicPlayer(playback) => playback.playing = false,
            _ => {}
        }
    }

    fn on_minimize(&mut self) {
        if let Application::Game(_, game) = self {
            game.active = false;
        }
    }

    fn on_restore(&mut self) {
        if let Application::Game(_, game) = self {
            if game.game_over {
                game.reset();
            }
        }
    }

    fn render(&mut self, view: &AppView<'_>) {
        if let Application::Game(_, game) = self {
            game.focused = view.is_active && view.record.is_visible();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, WindowRecord, WindowSize};

    fn window(app: AppKind) -> WindowConfig {
        WindowConfig {
            id: "w".into(),
            title: "W".to_owned(),
            position: Point::default(),
            size: WindowSize::pixels(400, 400),
            app,
        }
    }

    #[test]
    fn games_are_built_as_game_sessions() {
        assert!(matches!(
            Application::new(&window(AppKind::Tetris)),
            Application::Game(AppKind::Tetris, _)
        ));
        assert_eq!(Application::new(&window(AppKind::About)).kind(), AppKind::About);
    }

    #[test]
    fn closing_notepad_discards_unsaved_edits() {
        let mut subject = Application::new(&window(AppKind::Notepad));
        if let Application::Notepad(buffer) = &mut subject {
            buffer.edit("dear diary");
        }
        subject.on_close();
        assert_eq!(subject, Application::Notepad(NotepadBuffer::default()));
    }

    #[test]
    fn closing_the_music_player_pauses_playback() {
        let mut subject = Application::new(&window(AppKind::MusicPlayer));
        if let Application::MusicPlayer(playback) = &mut subject {
            playback.play(1);
        }
        subject.on_close();
        let Application::MusicPlayer(playback) = subject else {
            panic!("expected a music player");
        };
        assert!(!playback.playing);
        assert_eq!(playback.current_track, Some(1));
    }

    #[test]
    fn games_only_tick_while_focused_and_visible() {
        let mut subject = Application::new(&window(AppKind::Snake));
        let id = "snake".into();
        let mut record = WindowRecord::new("Snake", Point::default(), WindowSize::pixels(400, 400));
        record.is_open = true;
        if let Application::Game(_, game) = &mut subject {
            game.start();
        }
        subject.render(&AppView { id: &id, record: &record, is_active: true });
        assert!(matches!(&subject, Application::Game(_, g) if g.is_ticking()));

        subject.render(&AppView { id: &id, record: &record, is_active: false });
        assert!(matches!(&subject, Application::Game(_, g) if !g.is_ticking()));
    }

    #[test]
    fn minimizing_a_game_suspends_it_and_restoring_a_lost_game_resets_it() {
        let mut subject = Application::new(&window(AppKind::Snake));
        if let Application::Game(_, game) = &mut subject {
            game.start();
            game.score = 12;
        }
        subject.on_minimize();
        assert!(matches!(&subject, Application::Game(_, g) if !g.active));

        if let Application::Game(_, game) = &mut subject {
            game.end();
        }
        subject.on_restore();
        assert!(matches!(&subject, Application::Game(_, g) if !g.game_over && g.score == 0));
    }
}
