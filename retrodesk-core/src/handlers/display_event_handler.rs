use super::{Command, Config, DisplayEvent, HostedApp, Manager, Surface};
use crate::apps::AppRequest;
use crate::display_event::{Modifiers, TitleButton};

impl<C: Config, SURFACE: Surface, A: HostedApp> Manager<C, SURFACE, A> {
    /// Process an event from the surface and apply its changes to the manager.
    /// Returns true if changes need to be rendered.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> bool {
        match event {
            DisplayEvent::TitleBarPointerDown(id, pointer) => self.start_drag(&id, pointer),
            DisplayEvent::PointerMove(pointer) => self.drag_to(pointer),
            DisplayEvent::PointerUp => self.end_drag(),

            DisplayEvent::TitleBarButton(id, TitleButton::Close) => self.close_window(&id),
            DisplayEvent::TitleBarButton(id, TitleButton::Minimize) => self.minimize_window(&id),
            DisplayEvent::TitleBarButton(id, TitleButton::Maximize) => self.toggle_maximized(&id),

            DisplayEvent::TaskbarButtonClick(id) => self.taskbar_click(&id),
            DisplayEvent::IconClick(id) => self.icon_click(&id),
            DisplayEvent::IconDoubleClick(id) => self.icon_double_click(&id),
            DisplayEvent::IconPointerDown(id) => self.icon_pointer_down(&id),

            DisplayEvent::KeyCombo(modifiers, key) => self.key_combo_handler(modifiers, &key),

            // Applications only ever ask; the manager decides.
            DisplayEvent::App(id, request) => match request {
                AppRequest::Close => self.close_window(&id),
                AppRequest::Minimize => self.minimize_window(&id),
                AppRequest::Maximize => self.toggle_maximized(&id),
                AppRequest::StartDrag(pointer) => self.start_drag(&id, pointer),
            },

            DisplayEvent::SendCommand(command) => self.command_handler(&command),
        }
    }

    fn key_combo_handler(&mut self, modifiers: Modifiers, key: &str) -> bool {
        let ctrl_alt = modifiers.ctrl && modifiers.alt;
        if ctrl_alt && key.eq_ignore_ascii_case("delete") {
            return self.command_handler(&Command::OpenTaskManager);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, WindowId};

    #[test]
    fn ctrl_alt_delete_opens_the_task_manager() {
        let mut manager = Manager::new_test();
        let combo = Modifiers {
            ctrl: true,
            alt: true,
            shift: false,
        };
        assert!(!manager.display_event_handler(DisplayEvent::KeyCombo(
            Modifiers::default(),
            "Delete".to_owned()
        )));
        assert!(manager.display_event_handler(DisplayEvent::KeyCombo(combo, "Delete".to_owned())));
        assert!(manager
            .state
            .registry
            .get(&WindowId::from("taskManager"))
            .unwrap()
            .is_open);
    }

    #[test]
    fn title_bar_gesture_drags_the_window() {
        let mut manager = Manager::new_test();
        let cmd = WindowId::from("cmd");
        manager.open_window(&cmd);
        manager.display_event_handler(DisplayEvent::TitleBarPointerDown(
            cmd.clone(),
            Point::new(310, 305),
        ));
        manager.display_event_handler(DisplayEvent::PointerMove(Point::new(410, 355)));
        manager.display_event_handler(DisplayEvent::PointerUp);
        manager.display_event_handler(DisplayEvent::PointerMove(Point::new(0, 0)));
        assert_eq!(
            manager.state.registry.get(&cmd).unwrap().position,
            Point::new(400, 350)
        );
    }

    #[test]
    fn app_requests_are_routed_to_the_manager() {
        let mut manager = Manager::new_test();
        let notepad = WindowId::from("notepad");
        manager.open_window(&notepad);
        assert!(manager.display_event_handler(DisplayEvent::App(
            notepad.clone(),
            AppRequest::Maximize
        )));
        assert!(manager.state.registry.get(&notepad).unwrap().is_maximized);
        assert!(manager.display_event_handler(DisplayEvent::App(notepad.clone(), AppRequest::Close)));
        assert!(!manager.state.registry.get(&notepad).unwrap().is_open);
    }

    #[test]
    fn title_bar_buttons_close_minimize_and_maximize() {
        let mut manager = Manager::new_test();
        manager.surface.measurable = false;
        let about = WindowId::from("about");
        manager.open_window(&about);
        manager.display_event_handler(DisplayEvent::TitleBarButton(
            about.clone(),
            TitleButton::Maximize,
        ));
        manager.display_event_handler(DisplayEvent::TitleBarButton(
            about.clone(),
            TitleButton::Minimize,
        ));
        let record = manager.state.registry.get(&about).unwrap();
        assert!(record.is_maximized && record.is_minimized);
        manager.display_event_handler(DisplayEvent::TitleBarButton(about.clone(), TitleButton::Close));
        assert!(!manager.state.registry.get(&about).unwrap().is_open);
    }
}
