use crate::apps::{AppView, Application, HostedApp};
use crate::config::Config;
use crate::models::{ManagerState, WindowId};
use crate::state::State;
use crate::surfaces::Surface;

/// Maintains current program state.
pub struct Manager<C, SURFACE, A = Application> {
    pub state: State,
    pub config: C,
    pub surface: SURFACE,
    pub(crate) apps: Vec<(WindowId, A)>,
}

impl<C, SURFACE, A> Manager<C, SURFACE, A>
where
    C: Config,
    SURFACE: Surface,
    A: HostedApp,
{
    pub fn new(config: C) -> Self {
        let surface = SURFACE::new(&config);
        let apps = config
            .windows()
            .iter()
            .map(|w| (w.id.clone(), A::new(w)))
            .collect();

        Self {
            state: State::new(&config),
            config,
            surface,
            apps,
        }
    }

    #[must_use]
    pub fn app(&self, id: &WindowId) -> Option<&A> {
        self.apps.iter().find(|(known, _)| known == id).map(|(_, app)| app)
    }

    pub fn app_mut(&mut self, id: &WindowId) -> Option<&mut A> {
        self.apps
            .iter_mut()
            .find(|(known, _)| known == id)
            .map(|(_, app)| app)
    }

    /// Snapshot for observers.
    #[must_use]
    pub fn manager_state(&self) -> ManagerState {
        ManagerState::from(&self.state)
    }

    /// Hand the current layout to the surface and let every open application
    /// see its window.
    pub fn update_windows(&mut self) {
        let focused = self.state.focused_window().cloned();
        self.surface
            .update_windows(self.state.registry.all().collect(), focused.as_ref());

        let active = self.state.focus_manager.active().cloned();
        for (id, app) in &mut self.apps {
            let id: &WindowId = id;
            if let Ok(record) = self.state.registry.get(id) {
                if record.is_open {
                    let view = AppView {
                        id,
                        record,
                        is_active: active.as_ref() == Some(id),
                    };
                    app.render(&view);
                }
            }
        }
    }

    /// Send queued actions to the surface, collecting any events it answers with.
    pub fn flush_actions(&mut self) -> Vec<crate::DisplayEvent> {
        let mut events = vec![];
        while let Some(act) = self.state.actions.pop_front() {
            if let Some(event) = self.surface.execute_action(act) {
                events.push(event);
            }
        }
        events
    }
}

#[cfg(test)]
impl Manager<crate::config::tests::TestConfig, crate::surfaces::MockSurface> {
    pub fn new_test() -> Self {
        Self::new(crate::config::tests::TestConfig::default())
    }
}
