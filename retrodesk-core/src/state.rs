//! Everything the window manager owns and mutates.
use crate::apps::AppKind;
use crate::config::Config;
use crate::models::{
    DragState, FocusManager, MinimizeAnimation, Rect, WindowId, WindowRecord, WindowRegistry,
    ZOrderAllocator,
};
use crate::utils::timers::Timers;
use crate::DisplayAction;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug)]
pub struct State {
    pub registry: WindowRegistry,
    pub z_order: ZOrderAllocator,
    pub focus_manager: FocusManager,
    pub drag: DragState,
    pub minimize: MinimizeAnimation,
    pub timers: Timers,
    /// Time since the session started, as last reported by the event loop.
    pub clock: Duration,
    pub actions: VecDeque<DisplayAction>,
    pub desktop: Rect,
    pub task_manager: Option<WindowId>,
    pub minimize_duration: Duration,
    pub icon_click_delay: Duration,
}

impl State {
    pub(crate) fn new(config: &impl Config) -> Self {
        let windows = config.windows();
        let task_manager = windows
            .iter()
            .find(|w| w.app == AppKind::TaskManager)
            .map(|w| w.id.clone());
        let registry = WindowRegistry::new(
            windows
                .into_iter()
                .map(|w| {
                    let record = WindowRecord::new(w.title, w.position, w.size);
                    (w.id, record)
                })
                .collect(),
        );

        Self {
            registry,
            z_order: ZOrderAllocator::default(),
            focus_manager: FocusManager::default(),
            drag: DragState::default(),
            minimize: MinimizeAnimation::default(),
            timers: Timers::default(),
            clock: Duration::ZERO,
            actions: VecDeque::new(),
            desktop: config.desktop(),
            task_manager,
            minimize_duration: config.minimize_duration(),
            icon_click_delay: config.icon_click_delay(),
        }
    }

    /// Active window, unless it is minimized.
    #[must_use]
    pub fn focused_window(&self) -> Option<&WindowId> {
        self.focus_manager.window(&self.registry).map(|(id, _)| id)
    }

    /// Create an action to inform the surface of the new stacking order.
    pub fn update_window_order(&mut self) {
        let act = DisplayAction::SetWindowOrder(self.registry.stacking_order());
        self.actions.push_back(act);
    }
}
