use crate::apps::AppRequest;
use crate::models::{Point, WindowId};
use crate::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleButton {
    Close,
    Minimize,
    Maximize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// Input delivered by the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    TitleBarPointerDown(WindowId, Point),
    PointerMove(Point),
    PointerUp,
    TitleBarButton(WindowId, TitleButton),
    TaskbarButtonClick(WindowId),
    IconClick(WindowId),
    IconDoubleClick(WindowId),
    IconPointerDown(WindowId),
    KeyCombo(Modifiers, String),
    App(WindowId, AppRequest),
    SendCommand(Command),
}
