//! Declarative table of every DOM event the front-end listens to.
//!
//! The web crate walks [`BINDINGS`] once the document has parsed and attaches
//! one closure per row; rows whose required elements are missing are skipped.

use crate::page::{NAV_LINK_SELECTOR, TILT_SELECTOR};

pub const LOADER_ID: &str = "loading";
pub const SCROLL_PROGRESS_ID: &str = "scrollProgress";
pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const NAV_ID: &str = "nav";
pub const CONTACT_FORM_ID: &str = "contactForm";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventSource {
    Window,
    Document,
    Body,
    Id(&'static str),
    /// Every element matching the selector.
    Selector(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseMove,
    MouseLeave,
    DeviceOrientation,
    Resize,
    Scroll,
    Click,
    Submit,
    Load,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::MouseMove => "mousemove",
            EventKind::MouseLeave => "mouseleave",
            EventKind::DeviceOrientation => "deviceorientation",
            EventKind::Resize => "resize",
            EventKind::Scroll => "scroll",
            EventKind::Click => "click",
            EventKind::Submit => "submit",
            EventKind::Load => "load",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handler {
    TrackPointer,
    TrackOrientation,
    RequestMotionPermission,
    ResizeViewport,
    ScrollProgress,
    HideLoader,
    ToggleMenu,
    CloseMenu,
    SubmitContact,
    TiltCard,
    ResetTilt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub source: EventSource,
    pub kind: EventKind,
    pub handler: Handler,
    /// Remove the listener after it fires once.
    pub once: bool,
    /// Element ids that must all exist for the row to be wired.
    pub requires: &'static [&'static str],
}

impl Binding {
    const fn new(source: EventSource, kind: EventKind, handler: Handler) -> Self {
        Self {
            source,
            kind,
            handler,
            once: false,
            requires: &[],
        }
    }

    const fn requiring(mut self, ids: &'static [&'static str]) -> Self {
        self.requires = ids;
        self
    }

    const fn once(mut self) -> Self {
        self.once = true;
        self
    }
}

const MENU_IDS: &[&str] = &[MENU_TOGGLE_ID, NAV_ID];

pub const BINDINGS: &[Binding] = &[
    Binding::new(EventSource::Document, EventKind::MouseMove, Handler::TrackPointer),
    Binding::new(EventSource::Window, EventKind::Resize, Handler::ResizeViewport),
    Binding::new(EventSource::Window, EventKind::Scroll, Handler::ScrollProgress),
    Binding::new(EventSource::Window, EventKind::Load, Handler::HideLoader),
    Binding::new(EventSource::Id(MENU_TOGGLE_ID), EventKind::Click, Handler::ToggleMenu)
        .requiring(MENU_IDS),
    Binding::new(EventSource::Selector(NAV_LINK_SELECTOR), EventKind::Click, Handler::CloseMenu)
        .requiring(MENU_IDS),
    Binding::new(EventSource::Id(CONTACT_FORM_ID), EventKind::Submit, Handler::SubmitContact),
    Binding::new(EventSource::Selector(TILT_SELECTOR), EventKind::MouseMove, Handler::TiltCard),
    Binding::new(EventSource::Selector(TILT_SELECTOR), EventKind::MouseLeave, Handler::ResetTilt),
];

const ORIENTATION_DIRECT: &[Binding] = &[Binding::new(
    EventSource::Window,
    EventKind::DeviceOrientation,
    Handler::TrackOrientation,
)];

const ORIENTATION_GATED: &[Binding] = &[Binding::new(
    EventSource::Body,
    EventKind::Click,
    Handler::RequestMotionPermission,
)
.once()];

/// Device-orientation rows: behind a one-shot body click when the platform
/// gates motion sensors, otherwise direct.
pub fn orientation_bindings(permission_gated: bool) -> &'static [Binding] {
    if permission_gated {
        ORIENTATION_GATED
    } else {
        ORIENTATION_DIRECT
    }
}
