//! Recording sinks for platform effects, UI events, and modal pushes
//!
//! Each recorder retains everything pushed at it; tests assert on the
//! snapshot accessors after the action under test completes.

use palaver_client::{EventSink, OpenTarget, Platform, Route, UiEvent};
use palaver_modals::{Modal, ModalSink};
use parking_lot::Mutex;

/// A [`Platform`] that records clipboard writes, URL opens, and navigations.
pub struct RecordingPlatform {
    origin: String,
    clipboard: Mutex<Vec<String>>,
    opened: Mutex<Vec<(String, OpenTarget)>>,
    routes: Mutex<Vec<Route>>,
}

impl RecordingPlatform {
    /// A recorder with the default test origin
    #[must_use]
    pub fn new() -> Self {
        Self::with_origin("https://palaver.chat")
    }

    /// A recorder with an explicit origin
    #[must_use]
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            clipboard: Mutex::new(Vec::new()),
            opened: Mutex::new(Vec::new()),
            routes: Mutex::new(Vec::new()),
        }
    }

    /// Every clipboard write, in order
    #[must_use]
    pub fn clipboard(&self) -> Vec<String> {
        self.clipboard.lock().clone()
    }

    /// Every opened URL with its target, in order
    #[must_use]
    pub fn opened(&self) -> Vec<(String, OpenTarget)> {
        self.opened.lock().clone()
    }

    /// Every navigation, in order
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }
}

impl Default for RecordingPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for RecordingPlatform {
    fn write_clipboard(&self, text: &str) {
        self.clipboard.lock().push(text.to_string());
    }

    fn open_url(&self, url: &str, target: OpenTarget) {
        self.opened.lock().push((url.to_string(), target));
    }

    fn navigate(&self, route: Route) {
        self.routes.lock().push(route);
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }
}

/// An [`EventSink`] that records every emitted UI event.
#[derive(Default)]
pub struct RecordingEvents {
    events: Mutex<Vec<UiEvent>>,
}

impl RecordingEvents {
    /// An empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every emitted event, in order
    #[must_use]
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().clone()
    }
}

impl EventSink for RecordingEvents {
    fn emit(&self, event: UiEvent) {
        self.events.lock().push(event);
    }
}

/// A [`ModalSink`] that records every pushed modal.
#[derive(Default)]
pub struct RecordingModals {
    modals: Mutex<Vec<Modal>>,
}

impl RecordingModals {
    /// An empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every pushed modal, in order
    #[must_use]
    pub fn modals(&self) -> Vec<Modal> {
        self.modals.lock().clone()
    }
}

impl ModalSink for RecordingModals {
    fn push(&self, modal: Modal) {
        self.modals.lock().push(modal);
    }
}
