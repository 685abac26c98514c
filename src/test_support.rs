// SPDX-License-Identifier: GPL-3.0-only

//! Shared test doubles: recording collaborators and canned key areas.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::mpsc;

use crate::geometry::Rect;
use crate::input_method::InputMethodHost;
use crate::layout::event::LayoutEvent;
use crate::layout::key::{Key, KeyState};
use crate::layout::key_area::KeyArea;
use crate::layout::model::SharedLayoutModel;
use crate::logic::{ActivePanel, LayoutUpdater};
use crate::renderer::Renderer;

/// Installs a compact subscriber so tests honor `RUST_LOG`. Safe to call
/// from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// A 120x48 surface with keys "a", "b", "c", 40px wide each.
pub fn three_key_area() -> KeyArea {
    KeyArea {
        rect: Rect::new(0.0, 0.0, 120.0, 48.0),
        background: String::new(),
        background_borders: Default::default(),
        keys: ["a", "b", "c"]
            .iter()
            .enumerate()
            .map(|(i, label)| Key {
                rect: Rect::new(i as f32 * 40.0, 0.0, 40.0, 48.0),
                label: label.to_string(),
                ..Key::default()
            })
            .collect(),
    }
}

/// Collects everything currently buffered in an event stream.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<LayoutEvent>) -> Vec<LayoutEvent> {
    let mut events = Vec::new();
    while let Ok(Some(event)) = rx.try_next() {
        events.push(event);
    }
    events
}

/// One observed layout-updater invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdaterCall {
    KeyEntered(Key),
    KeyExited(Key),
    KeyPressed(Key),
    KeyReleased(Key),
    ExtendedKeySelected(Key),
    ExtendedKeysShown(Key),
}

/// Layout updater double: applies the requested state verbatim and records
/// every notification in order.
#[derive(Default)]
pub struct RecordingUpdater {
    pub calls: Vec<UpdaterCall>,
    pub panel: ActivePanel,
    pub active_keyboard: String,
    pub keyboards: Vec<(String, String)>,
}

impl RecordingUpdater {
    pub fn with_keyboards(keyboards: &[(&str, &str)]) -> Self {
        Self {
            keyboards: keyboards
                .iter()
                .map(|(id, title)| (id.to_string(), title.to_string()))
                .collect(),
            ..Self::default()
        }
    }
}

impl LayoutUpdater for RecordingUpdater {
    fn modify_key(&self, key: &Key, state: KeyState) -> Key {
        key.with_state(state)
    }

    fn on_key_entered(&mut self, key: &Key) {
        self.calls.push(UpdaterCall::KeyEntered(key.clone()));
    }

    fn on_key_exited(&mut self, key: &Key) {
        self.calls.push(UpdaterCall::KeyExited(key.clone()));
    }

    fn on_key_pressed(&mut self, key: &Key) {
        self.calls.push(UpdaterCall::KeyPressed(key.clone()));
    }

    fn on_key_released(&mut self, key: &Key) {
        self.calls.push(UpdaterCall::KeyReleased(key.clone()));
    }

    fn on_extended_key_selected(&mut self, key: &Key) {
        self.calls.push(UpdaterCall::ExtendedKeySelected(key.clone()));
    }

    fn on_extended_keys_shown(&mut self, key: &Key) {
        self.calls.push(UpdaterCall::ExtendedKeysShown(key.clone()));
    }

    fn active_panel(&self) -> ActivePanel {
        self.panel
    }

    fn keyboard_ids(&self) -> Vec<String> {
        self.keyboards.iter().map(|(id, _)| id.clone()).collect()
    }

    fn keyboard_title(&self, id: &str) -> String {
        self.keyboards
            .iter()
            .find(|(kid, _)| kid == id)
            .map(|(_, title)| title.clone())
            .unwrap_or_default()
    }

    fn set_active_keyboard_id(&mut self, id: &str) {
        self.active_keyboard = id.to_string();
    }

    fn active_keyboard_id(&self) -> String {
        self.active_keyboard.clone()
    }
}

/// Renderer double tracking visibility and notification counts.
#[derive(Default)]
pub struct RecordingRenderer {
    pub visible: bool,
    pub layout_changed: usize,
    pub keys_changed: usize,
    pub region: Rect,
}

impl Renderer for RecordingRenderer {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn region(&self) -> Rect {
        self.region
    }

    fn on_layout_changed(&mut self, _model: &SharedLayoutModel) {
        self.layout_changed += 1;
    }

    fn on_keys_changed(&mut self, _model: &SharedLayoutModel) {
        self.keys_changed += 1;
    }
}

/// Host double recording region pushes and committed text.
#[derive(Default)]
pub struct RecordingHost {
    pub input_method_areas: Vec<Rect>,
    pub screen_regions: Vec<Rect>,
    pub committed: Vec<String>,
}

impl InputMethodHost for Rc<RefCell<RecordingHost>> {
    fn set_input_method_area(&mut self, region: Rect) {
        self.borrow_mut().input_method_areas.push(region);
    }

    fn set_screen_region(&mut self, region: Rect) {
        self.borrow_mut().screen_regions.push(region);
    }

    fn commit_string(&mut self, text: &str) {
        self.borrow_mut().committed.push(text.to_string());
    }
}
