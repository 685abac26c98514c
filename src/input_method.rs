// SPDX-License-Identifier: GPL-3.0-only

//! The input method controller: boundary glue between the host framework
//! and the layout core.
//!
//! The controller owns exactly one layout model, one optional layout
//! updater, one renderer and one host handle. It forwards host lifecycle
//! calls (show/hide/subview selection) into the updater and renderer,
//! routes gesture events into the model, and pumps the model's event
//! stream back out: partial updates and resets fan out to the renderer,
//! released keys commit their label to the host. No business logic lives
//! here beyond delegation.

use futures::channel::mpsc;
use tracing::debug;

use crate::geometry::Rect;
use crate::glass::GestureEvent;
use crate::layout::event::LayoutEvent;
use crate::layout::key_area::KeyArea;
use crate::layout::model::{SharedLayoutModel, shared_layout_model};
use crate::logic::SharedLayoutUpdater;
use crate::renderer::SharedRenderer;

/// Host-side services the plugin reports into.
///
/// Implemented by the input-method framework binding: region management so
/// application windows resize around the keyboard, and text commit.
pub trait InputMethodHost {
    /// Declares the region that accepts input events.
    fn set_input_method_area(&mut self, region: Rect);

    /// Declares the region the keyboard occupies on screen.
    fn set_screen_region(&mut self, region: Rect);

    /// Commits finished text to the focused editor.
    fn commit_string(&mut self, text: &str);
}

/// Direction hint for host-driven context switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchDirection {
    /// Switch towards the previous input context.
    Previous,
    /// Switch towards the next input context.
    Next,
}

/// One selectable keyboard, as enumerated to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubView {
    /// Stable keyboard identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
}

/// Wires gesture source, layout model, layout updater and renderer
/// together and owns their lifetimes.
pub struct InputMethod<H: InputMethodHost> {
    model: SharedLayoutModel,
    updater: Option<SharedLayoutUpdater>,
    renderer: SharedRenderer,
    host: H,
    events: mpsc::UnboundedReceiver<LayoutEvent>,
}

impl<H: InputMethodHost> InputMethod<H> {
    /// Creates the controller and the layout model it owns.
    pub fn new(updater: Option<SharedLayoutUpdater>, renderer: SharedRenderer, host: H) -> Self {
        let model = shared_layout_model(updater.clone());
        let events = model.borrow_mut().subscribe();

        Self {
            model,
            updater,
            renderer,
            host,
            events,
        }
    }

    /// Shared handle to the layout model, for the capture surface and the
    /// presentation layer.
    pub fn model(&self) -> SharedLayoutModel {
        self.model.clone()
    }

    // ------------------------------------------------------------------------
    // Host lifecycle
    // ------------------------------------------------------------------------

    /// Shows the keyboard and reports the occupied region to the host.
    pub fn show(&mut self) {
        self.renderer.borrow_mut().show();
        self.push_region();
    }

    /// Hides the keyboard and reports the (now released) region.
    pub fn hide(&mut self) {
        self.renderer.borrow_mut().hide();
        self.push_region();
    }

    /// Hook for host-driven context switches. Deliberately a no-op.
    pub fn switch_context(&mut self, _direction: SwitchDirection, _animated: bool) {}

    /// Enumerates the keyboards the updater can serve.
    pub fn sub_views(&self) -> Vec<SubView> {
        let Some(updater) = &self.updater else {
            return Vec::new();
        };

        let updater = updater.borrow();
        updater
            .keyboard_ids()
            .into_iter()
            .map(|id| {
                let title = updater.keyboard_title(&id);
                SubView { id, title }
            })
            .collect()
    }

    /// Selects the active keyboard.
    pub fn set_active_sub_view(&mut self, id: &str) {
        if let Some(updater) = &self.updater {
            updater.borrow_mut().set_active_keyboard_id(id);
        }
    }

    /// Identifier of the active keyboard, empty without an updater.
    pub fn active_sub_view(&self) -> String {
        match &self.updater {
            Some(updater) => updater.borrow().active_keyboard_id(),
            None => String::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Event routing
    // ------------------------------------------------------------------------

    /// Routes one resolved gesture into the layout model, then pumps the
    /// resulting notifications. Returns the drained events so the host
    /// binding can re-emit them over its plugin ABI.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Vec<LayoutEvent> {
        debug!(?event, "gesture");

        {
            let mut model = self.model.borrow_mut();
            match event {
                GestureEvent::Entered(index) => model.on_entered(index),
                GestureEvent::Exited(index) => model.on_exited(index),
                GestureEvent::Pressed(index) => model.on_pressed(index),
                GestureEvent::Released(index) => model.on_released(index),
                GestureEvent::PressAndHold(index) => model.on_press_and_hold(index),
            }
        }

        self.process_events()
    }

    /// Pushes a policy-decided key area into the model, then pumps.
    pub fn set_key_area(&mut self, area: KeyArea) -> Vec<LayoutEvent> {
        self.model.borrow_mut().set_key_area(area);
        self.process_events()
    }

    /// Drains the model's event stream and dispatches side effects:
    /// renderer invalidation, extended-panel feedback, and text commit for
    /// released keys. Returns everything drained, in emission order.
    pub fn process_events(&mut self) -> Vec<LayoutEvent> {
        let mut events = Vec::new();
        while let Ok(Some(event)) = self.events.try_next() {
            events.push(event);
        }

        for event in &events {
            match event {
                LayoutEvent::KeysChanged { .. } => {
                    self.renderer.borrow_mut().on_keys_changed(&self.model);
                }
                LayoutEvent::ResetEnded => {
                    self.renderer.borrow_mut().on_layout_changed(&self.model);
                }
                LayoutEvent::ExtendedKeysShown(key) => {
                    self.model.borrow_mut().on_extended_keys_shown(key);
                }
                LayoutEvent::KeyReleased(key) if !key.label.is_empty() => {
                    self.host.commit_string(&key.label);
                }
                _ => {}
            }
        }

        events
    }

    fn push_region(&mut self) {
        let region = self.renderer.borrow().region();
        self.host.set_input_method_area(region);
        self.host.set_screen_region(region);
    }
}

// ============================================================================
// Tests
// ============================================================================
