// SPDX-License-Identifier: GPL-3.0-only

//! The layout-updater contract.
//!
//! A layout updater owns keyboard definitions and interaction policy: it
//! knows which visual variant a key takes in each state, which panel is
//! active, and which keyboards exist. The layout model forwards gesture
//! events here and asks it for state-transformed key records.
//!
//! The updater is an optional capability: a model without one degrades to
//! default key records instead of failing. Implementations must not hold a
//! handle back to the layout model; surface swaps they decide on are pushed
//! through the input method controller instead.

use std::cell::RefCell;
use std::rc::Rc;

use crate::layout::key::{Key, KeyState};

/// Which key panel currently receives releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePanel {
    /// The regular keyboard surface.
    #[default]
    Normal,
    /// The extended-key popup opened by a long press.
    Extended,
}

/// Policy engine consulted by the layout model.
///
/// `modify_key` is a pure transform with no failure mode. The `on_*` hooks
/// are notifications; the updater reacts by adjusting its own state (shift
/// level, active panel, committed text) and, when a transition produces a
/// new surface, by handing a fresh key area to the controller.
pub trait LayoutUpdater {
    /// Returns the variant of `key` that represents `state`.
    fn modify_key(&self, key: &Key, state: KeyState) -> Key;

    /// Hover entered `key`.
    fn on_key_entered(&mut self, key: &Key);

    /// Hover left `key`.
    fn on_key_exited(&mut self, key: &Key);

    /// `key` went down (already in Pressed state).
    fn on_key_pressed(&mut self, key: &Key);

    /// `key` came up on the normal panel (already back in Normal state).
    fn on_key_released(&mut self, key: &Key);

    /// `key` came up while the extended panel was active.
    fn on_extended_key_selected(&mut self, key: &Key);

    /// The extended-key popup was requested for `key`.
    fn on_extended_keys_shown(&mut self, key: &Key);

    /// Panel that receives the next release.
    fn active_panel(&self) -> ActivePanel;

    /// Identifiers of all keyboards this updater can serve.
    fn keyboard_ids(&self) -> Vec<String>;

    /// Human-readable title for a keyboard identifier.
    fn keyboard_title(&self, id: &str) -> String;

    /// Selects the active keyboard.
    fn set_active_keyboard_id(&mut self, id: &str);

    /// Identifier of the active keyboard.
    fn active_keyboard_id(&self) -> String;
}

/// Shared handle to a layout updater. Single-threaded by design, so a
/// reference-counted cell is sufficient.
pub type SharedLayoutUpdater = Rc<RefCell<dyn LayoutUpdater>>;
