// SPDX-License-Identifier: GPL-3.0-only

//! Renderer interface consumed by the input method controller.
//!
//! The backend that actually paints key pixmaps lives outside this crate.
//! It is a notification-only observer: the controller tells it that the
//! layout or individual keys changed, and it pulls current state through
//! the layout model's read API. Nothing flows back into the core.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::Rect;
use crate::layout::model::SharedLayoutModel;

/// Paints the keyboard surface and reports the screen region it occupies.
pub trait Renderer {
    /// Makes the keyboard surface visible.
    fn show(&mut self);

    /// Hides the keyboard surface.
    fn hide(&mut self);

    /// Current visibility.
    fn is_visible(&self) -> bool;

    /// Screen region occupied by the surface. Hidden surfaces report an
    /// empty region so the host releases the reserved screen space.
    fn region(&self) -> Rect;

    /// The whole surface was swapped; invalidate everything and repaint.
    fn on_layout_changed(&mut self, model: &SharedLayoutModel);

    /// Individual keys changed state; a scoped repaint is enough.
    fn on_keys_changed(&mut self, model: &SharedLayoutModel);
}

/// Shared handle to a renderer. The controller owns the wiring; tests and
/// hosts may keep a clone for inspection.
pub type SharedRenderer = Rc<RefCell<dyn Renderer>>;

/// Renderer that paints nothing. Useful for headless hosts and tests; it
/// still tracks visibility so region reporting stays consistent.
#[derive(Debug, Default)]
pub struct NullRenderer {
    visible: bool,
}

impl NullRenderer {
    /// Creates a hidden null renderer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for NullRenderer {
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
        Rect::default()
    }

    fn on_layout_changed(&mut self, _model: &SharedLayoutModel) {}

    fn on_keys_changed(&mut self, _model: &SharedLayoutModel) {}
}

// ============================================================================
// Tests
// ============================================================================
