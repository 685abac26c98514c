// SPDX-License-Identifier: GPL-3.0-only

//! Maliboard - layout core for a Maliit-style virtual keyboard plugin
//!
//! This crate implements the layout model and input-event routing subsystem
//! of an on-screen keyboard plugin: the component that holds the current
//! key-area geometry, exposes it as a queryable, observable grid of key
//! records, and routes press/release/hover/long-press gestures between the
//! touch-capture surface, the layout-updater policy engine, and the
//! renderer.
//!
//! # Architecture
//!
//! Control flows in one direction around the [`layout::LayoutModel`]:
//!
//! 1. The capture surface resolves raw touches to key indices and emits
//!    [`glass::GestureEvent`]s.
//! 2. The [`input_method::InputMethod`] controller routes them into the
//!    model, which consults the [`logic::LayoutUpdater`] policy engine for
//!    state-transformed key records.
//! 3. The model re-broadcasts the outcome as [`layout::LayoutEvent`]s at
//!    two granularities: row-scoped partial updates for a keystroke, full
//!    reset brackets for a surface swap.
//! 4. The controller fans those out to the [`renderer::Renderer`] and
//!    commits released-key text to the [`input_method::InputMethodHost`].
//!
//! Everything runs on one UI-event thread; shared state is held behind
//! reference-counted cells with the controller as the single conceptual
//! owner. All core operations are fail-soft: out-of-range indices, a
//! missing updater, or an unknown field query degrade to documented
//! defaults instead of failing.
//!
//! # Modules
//!
//! - `config`: plugin settings with JSON persistence
//! - `geometry`: `Rect`/`Margins` value types
//! - `glass`: gesture vocabulary of the touch-capture surface
//! - `input_method`: controller wiring collaborators to the host
//! - `layout`: key records, key areas, the layout model and its events
//! - `logic`: layout-updater policy interface
//! - `renderer`: notification-only renderer interface

pub mod config;
pub mod geometry;
pub mod glass;
pub mod input_method;
pub mod layout;
pub mod logic;
pub mod renderer;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::PluginSettings;
pub use geometry::{Margins, Rect};
pub use glass::GestureEvent;
pub use input_method::{InputMethod, InputMethodHost, SubView, SwitchDirection};
pub use layout::{
    FieldValue, Key, KeyArea, KeyField, KeyState, LayoutEvent, LayoutModel, SharedLayoutModel,
    shared_layout_model,
};
pub use logic::{ActivePanel, LayoutUpdater, SharedLayoutUpdater};
pub use renderer::{NullRenderer, Renderer, SharedRenderer};

// ============================================================================
// Integration Tests
// ============================================================================
