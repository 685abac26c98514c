// SPDX-License-Identifier: GPL-3.0-only

//! Key layout data model and gesture routing.
//!
//! This module owns the core of the keyboard plugin: the key records and
//! key areas describing a laid-out surface, and the [`LayoutModel`] that
//! exposes them as an observable, index-addressable grid while routing
//! press/release/hover/long-press gestures between the capture surface and
//! the layout-updater policy engine.
//!
//! # Sub-modules
//!
//! - **key**: `Key` and `KeyState` — one key's geometry, label, background
//!   and interaction state. Immutable value type, copy-on-transition.
//! - **key_area**: `KeyArea` — an ordered key sequence plus shared surface
//!   geometry and background.
//! - **event**: `LayoutEvent` — the two-tier notification vocabulary
//!   (row-scoped partial updates vs. full reset brackets).
//! - **model**: `LayoutModel` — the observable mediator itself, plus the
//!   closed per-key field query set (`KeyField`, `FieldValue`).

pub mod event;
pub mod key;
pub mod key_area;
pub mod model;

pub use event::LayoutEvent;
pub use key::{Key, KeyState};
pub use key_area::KeyArea;
pub use model::{FieldValue, KeyField, LayoutModel, SharedLayoutModel, shared_layout_model};

// ============================================================================
// Module Tests
// ============================================================================
