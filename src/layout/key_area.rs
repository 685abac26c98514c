// SPDX-License-Identifier: GPL-3.0-only

//! Key areas: one fully laid-out keyboard surface.
//!
//! A `KeyArea` bundles an ordered key sequence with the shared geometry and
//! background of the surface. It is a plain value type; the layout updater
//! builds new instances and the layout model swaps them in atomically.

use serde::{Deserialize, Serialize};

use crate::geometry::{Margins, Rect};
use crate::layout::key::Key;

/// An ordered, index-addressable set of keys plus surface metadata.
///
/// Key ordering is stable: an index valid when a notification fires stays
/// valid until the next full replace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyArea {
    /// Bounding rectangle of the whole surface.
    pub rect: Rect,

    /// Surface background image name, empty for none.
    #[serde(default)]
    pub background: String,

    /// Nine-patch border widths of the surface background.
    #[serde(default)]
    pub background_borders: Margins,

    /// Keys in presentation order.
    #[serde(default)]
    pub keys: Vec<Key>,
}

impl KeyArea {
    /// Key at `index`, or the default empty key when out of range.
    pub fn key_or_default(&self, index: usize) -> Key {
        self.keys.get(index).cloned().unwrap_or_default()
    }

    /// Replaces the key at `index`. Out-of-range indices are ignored; the
    /// caller already degraded to a default key and there is no slot to fill.
    pub fn replace_key(&mut self, index: usize, key: Key) -> bool {
        match self.keys.get_mut(index) {
            Some(slot) => {
                *slot = key;
                true
            }
            None => false,
        }
    }

    /// True when the surface has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
