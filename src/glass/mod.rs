// SPDX-License-Identifier: GPL-3.0-only

//! Gesture vocabulary spoken by the touch-capture surface ("glass").
//!
//! The glass itself lives in the host toolkit: it owns the transparent
//! input window, hit-tests raw touch coordinates against the reactive
//! areas of the current key area, and resolves them to key indices. Only
//! the resulting index-based event protocol is owned here; the input
//! method controller routes it into the layout model.

use crate::geometry::Rect;
use crate::layout::key_area::KeyArea;

/// One resolved gesture, addressed by key index into the current key area.
///
/// Indices refer to the key area at the time the gesture was resolved; the
/// layout model degrades stale or out-of-range indices to the default key
/// rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// Hover or touch entered a key.
    Entered(usize),
    /// Hover or touch left a key.
    Exited(usize),
    /// Finger went down on a key.
    Pressed(usize),
    /// Finger came up on a key.
    Released(usize),
    /// Finger stayed down past the long-press threshold.
    PressAndHold(usize),
}

impl GestureEvent {
    /// Index of the key this gesture addresses.
    pub fn index(&self) -> usize {
        match self {
            GestureEvent::Entered(i)
            | GestureEvent::Exited(i)
            | GestureEvent::Pressed(i)
            | GestureEvent::Released(i)
            | GestureEvent::PressAndHold(i) => *i,
        }
    }
}

/// Hit-tests a surface-local point against the reactive key areas.
///
/// Returns the index of the first key whose reactive rect contains the
/// point. This is the resolution step a capture surface performs before
/// emitting a [`GestureEvent`].
pub fn key_index_at(area: &KeyArea, x: f32, y: f32) -> Option<usize> {
    area.keys.iter().position(|key| key.rect.contains(x, y))
}

/// Convenience for hit-testing against the surface bounds.
pub fn surface_contains(area_rect: &Rect, x: f32, y: f32) -> bool {
    area_rect.contains(x, y)
}

// ============================================================================
// Tests
// ============================================================================
