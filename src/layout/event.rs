// SPDX-License-Identifier: GPL-3.0-only

//! Events emitted by the layout model.
//!
//! The model broadcasts at two granularities: row-scoped partial updates
//! (`KeysChanged`) for a single in-place key substitution, and full reset
//! brackets (`ResetBegan`/`ResetEnded`) when the whole surface is swapped.
//! Observers invalidate one cached row for the former and everything for
//! the latter.

use crate::layout::key::Key;

/// Notifications fanned out to layout model subscribers.
///
/// Structural-change events (`WidthChanged`, `HeightChanged`,
/// `BackgroundChanged`, `VisibleChanged`) fire only inside a reset bracket
/// and only for dimensions that actually changed.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    /// A full contents reset starts; cached per-index state is stale.
    ResetBegan,

    /// The full contents reset finished; re-query everything.
    ResetEnded,

    /// Surface width changed; carries the new width.
    WidthChanged(f32),

    /// Surface height changed; carries the new height.
    HeightChanged(f32),

    /// Surface background URL changed; `None` means no background.
    BackgroundChanged(Option<String>),

    /// Surface flipped between empty and non-empty.
    VisibleChanged(bool),

    /// Exactly one key was substituted in place.
    KeysChanged {
        /// Index of the replaced key.
        index: usize,
    },

    /// Hover entered a key. Carries the resolved key record.
    KeyEntered(Key),

    /// Hover left a key.
    KeyExited(Key),

    /// A key went down; carries the Pressed-state record.
    KeyPressed(Key),

    /// A key came up; carries the Normal-state record.
    KeyReleased(Key),

    /// A key was held past the long-press threshold.
    KeyLongPressed(Key),

    /// A long press on a key with extended keys requests the popup panel.
    ExtendedKeysShown(Key),
}

impl LayoutEvent {
    /// True for the structural/reset family that invalidates cached layout
    /// geometry, false for per-key interaction events.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            LayoutEvent::ResetBegan
                | LayoutEvent::ResetEnded
                | LayoutEvent::WidthChanged(_)
                | LayoutEvent::HeightChanged(_)
                | LayoutEvent::BackgroundChanged(_)
                | LayoutEvent::VisibleChanged(_)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
