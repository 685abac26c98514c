// SPDX-License-Identifier: GPL-3.0-only

//! Key records: the per-key unit of the layout model.
//!
//! A `Key` is an immutable value type. Interaction state changes never
//! mutate a shared instance; the layout updater produces a new record for
//! the desired state and the model swaps it in (copy-on-transition).

use serde::{Deserialize, Serialize};

use crate::geometry::{Margins, Rect};

/// Interaction state of a key. Exactly one state holds at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyState {
    /// Resting appearance, accepts presses.
    #[default]
    Normal,
    /// Finger is down on the key.
    Pressed,
}

/// One key of a laid-out keyboard surface.
///
/// The `rect` is the reactive (touch) area; the visual rectangle is derived
/// by shrinking it by `margins`. The `background` is a bare image name
/// resolved against the model's image directory at query time; an empty
/// name means "no background".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Key {
    /// Reactive hit rectangle within the key area.
    pub rect: Rect,

    /// Insets between the reactive area and the visual key face.
    #[serde(default)]
    pub margins: Margins,

    /// Background image name, empty for none.
    #[serde(default)]
    pub background: String,

    /// Nine-patch border widths of the background image.
    #[serde(default)]
    pub background_borders: Margins,

    /// Label drawn on the key face.
    #[serde(default)]
    pub label: String,

    /// Whether a long press opens an extended-key panel for this key.
    #[serde(default)]
    pub has_extended_keys: bool,

    /// Current interaction state.
    #[serde(default)]
    pub state: KeyState,
}

impl Key {
    /// Returns a copy of this key carrying the given state.
    pub fn with_state(&self, state: KeyState) -> Self {
        Self {
            state,
            ..self.clone()
        }
    }

    /// The visual key face: the reactive rect shrunk by the margins.
    ///
    /// The origin is the margin offset itself (not the key position); the
    /// presentation layer positions the face relative to the reactive area.
    pub fn visual_rect(&self) -> Rect {
        Rect::new(
            self.margins.left,
            self.margins.top,
            self.rect.width - self.margins.horizontal(),
            self.rect.height - self.margins.vertical(),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_key() -> Key {
        Key {
            rect: Rect::new(10.0, 20.0, 60.0, 48.0),
            margins: Margins::new(2.0, 3.0, 4.0, 5.0),
            background: "key-bg.png".to_string(),
            background_borders: Margins::uniform(6.0),
            label: "q".to_string(),
            has_extended_keys: true,
            state: KeyState::Normal,
        }
    }

    #[test]
    fn test_default_key_is_empty() {
        let key = Key::default();
        assert!(key.rect.is_empty(), "Default key has empty geometry");
        assert!(key.label.is_empty(), "Default key has no label");
        assert!(key.background.is_empty());
        assert!(!key.has_extended_keys);
        assert_eq!(key.state, KeyState::Normal);
    }

    #[test]
    fn test_with_state_copies_instead_of_mutating() {
        let key = sample_key();
        let pressed = key.with_state(KeyState::Pressed);

        assert_eq!(pressed.state, KeyState::Pressed);
        assert_eq!(key.state, KeyState::Normal, "Original must be untouched");
        assert_eq!(pressed.label, key.label);
        assert_eq!(pressed.rect, key.rect);
    }

    #[test]
    fn test_state_round_trip_restores_original() {
        let key = sample_key();
        let restored = key.with_state(KeyState::Pressed).with_state(KeyState::Normal);
        assert_eq!(restored, key);
    }

    #[test]
    fn test_visual_rect_shrinks_by_margins() {
        let key = sample_key();
        let visual = key.visual_rect();

        assert_eq!(visual.x, 2.0, "Origin x is the left margin");
        assert_eq!(visual.y, 3.0, "Origin y is the top margin");
        assert_eq!(visual.width, 60.0 - (2.0 + 4.0));
        assert_eq!(visual.height, 48.0 - (3.0 + 5.0));
    }

    #[test]
    fn test_key_json_roundtrip() {
        let key = sample_key();
        let json = serde_json::to_string(&key).expect("Should serialize");
        let back: Key = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(key, back);
    }

    #[test]
    fn test_key_deserializes_with_defaults() {
        let json = r#"{ "rect": { "x": 0.0, "y": 0.0, "width": 10.0, "height": 10.0 } }"#;
        let key: Key = serde_json::from_str(json).expect("Should parse minimal key");
        assert_eq!(key.state, KeyState::Normal);
        assert!(key.label.is_empty());
        assert!(!key.has_extended_keys);
    }
}
