// SPDX-License-Identifier: GPL-3.0-only

//! Geometry value types shared by the layout model and its consumers.
//!
//! Keys and key areas are laid out in logical pixels on a single surface,
//! so plain `f32` rectangles and edge insets are sufficient. Both types are
//! serde-serializable so key areas can be shipped as data files.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width (non-negative by convention, not enforced).
    pub width: f32,
    /// Height (non-negative by convention, not enforced).
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from position and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if width or height is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns true if both rectangles have the same width and height,
    /// ignoring position. Used for structural change detection.
    pub fn same_size(&self, other: &Rect) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Returns true if the point lies inside the rectangle.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Edge insets: margins around a key, or border widths of a background.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    /// Left inset.
    pub left: f32,
    /// Top inset.
    pub top: f32,
    /// Right inset.
    pub right: f32,
    /// Bottom inset.
    pub bottom: f32,
}

impl Margins {
    /// Creates insets from the four edge values.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates uniform insets.
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of left and right insets.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom insets.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

// ============================================================================
// Tests
// ============================================================================
