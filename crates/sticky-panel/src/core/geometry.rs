//! Viewport and page geometry.
//!
//! All values are CSS pixels. A [`Rect`] is what `getBoundingClientRect()`
//! reports (relative to the viewport); a [`PageOffset`] is relative to the
//! document origin.

use serde::{Deserialize, Serialize};

/// Bounding client rectangle, relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the viewport's left edge
    pub left: f64,
    /// Distance from the viewport's top edge
    pub top: f64,
    /// Rendered width
    pub width: f64,
    /// Rendered height
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates a rectangle at the origin with the given size
    #[must_use]
    pub const fn with_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Bottom edge
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Returns the rectangle moved by `(dx, dy)`
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..self
        }
    }

    /// Position of this rectangle within the document, given the window scroll
    #[must_use]
    pub fn page_offset(&self, scroll_x: f64, scroll_y: f64) -> PageOffset {
        PageOffset {
            left: self.left + scroll_x,
            top: self.top + scroll_y,
        }
    }
}

/// Position relative to the document origin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PageOffset {
    /// Horizontal document offset
    pub left: f64,
    /// Vertical document offset
    pub top: f64,
}
