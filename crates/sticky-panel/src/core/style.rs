//! Inline style written to the pinned element.
//!
//! Only five properties are ever touched: `top`, `left`, `bottom`, `width`
//! and `position`. A `None` property is written as the empty string, which
//! removes the inline declaration and hands control back to the stylesheet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CSS property names managed by the panel, in write order
pub const MANAGED_PROPERTIES: [&str; 5] = ["top", "left", "bottom", "width", "position"];

/// CSS `position` values the panel uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Pinned to the viewport
    Fixed,
    /// Parked inside the container
    Absolute,
}

impl Position {
    /// CSS keyword
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Absolute => "absolute",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Inline style for the pinned element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StickyStyle {
    /// `top` in px
    pub top: Option<f64>,
    /// `left` in px
    pub left: Option<f64>,
    /// `bottom` in px
    pub bottom: Option<f64>,
    /// `width` in px
    pub width: Option<f64>,
    /// `position`; `None` leaves the element in normal flow
    pub position: Option<Position>,
}

impl StickyStyle {
    /// All managed properties cleared
    #[must_use]
    pub const fn released() -> Self {
        Self {
            top: None,
            left: None,
            bottom: None,
            width: None,
            position: None,
        }
    }

    /// Fixed to the viewport, `top` px below its top edge
    #[must_use]
    pub const fn fixed_top(top: f64, left: f64, width: f64) -> Self {
        Self {
            top: Some(top),
            left: Some(left),
            bottom: None,
            width: Some(width),
            position: Some(Position::Fixed),
        }
    }

    /// Fixed to the viewport, `bottom` px above its bottom edge
    #[must_use]
    pub const fn fixed_bottom(bottom: f64, left: f64, width: f64) -> Self {
        Self {
            top: None,
            left: Some(left),
            bottom: Some(bottom),
            width: Some(width),
            position: Some(Position::Fixed),
        }
    }

    /// Absolutely positioned `top` px below the container's top edge
    #[must_use]
    pub const fn parked(top: f64) -> Self {
        Self {
            top: Some(top),
            left: None,
            bottom: None,
            width: None,
            position: Some(Position::Absolute),
        }
    }

    /// Whether every managed property is cleared
    #[must_use]
    pub const fn is_released(&self) -> bool {
        self.top.is_none()
            && self.left.is_none()
            && self.bottom.is_none()
            && self.width.is_none()
            && self.position.is_none()
    }

    /// Property/value pairs in write order; cleared properties map to `""`
    #[must_use]
    pub fn declarations(&self) -> [(&'static str, String); 5] {
        [
            (MANAGED_PROPERTIES[0], px(self.top)),
            (MANAGED_PROPERTIES[1], px(self.left)),
            (MANAGED_PROPERTIES[2], px(self.bottom)),
            (MANAGED_PROPERTIES[3], px(self.width)),
            (
                MANAGED_PROPERTIES[4],
                self.position.map(|p| p.as_css().to_string()).unwrap_or_default(),
            ),
        ]
    }
}

fn px(value: Option<f64>) -> String {
    value.map(|v| format!("{v}px")).unwrap_or_default()
}

impl fmt::Display for StickyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (property, value) in self.declarations() {
            if value.is_empty() {
                continue;
            }
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_clears_everything() {
        let style = StickyStyle::released();
        assert!(style.is_released());
        assert!(style.declarations().iter().all(|(_, v)| v.is_empty()));
        assert_eq!(style, StickyStyle::default());
    }

    #[test]
    fn test_fixed_top_declarations() {
        let style = StickyStyle::fixed_top(10.0, 640.0, 300.0);
        assert_eq!(
            style.declarations(),
            [
                ("top", "10px".to_string()),
                ("left", "640px".to_string()),
                ("bottom", String::new()),
                ("width", "300px".to_string()),
                ("position", "fixed".to_string()),
            ]
        );
    }

    #[test]
    fn test_fixed_bottom_clears_top() {
        let style = StickyStyle::fixed_bottom(20.0, 0.0, 120.5);
        assert_eq!(style.top, None);
        assert_eq!(style.bottom, Some(20.0));
        assert_eq!(style.declarations()[3].1, "120.5px");
    }

    #[test]
    fn test_parked_is_absolute() {
        let style = StickyStyle::parked(340.0);
        assert_eq!(style.position, Some(Position::Absolute));
        assert_eq!(style.left, None);
        assert_eq!(style.width, None);
        assert!(!style.is_released());
    }

    #[test]
    fn test_display_omits_cleared() {
        let style = StickyStyle::fixed_top(0.0, 12.0, 200.0);
        assert_eq!(
            style.to_string(),
            "top: 0px; left: 12px; width: 200px; position: fixed"
        );
        assert_eq!(StickyStyle::released().to_string(), "");
    }

    #[test]
    fn test_negative_top_renders() {
        let style = StickyStyle::fixed_top(-35.0, 0.0, 10.0);
        assert_eq!(style.declarations()[0].1, "-35px");
    }

    #[test]
    fn test_position_css() {
        assert_eq!(Position::Fixed.to_string(), "fixed");
        assert_eq!(Position::Absolute.as_css(), "absolute");
    }

    #[test]
    fn test_style_serde() {
        let json = serde_json::to_string(&StickyStyle::parked(5.0)).unwrap();
        assert!(json.contains("\"absolute\""));
        let back: StickyStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StickyStyle::parked(5.0));
    }
}
