//! Document access used by the panel.
//!
//! [`StickyHost`] is the only seam between the panel and a real page. The
//! browser binding implements it over `web-sys`; [`crate::wasm::MockDom`]
//! implements it natively so the whole lifecycle can be tested without a
//! browser.

use crate::core::geometry::Rect;
use crate::core::style::StickyStyle;
use crate::result::StickyResult;

/// Window, document and container access for a sticky panel
pub trait StickyHost {
    /// Handle to a DOM element
    type Element;

    /// Finds the first element matching `selector`
    fn query_selector(&self, selector: &str) -> StickyResult<Self::Element>;

    /// Current bounding client rect of `element`
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Current bounding client rect of the panel's container
    fn container_rect(&self) -> Rect;

    /// `window.scrollX`
    fn scroll_x(&self) -> f64;

    /// `window.scrollY`
    fn scroll_y(&self) -> f64;

    /// `window.innerHeight`
    fn inner_height(&self) -> f64;

    /// Evaluates a media query against the current viewport
    fn match_media(&self, query: &str) -> bool;

    /// Writes all managed inline properties of `element`
    fn set_style(&mut self, element: &Self::Element, style: &StickyStyle) -> StickyResult<()>;
}
