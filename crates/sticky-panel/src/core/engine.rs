//! Placement state machine.
//!
//! The engine never touches the DOM. Each call to [`StickyEngine::update`]
//! takes a [`Frame`] (what the host measured right now) plus the
//! [`StickyMetrics`] cached when the panel was initialised, and decides which
//! inline style the pinned element should carry.
//!
//! Two regimes exist once the page has scrolled past the panel's top:
//!
//! - **short panel** (fits in the viewport below `top_space`): fixed to the
//!   top, pushed upwards when the container's bottom edge reaches it.
//! - **tall panel**: scrolls with the page until its bottom edge is visible,
//!   then sticks to the viewport bottom; reversing direction parks it inside
//!   the container until its top edge comes back into view, then it sticks to
//!   the viewport top.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::geometry::Rect;
use super::style::StickyStyle;

/// Geometry of the pinned element captured while it was in normal flow
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StickyMetrics {
    /// Element height
    pub height: f64,
    /// Document offset of the top edge
    pub offset_top: f64,
    /// Document offset of the bottom edge
    pub offset_bottom: f64,
    /// Document offset of the left edge
    pub offset_left: f64,
}

impl StickyMetrics {
    /// Captures metrics from a bounding rect and the current window scroll
    #[must_use]
    pub fn measure(rect: Rect, scroll_x: f64, scroll_y: f64) -> Self {
        let offset = rect.page_offset(scroll_x, scroll_y);
        Self {
            height: rect.height,
            offset_top: offset.top,
            offset_bottom: offset.top + rect.height,
            offset_left: offset.left,
        }
    }
}

/// Space kept between the pinned element and the viewport edges
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Spacing {
    /// Gap to the viewport top
    pub top: f64,
    /// Gap to the viewport bottom
    pub bottom: f64,
}

impl Spacing {
    /// Creates spacing
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Scroll-direction memory used by tall panels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollState {
    /// Scroll offset seen by the previous tall-panel update
    pub last_scroll: f64,
    /// Element is fixed to the viewport top
    pub top_fixed: bool,
    /// Element is fixed to the viewport bottom
    pub bottom_fixed: bool,
}

/// One measurement of the page, taken by the host at update time
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    /// `window.scrollX`
    pub scroll_left: f64,
    /// `window.scrollY`
    pub scroll_top: f64,
    /// `window.innerHeight`
    pub viewport_height: f64,
    /// Whether the activating media query currently matches
    pub media_matches: bool,
    /// Current bounding rect of the pinned element
    pub sticky: Rect,
    /// Current bounding rect of the container
    pub container: Rect,
}

/// Where the pinned element currently sits
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    /// Normal document flow
    #[default]
    Released,
    /// Fixed `top` px below the viewport top
    FixedTop {
        /// Offset from the viewport top
        top: f64,
    },
    /// Fixed `bottom` px above the viewport bottom
    FixedBottom {
        /// Offset from the viewport bottom
        bottom: f64,
    },
    /// Absolutely positioned inside the container
    Parked {
        /// Offset from the container top
        top: f64,
    },
}

impl Placement {
    /// Whether the element is pinned to the viewport
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::FixedTop { .. } | Self::FixedBottom { .. })
    }
}

/// A style write decided by the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Update {
    /// Resulting placement
    pub placement: Placement,
    /// Inline style to apply
    pub style: StickyStyle,
}

/// Sticky placement state machine
#[derive(Debug, Clone, Default)]
pub struct StickyEngine {
    spacing: Spacing,
    scroll: ScrollState,
    placement: Placement,
}

impl StickyEngine {
    /// Creates an engine with the given viewport spacing
    #[must_use]
    pub fn new(spacing: Spacing) -> Self {
        Self {
            spacing,
            scroll: ScrollState::default(),
            placement: Placement::Released,
        }
    }

    /// Viewport spacing in use
    #[must_use]
    pub const fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Replaces the viewport spacing
    pub fn set_spacing(&mut self, spacing: Spacing) {
        self.spacing = spacing;
    }

    /// Scroll-direction memory
    #[must_use]
    pub const fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    /// Placement of the last style written
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Records that the host cleared the element's inline style.
    ///
    /// Scroll-direction memory survives; only the placement is forgotten.
    pub fn release(&mut self) {
        self.placement = Placement::Released;
    }

    /// Computes the style for `frame`.
    ///
    /// Returns `None` when the element should keep its current inline style.
    pub fn update(&mut self, metrics: &StickyMetrics, frame: &Frame) -> Option<Update> {
        let engaged =
            frame.scroll_top > metrics.offset_top - self.spacing.top && frame.media_matches;
        if !engaged {
            return Some(self.commit(Placement::Released, StickyStyle::released()));
        }

        if metrics.height <= frame.viewport_height - self.spacing.top {
            Some(self.short_panel(metrics, frame))
        } else {
            self.tall_panel(metrics, frame)
        }
    }

    fn short_panel(&mut self, metrics: &StickyMetrics, frame: &Frame) -> Update {
        let container_top = frame.container.top + frame.scroll_top;
        let mut spacing = self.spacing.top;
        if frame.container.height - self.spacing.top + container_top
            < frame.scroll_top + frame.sticky.height
        {
            spacing =
                frame.container.height - frame.scroll_top + container_top - frame.sticky.height;
        }

        self.commit(
            Placement::FixedTop { top: spacing },
            StickyStyle::fixed_top(spacing, metrics.offset_left, frame.sticky.width),
        )
    }

    fn tall_panel(&mut self, metrics: &StickyMetrics, frame: &Frame) -> Option<Update> {
        let sticky_top = frame
            .sticky
            .page_offset(frame.scroll_left, frame.scroll_top)
            .top;
        let container_top = frame
            .container
            .page_offset(frame.scroll_left, frame.scroll_top)
            .top;
        let mut scroll = self.scroll;
        let mut decided = None;

        if frame.scroll_top > scroll.last_scroll {
            if scroll.top_fixed {
                let top = sticky_top - container_top;
                decided = Some((Placement::Parked { top }, StickyStyle::parked(top)));
                scroll.top_fixed = false;
            }
            if frame.scroll_top > metrics.offset_bottom - frame.viewport_height {
                let bottom = self.spacing.bottom;
                decided = Some((
                    Placement::FixedBottom { bottom },
                    StickyStyle::fixed_bottom(bottom, metrics.offset_left, frame.sticky.width),
                ));
                scroll.bottom_fixed = true;
            }
        } else {
            if scroll.bottom_fixed {
                let top = sticky_top - container_top;
                decided = Some((Placement::Parked { top }, StickyStyle::parked(top)));
                scroll.bottom_fixed = false;
            }
            if frame.scroll_top < sticky_top - self.spacing.top {
                let top = self.spacing.top;
                decided = Some((
                    Placement::FixedTop { top },
                    StickyStyle::fixed_top(top, metrics.offset_left, frame.sticky.width),
                ));
                scroll.top_fixed = true;
            }
        }

        scroll.last_scroll = frame.scroll_top;
        self.scroll = scroll;

        decided.map(|(placement, style)| self.commit(placement, style))
    }

    fn commit(&mut self, placement: Placement, style: StickyStyle) -> Update {
        if placement != self.placement {
            trace!(from = ?self.placement, to = ?placement, "sticky placement changed");
        }
        self.placement = placement;
        Update { placement, style }
    }
}
