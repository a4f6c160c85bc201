//! Host-independent sticky logic: geometry, inline style and the placement
//! state machine.

pub mod engine;
pub mod geometry;
pub mod style;

pub use engine::{
    Frame, Placement, ScrollState, Spacing, StickyEngine, StickyMetrics, Update,
};
pub use geometry::{PageOffset, Rect};
pub use style::{Position, StickyStyle, MANAGED_PROPERTIES};
