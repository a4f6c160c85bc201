//! Sticky Panel
//!
//! Pins an element to the viewport while the page scrolls through its
//! container. Short elements stick to the top and are pushed up by the
//! container's bottom edge; elements taller than the viewport scroll until
//! their bottom is visible, stick there, and stick to the top again once
//! scrolled back. Sticking can be gated by a media query and switched off
//! entirely with the `active` flag.
//!
//! The placement logic lives in [`core`] and never touches the DOM. A
//! [`StickyPanel`] drives it through a [`StickyHost`]: [`wasm::MockDom`] for
//! native tests and, with the `wasm` feature, a `web-sys` host.
//!
//! # Example
//!
//! ```rust
//! use sticky_panel::prelude::*;
//!
//! let config = StickyConfig::new(".sticky-panel").with_top_space(10.0);
//! let mut panel = StickyPanel::new(config, MockDom::sidebar_page(200.0)).unwrap();
//! panel.mount().unwrap();
//!
//! panel.host_mut().scroll_to(600.0);
//! panel.on_scroll().unwrap();
//! assert_eq!(panel.placement(), Placement::FixedTop { top: 10.0 });
//!
//! panel.host_mut().scroll_to(0.0);
//! panel.on_scroll().unwrap();
//! assert_eq!(panel.placement(), Placement::Released);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod host;
pub mod panel;
pub mod result;

/// DOM hosts - the mock is always available for testing
pub mod wasm;

pub use config::StickyConfig;
pub use host::StickyHost;
pub use panel::StickyPanel;
pub use result::{StickyError, StickyResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::StickyConfig;
    pub use crate::core::{
        Frame, PageOffset, Placement, Position, Rect, ScrollState, Spacing, StickyEngine,
        StickyMetrics, StickyStyle,
    };
    pub use crate::host::StickyHost;
    pub use crate::panel::StickyPanel;
    pub use crate::result::{StickyError, StickyResult};
    pub use crate::wasm::{DomElement, DomEvent, MockDom};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::{BrowserHost, StickyPanelHandle};
}
