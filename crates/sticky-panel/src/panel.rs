//! Sticky panel lifecycle.
//!
//! [`StickyPanel`] owns a [`StickyHost`] and reacts to the window events a
//! page forwards to it: scroll, resize, media-query changes and toggling of
//! the `active` flag. Geometry of the pinned element is measured once when
//! the panel engages and re-measured after every resize.

use std::fmt;

use tracing::debug;

use crate::config::StickyConfig;
use crate::core::engine::{Frame, Placement, ScrollState, StickyEngine, StickyMetrics};
use crate::core::style::StickyStyle;
use crate::host::StickyHost;
use crate::result::StickyResult;

/// The pinned element together with its cached geometry
#[derive(Debug, Clone)]
struct Sticky<E> {
    element: E,
    metrics: StickyMetrics,
}

/// A sticky panel bound to a host document
pub struct StickyPanel<H: StickyHost> {
    config: StickyConfig,
    host: H,
    media_matches: bool,
    sticky: Option<Sticky<H::Element>>,
    engine: StickyEngine,
    mounted: bool,
}

impl<H: StickyHost + fmt::Debug> fmt::Debug for StickyPanel<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickyPanel")
            .field("config", &self.config)
            .field("host", &self.host)
            .field("media_matches", &self.media_matches)
            .field("metrics", &self.metrics())
            .field("engine", &self.engine)
            .field("mounted", &self.mounted)
            .finish()
    }
}

impl<H: StickyHost> StickyPanel<H> {
    /// Creates an unmounted panel
    pub fn new(config: StickyConfig, host: H) -> StickyResult<Self> {
        config.validate()?;
        Ok(Self {
            media_matches: config.media_query.is_none(),
            engine: StickyEngine::new(config.spacing()),
            config,
            host,
            sticky: None,
            mounted: false,
        })
    }

    /// Evaluates the media query and engages the panel if active
    pub fn mount(&mut self) -> StickyResult<()> {
        if let Some(query) = self.config.media_query.clone() {
            let matches = self.host.match_media(&query);
            self.on_media_query_change(matches);
        }
        self.mounted = true;
        debug!(
            selector = %self.config.child_selector,
            active = self.config.active,
            media_matches = self.media_matches,
            "sticky panel mounted"
        );

        if self.config.active {
            self.init_sticky()?;
        }
        Ok(())
    }

    /// Stops reacting to events. Inline styles are left as they are.
    pub fn unmount(&mut self) {
        self.mounted = false;
        debug!(selector = %self.config.child_selector, "sticky panel unmounted");
    }

    /// Scroll handler
    pub fn on_scroll(&mut self) -> StickyResult<()> {
        if !self.mounted {
            return Ok(());
        }
        self.update_position()
    }

    /// Resize handler.
    ///
    /// Cached offsets are stale after a resize, so the element is released,
    /// measured again in normal flow and repositioned.
    pub fn on_resize(&mut self) -> StickyResult<()> {
        if !self.mounted || self.sticky.is_none() || !self.config.active {
            return Ok(());
        }
        self.destroy_sticky()?;
        self.init_sticky()?;
        self.update_position()
    }

    /// Media-query change handler
    pub fn on_media_query_change(&mut self, matches: bool) {
        if matches != self.media_matches {
            debug!(
                query = self.config.media_query.as_deref().unwrap_or_default(),
                matches,
                "media query changed"
            );
            self.media_matches = matches;
        }
    }

    /// Enables or disables sticking
    pub fn set_active(&mut self, active: bool) -> StickyResult<()> {
        self.config.active = active;
        if !self.mounted {
            return Ok(());
        }
        if active && self.sticky.is_none() {
            self.init_sticky()
        } else if !active && self.sticky.is_some() {
            self.destroy_sticky()
        } else {
            Ok(())
        }
    }

    /// Finds the pinned element and caches its geometry
    pub fn init_sticky(&mut self) -> StickyResult<()> {
        let element = self.host.query_selector(&self.config.child_selector)?;
        let rect = self.host.bounding_rect(&element);
        let metrics = StickyMetrics::measure(rect, self.host.scroll_x(), self.host.scroll_y());
        debug!(
            height = metrics.height,
            offset_top = metrics.offset_top,
            offset_left = metrics.offset_left,
            "sticky element measured"
        );
        self.sticky = Some(Sticky { element, metrics });
        Ok(())
    }

    /// Returns the element to normal flow and drops the cached geometry
    pub fn destroy_sticky(&mut self) -> StickyResult<()> {
        if let Some(sticky) = self.sticky.take() {
            self.host
                .set_style(&sticky.element, &StickyStyle::released())?;
            self.engine.release();
        }
        Ok(())
    }

    /// Recomputes and applies the element's inline style
    pub fn update_position(&mut self) -> StickyResult<()> {
        let Some(sticky) = self.sticky.as_ref() else {
            return Ok(());
        };

        let frame = Frame {
            scroll_left: self.host.scroll_x(),
            scroll_top: self.host.scroll_y(),
            viewport_height: self.host.inner_height(),
            media_matches: self.media_matches,
            sticky: self.host.bounding_rect(&sticky.element),
            container: self.host.container_rect(),
        };

        if let Some(update) = self.engine.update(&sticky.metrics, &frame) {
            self.host.set_style(&sticky.element, &update.style)?;
        }
        Ok(())
    }

    /// Panel configuration
    #[must_use]
    pub const fn config(&self) -> &StickyConfig {
        &self.config
    }

    /// Whether sticking is enabled
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.config.active
    }

    /// Whether the element is engaged (geometry cached)
    #[must_use]
    pub const fn is_stuck(&self) -> bool {
        self.sticky.is_some()
    }

    /// Whether the panel is receiving events
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Last known media-query answer
    #[must_use]
    pub const fn media_matches(&self) -> bool {
        self.media_matches
    }

    /// Placement of the last style written
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.engine.placement()
    }

    /// Scroll-direction memory of the engine
    #[must_use]
    pub const fn scroll_state(&self) -> ScrollState {
        self.engine.scroll_state()
    }

    /// Cached geometry, if engaged
    #[must_use]
    pub fn metrics(&self) -> Option<StickyMetrics> {
        self.sticky.as_ref().map(|s| s.metrics)
    }

    /// Host document
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host document
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
