//! Panel configuration.
//!
//! Mirrors the options a page author passes when attaching a panel. JSON keys
//! are camelCase so the same object can be handed over from JavaScript.

use serde::{Deserialize, Serialize};

use crate::core::engine::Spacing;
use crate::result::{StickyError, StickyResult};

/// Options for a sticky panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StickyConfig {
    /// Whether sticking is enabled
    pub active: bool,
    /// Media query that must match for the panel to stick; `None` always matches
    pub media_query: Option<String>,
    /// Class added to the container element
    pub container_class: Option<String>,
    /// Selector of the element to pin
    pub child_selector: String,
    /// Gap kept above the element when fixed to the top
    pub top_space: f64,
    /// Gap kept below the element when fixed to the bottom
    pub bottom_space: f64,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            active: true,
            media_query: None,
            container_class: None,
            child_selector: String::new(),
            top_space: 0.0,
            bottom_space: 0.0,
        }
    }
}

impl StickyConfig {
    /// Creates a config pinning the element matched by `child_selector`
    #[must_use]
    pub fn new(child_selector: impl Into<String>) -> Self {
        Self {
            child_selector: child_selector.into(),
            ..Self::default()
        }
    }

    /// Parses and validates a JSON config
    pub fn from_json(json: &str) -> StickyResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets whether the panel is active
    #[must_use]
    pub const fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Gates sticking behind a media query
    #[must_use]
    pub fn with_media_query(mut self, query: impl Into<String>) -> Self {
        self.media_query = Some(query.into());
        self
    }

    /// Sets the container class
    #[must_use]
    pub fn with_container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = Some(class.into());
        self
    }

    /// Sets the gap to the viewport top
    #[must_use]
    pub const fn with_top_space(mut self, top_space: f64) -> Self {
        self.top_space = top_space;
        self
    }

    /// Sets the gap to the viewport bottom
    #[must_use]
    pub const fn with_bottom_space(mut self, bottom_space: f64) -> Self {
        self.bottom_space = bottom_space;
        self
    }

    /// Viewport spacing for the engine
    #[must_use]
    pub const fn spacing(&self) -> Spacing {
        Spacing::new(self.top_space, self.bottom_space)
    }

    /// Checks the config is usable
    pub fn validate(&self) -> StickyResult<()> {
        if self.child_selector.trim().is_empty() {
            return Err(StickyError::invalid_config("child_selector must not be empty"));
        }
        for (name, value) in [("top_space", self.top_space), ("bottom_space", self.bottom_space)] {
            if !value.is_finite() || value < 0.0 {
                return Err(StickyError::invalid_config(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        if self
            .media_query
            .as_deref()
            .is_some_and(|q| q.trim().is_empty())
        {
            return Err(StickyError::invalid_config("media_query must not be blank"));
        }
        Ok(())
    }
}
