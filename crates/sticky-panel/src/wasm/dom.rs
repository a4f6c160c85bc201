//! Mock DOM for native testing
//!
//! Simulates just enough page layout for a sticky panel: elements with an
//! in-flow page rectangle, one container, a scrollable viewport and media
//! queries. Bounding rects honour the inline style last written to an
//! element, so a fixed element stays put while the page scrolls underneath.

use std::collections::HashMap;

use crate::core::geometry::Rect;
use crate::core::style::{Position, StickyStyle};
use crate::host::StickyHost;
use crate::result::{StickyError, StickyResult};

/// An element in the mock document
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// CSS classes
    pub classes: Vec<String>,
    /// Rectangle in document coordinates while in normal flow
    pub layout: Rect,
    /// Managed inline style
    pub style: StickyStyle,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            classes: Vec::new(),
            layout: Rect::default(),
            style: StickyStyle::released(),
        }
    }

    /// Sets the ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets the in-flow document rectangle
    #[must_use]
    pub const fn with_layout(mut self, layout: Rect) -> Self {
        self.layout = layout;
        self
    }

    /// Adds a class if missing
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Simple selector match: `#id`, `.class` or a tag name
    #[must_use]
    pub fn matches(&self, selector: &str) -> bool {
        let selector = selector.trim();
        if let Some(id) = selector.strip_prefix('#') {
            !id.is_empty() && self.id == id
        } else if let Some(class) = selector.strip_prefix('.') {
            self.has_class(class)
        } else {
            self.tag.eq_ignore_ascii_case(selector)
        }
    }
}

/// Things that happened to the mock window
#[derive(Debug, Clone, PartialEq)]
pub enum DomEvent {
    /// Window scrolled
    Scroll {
        /// New `scrollY`
        y: f64,
    },
    /// Viewport resized
    Resize {
        /// New `innerWidth`
        width: f64,
        /// New `innerHeight`
        height: f64,
    },
    /// A media query answer was overridden
    MediaChange {
        /// The query text
        query: String,
        /// Whether it now matches
        matches: bool,
    },
}

/// A recorded `set_style` call
#[derive(Debug, Clone, PartialEq)]
pub struct StyleWrite {
    /// ID of the element written to
    pub element_id: String,
    /// Style applied
    pub style: StickyStyle,
}

/// Mock document implementing [`StickyHost`]
#[derive(Debug)]
pub struct MockDom {
    /// Panel container
    pub container: DomElement,
    elements: Vec<DomElement>,
    scroll_x: f64,
    scroll_y: f64,
    viewport_width: f64,
    viewport_height: f64,
    media: HashMap<String, bool>,
    event_history: Vec<DomEvent>,
    style_history: Vec<StyleWrite>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty 1024x768 document
    #[must_use]
    pub fn new() -> Self {
        Self {
            container: DomElement::new("div").with_id("container"),
            elements: Vec::new(),
            scroll_x: 0.0,
            scroll_y: 0.0,
            viewport_width: 1024.0,
            viewport_height: 768.0,
            media: HashMap::new(),
            event_history: Vec::new(),
            style_history: Vec::new(),
        }
    }

    /// Two-column page: header, content, a sidebar container holding a
    /// `.sticky-panel` of the given height, then a footer
    #[must_use]
    pub fn sidebar_page(panel_height: f64) -> Self {
        let mut dom = Self::new();
        dom.container = DomElement::new("div")
            .with_id("side-1")
            .with_class("side-1")
            .with_layout(Rect::new(700.0, 120.0, 300.0, 2400.0));
        dom.append(
            DomElement::new("div")
                .with_id("header")
                .with_class("header")
                .with_layout(Rect::new(0.0, 0.0, 1024.0, 120.0)),
        );
        dom.append(
            DomElement::new("div")
                .with_id("sticky")
                .with_class("sticky-panel")
                .with_layout(Rect::new(700.0, 120.0, 300.0, panel_height)),
        );
        dom.append(
            DomElement::new("div")
                .with_id("footer")
                .with_class("footer")
                .with_layout(Rect::new(0.0, 2520.0, 1024.0, 400.0)),
        );
        dom
    }

    /// Adds an element to the document
    pub fn append(&mut self, element: DomElement) {
        self.elements.push(element);
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Current inline style of an element
    #[must_use]
    pub fn style_of(&self, id: &str) -> Option<StickyStyle> {
        self.get_element(id).map(|e| e.style)
    }

    /// Scrolls the window vertically
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
        self.event_history.push(DomEvent::Scroll { y: self.scroll_y });
    }

    /// Scrolls the window horizontally
    pub fn scroll_x_to(&mut self, x: f64) {
        self.scroll_x = x.max(0.0);
    }

    /// Resizes the viewport
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.event_history.push(DomEvent::Resize { width, height });
    }

    /// Forces the answer for a media query
    pub fn set_media(&mut self, query: &str, matches: bool) {
        self.media.insert(query.to_string(), matches);
        self.event_history.push(DomEvent::MediaChange {
            query: query.to_string(),
            matches,
        });
    }

    /// `window.innerWidth`
    #[must_use]
    pub const fn inner_width(&self) -> f64 {
        self.viewport_width
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Gets every style write, oldest first
    #[must_use]
    pub fn style_history(&self) -> &[StyleWrite] {
        &self.style_history
    }

    /// Clears both histories
    pub fn clear_history(&mut self) {
        self.event_history.clear();
        self.style_history.clear();
    }

    fn rect_of(&self, element: &DomElement) -> Rect {
        let style = &element.style;
        let width = style.width.unwrap_or(element.layout.width);
        let height = element.layout.height;
        match style.position {
            Some(Position::Fixed) => {
                let top = match (style.top, style.bottom) {
                    (Some(top), _) => top,
                    (None, Some(bottom)) => self.viewport_height - bottom - height,
                    (None, None) => element.layout.top - self.scroll_y,
                };
                let left = style
                    .left
                    .unwrap_or(element.layout.left - self.scroll_x);
                Rect::new(left, top, width, height)
            }
            Some(Position::Absolute) => {
                let origin = self.container.layout;
                let top = origin.top + style.top.unwrap_or(0.0) - self.scroll_y;
                let left = style
                    .left
                    .map_or(element.layout.left, |l| origin.left + l)
                    - self.scroll_x;
                Rect::new(left, top, width, height)
            }
            None => Rect::new(
                element.layout.left - self.scroll_x,
                element.layout.top - self.scroll_y,
                width,
                height,
            ),
        }
    }

    fn evaluate_media(&self, query: &str) -> bool {
        query
            .split(" and ")
            .map(str::trim)
            .all(|term| self.evaluate_media_term(term))
    }

    fn evaluate_media_term(&self, term: &str) -> bool {
        if matches!(term, "all" | "screen") {
            return true;
        }
        let Some(feature) = term.strip_prefix('(').and_then(|t| t.strip_suffix(')')) else {
            return false;
        };
        let Some((name, value)) = feature.split_once(':') else {
            return false;
        };
        let Ok(px) = value.trim().trim_end_matches("px").parse::<f64>() else {
            return false;
        };
        match name.trim() {
            "min-width" => self.viewport_width >= px,
            "max-width" => self.viewport_width <= px,
            "min-height" => self.viewport_height >= px,
            "max-height" => self.viewport_height <= px,
            _ => false,
        }
    }
}

impl StickyHost for MockDom {
    type Element = usize;

    fn query_selector(&self, selector: &str) -> StickyResult<usize> {
        self.elements
            .iter()
            .position(|e| e.matches(selector))
            .ok_or_else(|| StickyError::ElementNotFound {
                selector: selector.to_string(),
            })
    }

    fn bounding_rect(&self, element: &usize) -> Rect {
        self.elements
            .get(*element)
            .map(|e| self.rect_of(e))
            .unwrap_or_default()
    }

    fn container_rect(&self) -> Rect {
        self.container
            .layout
            .translate(-self.scroll_x, -self.scroll_y)
    }

    fn scroll_x(&self) -> f64 {
        self.scroll_x
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn inner_height(&self) -> f64 {
        self.viewport_height
    }

    fn match_media(&self, query: &str) -> bool {
        self.media
            .get(query)
            .copied()
            .unwrap_or_else(|| self.evaluate_media(query))
    }

    fn set_style(&mut self, element: &usize, style: &StickyStyle) -> StickyResult<()> {
        let target = self
            .elements
            .get_mut(*element)
            .ok_or_else(|| StickyError::dom(format!("no element at index {element}")))?;
        target.style = *style;
        self.style_history.push(StyleWrite {
            element_id: target.id.clone(),
            style: *style,
        });
        Ok(())
    }
}
