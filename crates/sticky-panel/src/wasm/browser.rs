//! Browser bindings for the sticky panel
//!
//! [`BrowserHost`] implements [`StickyHost`] over `web-sys`;
//! [`StickyPanelHandle`] is the JavaScript-facing entry point that wires the
//! window listeners and keeps them alive until it is detached or dropped.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, HtmlElement, MediaQueryList, MediaQueryListEvent, Window};

use crate::config::StickyConfig;
use crate::core::geometry::Rect;
use crate::core::style::StickyStyle;
use crate::host::StickyHost;
use crate::panel::StickyPanel;
use crate::result::{StickyError, StickyResult};

fn js_error(value: &JsValue) -> StickyError {
    StickyError::dom(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

fn to_js(err: StickyError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn handler_message(event: &str, err: &StickyError) -> String {
    format!("sticky-panel: {event} update failed: {err}")
}

/// Logs an event-handler failure to `tracing` and the browser console
fn report_handler_error(event: &str, err: &StickyError) {
    warn!(%err, event, "sticky update failed");
    console::warn_1(&handler_message(event, err).into());
}

/// `web-sys` backed document access
#[derive(Debug, Clone)]
pub struct BrowserHost {
    window: Window,
    document: Document,
    container: HtmlElement,
}

impl BrowserHost {
    /// Binds to the global window with `container` as the panel's container
    pub fn new(container: HtmlElement) -> StickyResult<Self> {
        let window = web_sys::window().ok_or_else(|| StickyError::dom("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| StickyError::dom("window has no document"))?;
        Ok(Self {
            window,
            document,
            container,
        })
    }

    /// The global window
    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }

    /// The container element
    #[must_use]
    pub const fn container(&self) -> &HtmlElement {
        &self.container
    }
}

/// Writes every managed property in order, stopping at the first failure
fn write_declarations<E>(
    style: &StickyStyle,
    mut set_property: impl FnMut(&'static str, &str) -> Result<(), E>,
) -> Result<(), E> {
    for (property, value) in style.declarations() {
        set_property(property, &value)?;
    }
    Ok(())
}

fn client_rect(element: &web_sys::Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

impl StickyHost for BrowserHost {
    type Element = HtmlElement;

    fn query_selector(&self, selector: &str) -> StickyResult<HtmlElement> {
        self.document
            .query_selector(selector)
            .map_err(|e| js_error(&e))?
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| StickyError::ElementNotFound {
                selector: selector.to_string(),
            })
    }

    fn bounding_rect(&self, element: &HtmlElement) -> Rect {
        client_rect(element)
    }

    fn container_rect(&self) -> Rect {
        client_rect(&self.container)
    }

    fn scroll_x(&self) -> f64 {
        self.window.scroll_x().unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn inner_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn match_media(&self, query: &str) -> bool {
        matches!(self.window.match_media(query), Ok(Some(list)) if list.matches())
    }

    fn set_style(&mut self, element: &HtmlElement, style: &StickyStyle) -> StickyResult<()> {
        let declaration = element.style();
        write_declarations(style, |property, value| {
            declaration.set_property(property, value)
        })
        .map_err(|e| js_error(&e))
    }
}

type SharedPanel = Rc<RefCell<StickyPanel<BrowserHost>>>;

/// Registered DOM listeners; dropping the closures invalidates them
#[derive(Debug)]
struct Listeners {
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
    on_media: Option<(MediaQueryList, Closure<dyn FnMut(MediaQueryListEvent)>)>,
}

impl Listeners {
    fn register(panel: &SharedPanel) -> StickyResult<Self> {
        let (window, query) = {
            let panel = panel.borrow();
            (
                panel.host().window().clone(),
                panel.config().media_query.clone(),
            )
        };

        let on_scroll = {
            let panel = Rc::clone(panel);
            Closure::<dyn FnMut()>::new(move || {
                if let Ok(mut panel) = panel.try_borrow_mut() {
                    if let Err(err) = panel.on_scroll() {
                        report_handler_error("scroll", &err);
                    }
                }
            })
        };
        let on_resize = {
            let panel = Rc::clone(panel);
            Closure::<dyn FnMut()>::new(move || {
                if let Ok(mut panel) = panel.try_borrow_mut() {
                    if let Err(err) = panel.on_resize() {
                        report_handler_error("resize", &err);
                    }
                }
            })
        };

        window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .map_err(|e| js_error(&e))?;
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(|e| js_error(&e))?;

        let mut listeners = Self {
            window,
            on_scroll,
            on_resize,
            on_media: None,
        };
        if let Some(query) = query {
            match Self::watch_media(&listeners.window, &query, panel) {
                Ok(on_media) => listeners.on_media = Some(on_media),
                Err(err) => {
                    listeners.remove();
                    return Err(err);
                }
            }
        }
        Ok(listeners)
    }

    fn watch_media(
        window: &Window,
        query: &str,
        panel: &SharedPanel,
    ) -> StickyResult<(MediaQueryList, Closure<dyn FnMut(MediaQueryListEvent)>)> {
        let list = window
            .match_media(query)
            .map_err(|e| js_error(&e))?
            .ok_or_else(|| StickyError::dom(format!("matchMedia({query}) returned null")))?;
        let panel = Rc::clone(panel);
        let callback =
            Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                if let Ok(mut panel) = panel.try_borrow_mut() {
                    panel.on_media_query_change(event.matches());
                }
            });
        list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .map_err(|e| js_error(&e))?;
        Ok((list, callback))
    }

    fn remove(self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        if let Some((list, callback)) = &self.on_media {
            let _ = list
                .remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
        }
    }
}

/// Sticky panel attached to a live page
#[derive(Debug)]
#[wasm_bindgen]
pub struct StickyPanelHandle {
    panel: SharedPanel,
    listeners: Option<Listeners>,
}

#[wasm_bindgen]
impl StickyPanelHandle {
    /// Attaches a panel to `container`, configured by a JSON object such as
    /// `{"childSelector": ".sticky-panel", "mediaQuery": "(min-width: 600px)"}`
    #[wasm_bindgen(constructor)]
    pub fn attach(container: HtmlElement, config_json: &str) -> Result<StickyPanelHandle, JsValue> {
        let config = StickyConfig::from_json(config_json).map_err(to_js)?;
        if let Some(class) = &config.container_class {
            container.class_list().add_1(class)?;
        }

        let host = BrowserHost::new(container).map_err(to_js)?;
        let panel = Rc::new(RefCell::new(StickyPanel::new(config, host).map_err(to_js)?));
        let listeners = Listeners::register(&panel).map_err(to_js)?;
        let mounted = panel.borrow_mut().mount();
        if let Err(err) = mounted {
            listeners.remove();
            return Err(to_js(err));
        }

        Ok(Self {
            panel,
            listeners: Some(listeners),
        })
    }

    /// Enables or disables sticking
    #[wasm_bindgen(js_name = setActive)]
    pub fn set_active(&self, active: bool) -> Result<(), JsValue> {
        self.panel.borrow_mut().set_active(active).map_err(to_js)
    }

    /// Re-measures the element, e.g. after the page layout changed
    pub fn refresh(&self) -> Result<(), JsValue> {
        self.panel.borrow_mut().on_resize().map_err(to_js)
    }

    /// Whether the panel is engaged
    #[wasm_bindgen(js_name = isStuck)]
    pub fn is_stuck(&self) -> bool {
        self.panel.borrow().is_stuck()
    }

    /// Current placement as JSON
    pub fn placement(&self) -> String {
        serde_json::to_string(&self.panel.borrow().placement()).unwrap_or_default()
    }

    /// Removes all listeners; inline styles are left untouched
    pub fn detach(&mut self) {
        if let Some(listeners) = self.listeners.take() {
            listeners.remove();
            self.panel.borrow_mut().unmount();
        }
    }
}

impl Drop for StickyPanelHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Initialize the module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"sticky-panel initialized".into());
}
