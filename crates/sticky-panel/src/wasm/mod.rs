//! DOM hosts
//!
//! `MockDom` is always available so the panel lifecycle can be exercised
//! natively; the `web-sys` host is compiled with the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;

#[cfg(feature = "wasm")]
pub use browser::{BrowserHost, StickyPanelHandle};
pub use dom::{DomElement, DomEvent, MockDom, StyleWrite};
