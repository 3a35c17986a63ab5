//! Browser-backed event sources for the `motion` mechanisms.

mod intersection;
mod pointer;
mod timer;

pub use intersection::BandObserver;
pub use pointer::WindowPointer;
pub use timer::{IntervalTicker, TimeoutScheduler};

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub(crate) fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}
