//! Basis studio landing page.
//!
//! `motion` holds the browser-independent scroll, timer and pointer
//! mechanisms; `dom` binds them to real observers, listeners and timers;
//! `hooks`, `components` and `pages` render the page with yew.

pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod hooks;
pub mod motion;
pub mod pages {
    pub mod landing;
}
