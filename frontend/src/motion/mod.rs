//! Scroll, timer and pointer driven state for the landing page sections.
//!
//! Nothing in here touches the browser. Each mechanism owns its state and is
//! fed by an [`EventSource`] or [`Scheduler`], so the `dom` module can plug in
//! real observers while tests push events by hand.

pub mod clock;
pub mod panel;
pub mod parallax;
pub mod rotator;
pub mod selector;
pub mod source;

pub use clock::{format_local_time, CityClock, CITY_CLOCKS};
pub use panel::{PanelController, PanelState};
pub use parallax::{bind_parallax, ParallaxProjector, PointerOffset, PointerSample, Rect};
pub use rotator::{bind_rotator, testimonial_shift_percent, TimedRotator};
pub use selector::{bind_selector, ViewportSelector, VisibilityEntry};
pub use source::{EventSource, Scheduler, Subscription};

/// Position in a fixed, non-empty sequence. `get() < bound()` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveIndex {
    index: usize,
    len: usize,
}

impl ActiveIndex {
    /// Starts at 0. A zero length is treated as one so index 0 stays resolvable.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn get(&self) -> usize {
        self.index
    }

    pub fn bound(&self) -> usize {
        self.len
    }

    /// Moves to `tag` if it is in range. Returns false (and leaves the index
    /// alone) otherwise.
    pub fn set(&mut self, tag: usize) -> bool {
        if tag >= self.len {
            return false;
        }
        self.index = tag;
        true
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }
}
