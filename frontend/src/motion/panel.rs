use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;

use super::{Scheduler, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelState {
    pub fn is_expanded(self) -> bool {
        matches!(self, PanelState::Expanded)
    }

    /// Class names for the (collapsed view, expanded view) pair. Exactly one
    /// of them is `"inert"` at any time.
    pub fn visibility_classes(self) -> (&'static str, &'static str) {
        match self {
            PanelState::Collapsed => ("current", "inert"),
            PanelState::Expanded => ("inert", "current"),
        }
    }
}

/// Hover-driven open/close with a debounced close.
///
/// Pointer enter opens immediately and cancels a pending close. Pointer leave
/// schedules the close after `delay_ms`. Dropping the controller cancels any
/// pending close.
pub struct PanelController {
    state: Cell<PanelState>,
    pending_close: RefCell<Option<Subscription>>,
    delay_ms: u32,
    scheduler: Rc<dyn Scheduler>,
    on_change: Box<dyn Fn(PanelState)>,
}

impl PanelController {
    pub fn new(
        delay_ms: u32,
        scheduler: Rc<dyn Scheduler>,
        on_change: impl Fn(PanelState) + 'static,
    ) -> Rc<Self> {
        Rc::new(Self {
            state: Cell::new(PanelState::Collapsed),
            pending_close: RefCell::new(None),
            delay_ms,
            scheduler,
            on_change: Box::new(on_change),
        })
    }

    pub fn state(&self) -> PanelState {
        self.state.get()
    }

    #[cfg(test)]
    pub fn has_pending_close(&self) -> bool {
        self.pending_close.borrow().is_some()
    }

    pub fn enter(&self) {
        self.cancel_pending();
        self.transition(PanelState::Expanded);
    }

    /// Drops a scheduled close, if any. State is left as is.
    pub fn cancel_pending(&self) {
        let pending = self.pending_close.borrow_mut().take();
        if let Some(pending) = pending {
            debug!("panel close cancelled");
            pending.cancel();
        }
    }

    pub fn leave(self: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(self);
        let task = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                if let Some(panel) = weak.upgrade() {
                    let fired = panel.pending_close.borrow_mut().take();
                    drop(fired);
                    panel.transition(PanelState::Collapsed);
                }
            }),
        );
        // Replacing drops (and so cancels) an earlier pending close.
        let previous = self.pending_close.borrow_mut().replace(task);
        drop(previous);
    }

    fn transition(&self, next: PanelState) {
        if self.state.replace(next) != next {
            (self.on_change)(next);
        }
    }
}

impl Drop for PanelController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
