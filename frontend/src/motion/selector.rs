use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::{ActiveIndex, EventSource, Subscription};

/// One observation delivered by the visibility signal for a marker region.
///
/// `tag` is `None` when the marker's `data-id` could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityEntry {
    pub tag: Option<usize>,
    pub intersecting: bool,
}

#[cfg(test)]
impl VisibilityEntry {
    pub fn entered(tag: usize) -> Self {
        Self {
            tag: Some(tag),
            intersecting: true,
        }
    }

    pub fn left(tag: usize) -> Self {
        Self {
            tag: Some(tag),
            intersecting: false,
        }
    }
}

/// Tracks which step's marker region currently crosses the viewport band.
#[derive(Debug, Clone)]
pub struct ViewportSelector {
    active: ActiveIndex,
}

impl ViewportSelector {
    pub fn new(len: usize) -> Self {
        Self {
            active: ActiveIndex::new(len),
        }
    }

    pub fn active(&self) -> usize {
        self.active.get()
    }

    /// Applies a batch in delivery order. The last in-range entering marker
    /// wins; exits and stale tags are ignored. Returns whether the active
    /// index changed.
    pub fn apply(&mut self, batch: &[VisibilityEntry]) -> bool {
        let before = self.active.get();
        for entry in batch.iter().filter(|e| e.intersecting) {
            let applied = entry.tag.map_or(false, |tag| self.active.set(tag));
            if !applied {
                debug!(
                    "ignoring marker tag {:?} for {} steps",
                    entry.tag,
                    self.active.bound()
                );
            }
        }
        self.active.get() != before
    }
}

/// Subscribes a fresh selector over `len` steps to `source`.
///
/// `on_change` receives the new active index once per batch that moved it.
/// Releasing the returned subscription detaches the selector for good.
pub fn bind_selector<S>(source: &S, len: usize, on_change: impl Fn(usize) + 'static) -> Subscription
where
    S: EventSource<Vec<VisibilityEntry>> + ?Sized,
{
    let selector = RefCell::new(ViewportSelector::new(len));
    source.subscribe(Rc::new(move |batch: Vec<VisibilityEntry>| {
        let changed = selector.borrow_mut().apply(&batch);
        if changed {
            on_change(selector.borrow().active());
        }
    }))
}
