use std::fmt;
use std::rc::Rc;

/// Release guard for anything a section attaches to: observers, listeners,
/// intervals, pending timeouts.
///
/// The release closure runs exactly once, either on [`Subscription::cancel`]
/// or when the guard is dropped.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard for a source that never attached.
    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("live", &self.release.is_some())
            .finish()
    }
}

/// Something that delivers events of type `E` to subscribed sinks until the
/// returned [`Subscription`] is released.
pub trait EventSource<E> {
    fn subscribe(&self, sink: Rc<dyn Fn(E)>) -> Subscription;
}

/// One-shot timer primitive. Dropping the returned guard cancels the task.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Subscription;
}


#[cfg(test)]
mod tests {
    use super::testing::{ManualScheduler, ManualSource};
    use super::*;
    use std::cell::Cell;

    #[test]
    fn release_runs_once_on_cancel() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let sub = Subscription::new(move || c.set(c.get() + 1));
        sub.cancel();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn release_runs_on_drop() {
        let count = Rc::new(Cell::new(0));
        {
            let c = count.clone();
            let _sub = Subscription::new(move || c.set(c.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let source = ManualSource::<u32>::new();
        let seen = Rc::new(Cell::new(0));
        let s = seen.clone();
        let sub = source.subscribe(Rc::new(move |v: u32| s.set(s.get() + v)));
        source.emit(3);
        drop(sub);
        source.emit(4);
        assert_eq!(seen.get(), 3);
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        let sub = scheduler.schedule(100, Box::new(move || f.set(true)));
        scheduler.advance(50);
        drop(sub);
        scheduler.advance(100);
        assert!(!fired.get());
        assert_eq!(scheduler.pending_count(), 0);
    }
}
