use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

use crate::motion::{EventSource, Scheduler, Subscription};

/// Fixed-period tick. Releasing the subscription drops, and so cancels, the
/// interval.
pub struct IntervalTicker {
    period_ms: u32,
}

impl IntervalTicker {
    pub fn new(period_ms: u32) -> Self {
        Self { period_ms }
    }
}

impl EventSource<()> for IntervalTicker {
    fn subscribe(&self, sink: Rc<dyn Fn(())>) -> Subscription {
        let interval = Interval::new(self.period_ms, move || sink(()));
        Subscription::new(move || drop(interval))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Subscription {
        let timeout = Timeout::new(delay_ms, task);
        Subscription::new(move || drop(timeout))
    }
}
