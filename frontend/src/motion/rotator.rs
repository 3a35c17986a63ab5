use std::cell::RefCell;
use std::rc::Rc;

use super::{ActiveIndex, EventSource, Subscription};

/// Cycles through a sequence on a fixed period, ignoring scroll and input.
#[derive(Debug, Clone)]
pub struct TimedRotator {
    active: ActiveIndex,
}

impl TimedRotator {
    pub fn new(len: usize) -> Self {
        Self {
            active: ActiveIndex::new(len),
        }
    }

    #[cfg(test)]
    pub fn active(&self) -> usize {
        self.active.get()
    }

    pub fn tick(&mut self) -> usize {
        self.active.advance();
        self.active.get()
    }
}

/// Drives a rotator over `len` items from a periodic tick source.
pub fn bind_rotator<S>(source: &S, len: usize, on_change: impl Fn(usize) + 'static) -> Subscription
where
    S: EventSource<()> + ?Sized,
{
    let rotator = RefCell::new(TimedRotator::new(len));
    source.subscribe(Rc::new(move |()| {
        let next = rotator.borrow_mut().tick();
        on_change(next);
    }))
}

/// Horizontal shift of the testimonial track, in percent of its width, when
/// `visible` cards fit side by side.
pub fn testimonial_shift_percent(index: usize, visible: usize) -> f64 {
    index as f64 * (100.0 / visible.max(1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::source::testing::ManualSource;
    use std::cell::Cell;

    #[test]
    fn twelve_ticks_over_five_items() {
        let mut rotator = TimedRotator::new(5);
        for _ in 0..12 {
            rotator.tick();
        }
        assert_eq!(rotator.active(), 2);
    }

    #[test]
    fn single_item_never_moves() {
        let mut rotator = TimedRotator::new(1);
        assert_eq!(rotator.tick(), 0);
    }

    #[test]
    fn bound_rotator_reports_each_tick() {
        let source = ManualSource::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let _sub = bind_rotator(&source, 4, move |idx| s.borrow_mut().push(idx));
        for _ in 0..5 {
            source.emit(());
        }
        assert_eq!(*seen.borrow(), vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn ticks_after_teardown_are_dropped() {
        let source = ManualSource::new();
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        let sub = bind_rotator(&source, 4, move |_| c.set(c.get() + 1));
        source.emit(());
        drop(sub);
        source.emit(());
        source.emit(());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn shift_is_a_third_per_card() {
        assert_eq!(testimonial_shift_percent(0, 3), 0.0);
        assert!((testimonial_shift_percent(2, 3) - 66.666_666).abs() < 1e-3);
        assert_eq!(testimonial_shift_percent(1, 0), 100.0);
    }
}
