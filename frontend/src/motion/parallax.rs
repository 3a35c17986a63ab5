use std::rc::Rc;

use log::warn;

use super::{EventSource, Subscription};
use crate::config;

/// Bounding box in viewport coordinates, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// A pointer move plus the container box at the moment of the move.
/// `container` is `None` while the section is not mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub container: Option<Rect>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// Translation for an element at the given depth. Unclamped.
    pub fn translate(&self, depth: f64) -> (f64, f64) {
        (self.x * depth, self.y * depth)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxProjector {
    damping: f64,
}

impl ParallaxProjector {
    pub fn new(damping: f64) -> Self {
        if !damping.is_finite() || damping <= 0.0 {
            warn!(
                "invalid parallax damping {}, using {}",
                damping,
                config::PARALLAX_DAMPING
            );
            return Self {
                damping: config::PARALLAX_DAMPING,
            };
        }
        Self { damping }
    }

    #[cfg(test)]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Offset of the pointer from the container's center, scaled down by the
    /// damping factor.
    pub fn project(&self, pointer: (f64, f64), container: &Rect) -> PointerOffset {
        let (cx, cy) = container.center();
        PointerOffset {
            x: (pointer.0 - cx) / self.damping,
            y: (pointer.1 - cy) / self.damping,
        }
    }
}

impl Default for ParallaxProjector {
    fn default() -> Self {
        Self::new(config::PARALLAX_DAMPING)
    }
}

/// Recomputes the offset on every pointer move and hands it to `on_change`.
/// Samples taken while the container is absent are skipped.
pub fn bind_parallax<S>(
    source: &S,
    projector: ParallaxProjector,
    on_change: impl Fn(PointerOffset) + 'static,
) -> Subscription
where
    S: EventSource<PointerSample> + ?Sized,
{
    source.subscribe(Rc::new(move |sample: PointerSample| {
        if let Some(container) = sample.container {
            on_change(projector.project((sample.x, sample.y), &container));
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::source::testing::ManualSource;
    use std::cell::{Cell, RefCell};

    fn box_centered_at(x: f64, y: f64) -> Rect {
        Rect {
            left: x - 100.0,
            top: y - 50.0,
            width: 200.0,
            height: 100.0,
        }
    }

    #[test]
    fn offset_and_depth_translation() {
        let projector = ParallaxProjector::new(30.0);
        let offset = projector.project((560.0, 430.0), &box_centered_at(500.0, 400.0));
        assert_eq!(offset, PointerOffset { x: 2.0, y: 1.0 });
        assert_eq!(offset.translate(2.0), (4.0, 2.0));
    }

    #[test]
    fn offset_is_unclamped() {
        let projector = ParallaxProjector::default();
        let offset = projector.project((-2500.0, 400.0), &box_centered_at(500.0, 400.0));
        assert_eq!(offset.x, -100.0);
        assert_eq!(offset.translate(3.0).0, -300.0);
    }

    #[test]
    fn bad_damping_falls_back() {
        assert_eq!(ParallaxProjector::new(0.0).damping(), 30.0);
        assert_eq!(ParallaxProjector::new(f64::NAN).damping(), 30.0);
        assert_eq!(ParallaxProjector::new(12.0).damping(), 12.0);
    }

    #[test]
    fn skips_samples_without_container() {
        let source = ManualSource::new();
        let last = Rc::new(RefCell::new(None));
        let l = last.clone();
        let _sub = bind_parallax(&source, ParallaxProjector::default(), move |o| {
            *l.borrow_mut() = Some(o)
        });

        source.emit(PointerSample {
            x: 10.0,
            y: 10.0,
            container: None,
        });
        assert!(last.borrow().is_none());

        source.emit(PointerSample {
            x: 560.0,
            y: 430.0,
            container: Some(box_centered_at(500.0, 400.0)),
        });
        assert_eq!(*last.borrow(), Some(PointerOffset { x: 2.0, y: 1.0 }));
    }

    #[test]
    fn detached_listener_ignores_moves() {
        let source = ManualSource::new();
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        let sub = bind_parallax(&source, ParallaxProjector::default(), move |_| {
            c.set(c.get() + 1)
        });
        let sample = PointerSample {
            x: 1.0,
            y: 1.0,
            container: Some(box_centered_at(0.0, 0.0)),
        };
        source.emit(sample);
        sub.cancel();
        source.emit(sample);
        assert_eq!(calls.get(), 1);
    }
}
