//! Hooks that mount the `motion` mechanisms on browser event sources.
//!
//! Every hook subscribes once after the first render and hands the release
//! back to yew as the effect destructor, so unmounting a section detaches its
//! observer, listener or timer exactly once.

use std::rc::Rc;

use chrono::Utc;
use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom::{BandObserver, IntervalTicker, TimeoutScheduler, WindowPointer};
use crate::motion::{
    bind_parallax, bind_rotator, bind_selector, clock, EventSource, PanelController, PanelState,
    ParallaxProjector, PointerOffset,
};

/// One marker ref per step plus the step whose marker last entered the band.
#[hook]
pub fn use_viewport_selector(len: usize) -> (Rc<Vec<NodeRef>>, usize) {
    let active = use_state(|| 0usize);
    let markers = use_memo(|len| (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>(), len);

    {
        let setter = active.setter();
        let markers = markers.clone();
        use_effect_with_deps(
            move |_| {
                let source = BandObserver::new(markers.to_vec());
                let subscription = bind_selector(&source, len, move |idx| setter.set(idx));
                move || {
                    debug!("releasing selector over {} steps", len);
                    drop(subscription);
                }
            },
            (),
        );
    }

    (markers, *active)
}

#[hook]
pub fn use_timed_rotator(len: usize, period_ms: u32) -> usize {
    let active = use_state(|| 0usize);

    {
        let setter = active.setter();
        use_effect_with_deps(
            move |_| {
                let ticker = IntervalTicker::new(period_ms);
                let subscription = bind_rotator(&ticker, len, move |idx| setter.set(idx));
                move || drop(subscription)
            },
            (),
        );
    }

    *active
}

#[hook]
pub fn use_parallax(container: NodeRef, damping: f64) -> PointerOffset {
    let offset = use_state(PointerOffset::default);

    {
        let setter = offset.setter();
        use_effect_with_deps(
            move |_| {
                let pointer = WindowPointer::new(container);
                let subscription = bind_parallax(
                    &pointer,
                    ParallaxProjector::new(damping),
                    move |o| setter.set(o),
                );
                move || drop(subscription)
            },
            (),
        );
    }

    *offset
}

/// Current panel state plus the `mouseenter` / `mouseleave` handlers to put
/// on the hover region.
#[hook]
pub fn use_expandable_panel(
    close_delay_ms: u32,
) -> (PanelState, Callback<MouseEvent>, Callback<MouseEvent>) {
    let state = use_state(PanelState::default);
    let setter = state.setter();
    let controller = use_memo(
        move |_| {
            PanelController::new(close_delay_ms, Rc::new(TimeoutScheduler), move |s| {
                setter.set(s)
            })
        },
        (),
    );

    {
        let controller = controller.clone();
        use_effect_with_deps(move |_| move || controller.cancel_pending(), ());
    }

    let on_enter = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.enter())
    };
    let on_leave = Callback::from(move |_: MouseEvent| controller.leave());

    (*state, on_enter, on_leave)
}

/// Footer wall clocks, one reading per entry of [`clock::CITY_CLOCKS`].
#[hook]
pub fn use_city_clocks(refresh_ms: u32) -> Vec<String> {
    let readings = use_state(|| clock::read_all(Utc::now()));

    {
        let setter = readings.setter();
        use_effect_with_deps(
            move |_| {
                let ticker = IntervalTicker::new(refresh_ms);
                let subscription = ticker.subscribe(Rc::new(move |()| {
                    setter.set(clock::read_all(Utc::now()))
                }));
                move || drop(subscription)
            },
            (),
        );
    }

    (*readings).clone()
}
