#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use basis_landing::dom::{BandObserver, WindowPointer};
use basis_landing::motion::{EventSource, PointerSample, VisibilityEntry};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, MouseEvent, MouseEventInit};
use yew::NodeRef;

wasm_bindgen_test_configure!(run_in_browser);

fn move_pointer(x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn pointer_listener_is_removed_on_release() {
    let seen: Rc<RefCell<Vec<PointerSample>>> = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    let pointer = WindowPointer::new(NodeRef::default());
    let sub = pointer.subscribe(Rc::new(move |sample: PointerSample| s.borrow_mut().push(sample)));

    move_pointer(12, 34);
    sub.cancel();
    move_pointer(56, 78);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!((seen[0].x, seen[0].y), (12.0, 34.0));
    assert!(seen[0].container.is_none());
}

fn mount_div(style: &str, data_id: Option<&str>) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_attribute("style", style).unwrap();
    if let Some(id) = data_id {
        div.set_attribute("data-id", id).unwrap();
    }
    document.body().unwrap().append_child(&div).unwrap();
    div
}

#[wasm_bindgen_test]
async fn band_observer_reports_markers_until_released() {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let spacer = mount_div("height: 400vh; width: 1px;", None);
    let marker = mount_div(
        "position: absolute; top: 0; left: 0; width: 100%; height: 100vh;",
        Some("1"),
    );

    let batches: Rc<RefCell<Vec<Vec<VisibilityEntry>>>> = Rc::new(RefCell::new(Vec::new()));
    let b = batches.clone();
    let observer = BandObserver::from_elements(vec![marker.clone()]);
    let sub = observer.subscribe(Rc::new(move |batch: Vec<VisibilityEntry>| {
        b.borrow_mut().push(batch)
    }));

    TimeoutFuture::new(200).await;
    assert_eq!(
        batches.borrow().first(),
        Some(&vec![VisibilityEntry {
            tag: Some(1),
            intersecting: true,
        }])
    );

    let delivered = batches.borrow().len();
    sub.cancel();
    window.scroll_to_with_x_and_y(0.0, 10_000.0);
    TimeoutFuture::new(200).await;
    assert_eq!(batches.borrow().len(), delivered);

    window.scroll_to_with_x_and_y(0.0, 0.0);
    marker.remove();
    spacer.remove();
}

#[wasm_bindgen_test]
fn band_observer_skips_unmounted_refs() {
    let observer = BandObserver::new(vec![NodeRef::default(), NodeRef::default()]);
    let calls = Rc::new(RefCell::new(0));
    let c = calls.clone();
    let sub = observer.subscribe(Rc::new(move |_batch: Vec<VisibilityEntry>| {
        *c.borrow_mut() += 1
    }));
    sub.cancel();
    assert_eq!(*calls.borrow(), 0);
}
