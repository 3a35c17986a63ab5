use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::NodeRef;

use super::DomError;
use crate::motion::{EventSource, PointerSample, Rect, Subscription};

/// Window-wide `mousemove`, paired with the container's current bounding box.
pub struct WindowPointer {
    container: NodeRef,
}

impl WindowPointer {
    pub fn new(container: NodeRef) -> Self {
        Self { container }
    }

    fn try_subscribe(&self, sink: Rc<dyn Fn(PointerSample)>) -> Result<Subscription, DomError> {
        let window = super::window()?;
        let container = self.container.clone();
        let callback = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
            let container = container.cast::<Element>().map(|el| {
                let rect = el.get_bounding_client_rect();
                Rect {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                }
            });
            sink(PointerSample {
                x: f64::from(e.client_x()),
                y: f64::from(e.client_y()),
                container,
            });
        });

        window.add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())?;
        debug!("mousemove listener attached");

        Ok(Subscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())
            {
                error!("failed to remove mousemove listener: {:?}", err);
            }
        }))
    }
}

impl EventSource<PointerSample> for WindowPointer {
    fn subscribe(&self, sink: Rc<dyn Fn(PointerSample)>) -> Subscription {
        self.try_subscribe(sink).unwrap_or_else(|err| {
            error!("failed to track pointer: {}", err);
            Subscription::noop()
        })
    }
}
