use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::NodeRef;

use super::DomError;
use crate::config;
use crate::motion::{EventSource, Subscription, VisibilityEntry};

/// Watches a section's marker regions against the central viewport band.
///
/// Each marker must carry its step index in `data-id`.
pub struct BandObserver {
    markers: Vec<NodeRef>,
    elements: Vec<Element>,
    root_margin: &'static str,
}

impl BandObserver {
    pub fn new(markers: Vec<NodeRef>) -> Self {
        Self {
            markers,
            elements: Vec::new(),
            root_margin: config::BAND_ROOT_MARGIN,
        }
    }

    /// Observes elements that are already in the document rather than ones a
    /// component will mount.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self {
            markers: Vec::new(),
            elements,
            root_margin: config::BAND_ROOT_MARGIN,
        }
    }

    fn try_subscribe(
        &self,
        sink: Rc<dyn Fn(Vec<VisibilityEntry>)>,
    ) -> Result<Subscription, DomError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| VisibilityEntry {
                        tag: parse_marker_tag(entry.target().get_attribute("data-id")),
                        intersecting: entry.is_intersecting(),
                    })
                    .collect();
                sink(batch);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(self.root_margin);
        options.set_threshold(&JsValue::from_f64(0.0));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let mounted = self.markers.iter().filter_map(|m| m.cast::<Element>());
        let mut observed = 0;
        for element in mounted.chain(self.elements.iter().cloned()) {
            observer.observe(&element);
            observed += 1;
        }
        debug!(
            "observing {} of {} markers",
            observed,
            self.markers.len() + self.elements.len()
        );

        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
            debug!("band observer disconnected");
        }))
    }
}

impl EventSource<Vec<VisibilityEntry>> for BandObserver {
    fn subscribe(&self, sink: Rc<dyn Fn(Vec<VisibilityEntry>)>) -> Subscription {
        self.try_subscribe(sink).unwrap_or_else(|err| {
            error!("failed to observe markers: {}", err);
            Subscription::noop()
        })
    }
}

/// Reads a marker's `data-id`. Anything that is not a plain non-negative
/// integer yields `None`.
pub(crate) fn parse_marker_tag(raw: Option<String>) -> Option<usize> {
    raw?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_marker_tag;

    #[test]
    fn marker_tags() {
        assert_eq!(parse_marker_tag(Some("3".into())), Some(3));
        assert_eq!(parse_marker_tag(Some(" 0 ".into())), Some(0));
        assert_eq!(parse_marker_tag(Some("-1".into())), None);
        assert_eq!(parse_marker_tag(Some("two".into())), None);
        assert_eq!(parse_marker_tag(None), None);
    }
}
