//! Browser IntersectionObserver as an intersection source

use storefront_header_core::{
    HeaderError, IntersectionCallback, IntersectionEntry, IntersectionSource,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observes elements against the viewport
#[derive(Debug, Clone, Copy, Default)]
pub struct DomIntersectionSource;

/// Live browser observer; the closure must outlive it
pub struct DomObservation {
    observer: IntersectionObserver,
    _callback: ObserverClosure,
}

fn entry_from_js(entry: &IntersectionObserverEntry) -> IntersectionEntry {
    IntersectionEntry::new(entry.is_intersecting(), entry.intersection_ratio())
}

impl IntersectionSource for DomIntersectionSource {
    type Target = Element;
    type Handle = DomObservation;

    fn observe(
        &self,
        target: &Element,
        threshold: f64,
        mut callback: IntersectionCallback,
    ) -> Result<DomObservation, HeaderError> {
        let closure: ObserverClosure = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: Vec<IntersectionEntry> = entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| entry_from_js(&entry))
                    .collect();
                callback(&batch);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
                .map_err(|e| HeaderError::ObserveFailed {
                    message: format!("{:?}", e),
                })?;
        observer.observe(target);

        Ok(DomObservation {
            observer,
            _callback: closure,
        })
    }

    fn unobserve(&self, handle: DomObservation) {
        handle.observer.disconnect();
    }
}
