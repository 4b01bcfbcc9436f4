//! IntersectionObserver Capability
//!
//! One browser observer per watched anchor, so each can carry its own
//! callback and threshold.

use std::cell::RefCell;
use std::rc::Rc;

use infinite_scroll::VisibilityObserver;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

struct Watch {
    anchor: Element,
    observer: IntersectionObserver,
    // Must outlive the observer that calls it
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

#[derive(Default)]
pub struct DomVisibilityObserver {
    watches: RefCell<Vec<Watch>>,
}

fn same_node(a: &Element, b: &Element) -> bool {
    let a: &JsValue = a.as_ref();
    let b: &JsValue = b.as_ref();
    a == b
}

impl VisibilityObserver for DomVisibilityObserver {
    type Anchor = Element;

    fn observe(&self, anchor: &Element, callback: Rc<dyn Fn()>, threshold: f64) {
        let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let intersecting = entries
                    .get(0)
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false);
                if intersecting {
                    callback();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(anchor);
                self.watches.borrow_mut().push(Watch {
                    anchor: anchor.clone(),
                    observer,
                    _on_intersect: on_intersect,
                });
            }
            Err(e) => {
                log::error!(target: "sentinel", "IntersectionObserver unavailable: {:?}", e);
            }
        }
    }

    fn unobserve(&self, anchor: &Element) {
        self.watches.borrow_mut().retain(|watch| {
            if same_node(&watch.anchor, anchor) {
                watch.observer.unobserve(anchor);
                watch.observer.disconnect();
                false
            } else {
                true
            }
        });
    }
}

impl Drop for DomVisibilityObserver {
    fn drop(&mut self) {
        for watch in self.watches.get_mut().drain(..) {
            watch.observer.disconnect();
        }
    }
}
