//! `IntersectionObserver` binding for reveal-on-scroll blocks.
//!
//! The caller decides per entry whether the target should stop being
//! watched; the observer then `unobserve`s it immediately. Dropping the
//! handle disconnects the observer.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::reveal::REVEAL_THRESHOLD;

type EntryCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: EntryCallback,
    connected: bool,
}

impl VisibilityObserver {
    /// Watch `target`. `on_entry(is_intersecting)` returns `true` when
    /// the target should be released.
    pub fn observe(
        target: &web_sys::Element,
        mut on_entry: impl FnMut(bool) -> bool + 'static,
    ) -> Option<Self> {
        let callback: EntryCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if on_entry(entry.is_intersecting()) {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(e) => {
                    log::warn!("intersection observer unavailable: {e:?}");
                    return None;
                }
            };
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
            connected: true,
        })
    }

    /// Stop watching every target. Safe to call repeatedly.
    pub fn disconnect(&mut self) {
        if self.connected {
            self.observer.disconnect();
            self.connected = false;
        }
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
