//! Window scroll subscription with an explicit attach/detach lifecycle.
//!
//! The listener is registered passive and removed in [`ScrollSubscription::detach`]
//! (also run on drop), so a torn-down page never leaves a callback behind.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::state::scroll::ScrollSample;

/// Read the current scroll measurements from `window`.
pub fn read_sample(window: &web_sys::Window) -> ScrollSample {
    let offset = window.scroll_y().unwrap_or(0.0);
    let (document_height, viewport_height) = window
        .document()
        .and_then(|doc| doc.document_element())
        .map_or((0.0, 0.0), |el| {
            (f64::from(el.scroll_height()), f64::from(el.client_height()))
        });
    ScrollSample {
        offset,
        document_height,
        viewport_height,
    }
}

/// Live `scroll` listener on the window.
pub struct ScrollSubscription {
    window: web_sys::Window,
    callback: Closure<dyn FnMut()>,
    attached: bool,
}

impl ScrollSubscription {
    /// Register `on_sample` for every scroll event. Returns `None` outside a
    /// window or when registration is rejected.
    pub fn attach(mut on_sample: impl FnMut(ScrollSample) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let reader = window.clone();
        let callback = Closure::wrap(Box::new(move || on_sample(read_sample(&reader))) as Box<dyn FnMut()>);

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("scroll listener rejected: {e:?}");
            return None;
        }

        Some(Self {
            window,
            callback,
            attached: true,
        })
    }

    /// Measurements right now, for seeding state before the first event.
    pub fn sample_now(&self) -> ScrollSample {
        read_sample(&self.window)
    }

    /// Remove the listener. Safe to call repeatedly.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        self.attached = false;
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}
