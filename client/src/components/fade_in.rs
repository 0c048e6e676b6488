//! Reveal-on-scroll wrapper.
//!
//! Renders its children hidden and offset, then fades them in the first time
//! at least 10% of the block is in the viewport. The observer is released as
//! soon as the block reveals, and on unmount if it never did.

use leptos::prelude::*;

use crate::state::reveal::{RevealWatch, reveal_class, reveal_style};

#[cfg(feature = "hydrate")]
use crate::state::reveal::RevealStep;
#[cfg(feature = "hydrate")]
use crate::util::visibility::VisibilityObserver;

#[component]
pub fn FadeIn(
    /// Stable id of the block, used in diagnostics.
    #[prop(into)]
    block: String,
    /// Transition delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra classes for the wrapper.
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let watch = RwSignal::new(RevealWatch::new(block));
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let observer = StoredValue::new_local(None::<VisibilityObserver>);
        Effect::new(move || {
            let Some(el) = node_ref.get() else {
                return;
            };
            if observer.with_value(Option::is_some) {
                return;
            }
            if !watch.try_update(RevealWatch::attach).unwrap_or(false) {
                return;
            }
            let handle = VisibilityObserver::observe(&el, move |intersecting| {
                let step = watch.try_update(|w| w.observe(intersecting));
                if step == Some(RevealStep::RevealAndDetach) {
                    log::debug!(
                        "revealed block {}",
                        watch.with_untracked(|w| w.block_id().to_owned())
                    );
                    true
                } else {
                    false
                }
            });
            observer.set_value(handle);
        });
        on_cleanup(move || {
            watch.try_update(RevealWatch::detach);
            observer.try_update_value(|slot| {
                if let Some(mut handle) = slot.take() {
                    handle.disconnect();
                }
            });
        });
    }

    let class = move || reveal_class(watch.with(RevealWatch::visibility), &class);

    view! {
        <div node_ref=node_ref class=class style=reveal_style(delay_ms)>
            {children()}
        </div>
    }
}
