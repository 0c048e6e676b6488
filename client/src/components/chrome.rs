//! Scroll-driven page chrome: reading progress bar and back-to-top button.

use leptos::prelude::*;

use crate::state::scroll::ScrollMetrics;
use crate::util::navigation::SectionNavigator;

/// Thin bar across the top of the viewport tracking scroll depth.
#[component]
pub fn ProgressBar() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollMetrics>>();

    view! {
        <div class="progress-bar" role="progressbar">
            <div class="progress-bar__fill" style=move || scroll.with(ScrollMetrics::progress_width_style)></div>
        </div>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollMetrics>>();
    let nav = expect_context::<SectionNavigator>();

    let class = move || {
        if scroll.with(|s| s.show_back_to_top) {
            "back-to-top back-to-top--visible"
        } else {
            "back-to-top"
        }
    };

    view! {
        <button class=class aria-label="Top" on:click=move |_| nav.top()>
            "↑"
        </button>
    }
}
