//! Landing page: the single route of the site.
//!
//! ARCHITECTURE
//! ============
//! `LandingPage` owns the page-scoped signals (`UiState`, `ScrollMetrics`)
//! and the [`SectionNavigator`] built from them, provides all three as
//! context, and lays out the sections in page order.
//!
//! SYSTEM CONTEXT
//! ==============
//! After mount the page attaches one passive window scroll listener and
//! seeds the metrics from the current position, so a reload mid-page shows
//! the right header and progress immediately. The listener is detached on
//! unmount. Head metadata is upserted once after mount, before the listener
//! and regardless of whether it registers.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::articles::ArticlesSection;
use crate::components::chrome::{BackToTop, ProgressBar};
use crate::components::contact_form::ContactSection;
use crate::components::faq::FaqSection;
use crate::components::hero::Hero;
use crate::components::methods::MethodsSection;
use crate::components::pricing::PricingSection;
use crate::components::profile::ProfileSection;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::state::scroll::ScrollMetrics;
use crate::state::ui::UiState;
use crate::util::navigation::SectionNavigator;

#[cfg(feature = "hydrate")]
use crate::state::scroll::ScrollSample;
#[cfg(feature = "hydrate")]
use crate::util::scroll_listener::ScrollSubscription;

#[cfg(feature = "hydrate")]
fn publish(scroll: RwSignal<ScrollMetrics>, sample: ScrollSample) {
    let next = ScrollMetrics::from_sample(sample);
    if scroll.get_untracked() != next {
        scroll.set(next);
    }
}

/// Post-mount setup in order: head metadata, then the scroll listener.
/// Returns whether the listener attached.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn run_mount_steps(apply_metadata: impl FnOnce(), attach_scroll: impl FnOnce() -> bool) -> bool {
    apply_metadata();
    let attached = attach_scroll();
    if !attached {
        log::warn!("scroll listener unavailable; page chrome stays at its initial state");
    }
    attached
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    let scroll = RwSignal::new(ScrollMetrics::default());
    let nav = SectionNavigator::new(ui, scroll);

    provide_context(ui);
    provide_context(scroll);
    provide_context(nav);

    #[cfg(feature = "hydrate")]
    {
        let subscription = StoredValue::new_local(None::<ScrollSubscription>);
        Effect::new(move || {
            if subscription.with_value(Option::is_some) {
                return;
            }
            run_mount_steps(crate::util::metadata::apply_site_metadata, || {
                let Some(sub) = ScrollSubscription::attach(move |sample| publish(scroll, sample))
                else {
                    return false;
                };
                publish(scroll, sub.sample_now());
                subscription.set_value(Some(sub));
                true
            });
        });
        on_cleanup(move || {
            subscription.try_update_value(|slot| {
                if let Some(mut sub) = slot.take() {
                    sub.detach();
                }
            });
        });
    }

    view! {
        <div class="landing">
            <ProgressBar/>
            <SiteHeader/>
            <main>
                <Hero/>
                <MethodsSection/>
                <ProfileSection/>
                <PricingSection/>
                <ArticlesSection/>
                <FaqSection/>
                <ContactSection/>
            </main>
            <SiteFooter/>
            <BackToTop/>
        </div>
    }
}
