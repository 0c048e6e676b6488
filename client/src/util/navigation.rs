//! In-page navigation: smooth scrolling to section anchors.
//!
//! A missing section is not an error (sections may be conditionally
//! rendered); the jump is skipped and `false` is returned.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::content::Section;
use crate::state::scroll::ScrollMetrics;
use crate::state::ui::UiState;

/// Header height once the page is scrolled past the header threshold.
pub const HEADER_OFFSET_COMPACT: f64 = 70.0;

/// Header height at the top of the page.
pub const HEADER_OFFSET_FULL: f64 = 100.0;

#[must_use]
pub fn header_offset(past_threshold: bool) -> f64 {
    if past_threshold {
        HEADER_OFFSET_COMPACT
    } else {
        HEADER_OFFSET_FULL
    }
}

/// Document-space scroll target for an element whose viewport-relative top
/// is `element_top` while the page is scrolled to `page_offset`.
#[must_use]
pub fn section_target(element_top: f64, page_offset: f64, past_threshold: bool) -> f64 {
    element_top + page_offset - header_offset(past_threshold)
}

#[cfg(feature = "hydrate")]
fn smooth_scroll(window: &web_sys::Window, top: f64) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Smooth-scroll to the element with id `section_id`.
///
/// Returns `true` when the element existed and a scroll was issued.
pub fn scroll_to_section(section_id: &str, past_threshold: bool) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(element) = window
            .document()
            .and_then(|doc| doc.get_element_by_id(section_id))
        else {
            log::debug!("navigation target #{section_id} not rendered");
            return false;
        };
        let top = element.get_bounding_client_rect().top();
        let page_offset = window.scroll_y().unwrap_or(0.0);
        smooth_scroll(&window, section_target(top, page_offset, past_threshold));
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (section_id, past_threshold);
        false
    }
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            smooth_scroll(&window, 0.0);
        }
    }
}

/// Section jumps bound to the page's UI and scroll state.
///
/// Provided as context by the landing page and captured by components at
/// creation time, so click handlers never look up context.
#[derive(Clone, Copy, Debug)]
pub struct SectionNavigator {
    ui: RwSignal<UiState>,
    scroll: RwSignal<ScrollMetrics>,
}

impl SectionNavigator {
    #[must_use]
    pub fn new(ui: RwSignal<UiState>, scroll: RwSignal<ScrollMetrics>) -> Self {
        Self { ui, scroll }
    }

    /// Close the mobile menu, then jump to `section` if it is rendered.
    pub fn go(self, section: Section) -> bool {
        self.ui.update(UiState::begin_navigation);
        let past_threshold = self.scroll.get_untracked().past_threshold;
        scroll_to_section(section.id(), past_threshold)
    }

    pub fn top(self) {
        self.ui.update(UiState::begin_navigation);
        scroll_to_top();
    }
}
