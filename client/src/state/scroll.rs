//! Scroll-derived chrome state (progress bar, header style, back-to-top).
//!
//! Every value is recomputed from a single [`ScrollSample`]; nothing
//! accumulates across events, so coalesced or dropped scroll events are
//! harmless.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Offset past which the header switches to its compact style.
pub const HEADER_THRESHOLD_PX: f64 = 50.0;

/// Offset past which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 600.0;

/// Raw measurements read from the window on a scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    /// Current vertical scroll offset in CSS pixels.
    pub offset: f64,
    /// Full scrollable height of the document element.
    pub document_height: f64,
    /// Visible height of the viewport.
    pub viewport_height: f64,
}

impl ScrollSample {
    /// Distance the page can actually scroll.
    #[must_use]
    pub fn scrollable_height(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// Derived values driving the progress bar, header and back-to-top button.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Reading progress in `[0, 100]`.
    pub progress_percent: f64,
    /// Header compact style.
    pub past_threshold: bool,
    /// Back-to-top button visibility.
    pub show_back_to_top: bool,
}

impl ScrollMetrics {
    #[must_use]
    pub fn from_sample(sample: ScrollSample) -> Self {
        Self {
            progress_percent: progress_percent(sample.offset, sample.scrollable_height()),
            past_threshold: sample.offset > HEADER_THRESHOLD_PX,
            show_back_to_top: sample.offset > BACK_TO_TOP_THRESHOLD_PX,
        }
    }

    /// Inline style for the progress bar fill.
    #[must_use]
    pub fn progress_width_style(&self) -> String {
        format!("width: {:.2}%", self.progress_percent)
    }
}

/// `offset / scrollable * 100`, clamped, and zero for a non-scrollable page.
#[must_use]
pub fn progress_percent(offset: f64, scrollable_height: f64) -> f64 {
    if scrollable_height <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable_height * 100.0).clamp(0.0, 100.0)
}
