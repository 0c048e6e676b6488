//! One-shot reveal-on-scroll state for a single content block.
//!
//! DESIGN
//! ======
//! The watch is an explicit state machine: it is `attach`ed when the block
//! mounts, flips to revealed on the first qualifying intersection, and asks
//! the caller to deregister at that moment. Later callbacks are no-ops, which
//! covers observers that deliver a queued entry after `unobserve`.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Intersection ratio the browser observer is configured to report at.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Duration of the fade/slide transition.
pub const REVEAL_DURATION_MS: u32 = 1000;

/// Visibility of a content block. Never moves back to `Hidden`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
}

/// What the caller must do after feeding an intersection event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// Nothing changed.
    Ignore,
    /// The block just became revealed; deregister the watch now.
    RevealAndDetach,
}

/// Reveal state bound to one block id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealWatch {
    block_id: String,
    visibility: Visibility,
    attached: bool,
}

impl RevealWatch {
    pub fn new(block_id: impl Into<String>) -> Self {
        Self {
            block_id: block_id.into(),
            visibility: Visibility::Hidden,
            attached: false,
        }
    }

    #[must_use]
    pub fn block_id(&self) -> &str {
        &self.block_id
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.visibility == Visibility::Revealed
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Mark the watch registered. Returns `false` when the block is already
    /// revealed and needs no observer.
    pub fn attach(&mut self) -> bool {
        if self.is_revealed() {
            return false;
        }
        self.attached = true;
        true
    }

    /// Feed one intersection entry.
    ///
    /// The browser observer already filters at [`REVEAL_THRESHOLD`], so any
    /// intersecting entry qualifies. The reported ratio is not re-checked;
    /// blocks taller than ten viewports never reach it.
    pub fn observe(&mut self, is_intersecting: bool) -> RevealStep {
        if !self.attached || self.is_revealed() || !is_intersecting {
            return RevealStep::Ignore;
        }
        self.visibility = Visibility::Revealed;
        self.attached = false;
        RevealStep::RevealAndDetach
    }

    /// Deregister without changing visibility (unmount before reveal).
    pub fn detach(&mut self) {
        self.attached = false;
    }
}

/// Class list for a block wrapper.
#[must_use]
pub fn reveal_class(visibility: Visibility, extra: &str) -> String {
    let state = match visibility {
        Visibility::Hidden => "fade-in fade-in--hidden",
        Visibility::Revealed => "fade-in fade-in--revealed",
    };
    if extra.is_empty() {
        state.to_owned()
    } else {
        format!("{state} {extra}")
    }
}

/// Inline transition style with the per-block delay.
#[must_use]
pub fn reveal_style(delay_ms: u32) -> String {
    format!("transition-duration: {REVEAL_DURATION_MS}ms; transition-delay: {delay_ms}ms")
}
