//! Local UI chrome state (mobile menu, FAQ accordion).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the form and theme state so
//! the header and sections can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the header, navigation and FAQ section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    /// Index of the expanded FAQ item, if any.
    pub open_faq: Option<usize>,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile overlay before an in-page jump. Runs whether or not
    /// the target section exists.
    pub fn begin_navigation(&mut self) {
        self.menu_open = false;
    }

    /// Open `index`, or close it when it is already the open item.
    pub fn toggle_faq(&mut self, index: usize) {
        self.open_faq = if self.open_faq == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    #[must_use]
    pub fn is_faq_open(&self, index: usize) -> bool {
        self.open_faq == Some(index)
    }
}
