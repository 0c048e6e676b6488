use leptos::prelude::Owner;

use super::*;

#[test]
fn header_offset_shrinks_past_threshold() {
    assert_eq!(header_offset(false), 100.0);
    assert_eq!(header_offset(true), 70.0);
}

#[test]
fn section_target_accounts_for_page_offset_and_header() {
    assert_eq!(section_target(400.0, 0.0, false), 300.0);
    assert_eq!(section_target(400.0, 1200.0, true), 1530.0);
}

#[test]
fn section_target_above_viewport_uses_negative_top() {
    assert_eq!(section_target(-200.0, 1000.0, true), 730.0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_to_section_reports_missing_target_outside_browser() {
    assert!(!scroll_to_section("contact", false));
    scroll_to_top();
}

#[test]
fn navigator_closes_menu_even_without_target() {
    // Signals need a live arena once the `ssr` feature sandboxes them.
    let owner = Owner::new();
    owner.with(|| {
        let ui = RwSignal::new(UiState {
            menu_open: true,
            open_faq: None,
        });
        let scroll = RwSignal::new(ScrollMetrics::default());
        let nav = SectionNavigator::new(ui, scroll);

        let _ = nav.go(Section::Pricing);
        assert!(!ui.get_untracked().menu_open);

        ui.update(UiState::toggle_menu);
        nav.top();
        assert!(!ui.get_untracked().menu_open);
    });
}
