use super::*;

#[test]
fn new_watch_is_hidden_and_detached() {
    let watch = RevealWatch::new("methods-0");
    assert_eq!(watch.block_id(), "methods-0");
    assert_eq!(watch.visibility(), Visibility::Hidden);
    assert!(!watch.is_attached());
}

#[test]
fn observe_before_attach_is_ignored() {
    let mut watch = RevealWatch::new("hero");
    assert_eq!(watch.observe(true), RevealStep::Ignore);
    assert!(!watch.is_revealed());
}

#[test]
fn non_intersecting_entry_keeps_hidden() {
    let mut watch = RevealWatch::new("hero");
    assert!(watch.attach());
    assert_eq!(watch.observe(false), RevealStep::Ignore);
    assert_eq!(watch.observe(false), RevealStep::Ignore);
    assert!(!watch.is_revealed());
    assert!(watch.is_attached());
}

#[test]
fn intersecting_entry_reveals_regardless_of_reported_ratio() {
    // Blocks taller than ten viewports report at most ~0.09 when intersecting.
    let mut watch = RevealWatch::new("articles");
    assert!(watch.attach());
    assert_eq!(watch.observe(true), RevealStep::RevealAndDetach);
    assert!(watch.is_revealed());
}

#[test]
fn first_intersection_reveals_and_detaches() {
    let mut watch = RevealWatch::new("hero");
    watch.attach();
    assert_eq!(watch.observe(true), RevealStep::RevealAndDetach);
    assert!(watch.is_revealed());
    assert!(!watch.is_attached());
}

#[test]
fn reveal_fires_at_most_once() {
    let mut watch = RevealWatch::new("faq-2");
    watch.attach();
    assert_eq!(watch.observe(true), RevealStep::RevealAndDetach);
    assert_eq!(watch.observe(true), RevealStep::Ignore);
    assert_eq!(watch.observe(false), RevealStep::Ignore);
    assert_eq!(watch.visibility(), Visibility::Revealed);
}

#[test]
fn revealed_watch_refuses_reattach() {
    let mut watch = RevealWatch::new("faq-2");
    watch.attach();
    watch.observe(true);
    assert!(!watch.attach());
    assert!(!watch.is_attached());
}

#[test]
fn detach_before_intersection_keeps_hidden() {
    let mut watch = RevealWatch::new("pricing");
    watch.attach();
    watch.detach();
    assert_eq!(watch.observe(true), RevealStep::Ignore);
    assert_eq!(watch.visibility(), Visibility::Hidden);
}

#[test]
fn reveal_class_reflects_visibility() {
    assert_eq!(reveal_class(Visibility::Hidden, ""), "fade-in fade-in--hidden");
    assert_eq!(
        reveal_class(Visibility::Revealed, "method-card"),
        "fade-in fade-in--revealed method-card"
    );
}

#[test]
fn reveal_style_includes_delay() {
    assert_eq!(
        reveal_style(200),
        "transition-duration: 1000ms; transition-delay: 200ms"
    );
}
