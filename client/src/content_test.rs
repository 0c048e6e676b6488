use std::collections::HashSet;

use super::*;

#[test]
fn sections_have_unique_ids_in_page_order() {
    let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
    assert_eq!(ids, ["methods", "profile", "pricing", "articles", "faq", "contact"]);
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
}

#[test]
fn methods_have_unique_ids_and_one_accent() {
    let ids: HashSet<_> = METHODS.iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), METHODS.len());
    assert_eq!(METHODS.iter().filter(|m| m.accent).count(), 1);
}

#[test]
fn exactly_one_featured_plan() {
    assert_eq!(PLANS.len(), 2);
    assert_eq!(PLANS.iter().filter(|p| p.featured).count(), 1);
}

#[test]
fn articles_have_unique_ids() {
    let ids: HashSet<_> = ARTICLES.iter().map(|a| a.id).collect();
    assert_eq!(ids.len(), ARTICLES.len());
}

#[test]
fn article_display_date_uses_slashes() {
    assert_eq!(ARTICLES[0].display_date(), "2024 / 03 / 10");
}

#[test]
fn faq_entries_are_non_empty() {
    assert!(!FAQS.is_empty());
    for faq in FAQS {
        assert!(!faq.question.is_empty());
        assert!(!faq.answer.is_empty());
    }
}

#[test]
fn stagger_delay_scales_with_index() {
    assert_eq!(stagger_delay_ms(0, 100), 0);
    assert_eq!(stagger_delay_ms(3, 100), 300);
    assert_eq!(stagger_delay_ms(usize::MAX, 100), u32::MAX);
}
