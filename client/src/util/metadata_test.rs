use std::collections::BTreeMap;

use super::*;

#[derive(Debug, Default)]
struct FakeElement {
    tag: String,
    attrs: BTreeMap<String, String>,
    text: String,
}

/// In-memory head; nodes are indices into `elements`.
#[derive(Debug, Default)]
struct MemoryHead {
    lang: String,
    title: String,
    elements: Vec<FakeElement>,
}

impl MemoryHead {
    fn count(&self, tag: &str, attr: &str, value: &str) -> usize {
        self.elements
            .iter()
            .filter(|el| el.tag == tag && el.attrs.get(attr).map(String::as_str) == Some(value))
            .count()
    }

    fn attr_of(&self, tag: &str, attr: &str, value: &str, wanted: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|el| el.tag == tag && el.attrs.get(attr).map(String::as_str) == Some(value))
            .and_then(|el| el.attrs.get(wanted))
            .map(String::as_str)
    }
}

impl HeadDocument for MemoryHead {
    type Node = usize;

    fn set_lang(&mut self, lang: &str) {
        lang.clone_into(&mut self.lang);
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn find(&self, lookup: &Lookup<'_>) -> Option<usize> {
        self.elements.iter().position(|el| {
            el.tag == lookup.tag && el.attrs.get(lookup.attr).map(String::as_str) == Some(lookup.value)
        })
    }

    fn append(&mut self, tag: &str) -> Option<usize> {
        self.elements.push(FakeElement {
            tag: tag.to_owned(),
            ..FakeElement::default()
        });
        Some(self.elements.len() - 1)
    }

    fn set_attr(&mut self, node: &usize, name: &str, value: &str) {
        self.elements[*node].attrs.insert(name.to_owned(), value.to_owned());
    }

    fn set_text(&mut self, node: &usize, text: &str) {
        text.clone_into(&mut self.elements[*node].text);
    }
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn lookup_selector_formats_attribute_match() {
    let lookup = Lookup {
        tag: "meta",
        attr: "property",
        value: "og:title",
    };
    assert_eq!(lookup.selector(), "meta[property=\"og:title\"]");
}

// =============================================================
// HeadMetadata
// =============================================================

#[test]
fn site_metadata_title_joins_name_and_role() {
    let meta = HeadMetadata::site();
    assert_eq!(meta.title, format!("{SITE_NAME} - {JOB_TITLE}"));
    assert_eq!(meta.lang, "ja");
}

#[test]
fn site_metadata_keys_opengraph_by_property() {
    let meta = HeadMetadata::site();
    for entry in &meta.tags {
        let expect_property = entry.key.key().starts_with("og:");
        assert_eq!(entry.key.attr() == "property", expect_property, "{:?}", entry.key);
    }
}

#[test]
fn structured_data_describes_person() {
    let data = person_structured_data();
    assert_eq!(data["@type"], "Person");
    assert_eq!(data["name"], COACH_NAME);
    assert_eq!(data["alternateName"], COACH_NAME_LATIN);
    assert_eq!(data["address"]["addressLocality"], "Tokyo");
    assert_eq!(data["address"]["addressCountry"], "JP");
    assert_eq!(data["brand"]["name"], BRAND_NAME);
    assert!(data["knowsAbout"].as_array().is_some_and(|topics| !topics.is_empty()));
}

// =============================================================
// inject
// =============================================================

#[test]
fn inject_populates_empty_head() {
    let mut head = MemoryHead::default();
    let meta = HeadMetadata::site();
    inject(&mut head, &meta);

    assert_eq!(head.lang, "ja");
    assert_eq!(head.title, meta.title);
    assert_eq!(head.attr_of("meta", "name", "description", "content"), Some(DESCRIPTION));
    assert_eq!(head.attr_of("meta", "property", "og:url", "content"), Some(SITE_URL));
    assert_eq!(head.attr_of("link", "rel", "canonical", "href"), Some(SITE_URL));
    assert_eq!(
        head.attr_of("script", "id", STRUCTURED_DATA_ID, "type"),
        Some("application/ld+json")
    );
}

#[test]
fn inject_twice_keeps_one_element_per_identifier() {
    let mut head = MemoryHead::default();
    let meta = HeadMetadata::site();
    inject(&mut head, &meta);
    let after_first = head.elements.len();
    inject(&mut head, &meta);

    assert_eq!(head.elements.len(), after_first);
    for entry in &meta.tags {
        assert_eq!(head.count("meta", entry.key.attr(), entry.key.key()), 1, "{:?}", entry.key);
    }
    assert_eq!(head.count("link", "rel", "canonical"), 1);
    assert_eq!(head.count("script", "id", STRUCTURED_DATA_ID), 1);
}

#[test]
fn inject_updates_existing_tag_in_place() {
    let mut head = MemoryHead::default();
    let node = head.append("meta").unwrap();
    head.set_attr(&node, "name", "description");
    head.set_attr(&node, "content", "stale");

    inject(&mut head, &HeadMetadata::site());

    assert_eq!(head.count("meta", "name", "description"), 1);
    assert_eq!(head.attr_of("meta", "name", "description", "content"), Some(DESCRIPTION));
}

#[test]
fn inject_replaces_structured_data_body() {
    let mut head = MemoryHead::default();
    let node = head.append("script").unwrap();
    head.set_attr(&node, "id", STRUCTURED_DATA_ID);
    head.set_text(&node, "{}");

    inject(&mut head, &HeadMetadata::site());

    let body: serde_json::Value = serde_json::from_str(&head.elements[node].text).unwrap();
    assert_eq!(body, person_structured_data());
}

#[test]
fn apply_site_metadata_is_noop_outside_browser() {
    apply_site_metadata();
}
