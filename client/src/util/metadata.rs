//! Document head metadata: title, language, SEO meta tags, JSON-LD.
//!
//! SYSTEM CONTEXT
//! ==============
//! `HeadMetadata::site()` describes what the head should contain and
//! [`inject`] upserts it into anything implementing [`HeadDocument`]. The
//! browser implementation wraps `web_sys::Document`; tests use an in-memory
//! head. Every write locates an existing element first, so running the
//! injector again never appends duplicates.

#[cfg(test)]
#[path = "metadata_test.rs"]
mod metadata_test;

use serde_json::json;

use crate::content::{BRAND_NAME, COACH_NAME, COACH_NAME_LATIN};

pub const SITE_LANG: &str = "ja";
pub const SITE_NAME: &str = "塚越 貴男 | Life & Conditioning";
pub const JOB_TITLE: &str = "パフォーマンスコーチ / Wellness Strategist";
pub const DESCRIPTION: &str = "身体構造を最適化し、人生のパフォーマンスを向上させるコンディショニング。東京都内を中心にパーソナルセッションを提供。";
pub const KEYWORDS: &str = "コンディショニング, 塚越貴男, パフォーマンスコーチ, Wellness Strategist, パーソナルトレーニング, 東京, 経営者, アスリート";
pub const SITE_URL: &str = "https://t-conditioning-design.com";
pub const OG_IMAGE: &str = "https://t-conditioning-design.com/og-image.jpg";

/// Element id of the embedded structured-data block.
pub const STRUCTURED_DATA_ID: &str = "json-ld-seo";

/// Identifies an element in the head by tag and one attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lookup<'a> {
    pub tag: &'a str,
    pub attr: &'a str,
    pub value: &'a str,
}

impl Lookup<'_> {
    /// CSS selector equivalent, e.g. `meta[name="description"]`.
    #[must_use]
    pub fn selector(&self) -> String {
        format!("{}[{}=\"{}\"]", self.tag, self.attr, self.value)
    }
}

/// Minimal head DOM surface needed for idempotent upserts.
pub trait HeadDocument {
    type Node;

    fn set_lang(&mut self, lang: &str);
    fn set_title(&mut self, title: &str);
    fn find(&self, lookup: &Lookup<'_>) -> Option<Self::Node>;
    /// Create `<tag>` and append it to `<head>`.
    fn append(&mut self, tag: &str) -> Option<Self::Node>;
    fn set_attr(&mut self, node: &Self::Node, name: &str, value: &str);
    fn set_text(&mut self, node: &Self::Node, text: &str);
}

/// Whether a meta tag is keyed by `name` or by `property` (OpenGraph).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

impl MetaKey {
    #[must_use]
    pub fn attr(self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Property(_) => "property",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name(k) | Self::Property(k) => k,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

/// Full description of the head state.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadMetadata {
    pub lang: &'static str,
    pub title: String,
    pub canonical_url: &'static str,
    pub tags: Vec<MetaTag>,
    pub structured_data: serde_json::Value,
}

fn tag(key: MetaKey, content: &str) -> MetaTag {
    MetaTag {
        key,
        content: content.to_owned(),
    }
}

impl HeadMetadata {
    /// Metadata for the coaching landing page.
    #[must_use]
    pub fn site() -> Self {
        let tags = vec![
            tag(MetaKey::Name("description"), DESCRIPTION),
            tag(MetaKey::Name("keywords"), KEYWORDS),
            tag(MetaKey::Property("og:title"), SITE_NAME),
            tag(MetaKey::Property("og:description"), DESCRIPTION),
            tag(MetaKey::Property("og:type"), "website"),
            tag(MetaKey::Property("og:url"), SITE_URL),
            tag(MetaKey::Property("og:image"), OG_IMAGE),
            tag(MetaKey::Property("og:site_name"), SITE_NAME),
            tag(MetaKey::Name("twitter:card"), "summary_large_image"),
            tag(MetaKey::Name("twitter:title"), SITE_NAME),
            tag(MetaKey::Name("twitter:description"), DESCRIPTION),
            tag(MetaKey::Name("twitter:image"), OG_IMAGE),
        ];
        Self {
            lang: SITE_LANG,
            title: format!("{SITE_NAME} - {JOB_TITLE}"),
            canonical_url: SITE_URL,
            tags,
            structured_data: person_structured_data(),
        }
    }
}

/// schema.org `Person` describing the coach.
#[must_use]
pub fn person_structured_data() -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": COACH_NAME,
        "alternateName": COACH_NAME_LATIN,
        "jobTitle": "Performance Coach / Wellness Strategist",
        "description": DESCRIPTION,
        "url": SITE_URL,
        "image": OG_IMAGE,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "Tokyo",
            "addressCountry": "JP",
        },
        "knowsAbout": ["Conditioning", "Bio-Logic Analysis", "Wellness Strategy"],
        "brand": {
            "@type": "Brand",
            "name": BRAND_NAME,
        },
    })
}

fn upsert<D: HeadDocument>(doc: &mut D, lookup: &Lookup<'_>) -> Option<D::Node> {
    if let Some(node) = doc.find(lookup) {
        return Some(node);
    }
    let node = doc.append(lookup.tag)?;
    doc.set_attr(&node, lookup.attr, lookup.value);
    Some(node)
}

/// Write `meta` into `doc`, reusing existing elements.
pub fn inject<D: HeadDocument>(doc: &mut D, meta: &HeadMetadata) {
    doc.set_lang(meta.lang);
    doc.set_title(&meta.title);

    for entry in &meta.tags {
        let lookup = Lookup {
            tag: "meta",
            attr: entry.key.attr(),
            value: entry.key.key(),
        };
        if let Some(node) = upsert(doc, &lookup) {
            doc.set_attr(&node, "content", &entry.content);
        }
    }

    let canonical = Lookup {
        tag: "link",
        attr: "rel",
        value: "canonical",
    };
    if let Some(node) = upsert(doc, &canonical) {
        doc.set_attr(&node, "href", meta.canonical_url);
    }

    let script = Lookup {
        tag: "script",
        attr: "id",
        value: STRUCTURED_DATA_ID,
    };
    if let Some(node) = upsert(doc, &script) {
        doc.set_attr(&node, "type", "application/ld+json");
        doc.set_text(&node, &meta.structured_data.to_string());
    }
}

/// `web_sys::Document` head.
#[cfg(feature = "hydrate")]
pub struct BrowserHead {
    document: web_sys::Document,
}

#[cfg(feature = "hydrate")]
impl BrowserHead {
    #[must_use]
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

#[cfg(feature = "hydrate")]
impl HeadDocument for BrowserHead {
    type Node = web_sys::Element;

    fn set_lang(&mut self, lang: &str) {
        if let Some(el) = self.document.document_element() {
            let _ = el.set_attribute("lang", lang);
        }
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn find(&self, lookup: &Lookup<'_>) -> Option<Self::Node> {
        self.document.query_selector(&lookup.selector()).ok().flatten()
    }

    fn append(&mut self, tag: &str) -> Option<Self::Node> {
        let head = self.document.head()?;
        let el = self.document.create_element(tag).ok()?;
        head.append_child(&el).ok()?;
        Some(el)
    }

    fn set_attr(&mut self, node: &Self::Node, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn set_text(&mut self, node: &Self::Node, text: &str) {
        node.set_text_content(Some(text));
    }
}

/// Apply the site metadata to the live document. No-op outside the browser.
pub fn apply_site_metadata() {
    #[cfg(feature = "hydrate")]
    {
        match BrowserHead::current() {
            Some(mut head) => inject(&mut head, &HeadMetadata::site()),
            None => log::warn!("document unavailable; head metadata not applied"),
        }
    }
}
