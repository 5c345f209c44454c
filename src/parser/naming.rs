use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::folder::folder_for;
use crate::config::STITCH_PATH_PATTERN;
use crate::error::ImportError;

static STITCH_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STITCH_PATH_PATTERN).unwrap());
static ID_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)id\s*=\s*"([^"]*)""#).unwrap());
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Lowercase id keywords → category prefix, tested in order.
/// `sbsr` must precede `sbs`.
const CATEGORY_KEYWORDS: &[(&[&str], &str)] = &[
    (&["hero"], "Hero"),
    (&["sbsr"], "SBSR"),
    (&["sbs"], "SBS"),
    (&["stats"], "Stats"),
    (&["services"], "Services"),
    (&["faq"], "FAQ"),
    (&["reviews"], "Reviews"),
    (&["pricing"], "Pricing"),
    (&["gallery"], "Gallery"),
    (&["meet"], "MeetUs"),
    (&["contact"], "Contact"),
    (&["footer"], "Footer"),
    (&["why-choose"], "WhyChooseUs"),
    (&["cta", "call to action"], "CTA"),
    (&["steps"], "Steps"),
    (&["events"], "Events"),
    (&["blog", "posts"], "Blog"),
    (&["content"], "Content"),
    (&["locations"], "Locations"),
];

pub const GENERIC_CATEGORY: &str = "Component";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentIdentity {
    name: String,
    folder: &'static str,
}

impl ComponentIdentity {
    /// `None` unless `number` is a non-empty run of ASCII digits.
    pub fn new(category: &str, number: &str) -> Option<Self> {
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let name = format!("{}{}", category, number);
        let folder = folder_for(&name);
        Some(Self { name, folder })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn folder(&self) -> &'static str {
        self.folder
    }
}

/// Case-insensitive keyword match on a section id.
pub fn classify_category(section_id: &str) -> &'static str {
    let id = section_id.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| id.contains(kw)))
        .map(|(_, category)| *category)
        .unwrap_or(GENERIC_CATEGORY)
}

/// Stitch number from a dashboard URL like `/dashboard/stitches/374/`.
pub fn stitch_number(url: &str) -> Option<&str> {
    STITCH_NUMBER_RE
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// First `id="..."` value in the markup.
pub fn first_section_id(structure: &str) -> Option<&str> {
    ID_ATTR_RE
        .captures(structure)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Category comes from the first id in the markup; the number from the URL
/// when it has one, otherwise from the first digits inside that id.
pub fn infer_identity(url: &str, structure: &str) -> Result<ComponentIdentity, ImportError> {
    let section_id = first_section_id(structure).ok_or(ImportError::UnnamedComponent)?;
    let category = classify_category(section_id);

    let number = match stitch_number(url) {
        Some(n) => n,
        None => DIGITS_RE
            .find(section_id)
            .map(|m| m.as_str())
            .ok_or(ImportError::UnnamedComponent)?,
    };

    debug!("id \"{}\" -> category {} #{}", section_id, category, number);
    ComponentIdentity::new(category, number).ok_or(ImportError::UnnamedComponent)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_number_beats_id_digits() {
        let id = infer_identity(
            "https://codestitch.app/app/dashboard/stitches/374/",
            r#"<section id="hero-1">"#,
        )
        .unwrap();
        assert_eq!(id.name(), "Hero374");
        assert_eq!(id.folder(), "Hero");
    }

    #[test]
    fn id_digits_used_without_stitch_segment() {
        let id = infer_identity(
            "https://codestitch.app/intermediate/faq-22/",
            "<!-- FAQ -->\n<section id=\"faq-22\">\n<div class=\"cs-container\">",
        )
        .unwrap();
        assert_eq!(id.name(), "FAQ22");
        assert_eq!(id.folder(), "FAQ");
    }

    #[test]
    fn specific_keyword_before_general() {
        assert_eq!(classify_category("sbsr-1234"), "SBSR");
        assert_eq!(classify_category("sbs-1234"), "SBS");
        assert_eq!(classify_category("MEET-us-1663"), "MeetUs");
        assert_eq!(classify_category("why-choose-1432"), "WhyChooseUs");
        assert_eq!(classify_category("blog-posts-2"), "Blog");
        assert_eq!(classify_category("recent-posts-7"), "Blog");
    }

    #[test]
    fn unknown_id_falls_back_to_generic() {
        let id = infer_identity("https://x/stitches/9", r#"<div id="banner-3">"#).unwrap();
        assert_eq!(id.name(), "Component9");
        assert_eq!(id.folder(), "Components");
    }

    #[test]
    fn first_id_in_document_order() {
        let markup = "<section id=\"services-1207\">\n<div id=\"hero-5\">";
        assert_eq!(first_section_id(markup), Some("services-1207"));
        let id = infer_identity("https://x/intermediate/", markup).unwrap();
        assert_eq!(id.name(), "Services1207");
    }

    #[test]
    fn data_attributes_are_not_ids() {
        let markup = "<div data-id=\"hero-9\">\n<section id=\"stats-12\">";
        assert_eq!(first_section_id(markup), Some("stats-12"));
    }

    #[test]
    fn missing_id_fails() {
        let err = infer_identity("https://x/stitches/374/", "<section class=\"hero\">");
        assert!(matches!(err, Err(ImportError::UnnamedComponent)));
    }

    #[test]
    fn id_without_digits_and_no_url_number_fails() {
        let err = infer_identity("https://x/free/", r#"<section id="hero">"#);
        assert!(matches!(err, Err(ImportError::UnnamedComponent)));
    }

    #[test]
    fn only_ascii_digits_count() {
        let id = infer_identity("https://x/free/", "<section id=\"hero-\u{663}12\">").unwrap();
        assert_eq!(id.name(), "Hero12");

        let id = infer_identity("https://x/stitches/\u{663}/", r#"<section id="faq-22">"#).unwrap();
        assert_eq!(id.name(), "FAQ22");
    }

    #[test]
    fn identity_rejects_bad_suffix() {
        assert!(ComponentIdentity::new("Hero", "").is_none());
        assert!(ComponentIdentity::new("Hero", "12a").is_none());
        assert_eq!(ComponentIdentity::new("SBSR", "5").unwrap().folder(), "SideBySideReverse");
    }
}
