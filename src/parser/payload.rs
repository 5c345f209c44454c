use scraper::{Html, Selector};
use tracing::warn;

use super::style::StyleCandidate;
use crate::config::{SCRIPT_DIALECT, STRUCTURE_DIALECT, STYLE_DIALECT};

const CODE_CLASS: &str = "CODE-TEXTAREA";

/// Everything pulled out of one dashboard page, before any inference.
#[derive(Debug, Default)]
pub struct Payloads {
    pub structure: Option<String>,
    pub styles: Vec<StyleCandidate>,
    pub script: Option<String>,
}

/// Parse the page once; textarea bodies come back entity-decoded by the
/// HTML parser (RCDATA rules), so nothing here decodes again.
pub fn extract_payloads(html: &str) -> Payloads {
    let document = Html::parse_document(html);
    Payloads {
        structure: extract_structure(&document),
        styles: extract_styles(&document),
        script: extract_script(&document),
    }
}

/// Markup textarea: every line trimmed, blank lines dropped.
pub fn extract_structure(document: &Html) -> Option<String> {
    let decoded = code_regions(document, STRUCTURE_DIALECT).into_iter().next()?;
    let cleaned = decoded
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    non_empty(cleaned)
}

/// Every stylesheet textarea, in document order.
pub fn extract_styles(document: &Html) -> Vec<StyleCandidate> {
    code_regions(document, STYLE_DIALECT)
        .into_iter()
        .map(|css| css.trim().to_string())
        .filter(|css| !css.is_empty())
        .map(StyleCandidate::classify)
        .collect()
}

pub fn extract_script(document: &Html) -> Option<String> {
    let decoded = code_regions(document, SCRIPT_DIALECT).into_iter().next()?;
    non_empty(decoded.trim().to_string())
}

/// Decoded bodies of `textarea.CODE-TEXTAREA` elements tagged with `dialect`.
fn code_regions(document: &Html, dialect: &str) -> Vec<String> {
    let selector_str = format!("textarea.{}[data-cmtype=\"{}\"]", CODE_CLASS, dialect);
    let selector = match Selector::parse(&selector_str) {
        Ok(s) => s,
        Err(e) => {
            warn!("Bad textarea selector {}: {:?}", selector_str, e);
            return Vec::new();
        }
    };

    document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

// ── Tests ──
