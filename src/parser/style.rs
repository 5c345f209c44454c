use serde::Serialize;

/// Unit conversions only the LESS flavour of a stitch writes out.
const LESS_MARKERS: &[&str] = &["(1280/16rem)", "(630/16rem)"];
const KEYFRAMES_MARKER: &str = "@keyframes";
/// Nested-rule heuristic: more opening braces than this, plus keyframes.
const NESTED_BRACE_THRESHOLD: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleDialect {
    Css,
    Less,
}

impl StyleDialect {
    /// `lang` attribute for the generated `<style>` tag, if any.
    pub fn lang(self) -> Option<&'static str> {
        match self {
            StyleDialect::Css => None,
            StyleDialect::Less => Some("less"),
        }
    }
}

/// One decoded stylesheet textarea.
#[derive(Debug, Clone)]
pub struct StyleCandidate {
    pub text: String,
    pub rich: bool,
}

impl StyleCandidate {
    pub fn classify(text: String) -> Self {
        let has_less_values = LESS_MARKERS.iter().any(|m| text.contains(m));
        let has_nested_rules =
            text.matches('{').count() > NESTED_BRACE_THRESHOLD && text.contains(KEYFRAMES_MARKER);
        Self {
            rich: has_less_values || has_nested_rules,
            text,
        }
    }
}

/// The stylesheet that ends up in the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePayload {
    pub text: String,
    pub dialect: StyleDialect,
}

/// Longest rich candidate, earliest first on equal length; otherwise the
/// first candidate as plain CSS.
pub fn select_style(candidates: &[StyleCandidate]) -> Option<StylePayload> {
    let mut best: Option<&StyleCandidate> = None;
    for c in candidates.iter().filter(|c| c.rich) {
        if best.map_or(true, |b| c.text.len() > b.text.len()) {
            best = Some(c);
        }
    }

    match best {
        Some(c) => Some(StylePayload {
            text: c.text.clone(),
            dialect: StyleDialect::Less,
        }),
        None => candidates.first().map(|c| StylePayload {
            text: c.text.clone(),
            dialect: StyleDialect::Css,
        }),
    }
}

// ── Tests ──
