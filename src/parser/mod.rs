pub mod folder;
pub mod naming;
pub mod payload;
pub mod style;

use serde_json::json;
use tracing::{debug, info};

use crate::error::ImportError;
use naming::ComponentIdentity;
use style::StylePayload;

/// A stitch ready to be written out.
#[derive(Debug)]
pub struct Stitch {
    pub identity: ComponentIdentity,
    pub structure: String,
    pub style: Option<StylePayload>,
    pub script: Option<String>,
}

impl Stitch {
    /// Machine-readable plan for `--dry-run` and `inspect`.
    pub fn summary(&self, path: &str) -> serde_json::Value {
        json!({
            "name": self.identity.name(),
            "folder": self.identity.folder(),
            "path": path,
            "structure_lines": self.structure.lines().count(),
            "style": self.style.as_ref().map(|s| json!({
                "dialect": s.dialect,
                "length": s.text.len(),
            })),
            "script_length": self.script.as_ref().map(|s| s.len()),
        })
    }
}

/// Extraction → style selection → naming, over one fetched page.
pub fn process_page(url: &str, html: &str) -> Result<Stitch, ImportError> {
    let payloads = payload::extract_payloads(html);
    let structure = payloads.structure.ok_or(ImportError::MissingStructure)?;

    let rich = payloads.styles.iter().filter(|c| c.rich).count();
    debug!(
        "{} style candidates ({} rich), script: {}",
        payloads.styles.len(),
        rich,
        payloads.script.is_some()
    );
    let style = style::select_style(&payloads.styles);

    let identity = naming::infer_identity(url, &structure)?;
    info!("Inferred {} in folder {}", identity.name(), identity.folder());

    Ok(Stitch {
        identity,
        structure,
        style,
        script: payloads.script,
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::style::StyleDialect;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    #[test]
    fn hero_dashboard_end_to_end() {
        let html = fixture("hero_dashboard");
        let stitch =
            process_page("https://codestitch.app/app/dashboard/stitches/374/", &html).unwrap();
        assert_eq!(stitch.identity.name(), "Hero374");
        assert_eq!(stitch.identity.folder(), "Hero");

        let style = stitch.style.unwrap();
        assert_eq!(style.dialect, StyleDialect::Less);
        assert!(style.text.contains("(1280/16rem)"));
        assert!(stitch.script.is_some());
    }

    #[test]
    fn faq_without_script_uses_plain_css() {
        let html = fixture("faq_no_script");
        let stitch = process_page("https://codestitch.app/intermediate/faq-22/", &html).unwrap();
        assert_eq!(stitch.identity.name(), "FAQ22");
        assert!(stitch.script.is_none());

        let style = stitch.style.unwrap();
        assert_eq!(style.dialect, StyleDialect::Css);
        assert!(style.text.starts_with("#faq-22"));
    }

    #[test]
    fn login_page_has_no_structure() {
        let html = "<html><body><form action=\"/login\"></form></body></html>";
        let err = process_page("https://codestitch.app/app/dashboard/stitches/1", html);
        assert!(matches!(err, Err(ImportError::MissingStructure)));
    }

    #[test]
    fn summary_reports_plan() {
        let html = fixture("hero_dashboard");
        let stitch =
            process_page("https://codestitch.app/app/dashboard/stitches/374/", &html).unwrap();
        let v = stitch.summary("src/components/Hero/Hero374.astro");
        assert_eq!(v["name"], "Hero374");
        assert_eq!(v["folder"], "Hero");
        assert_eq!(v["style"]["dialect"], "less");
        assert!(v["script_length"].as_u64().unwrap() > 0);
    }
}
