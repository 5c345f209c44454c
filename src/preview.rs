use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{info, warn};

use crate::config::PREVIEW_ANCHOR;
use crate::error::ImportError;
use crate::parser::naming::ComponentIdentity;

/// Result of splicing a component into the preview page.
#[derive(Debug)]
pub struct PreviewEdit {
    pub content: String,
    pub import_added: bool,
    pub usage_added: bool,
}

impl PreviewEdit {
    pub fn changed(&self) -> bool {
        self.import_added || self.usage_added
    }
}

pub fn import_line(identity: &ComponentIdentity) -> String {
    format!(
        "import {name} from \"@components/{folder}/{name}.astro\";",
        name = identity.name(),
        folder = identity.folder()
    )
}

pub fn usage_block(identity: &ComponentIdentity) -> String {
    format!(
        "            <h3 style=\"text-align: center; padding: 10px; margin-top: 100px;\">\n                {name}\n            </h3>\n            <{name} />\n",
        name = identity.name()
    )
}

/// Add the import after the last `import` line and the usage block before
/// the closing anchor, skipping whichever is already present.
pub fn insert_component(content: &str, identity: &ComponentIdentity) -> PreviewEdit {
    let import = import_line(identity);
    let mut out = content.to_string();
    let mut import_added = false;

    if !content.lines().any(|l| l.trim() == import) {
        let mut lines: Vec<&str> = content.split('\n').collect();
        match lines.iter().rposition(|l| l.trim().starts_with("import ")) {
            Some(idx) => {
                lines.insert(idx + 1, &import);
                out = lines.join("\n");
                import_added = true;
            }
            None => warn!("No import block in preview page; skipping import of {}", identity.name()),
        }
    }

    let usage = usage_block(identity);
    let mut usage_added = false;
    if !out.contains(&usage) {
        match out.find(PREVIEW_ANCHOR) {
            Some(at) => {
                out.insert_str(at, &usage);
                usage_added = true;
            }
            None => warn!("Preview anchor not found; skipping usage of {}", identity.name()),
        }
    }

    PreviewEdit {
        content: out,
        import_added,
        usage_added,
    }
}

/// Read the preview page and compute its edit. `None` if the page is missing.
pub fn plan_update(path: &Path, identity: &ComponentIdentity) -> Result<Option<PreviewEdit>, ImportError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(insert_component(&content, identity))),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Preview page {} not found; skipping", path.display());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn apply_update(path: &Path, edit: &PreviewEdit) -> Result<(), ImportError> {
    if !edit.changed() {
        info!("{} already up to date", path.display());
        return Ok(());
    }
    fs::write(path, &edit.content)?;
    info!(
        "Updated {} (import: {}, usage: {})",
        path.display(),
        edit.import_added,
        edit.usage_added
    );
    Ok(())
}

// ── Tests ──
