use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::Settings;
use crate::error::ImportError;
use crate::parser::naming::ComponentIdentity;
use crate::parser::Stitch;

pub fn component_path(settings: &Settings, identity: &ComponentIdentity) -> PathBuf {
    settings
        .components_dir
        .join(identity.folder())
        .join(format!("{}.astro", identity.name()))
}

/// Astro component: empty frontmatter, banner comment, markup, then the
/// optional script and style blocks.
pub fn render(stitch: &Stitch) -> String {
    let name = stitch.identity.name();
    let mut out = format!(
        "---\n\n---\n\n\
         <!-- ============================================ -->\
         <!--            {name}              -->\
         <!-- ============================================ -->\n\
         {}\n",
        stitch.structure
    );

    if let Some(script) = &stitch.script {
        out.push_str(&format!("\n\n<script>\n    {}\n</script>\n", script));
    }

    if let Some(style) = &stitch.style {
        let open = match style.dialect.lang() {
            Some(lang) => format!("<style lang=\"{}\">", lang),
            None => "<style>".to_string(),
        };
        out.push_str(&format!("\n\n{}\n    {}\n</style>\n", open, style.text));
    }

    out
}

/// Write the component under its category folder, creating the folder.
pub fn write_component(settings: &Settings, stitch: &Stitch) -> Result<PathBuf, ImportError> {
    let path = component_path(settings, &stitch.identity);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    if path.exists() {
        warn!("Overwriting existing component {}", path.display());
    }

    let content = render(stitch);
    fs::write(&path, &content)?;
    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}

// ── Tests ──
