use std::path::PathBuf;

/// `data-cmtype` of the markup textarea.
pub const STRUCTURE_DIALECT: &str = "application/xml";
/// `data-cmtype` shared by the CSS, LESS and SCSS textareas.
pub const STYLE_DIALECT: &str = "css";
pub const SCRIPT_DIALECT: &str = "javascript";

/// Dashboard path segment carrying the stitch number, e.g. `/stitches/374`.
pub const STITCH_PATH_PATTERN: &str = r"/stitches/([0-9]+)";

pub const DEFAULT_COMPONENTS_DIR: &str = "src/components";
pub const DEFAULT_PREVIEW_PATH: &str = "src/pages/stitch-preview.astro";

/// Closing markup of the preview page; usage blocks go right before it.
pub const PREVIEW_ANCHOR: &str = "        </section>\n    </div>\n</BaseLayout>";

/// Where generated files land, resolved against the project root.
#[derive(Debug, Clone)]
pub struct Settings {
    pub components_dir: PathBuf,
    pub preview: PathBuf,
}

impl Settings {
    pub fn new(root: PathBuf, components_dir: PathBuf, preview: PathBuf) -> Self {
        Self {
            components_dir: root.join(components_dir),
            preview: root.join(preview),
        }
    }
}
