use thiserror::Error;

/// Fatal conditions of a single import run.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to fetch HTML content: {0}")]
    Fetch(String),

    #[error("Could not extract stitch content from HTML")]
    MissingStructure,

    #[error("Could not determine component name from HTML")]
    UnnamedComponent,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
