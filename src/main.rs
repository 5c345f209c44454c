mod component;
mod config;
mod error;
mod fetch;
mod parser;
mod preview;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::warn;

use config::{Settings, DEFAULT_COMPONENTS_DIR, DEFAULT_PREVIEW_PATH};

#[derive(Parser)]
#[command(name = "stitch_import", about = "Import CodeStitch stitches as Astro components")]
struct Cli {
    #[command(flatten)]
    paths: PathArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PathArgs {
    /// Project root the other paths are relative to
    #[arg(long, global = true, env = "STITCH_ROOT", default_value = ".")]
    root: PathBuf,
    /// Components directory
    #[arg(long, global = true, default_value = DEFAULT_COMPONENTS_DIR)]
    components_dir: PathBuf,
    /// Preview page that lists every imported stitch
    #[arg(long, global = true, default_value = DEFAULT_PREVIEW_PATH)]
    preview: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a stitch page and write it as a component
    Import {
        /// Dashboard URL, e.g. https://codestitch.app/app/dashboard/stitches/374
        url: String,
        /// Cookie header of a logged-in session
        #[arg(env = "STITCH_COOKIE", hide_env_values = true)]
        cookie: String,
        /// Print the plan as JSON instead of writing files
        #[arg(long)]
        dry_run: bool,
        /// Leave the preview page untouched
        #[arg(long)]
        no_preview: bool,
    },
    /// Run extraction and naming on a saved page, without writing anything
    Inspect {
        /// Saved dashboard HTML
        file: PathBuf,
        /// URL the page came from (used for the stitch number)
        #[arg(long, default_value = "")]
        url: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::new(cli.paths.root, cli.paths.components_dir, cli.paths.preview);

    let result = match cli.command {
        Commands::Import {
            url,
            cookie,
            dry_run,
            no_preview,
        } => run_import(&settings, &url, &cookie, dry_run, no_preview).await,
        Commands::Inspect { file, url } => {
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let stitch = parser::process_page(&url, &html)?;
            let path = component::component_path(&settings, &stitch.identity);
            println!(
                "{}",
                serde_json::to_string_pretty(&stitch.summary(&path.display().to_string()))?
            );
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

/// fetch → extract → name → write component → update preview.
/// Nothing touches the disk until the stitch has a name.
async fn run_import(
    settings: &Settings,
    url: &str,
    cookie: &str,
    dry_run: bool,
    no_preview: bool,
) -> anyhow::Result<()> {
    println!("Fetching stitch from: {}", url);
    let html = fetch::fetch_page(url, cookie).await?;

    let stitch = parser::process_page(url, &html)?;
    let name = stitch.identity.name();
    println!("Component name: {}", name);

    if dry_run {
        let path = component::component_path(settings, &stitch.identity);
        println!(
            "{}",
            serde_json::to_string_pretty(&stitch.summary(&path.display().to_string()))?
        );
        return Ok(());
    }

    let preview_edit = if no_preview {
        None
    } else {
        preview::plan_update(&settings.preview, &stitch.identity)
            .with_context(|| format!("Failed to read {}", settings.preview.display()))?
    };

    let path = write_outputs(settings, &stitch, preview_edit.as_ref())?;
    println!("Created component: {}", path.display());

    match preview_edit {
        Some(_) => {
            println!("Updated {} with {}", settings.preview.display(), name);
            println!("\nDone! Component has been created and added to the preview page.");
        }
        None => println!("\nDone! Component has been created."),
    }
    Ok(())
}

/// Write the component, then apply the planned preview edit. A failed preview
/// write leaves the component on disk; the error names it.
fn write_outputs(
    settings: &Settings,
    stitch: &parser::Stitch,
    preview_edit: Option<&preview::PreviewEdit>,
) -> anyhow::Result<PathBuf> {
    let name = stitch.identity.name();
    let path = component::write_component(settings, stitch)
        .with_context(|| format!("Failed to write component {}", name))?;

    if let Some(edit) = preview_edit {
        if let Err(e) = preview::apply_update(&settings.preview, edit) {
            warn!(
                "{} was written but {} has no entry for {}",
                path.display(),
                settings.preview.display(),
                name
            );
            return Err(anyhow::Error::new(e).context(format!(
                "Failed to update {} (component left at {})",
                settings.preview.display(),
                path.display()
            )));
        }
    }

    Ok(path)
}

// ── Tests ──
