use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::COOKIE;
use tracing::{debug, info};

use crate::error::ImportError;

const USER_AGENT: &str = concat!("stitch_import/", env!("CARGO_PKG_VERSION"));

/// GET a dashboard page with the session cookie, following redirects.
pub async fn fetch_page(url: &str, cookie: &str) -> Result<String, ImportError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| ImportError::Fetch(e.to_string()))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .map_err(|e| ImportError::Fetch(e.to_string()))?,
    );
    pb.set_message(format!("GET {}", url));
    pb.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let result = send(&client, url, cookie).await;
    pb.finish_and_clear();

    let body = result?;
    info!(
        "Fetched {} bytes in {}ms",
        body.len(),
        start.elapsed().as_millis()
    );

    if body.trim().is_empty() {
        return Err(ImportError::Fetch(format!("empty response from {}", url)));
    }
    Ok(body)
}

async fn send(client: &reqwest::Client, url: &str, cookie: &str) -> Result<String, ImportError> {
    let response = client
        .get(url)
        .header(COOKIE, cookie)
        .send()
        .await
        .map_err(|e| ImportError::Fetch(e.to_string()))?;

    debug!("{} -> {} ({})", url, response.status(), response.url());

    response
        .text()
        .await
        .map_err(|e| ImportError::Fetch(e.to_string()))
}
