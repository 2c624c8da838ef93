use crate::download::USER_AGENT;
use crate::models::GitHubRelease;
use crate::ui;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Fetch the latest-release asset list for a project and write the raw
/// response body verbatim to `dest`, so later stages (and later dev-mode
/// runs) parse exactly what the API sent.
///
/// With `reuse_cached` set an existing file short-circuits the network call
/// entirely, with no freshness check. HTTP and transport failures are plain
/// errors for the caller to handle at the project boundary; nothing is
/// written in that case.
pub fn fetch_asset_catalog(
    project: &str,
    dest: &Path,
    verbose: bool,
    reuse_cached: bool,
) -> Result<()> {
    if reuse_cached && dest.exists() {
        ui::info(&format!("Using cached asset list for {project}"));
        return Ok(());
    }

    ui::info(&format!("Downloading asset list for {project}..."));
    let api_url = format!("https://api.github.com/repos/{project}/releases/latest");

    let response = match ureq::get(&api_url).set("User-Agent", USER_AGENT).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            anyhow::bail!("GitHub API request for {project} failed with status: {code}");
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to fetch release info for {project}"));
        }
    };

    let body = response
        .into_string()
        .with_context(|| format!("Failed to read release response for {project}"))?;

    fs::write(dest, &body)
        .with_context(|| format!("Failed to write asset list: {}", dest.display()))?;

    if verbose {
        println!("{body}");
    }

    Ok(())
}

/// Parse a previously cached release document
pub fn load_catalog(path: &Path) -> Result<GitHubRelease> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read asset list: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse release JSON: {}", path.display()))
}
