use crate::archive::{self, ArchiveKind};
use crate::config::Config;
use crate::download::{github, http};
use crate::select;
use crate::ui;
use anyhow::Result;
use std::fs;

/// Structured per-project result. Only the orchestrator turns these into
/// console output, so the pipeline stays testable without capturing text.
#[derive(Debug)]
pub enum ProjectOutcome {
    /// Archive extracted; holds the copied executable basenames (may be empty)
    Installed(Vec<String>),
    /// Dev mode: asset selected, download and extraction skipped
    Simulated(String),
    /// No asset passed the selection policy
    NoMatchingAsset,
    /// Selected asset has a suffix we cannot extract
    UnrecognizedArchive(String),
}

/// Process every project in order. A project's failure is logged and never
/// stops the remaining projects.
pub fn run_batch(projects: &[String], config: &Config) -> Result<()> {
    for project in projects {
        ui::header(&format!("Processing {project}"));
        match install_project(project, config) {
            Ok(outcome) => report_outcome(project, &outcome, config),
            Err(err) => ui::error(&format!("{project}: {err:#}")),
        }
    }
    Ok(())
}

/// Run the four-stage pipeline for one project:
/// catalog fetch -> asset selection -> archive download -> extract + install
pub fn install_project(project: &str, config: &Config) -> Result<ProjectOutcome> {
    let catalog_path = config.catalog_path(project);

    if config.force && catalog_path.exists() {
        fs::remove_file(&catalog_path)?;
    }

    github::fetch_asset_catalog(project, &catalog_path, config.verbose, config.dev_mode)?;
    let release = github::load_catalog(&catalog_path)?;

    if let Some(tag) = &release.tag_name {
        ui::info(&format!("Latest release for {project}: {tag}"));
    }

    let Some(asset) = select::select_asset(&release.assets, &config.policy) else {
        return Ok(ProjectOutcome::NoMatchingAsset);
    };
    ui::info(&format!("Selected asset: {}", asset.name));

    if config.dev_mode {
        return Ok(ProjectOutcome::Simulated(asset.name.clone()));
    }

    let file_name = http::filename_from_url(&asset.browser_download_url);
    let archive_path = config.download_dir.join(&file_name);

    if config.force && archive_path.exists() {
        fs::remove_file(&archive_path)?;
    }

    ui::info(&format!(
        "Downloading archive: {}",
        asset.browser_download_url
    ));
    match http::fetch_archive(&asset.browser_download_url, &archive_path)? {
        http::FetchStatus::Downloaded(bytes) => {
            ui::info(&format!("Downloaded {} ({bytes} bytes)", archive_path.display()));
        }
        http::FetchStatus::Resumed(bytes) => {
            ui::info(&format!("Resumed {} (+{bytes} bytes)", archive_path.display()));
        }
        http::FetchStatus::UpToDate => {
            ui::info(&format!("Already up to date: {}", archive_path.display()));
        }
    }

    let Some(kind) = ArchiveKind::detect(&file_name) else {
        return Ok(ProjectOutcome::UnrecognizedArchive(file_name));
    };

    let extracted = archive::extract_archive(&archive_path, kind)?;
    let installed = crate::install::install_executables(&extracted, &config.bin_dir)?;

    Ok(ProjectOutcome::Installed(installed))
}

fn report_outcome(project: &str, outcome: &ProjectOutcome, config: &Config) {
    match outcome {
        ProjectOutcome::Installed(executables) if executables.is_empty() => {
            ui::info("No executables found in archive, nothing copied");
        }
        ProjectOutcome::Installed(executables) => {
            ui::note(&format!(
                "Copied executables to {}: {}",
                config.bin_dir.display(),
                executables.join(", ")
            ));
        }
        ProjectOutcome::Simulated(asset_name) => {
            ui::note(&format!("Dev mode: would install {asset_name}"));
        }
        ProjectOutcome::NoMatchingAsset => {
            ui::warn(&format!("No matching archives found for {project}"));
        }
        ProjectOutcome::UnrecognizedArchive(file_name) => {
            ui::warn(&format!("Unknown archive file type for {file_name}"));
        }
    }
}
