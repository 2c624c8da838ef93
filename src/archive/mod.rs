pub mod tar;
pub mod zip;

use crate::ui;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Recognized archive formats, detected by filename suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    TarGz,
    TarXz,
    Zip,
}

impl ArchiveKind {
    pub fn detect(file_name: &str) -> Option<ArchiveKind> {
        if file_name.ends_with(".tar.gz") {
            Some(ArchiveKind::TarGz)
        } else if file_name.ends_with(".tar.xz") {
            Some(ArchiveKind::TarXz)
        } else if file_name.ends_with(".zip") {
            Some(ArchiveKind::Zip)
        } else {
            None
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            ArchiveKind::TarGz => ".tar.gz",
            ArchiveKind::TarXz => ".tar.xz",
            ArchiveKind::Zip => ".zip",
        }
    }
}

/// Destination directory for an archive: a sibling named by stripping the
/// recognized suffix from the archive filename
pub fn extraction_dir(archive_path: &Path, kind: ArchiveKind) -> Result<PathBuf> {
    let file_name = archive_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid archive filename: {}", archive_path.display()))?;

    let stem = file_name.strip_suffix(kind.suffix()).unwrap_or(file_name);
    Ok(archive_path.with_file_name(stem))
}

/// Unpack `archive_path` into a fresh per-archive directory and return it.
///
/// Any pre-existing directory of the same name is destroyed first, so
/// extraction is idempotent and never mixes stale and fresh contents. Decode
/// failures surface as ordinary errors for the caller to handle at the
/// project boundary.
pub fn extract_archive(archive_path: &Path, kind: ArchiveKind) -> Result<PathBuf> {
    let dest = extraction_dir(archive_path, kind)?;

    if dest.exists() {
        fs::remove_dir_all(&dest).with_context(|| {
            format!("Failed to remove stale extraction dir: {}", dest.display())
        })?;
    }
    fs::create_dir_all(&dest)
        .with_context(|| format!("Failed to create extraction dir: {}", dest.display()))?;

    ui::info(&format!(
        "Extracting {} into {}...",
        archive_path.display(),
        dest.display()
    ));

    let count = match kind {
        ArchiveKind::TarGz => tar::extract_tar_gz(archive_path, &dest)?,
        ArchiveKind::TarXz => tar::extract_tar_xz(archive_path, &dest)?,
        ArchiveKind::Zip => zip::extract_zip(archive_path, &dest)?,
    };
    ui::info(&format!("Extracted {count} files"));

    Ok(dest)
}
