use crate::download::USER_AGENT;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// How a fetch ended up satisfying the request
#[derive(Debug, PartialEq, Eq)]
pub enum FetchStatus {
    /// Full body written (fresh file, or server ignored the range)
    Downloaded(u64),
    /// Remainder appended to an existing partial file
    Resumed(u64),
    /// Local copy already complete, nothing transferred
    UpToDate,
}

/// Ensure the archive bytes exist at `dest`.
///
/// An existing file turns the request into a ranged GET from its current
/// length: 206 appends the missing tail, 416 means the local copy is already
/// complete and is left untouched (release assets are immutable, so a
/// length-complete file is current). A 200 rewrites the file in full. Fresh
/// downloads write straight to `dest` so an interrupted run leaves a
/// resumable partial behind.
pub fn fetch_archive(url: &str, dest: &Path) -> Result<FetchStatus> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let existing_len = fs::metadata(dest).map(|m| m.len()).unwrap_or(0);

    let mut request = ureq::get(url).set("User-Agent", USER_AGENT);
    if existing_len > 0 {
        request = request.set("Range", &format!("bytes={existing_len}-"));
    }

    let response = match request.call() {
        Ok(response) => response,
        Err(ureq::Error::Status(416, _)) if existing_len > 0 => {
            return Ok(FetchStatus::UpToDate);
        }
        Err(ureq::Error::Status(code, _)) => {
            anyhow::bail!("Download failed with status {code}: {url}");
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to download: {url}"));
        }
    };

    let resumed = response.status() == 206;
    let mut file = if resumed {
        fs::OpenOptions::new()
            .append(true)
            .open(dest)
            .with_context(|| format!("Failed to open for resume: {}", dest.display()))?
    } else {
        fs::File::create(dest)
            .with_context(|| format!("Failed to create file: {}", dest.display()))?
    };

    let written = io::copy(&mut response.into_reader(), &mut file)
        .with_context(|| format!("Failed to write: {}", dest.display()))?;

    file.sync_all()
        .with_context(|| format!("Failed to sync: {}", dest.display()))?;

    if resumed {
        Ok(FetchStatus::Resumed(written))
    } else {
        Ok(FetchStatus::Downloaded(written))
    }
}

/// Basename of a download URL, with any query string dropped
pub fn filename_from_url(url: &str) -> String {
    url.split('/')
        .next_back()
        .unwrap_or("download")
        .split('?')
        .next()
        .unwrap_or("download")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename_from_url("https://example.com/releases/tool-linux-amd64.tar.gz"),
            "tool-linux-amd64.tar.gz"
        );
    }

    #[test]
    fn test_filename_from_url_strips_query() {
        assert_eq!(
            filename_from_url("https://example.com/tool.zip?token=abc123"),
            "tool.zip"
        );
    }

    #[test]
    fn test_filename_from_url_no_path() {
        assert_eq!(filename_from_url("download"), "download");
    }
}
