use crate::ui;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Check if a path is a regular file with the owner execute bit set
/// (`.exe` extension on Windows)
pub fn is_executable(path: &Path) -> Result<bool> {
    let metadata = fs::metadata(path)?;

    if !metadata.is_file() {
        return Ok(false);
    }

    #[cfg(windows)]
    {
        if let Some(ext) = path.extension()
            && ext.to_string_lossy().to_lowercase() == "exe"
        {
            return Ok(true);
        }
        Ok(false)
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = metadata.permissions().mode();
        Ok(mode & 0o100 != 0)
    }
}

/// Find all executable files in a directory recursively
pub fn find_executables(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut executables = Vec::new();

    fn visit_dir(dir: &Path, executables: &mut Vec<PathBuf>) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                visit_dir(&path, executables)?;
            } else if is_executable(&path)? {
                executables.push(path);
            }
        }
        Ok(())
    }

    visit_dir(dir, &mut executables)?;
    Ok(executables)
}

/// Copy every executable found under `extracted` flat into `bin_dir`,
/// keeping basenames and overwriting existing files. The extracted originals
/// stay in place. Returns the copied basenames in walk order; duplicates
/// within one walk are warned about, last write wins.
pub fn install_executables(extracted: &Path, bin_dir: &Path) -> Result<Vec<String>> {
    let executables = find_executables(extracted).context("Failed to scan for executables")?;

    fs::create_dir_all(bin_dir)
        .with_context(|| format!("Failed to create binary directory: {}", bin_dir.display()))?;

    let mut installed: Vec<String> = Vec::new();

    for exe in &executables {
        let name = exe
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid executable name: {}", exe.display()))?;

        if installed.iter().any(|seen| seen == name) {
            ui::warn(&format!(
                "Multiple executables named '{name}' in archive, keeping the last one"
            ));
        }

        let target = bin_dir.join(name);

        // Remove first to avoid "Text file busy" when replacing a running binary
        if target.exists() {
            fs::remove_file(&target)
                .with_context(|| format!("Failed to replace: {}", target.display()))?;
        }

        fs::copy(exe, &target)
            .with_context(|| format!("Failed to copy {} to {}", exe.display(), target.display()))?;

        installed.push(name.to_string());
    }

    Ok(installed)
}
