use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use zip::ZipArchive;

/// Extract a ZIP archive, returns the number of extracted entries
pub fn extract_zip(zip_path: &Path, extract_to: &Path) -> Result<usize> {
    let file = fs::File::open(zip_path)
        .with_context(|| format!("Failed to open zip file: {}", zip_path.display()))?;

    let mut archive = ZipArchive::new(file).with_context(|| "Failed to read zip archive")?;

    let mut extracted = 0;

    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .with_context(|| format!("Failed to access zip entry {i}"))?;

        let outpath = extract_to.join(file.mangled_name());

        if file.name().ends_with('/') {
            fs::create_dir_all(&outpath)
                .with_context(|| format!("Failed to create directory: {}", outpath.display()))?;
        } else {
            if let Some(parent) = outpath.parent()
                && !parent.exists()
            {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create parent directory: {}", parent.display())
                })?;
            }

            let mut outfile = fs::File::create(&outpath).with_context(|| {
                format!("Failed to create extracted file: {}", outpath.display())
            })?;

            std::io::copy(&mut file, &mut outfile)
                .with_context(|| format!("Failed to extract file: {}", outpath.display()))?;
        }

        // Restore mode bits so the executable walk sees them
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = file.unix_mode() {
                fs::set_permissions(&outpath, fs::Permissions::from_mode(mode))?;
            }
        }

        extracted += 1;
    }

    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::FileOptions;

    #[test]
    fn test_extract_zip_preserves_permissions() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("pkg.zip");

        let file = fs::File::create(&zip_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("bin/tool", FileOptions::default().unix_permissions(0o755))
            .unwrap();
        writer.write_all(b"#!/bin/sh\n").unwrap();
        writer
            .start_file("LICENSE", FileOptions::default().unix_permissions(0o644))
            .unwrap();
        writer.write_all(b"MIT").unwrap();
        writer.finish().unwrap();

        let dest = temp.path().join("out");
        fs::create_dir_all(&dest).unwrap();
        let count = extract_zip(&zip_path, &dest).unwrap();
        assert_eq!(count, 2);
        assert!(dest.join("bin/tool").exists());
        assert!(dest.join("LICENSE").exists());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(dest.join("bin/tool")).unwrap().permissions().mode();
            assert_ne!(mode & 0o100, 0);
            let mode = fs::metadata(dest.join("LICENSE")).unwrap().permissions().mode();
            assert_eq!(mode & 0o111, 0);
        }
    }

    #[test]
    fn test_extract_zip_rejects_garbage() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("bad.zip");
        fs::write(&zip_path, b"not a zip").unwrap();

        let dest = temp.path().join("out");
        fs::create_dir_all(&dest).unwrap();
        assert!(extract_zip(&zip_path, &dest).is_err());
    }
}
