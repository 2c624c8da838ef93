use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;
use tar::Archive;
use xz2::read::XzDecoder;

/// Extract a TAR.GZ archive, returns the number of extracted entries
pub fn extract_tar_gz(tar_path: &Path, extract_to: &Path) -> Result<usize> {
    let file = fs::File::open(tar_path)
        .with_context(|| format!("Failed to open tar.gz file: {}", tar_path.display()))?;

    let decoder = GzDecoder::new(file);
    extract_tar_from_reader(decoder, extract_to, "tar.gz")
}

/// Extract a TAR.XZ archive, returns the number of extracted entries
pub fn extract_tar_xz(tar_path: &Path, extract_to: &Path) -> Result<usize> {
    let file = fs::File::open(tar_path)
        .with_context(|| format!("Failed to open tar.xz file: {}", tar_path.display()))?;

    let decoder = XzDecoder::new(file);
    extract_tar_from_reader(decoder, extract_to, "tar.xz")
}

/// Extract a TAR archive from a generic decoder
fn extract_tar_from_reader<R: Read>(
    reader: R,
    extract_to: &Path,
    archive_type: &str,
) -> Result<usize> {
    let mut archive = Archive::new(reader);
    let mut extracted = 0;

    for entry in archive
        .entries()
        .with_context(|| format!("Failed to read {archive_type} entries"))?
    {
        let mut entry = entry.with_context(|| format!("Failed to access {archive_type} entry"))?;

        let path = entry.path().with_context(|| "Failed to get entry path")?;
        let outpath = extract_to.join(&path);

        if let Some(parent) = outpath.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create parent directory: {}", parent.display())
            })?;
        }

        // unpack preserves the entry's mode bits, which the executable walk
        // later depends on
        entry
            .unpack(&outpath)
            .with_context(|| format!("Failed to extract file: {}", outpath.display()))?;

        extracted += 1;
    }

    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;
    use tempfile::TempDir;
    use xz2::write::XzEncoder;

    fn append_entry(builder: &mut tar::Builder<impl Write>, name: &str, mode: u32, data: &[u8]) {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(mode);
        header.set_cksum();
        builder.append_data(&mut header, name, data).unwrap();
    }

    #[test]
    fn test_extract_tar_gz_nested_layout() {
        let temp = TempDir::new().unwrap();
        let archive_path = temp.path().join("pkg.tar.gz");

        let file = fs::File::create(&archive_path).unwrap();
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);
        append_entry(&mut builder, "bin/tool", 0o755, b"#!/bin/sh\necho hi\n");
        append_entry(&mut builder, "README.md", 0o644, b"# readme\n");
        builder.into_inner().unwrap().finish().unwrap();

        let dest = temp.path().join("out");
        let count = extract_tar_gz(&archive_path, &dest).unwrap();
        assert_eq!(count, 2);
        assert!(dest.join("bin/tool").exists());
        assert!(dest.join("README.md").exists());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(dest.join("bin/tool")).unwrap().permissions().mode();
            assert_ne!(mode & 0o100, 0);
        }
    }

    #[test]
    fn test_extract_tar_xz() {
        let temp = TempDir::new().unwrap();
        let archive_path = temp.path().join("pkg.tar.xz");

        let file = fs::File::create(&archive_path).unwrap();
        let encoder = XzEncoder::new(file, 6);
        let mut builder = tar::Builder::new(encoder);
        append_entry(&mut builder, "tool", 0o755, b"binary bytes");
        builder.into_inner().unwrap().finish().unwrap();

        let dest = temp.path().join("out");
        let count = extract_tar_xz(&archive_path, &dest).unwrap();
        assert_eq!(count, 1);
        assert_eq!(fs::read(dest.join("tool")).unwrap(), b"binary bytes");
    }

    #[test]
    fn test_extract_tar_gz_rejects_garbage() {
        let temp = TempDir::new().unwrap();
        let archive_path = temp.path().join("bad.tar.gz");
        fs::write(&archive_path, b"not a gzip stream").unwrap();

        let dest = temp.path().join("out");
        fs::create_dir_all(&dest).unwrap();
        assert!(extract_tar_gz(&archive_path, &dest).is_err());
    }
}
