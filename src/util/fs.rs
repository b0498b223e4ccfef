//! Filesystem utilities.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Ensure a directory exists, creating it and all missing ancestors.
///
/// Idempotent: succeeds without touching anything if the directory is
/// already there.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Recursively copy a directory into `dst`, merging with existing content.
///
/// Conflicting files are overwritten; unrelated files already present in
/// the destination are left alone.
pub fn copy_dir_all(src: &Path, dst: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry =
            entry.with_context(|| format!("failed to walk directory: {}", src.display()))?;
        let rel = entry.path().strip_prefix(src)?;
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            ensure_dir(&target)?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("b").join("c");

        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());

        fs::write(dir.join("keep.txt"), "content").unwrap();

        ensure_dir(&dir).unwrap();
        assert_eq!(
            fs::read_to_string(dir.join("keep.txt")).unwrap(),
            "content"
        );
    }

    #[test]
    fn test_copy_dir_all_merges() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");

        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("guide.md"), "new guide").unwrap();
        fs::write(src.join("nested/api.md"), "api").unwrap();

        // Pre-existing destination content: one conflict, one unrelated file.
        fs::create_dir_all(&dst).unwrap();
        fs::write(dst.join("guide.md"), "old guide").unwrap();
        fs::write(dst.join("unrelated.txt"), "survives").unwrap();

        copy_dir_all(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("guide.md")).unwrap(), "new guide");
        assert_eq!(fs::read_to_string(dst.join("nested/api.md")).unwrap(), "api");
        assert_eq!(
            fs::read_to_string(dst.join("unrelated.txt")).unwrap(),
            "survives"
        );
    }
}
