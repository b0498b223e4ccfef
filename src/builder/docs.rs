//! Documentation installation.

use std::path::PathBuf;

use anyhow::Result;

use crate::pipeline::Phase;
use crate::util::fs::copy_dir_all;

/// Copy project documentation into the install tree.
///
/// A project without a documentation directory skips this phase
/// successfully. When the directory exists its contents are merged into
/// the destination, overwriting conflicting files and leaving unrelated
/// ones in place.
pub struct CopyDocsPhase {
    source: PathBuf,
    dest: PathBuf,
}

impl CopyDocsPhase {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        CopyDocsPhase {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

impl Phase for CopyDocsPhase {
    fn name(&self) -> &'static str {
        "CopyDocs"
    }

    fn run(&self) -> Result<()> {
        if !self.source.exists() {
            tracing::debug!("no documentation directory at {}", self.source.display());
            return Ok(());
        }

        tracing::info!("Copying documentation to {}", self.dest.display());
        copy_dir_all(&self.source, &self.dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_noop_without_docs_dir() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("install/docs");

        let phase = CopyDocsPhase::new(tmp.path().join("docs"), &dest);
        phase.run().unwrap();

        // Nothing was created.
        assert!(!dest.exists());
    }

    #[test]
    fn test_merge_into_existing_install() {
        let tmp = TempDir::new().unwrap();
        let docs = tmp.path().join("docs");
        let dest = tmp.path().join("install/docs");

        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("manual.md"), "manual").unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("changelog.md"), "kept").unwrap();

        CopyDocsPhase::new(&docs, &dest).run().unwrap();

        assert_eq!(fs::read_to_string(dest.join("manual.md")).unwrap(), "manual");
        assert_eq!(
            fs::read_to_string(dest.join("changelog.md")).unwrap(),
            "kept"
        );
    }
}
