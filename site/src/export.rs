//! Static export to a directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::content::SiteContent;
use crate::error::SiteError;
use crate::render_page;

/// File name of the exported page.
pub const INDEX_FILE: &str = "index.html";

/// Render the page and write it to `out_dir/index.html`.
///
/// Creates `out_dir` (and parents) if missing and overwrites an existing
/// index. Returns the path of the written file.
pub fn write_site(out_dir: &Path, content: &SiteContent) -> Result<PathBuf, SiteError> {
    fs::create_dir_all(out_dir).map_err(|source| SiteError::WriteOutput {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let html = render_page(content);
    let index = out_dir.join(INDEX_FILE);
    fs::write(&index, html.as_bytes()).map_err(|source| SiteError::WriteOutput {
        path: index.clone(),
        source,
    })?;

    tracing::info!(path = %index.display(), bytes = html.len(), "wrote landing page");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_index_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist").join("site");

        let written = write_site(&out, &SiteContent::default()).unwrap();

        assert_eq!(written, out.join(INDEX_FILE));
        let html = fs::read_to_string(&written).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn overwrites_existing_index() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(INDEX_FILE), "stale").unwrap();

        write_site(dir.path(), &SiteContent::default()).unwrap();

        let html = fs::read_to_string(dir.path().join(INDEX_FILE)).unwrap();
        assert!(!html.contains("stale"));
    }

    #[test]
    fn fails_when_output_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        fs::write(&blocker, "").unwrap();

        let err = write_site(&blocker, &SiteContent::default()).unwrap_err();
        assert!(matches!(err, SiteError::WriteOutput { .. }));
    }
}
