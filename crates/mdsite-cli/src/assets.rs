//! Static asset staging
//!
//! Copies non-markdown assets (stylesheets, images) into the output
//! directory before page generation runs.

use std::fs;
use std::io;
use std::path::Path;

/// Recursively copy all files and subdirectories from `src` into `dest`.
///
/// If `dest` already exists its contents are cleared first, so stale output
/// from a previous run never survives.
pub fn copy_dir_contents(src: &Path, dest: &Path) -> io::Result<()> {
    if dest.exists() {
        clear_directory(dest)?;
    } else {
        fs::create_dir_all(dest)?;
    }

    copy_into(src, dest)
}

fn copy_into(src: &Path, dest: &Path) -> io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());

        if path.is_dir() {
            fs::create_dir_all(&target)?;
            copy_into(&path, &target)?;
        } else {
            tracing::debug!(file = %target.display(), "copying asset");
            fs::copy(&path, &target)?;
        }
    }

    Ok(())
}

fn clear_directory(dir: &Path) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            clear_directory(&path)?;
            fs::remove_dir(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        tracing::debug!(path = %path.display(), "removed stale output");
    }

    Ok(())
}
