//! Bookmark persistence and path normalization.
//!
//! The bookmark file is plain text, one absolute path per line. Reading is
//! forgiving: a missing or unreadable file is an empty list. Writing replaces
//! the file wholesale.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config;
use crate::error::{BmError, Result};

/// Load saved paths in file order, skipping blank lines.
///
/// Never fails. Problems other than a missing file are logged.
pub fn load_paths(file: &Path) -> Vec<String> {
    match fs::read_to_string(file) {
        Ok(contents) => {
            let paths: Vec<String> = contents
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            log::debug!("loaded {} bookmarks from {}", paths.len(), file.display());
            paths
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("no bookmark file at {}", file.display());
            Vec::new()
        }
        Err(e) => {
            log::warn!("failed to read bookmarks from {}: {e}", file.display());
            Vec::new()
        }
    }
}

/// Write `paths` to `file`, one per line, creating parent directories.
pub fn save_paths(file: &Path, paths: &[String]) -> Result<()> {
    if let Some(parent) = file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut contents = String::with_capacity(paths.iter().map(|p| p.len() + 1).sum());
    for path in paths {
        contents.push_str(path);
        contents.push('\n');
    }
    fs::write(file, contents)?;

    log::debug!("saved {} bookmarks to {}", paths.len(), file.display());
    Ok(())
}

/// Replace a leading `~` (alone or followed by `/`) with `home`.
pub fn expand_tilde(raw: &Path, home: &Path) -> PathBuf {
    match raw.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => raw.to_path_buf(),
    }
}

/// Turn a user-supplied path into the absolute string stored as a bookmark.
///
/// Expands `~`, then canonicalizes, so symlinks and `..` are resolved. The
/// path must exist and be valid UTF-8, since the bookmark file is text.
pub fn to_absolute(raw: &Path) -> Result<String> {
    let expanded = if raw.starts_with("~") {
        expand_tilde(raw, &config::home_dir()?)
    } else {
        raw.to_path_buf()
    };

    let absolute = fs::canonicalize(&expanded).map_err(|source| BmError::PathResolve {
        path: raw.to_path_buf(),
        source,
    })?;
    absolute
        .into_os_string()
        .into_string()
        .map_err(|_| BmError::PathResolve {
            path: raw.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, "path is not valid UTF-8"),
        })
}
