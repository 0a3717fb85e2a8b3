//! Directory walking that feeds path trees.
//!
//! [`walk_paths`] lists the files below a directory as `/`-joined relative
//! paths, which is exactly the shape [`crate::tree::path_tree`] consumes.
//! [`walk_entries`] exposes the underlying visit with per-entry control.

use std::path::{Path, PathBuf};

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Options controlling a directory walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkOptions {
    /// Visit entries whose name starts with a dot.
    #[serde(default)]
    pub include_hidden: bool,
    /// Follow symbolic links.
    #[serde(default)]
    pub follow_links: bool,
    /// Deepest level to visit; entries directly under the root are level 0.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// One visited file or directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Path relative to the walk root, joined with `/`.
    pub rel_path: String,
    /// Path as found on disk.
    pub abs_path: PathBuf,
    /// Depth below the root; direct children are level 0.
    pub level: usize,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

/// What the walk should do after a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    /// Keep going, descending into directories.
    Continue,
    /// Do not descend into this directory. Same as `Continue` for files.
    Skip,
    /// End the walk.
    Stop,
}

/// Visits every entry below `root` in file-name order.
///
/// The root itself is not visited.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] when `root` is not a directory and
/// [`Error::Walk`] when an entry cannot be read.
pub fn walk_entries<F>(root: &Path, options: &WalkOptions, mut visit: F) -> Result<()>
where
    F: FnMut(&WalkEntry) -> WalkControl,
{
    if !root.is_dir() {
        return Err(Error::InvalidPath {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }
    debug!("Walking {}", root.display());

    let mut walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .min_depth(1)
        .sort_by_file_name();
    if let Some(max_depth) = options.max_depth {
        walker = walker.max_depth(max_depth + 1);
    }

    let include_hidden = options.include_hidden;
    let mut entries = walker
        .into_iter()
        .filter_entry(move |entry| include_hidden || entry.depth() == 0 || !is_hidden(entry));

    while let Some(entry) = entries.next() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| Error::InvalidPath {
                path: entry.path().to_path_buf(),
                reason: e.to_string(),
            })?;

        let visited = WalkEntry {
            rel_path: slash_join(relative),
            abs_path: entry.path().to_path_buf(),
            level: entry.depth() - 1,
            is_dir: entry.file_type().is_dir(),
        };
        trace!("Visiting {}", visited.rel_path);

        match visit(&visited) {
            WalkControl::Continue => {}
            WalkControl::Skip => {
                if visited.is_dir {
                    entries.skip_current_dir();
                }
            }
            WalkControl::Stop => break,
        }
    }
    Ok(())
}

/// Lists the files below `root` as `/`-joined relative paths.
///
/// # Errors
///
/// Fails under the same conditions as [`walk_entries`].
///
/// # Examples
///
/// ```
/// use pathtree::walk::{walk_paths, WalkOptions};
///
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::create_dir(dir.path().join("docs")).unwrap();
/// std::fs::write(dir.path().join("docs/intro.md"), "").unwrap();
///
/// let paths = walk_paths(dir.path(), &WalkOptions::default()).unwrap();
/// assert_eq!(paths, vec!["docs/intro.md"]);
/// ```
pub fn walk_paths(root: &Path, options: &WalkOptions) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    walk_entries(root, options, |entry| {
        if !entry.is_dir {
            paths.push(entry.rel_path.clone());
        }
        WalkControl::Continue
    })?;
    debug!("Found {} files below {}", paths.len(), root.display());
    Ok(paths)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn slash_join(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
