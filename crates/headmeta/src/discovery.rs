//! Recursive header file discovery.
//!
//! Walks a root directory, keeps files whose extension matches the
//! configuration, and skips entire subtrees whose top-level directory name
//! is excluded (`thirdparty/`, `tests/` by default). Results are keyed by
//! root-relative paths with forward-slash separators and returned sorted,
//! so a scan over an unchanged tree always visits files in the same order.

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// One discovered header file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Absolute (or root-joined) path, used to read the file
    pub path: PathBuf,

    /// Root-relative path with forward-slash separators, used as the
    /// output mapping key
    pub relative: String,
}

/// Convert a root-relative path to its forward-slash string form
fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Enumerate header files under `root` according to `config`.
pub fn discover_files(root: &Path, config: &ScanConfig) -> Result<Vec<DiscoveredFile>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            // Exclusion prefixes apply to directories at the root of the
            // scanned tree only
            if entry.depth() == 1 && entry.file_type().is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    if config.is_excluded_prefix(name) {
                        debug!(dir = name, "Skipping excluded subtree");
                        return false;
                    }
                }
            }
            true
        });

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            match e.into_io_error() {
                Some(io) => ScanError::discovery(path, io),
                None => ScanError::discovery(
                    path,
                    std::io::Error::new(std::io::ErrorKind::Other, "directory cycle"),
                ),
            }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| config.should_parse_extension(ext))
            .unwrap_or(false);
        if !matches {
            continue;
        }

        if let Some(relative) = relative_key(root, entry.path()) {
            files.push(DiscoveredFile {
                path: entry.path().to_path_buf(),
                relative,
            });
        }
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));

    debug!(count = files.len(), root = %root.display(), "Discovered header files");
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "// header\n").unwrap();
    }

    #[test]
    fn test_discovery_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        touch(&root.join("classes/node.hpp"));
        touch(&root.join("classes/object.hpp"));
        touch(&root.join("variant/string.hpp"));
        touch(&root.join("readme.md"));
        touch(&root.join("thirdparty/vendored.hpp"));
        touch(&root.join("tests/test_node.hpp"));

        let config = ScanConfig::new("godot");
        let files = discover_files(root, &config).unwrap();

        let keys: Vec<&str> = files.iter().map(|f| f.relative.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "classes/node.hpp",
                "classes/object.hpp",
                "variant/string.hpp"
            ]
        );
    }

    #[test]
    fn test_exclusion_applies_at_root_only() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        // A nested directory that merely shares an excluded name is kept
        touch(&root.join("classes/tests/helper.hpp"));
        touch(&root.join("tests/excluded.hpp"));

        let config = ScanConfig::new("godot");
        let files = discover_files(root, &config).unwrap();

        let keys: Vec<&str> = files.iter().map(|f| f.relative.as_str()).collect();
        assert_eq!(keys, vec!["classes/tests/helper.hpp"]);
    }

    #[test]
    fn test_empty_tree() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScanConfig::new("godot");
        let files = discover_files(dir.path(), &config).unwrap();
        assert!(files.is_empty());
    }
}
