//! Resolve a target path into the ordered list of files to scan.

use glob_match::glob_match;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Directory filtering and include globs for a walk.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Directory names skipped at any depth.
    pub skip_dirs: Vec<String>,
    /// When non-empty, only files whose relative path or file name matches
    /// one of these globs are kept.
    pub include: Vec<String>,
}

/// Files under `root`, sorted by path.
///
/// A file root is returned as-is without applying include globs.
pub fn collect_files(root: &Path, options: &WalkOptions) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    if !root.is_dir() {
        return Err(Error::validation_invalid_argument(
            "path",
            format!("Path '{}' does not exist", root.display()),
            None,
            None,
        ));
    }

    let mut files = Vec::new();
    walk_recursive(root, options, &mut files);

    if !options.include.is_empty() {
        files.retain(|f| is_included(f, root, &options.include));
    }

    files.sort();
    Ok(files)
}

fn walk_recursive(dir: &Path, options: &WalkOptions, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        log_status!("walk", "Cannot read directory {}", dir.display());
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        // `file_type` does not follow symlinks; linked directories are never
        // descended into, so a link cycle cannot repeat files.
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if options.skip_dirs.iter().any(|skip| skip == &name) {
                continue;
            }
            walk_recursive(&path, options, files);
        } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
            files.push(path);
        }
    }
}

fn is_included(file: &Path, root: &Path, globs: &[String]) -> bool {
    let relative = file
        .strip_prefix(root)
        .unwrap_or(file)
        .to_string_lossy()
        .replace('\\', "/");
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    globs
        .iter()
        .any(|glob| glob_match(glob, &relative) || glob_match(glob, &name))
}
