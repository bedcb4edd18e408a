//! Directory linting.
//!
//! Recursively scans a project for script files and lints each one.
//! Dependency trees and dot directories are never entered.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::cache::ResultCache;
use crate::config::relative_path;
use crate::engine::Linter;
use crate::error::Result;
use crate::report::Finding;

pub const SCRIPT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"];

// ═══════════════════════════════════════════════════════════════════════════════
// REPORT TYPES
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: String,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFailure {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub files: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl ProjectReport {
    pub fn finding_count(&self) -> usize {
        self.files.iter().map(|f| f.findings.len()).sum()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DISCOVERY
// ═══════════════════════════════════════════════════════════════════════════════

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name == "node_modules" || name.starts_with('.')
}

fn is_script_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext))
}

/// Recursively find all script files under `dir`, in path order.
pub fn find_script_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_script_file(entry.path()))
        .map(DirEntry::into_path)
        .collect();
    files.sort();
    files
}

fn lint_file(linter: &Linter, cache: Option<&ResultCache>, path: &Path) -> Result<Vec<Finding>> {
    let source = fs::read_to_string(path)?;
    if let Some(findings) = cache.and_then(|c| c.get(path, &source)) {
        debug!(file = %path.display(), "cache hit");
        return Ok(findings);
    }
    let findings = linter.lint_source(path, &source)?;
    if let Some(cache) = cache {
        cache.set(path, &source, &findings);
    }
    Ok(findings)
}

/// Lint every script file under `root`. A file that cannot be read or parsed
/// lands in `failures`; the others are still linted.
pub fn lint_directory(
    root: &Path,
    linter: &Linter,
    cache: Option<&ResultCache>,
) -> Result<ProjectReport> {
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("not a directory: {}", root.display()),
        )
        .into());
    }

    let files = find_script_files(root);
    debug!(root = %root.display(), count = files.len(), "linting directory");

    let results: Vec<(String, Result<Vec<Finding>>)> = files
        .par_iter()
        .map(|path| (relative_path(root, path), lint_file(linter, cache, path)))
        .collect();

    let mut report = ProjectReport::default();
    for (path, result) in results {
        match result {
            Ok(findings) => report.files.push(FileReport { path, findings }),
            Err(e) => {
                warn!(file = %path, error = %e, "failed to lint file");
                report.failures.push(FileFailure {
                    path,
                    error: e.to_string(),
                });
            }
        }
    }
    report.files.sort_by(|a, b| a.path.cmp(&b.path));
    report.failures.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(report)
}
