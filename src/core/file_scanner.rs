use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Glob matching Go test files, skipped when `ignoreTestFiles` is set.
pub const TEST_FILE_PATTERN: &str = "**/*_test.go";

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of resolving the sift path.
#[derive(Debug)]
pub struct ScanResult {
    /// Go files to scan, in walk order (sorted by file name per directory).
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Resolve the sift path into the list of Go files to scan.
///
/// A directory is walked recursively for `*.go` files, minus ignored paths.
/// A file is used as-is regardless of extension or ignores.
pub fn scan_files(
    sift: &Path,
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> Result<ScanResult> {
    if !sift.exists() {
        bail!("Sift path '{}' does not exist.", sift.display());
    }

    if !sift.is_dir() {
        return Ok(ScanResult {
            files: vec![sift.to_path_buf()],
            skipped_count: 0,
        });
    }

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(sift.join(p));
        }
    }

    if ignore_test_files && let Ok(pattern) = Pattern::new(TEST_FILE_PATTERN) {
        glob_patterns.push(pattern);
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(sift).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && is_go_file(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(ScanResult {
        files,
        skipped_count,
    })
}

fn is_go_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("go")
}
