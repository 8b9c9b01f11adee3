//! Source scanning for layering checks.

use std::fs;
use std::path::{Path, PathBuf};

/// A source line matching one of the forbidden patterns.
#[derive(Debug)]
pub struct Hit {
    pub file: String,
    pub line: usize,
    pub text: String,
}

/// Every line under `relative_dir` (relative to the crate root) containing
/// any of `patterns`, ordered by file path.
pub fn find_lines_containing(relative_dir: &str, patterns: &[&str]) -> Vec<Hit> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let mut pending = vec![root.join(relative_dir)];
    let mut sources = Vec::new();

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).unwrap_or_else(|e| panic!("read {}: {e}", dir.display())) {
            let path = entry.expect("directory entry").path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                sources.push(path);
            }
        }
    }
    sources.sort();

    sources
        .iter()
        .flat_map(|path| scan(&root, path, patterns))
        .collect()
}

fn scan(root: &Path, path: &Path, patterns: &[&str]) -> Vec<Hit> {
    let content =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
    let file = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/");

    content
        .lines()
        .enumerate()
        .filter(|(_, text)| patterns.iter().any(|p| text.contains(p)))
        .map(|(idx, text)| Hit {
            file: file.clone(),
            line: idx + 1,
            text: text.trim().to_string(),
        })
        .collect()
}
