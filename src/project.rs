use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::git::Worktree;
use crate::paths::normalize_trailing_slashes;

/// A project the user can open. Loaded from the plaintext projects file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub path: String,
    pub worktrees: Vec<Worktree>,
}

impl Project {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            worktrees: Vec::new(),
        }
    }
}

/// Parses projects file content: one `name:path` per line, first colon is the
/// separator for display purposes only. Blank lines and lines without a colon
/// are skipped. Order is preserved; no deduplication happens on load.
pub fn parse_projects(content: &str) -> Vec<Project> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                return None;
            }
            let (name, path) = line.split_once(':')?;
            if name.is_empty() || path.is_empty() {
                return None;
            }
            Some(Project::new(name, path))
        })
        .collect()
}

/// Reads and parses the projects file. A missing file is an error; an empty
/// file is an empty list.
pub fn load_projects(file: &Path) -> Result<Vec<Project>> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("read projects file {}", file.display()))?;
    Ok(parse_projects(&content))
}

/// Appends `name:path\n` to the projects file, creating parent directories as
/// needed. Does not deduplicate; the caller decides.
pub fn append_project(name: &str, path: &str, file: &Path) -> Result<()> {
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create projects dir {}", parent.display()))?;
    }
    let mut content = match fs::read_to_string(file) {
        Ok(existing) => existing,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => {
            return Err(err).with_context(|| format!("read projects file {}", file.display()));
        }
    };
    content.push_str(name);
    content.push(':');
    content.push_str(path);
    content.push('\n');
    fs::write(file, content).with_context(|| format!("write projects file {}", file.display()))
}

/// Deletes every line byte-for-byte equal to `entry` (`name:path`). Partial
/// or prefix matches survive. Missing file is an error; no match leaves the
/// file untouched.
pub fn remove_project(entry: &str, file: &Path) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("read projects file {}", file.display()))?;

    let mut out = String::with_capacity(content.len());
    let mut changed = false;
    for line in content.split_inclusive('\n') {
        if line.strip_suffix('\n').unwrap_or(line) == entry {
            changed = true;
        } else {
            out.push_str(line);
        }
    }

    if !changed {
        return Ok(());
    }
    fs::write(file, out).with_context(|| format!("write projects file {}", file.display()))
}

/// Compares `path` against each project path with trailing slashes collapsed.
pub fn is_duplicate_project(path: &str, projects: &[Project]) -> bool {
    let candidate = normalize_trailing_slashes(path);
    projects
        .iter()
        .any(|p| normalize_trailing_slashes(&p.path) == candidate)
}

#[cfg(test)]
#[path = "tests/project_tests.rs"]
mod tests;
