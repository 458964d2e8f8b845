use std::fs;
use std::path::Path;

use anyhow::{Result, anyhow};

/// Expands a leading `~` to `$HOME`. `~` alone becomes `$HOME`; `~/x` becomes
/// `$HOME/x`. Anything else passes through unchanged.
pub fn expand_path(path: &str) -> String {
    let home = std::env::var("HOME").unwrap_or_default();
    if path == "~" {
        return home;
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return format!("{}/{}", home.trim_end_matches('/'), rest);
    }
    path.to_string()
}

/// Replaces a `$HOME` prefix with `~` for display.
pub fn shorten_home_path(path: &str) -> String {
    let home = std::env::var("HOME").unwrap_or_default();
    if home.is_empty() {
        return path.to_string();
    }
    if path == home {
        return "~".to_string();
    }
    if let Some(rest) = path.strip_prefix(&format!("{home}/")) {
        return format!("~/{rest}");
    }
    path.to_string()
}

/// Shortens a string to `max` characters by replacing the middle with `…`,
/// keeping the head and tail visible. Counts chars, not bytes.
pub fn truncate_middle(s: &str, max: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max {
        return s.to_string();
    }
    if max <= 1 {
        return "…".to_string();
    }
    let keep = max - 1;
    let head = keep / 2 + keep % 2;
    let tail = keep / 2;
    let mut out: String = chars[..head].iter().collect();
    out.push('…');
    out.extend(&chars[chars.len() - tail..]);
    out
}

/// Checks that `path` (after `~` expansion) exists and is a directory.
pub fn validate_dir(path: &str) -> Result<String> {
    if path.is_empty() {
        return Err(anyhow!("path cannot be empty"));
    }
    let expanded = expand_path(path);
    match fs::metadata(&expanded) {
        Ok(meta) if meta.is_dir() => Ok(expanded),
        Ok(_) => Err(anyhow!("path is not a directory: {expanded}")),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(anyhow!("path does not exist: {expanded}"))
        }
        Err(err) => Err(anyhow!("failed to stat {expanded}: {err}")),
    }
}

/// Collapses any run of trailing slashes. Used for duplicate-path comparison.
pub fn normalize_trailing_slashes(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

pub fn dir_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

#[cfg(test)]
#[path = "tests/paths_tests.rs"]
mod tests;
