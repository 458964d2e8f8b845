use std::fs;

use crate::paths::expand_path;

/// Maps the current input to a list of suggestions.
pub trait SuggestionProvider {
    fn suggest(&self, input: &str) -> Vec<String>;
}

impl<F> SuggestionProvider for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn suggest(&self, input: &str) -> Vec<String> {
        self(input)
    }
}

const DEFAULT_MAX_RESULTS: usize = 8;

/// Reusable suggestion state, embedded in models that take free-form input.
/// The owner pushes input changes with `set_input` + `refresh` and routes
/// navigation keys to `move_up`/`move_down`.
pub struct Autocomplete {
    provider: Box<dyn SuggestionProvider>,
    input: String,
    suggestions: Vec<String>,
    selected: usize,
    visible: bool,
    max_results: usize,
}

impl Autocomplete {
    pub fn new(provider: Box<dyn SuggestionProvider>, max_results: usize) -> Self {
        Self {
            provider,
            input: String::new(),
            suggestions: Vec::new(),
            selected: 0,
            visible: false,
            max_results: if max_results == 0 {
                DEFAULT_MAX_RESULTS
            } else {
                max_results
            },
        }
    }

    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    /// Re-runs the provider, resets the highlight, and shows the dropdown iff
    /// anything matched.
    pub fn refresh(&mut self) {
        let mut suggestions = self.provider.suggest(&self.input);
        suggestions.truncate(self.max_results);
        self.suggestions = suggestions;
        self.selected = 0;
        self.visible = !self.suggestions.is_empty();
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn move_down(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected = (self.selected + 1) % self.suggestions.len();
        }
    }

    pub fn move_up(&mut self) {
        if !self.suggestions.is_empty() {
            let n = self.suggestions.len();
            self.selected = (self.selected + n - 1) % n;
        }
    }

    /// The highlighted suggestion, or empty when there is none.
    pub fn accept_selected(&self) -> String {
        self.suggestions.get(self.selected).cloned().unwrap_or_default()
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
        self.suggestions.clear();
    }
}

/// Directory-path provider. Empty input is treated as `~/`. Suggests
/// subdirectories of the typed directory whose names contain the typed
/// basename (case-insensitive), alphabetically, each with a trailing `/`.
/// Dotted names and non-directories are skipped.
pub struct PathProvider;

impl SuggestionProvider for PathProvider {
    fn suggest(&self, input: &str) -> Vec<String> {
        let input = if input.is_empty() { "~/" } else { input };
        let expanded = expand_path(input);

        let (dir, prefix) = if input.ends_with('/') {
            (expanded.clone(), String::new())
        } else {
            let base = crate::paths::dir_name(&expanded).to_string();
            let mut parent = expanded
                .strip_suffix(&base)
                .map(|p| p.to_string())
                .unwrap_or_default();
            if parent.is_empty() {
                parent = ".".to_string();
            }
            (parent, base)
        };

        let Ok(entries) = fs::read_dir(&dir) else {
            return Vec::new();
        };

        let lower_prefix = prefix.to_lowercase();
        let mut suggestions: Vec<String> = Vec::new();
        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if !file_type.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            if !prefix.is_empty() && !name.to_lowercase().contains(&lower_prefix) {
                continue;
            }
            // Suggestions keep the user's typed parent (with any ~ intact).
            let parent_input = if input.ends_with('/') {
                input.to_string()
            } else {
                let base = crate::paths::dir_name(input);
                input[..input.len() - base.len()].to_string()
            };
            suggestions.push(format!("{parent_input}{name}/"));
        }

        suggestions.sort();
        suggestions
    }
}

#[cfg(test)]
#[path = "../tests/tui/autocomplete_tests.rs"]
mod tests;
