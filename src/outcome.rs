use serde::Serialize;

/// Result of the `confirm` dialog.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ConfirmOutcome {
    pub confirmed: bool,
}

/// Result of `select-project`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SelectProjectOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub selected: bool,
}

impl SelectProjectOutcome {
    pub fn cancelled() -> Self {
        Self {
            project: None,
            path: None,
            selected: false,
        }
    }
}

/// Result of `main-menu`. One record regardless of which row was chosen;
/// optional fields appear only for the variants that carry them.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MainMenuOutcome {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub ai_tool: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ghost_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_name: Option<String>,
}

/// Result of `select-branch`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SelectBranchOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub selected: bool,
}

impl SelectBranchOutcome {
    pub fn cancelled() -> Self {
        Self {
            branch: None,
            selected: false,
        }
    }
}

/// Result of `select-terminal`: a selection, an install request, or a cancel.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SelectTerminalOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cask: Option<String>,
    pub selected: bool,
}

impl SelectTerminalOutcome {
    pub fn selected(terminal: &str) -> Self {
        Self {
            action: None,
            terminal: Some(terminal.to_string()),
            cask: None,
            selected: true,
        }
    }

    pub fn install(terminal: &str, cask: &str) -> Self {
        Self {
            action: Some("install".to_string()),
            terminal: Some(terminal.to_string()),
            cask: Some(cask.to_string()),
            selected: false,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            action: None,
            terminal: None,
            cask: None,
            selected: false,
        }
    }
}

/// Result of `select-ai-tool`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SelectToolOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_tool: Option<String>,
    pub selected: bool,
}

/// Result of `multi-select-ai-tool`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MultiToolOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    pub confirmed: bool,
}

/// Result of `config-menu`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ConfigMenuOutcome {
    pub action: String,
}

/// Result of `add-project`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AddProjectOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub confirmed: bool,
}

impl AddProjectOutcome {
    pub fn cancelled() -> Self {
        Self {
            name: None,
            path: None,
            confirmed: false,
        }
    }
}

/// Result of `settings-menu`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SettingsOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ghost_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_name: Option<String>,
    pub confirmed: bool,
}

#[cfg(test)]
#[path = "tests/outcome_tests.rs"]
mod tests;
