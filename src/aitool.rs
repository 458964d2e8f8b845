use std::path::Path;

/// An AI coding assistant the user can launch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiTool {
    pub id: String,
    pub command: String,
    pub installed: bool,
}

/// Priority used by the outer shell when reducing a multi-select result to a
/// single default tool.
pub const TOOL_PRIORITY: [&str; 4] = ["claude", "codex", "copilot", "opencode"];

/// Maps a tool id to its display name. Unknown ids pass through unchanged.
pub fn display_name(id: &str) -> &str {
    match id {
        "claude" => "Claude Code",
        "codex" => "Codex CLI",
        "copilot" => "Copilot CLI",
        "opencode" => "OpenCode",
        other => other,
    }
}

/// The closed set of known tools with their probe commands.
pub fn known_tools() -> Vec<AiTool> {
    [
        ("claude", "claude"),
        ("codex", "codex"),
        ("copilot", "gh copilot"),
        ("opencode", "opencode"),
    ]
    .into_iter()
    .map(|(id, command)| AiTool {
        id: id.to_string(),
        command: command.to_string(),
        installed: false,
    })
    .collect()
}

/// Probes which tools are present on `$PATH`. Multi-word commands probe their
/// first word (`gh copilot` probes `gh`).
pub fn detect_tools() -> Vec<AiTool> {
    let mut tools = known_tools();
    for tool in &mut tools {
        let bin = tool.command.split_whitespace().next().unwrap_or_default();
        tool.installed = command_on_path(bin);
    }
    tools
}

fn command_on_path(bin: &str) -> bool {
    if bin.is_empty() {
        return false;
    }
    let Ok(path_var) = std::env::var("PATH") else {
        return false;
    };
    path_var
        .split(':')
        .filter(|dir| !dir.is_empty())
        .any(|dir| Path::new(dir).join(bin).is_file())
}

/// Returns the neighbor of `current` in `tools`, `direction` steps away
/// (+1 forward, -1 backward), wrapping at both ends. A missing `current`
/// resolves to the first tool; an empty list echoes `current` back.
pub fn cycle_tool(tools: &[String], current: &str, direction: i32) -> String {
    match tools.len() {
        0 => current.to_string(),
        1 => tools[0].clone(),
        n => match tools.iter().position(|t| t == current) {
            Some(idx) => {
                let next = (idx as i64 + direction as i64).rem_euclid(n as i64) as usize;
                tools[next].clone()
            }
            None => tools[0].clone(),
        },
    }
}

/// Returns `preference` if it appears in `tools`, otherwise the first tool.
/// An empty list returns the preference unchanged.
pub fn validate_tool(tools: &[String], preference: &str) -> String {
    if tools.is_empty() || tools.iter().any(|t| t == preference) {
        preference.to_string()
    } else {
        tools[0].clone()
    }
}

/// Picks the single default tool from a multi-select result: the first
/// priority tool present wins, otherwise the first selected tool.
pub fn pick_default_tool(selected: &[String]) -> Option<String> {
    TOOL_PRIORITY
        .iter()
        .find(|p| selected.iter().any(|s| s == *p))
        .map(|p| p.to_string())
        .or_else(|| selected.first().cloned())
}

#[cfg(test)]
#[path = "tests/aitool_tests.rs"]
mod tests;
