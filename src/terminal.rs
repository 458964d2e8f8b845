use std::path::Path;

/// A terminal emulator Ghost Tab knows how to configure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Terminal {
    pub id: &'static str,
    pub display_name: &'static str,
    pub cask_name: &'static str,
    pub app_name: &'static str,
    pub installed: bool,
}

/// The fixed list of supported terminals, in display order.
pub fn supported_terminals() -> Vec<Terminal> {
    vec![
        Terminal {
            id: "ghostty",
            display_name: "Ghostty",
            cask_name: "ghostty",
            app_name: "Ghostty",
            installed: false,
        },
        Terminal {
            id: "iterm2",
            display_name: "iTerm2",
            cask_name: "iterm2",
            app_name: "iTerm",
            installed: false,
        },
        Terminal {
            id: "wezterm",
            display_name: "WezTerm",
            cask_name: "wezterm",
            app_name: "WezTerm",
            installed: false,
        },
        Terminal {
            id: "kitty",
            display_name: "kitty",
            cask_name: "kitty",
            app_name: "kitty",
            installed: false,
        },
    ]
}

/// Marks each supported terminal installed when its application bundle is
/// present under /Applications.
pub fn detect_terminals() -> Vec<Terminal> {
    let mut terminals = supported_terminals();
    for t in &mut terminals {
        t.installed = Path::new(&format!("/Applications/{}.app", t.app_name)).exists();
    }
    terminals
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;
