use ratatui::style::{Color, Style};

/// Four-color 256-palette for one AI tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub primary: u8,
    pub text: u8,
    pub dim: u8,
    pub bright: u8,
}

/// Neutral colors for unselected rows, independent of the active theme.
pub const NEUTRAL_TEXT: u8 = 252;
pub const NEUTRAL_DIM: u8 = 245;

const CLAUDE: Theme = Theme {
    name: "claude",
    primary: 209,
    text: 223,
    dim: 166,
    bright: 216,
};

const CODEX: Theme = Theme {
    name: "codex",
    primary: 81,
    text: 195,
    dim: 31,
    bright: 123,
};

const COPILOT: Theme = Theme {
    name: "copilot",
    primary: 111,
    text: 189,
    dim: 61,
    bright: 147,
};

const OPENCODE: Theme = Theme {
    name: "opencode",
    primary: 114,
    text: 157,
    dim: 29,
    bright: 120,
};

/// Resolves the palette for an AI tool id. Unknown ids get the default
/// (claude) palette.
pub fn theme_for_tool(tool: &str) -> Theme {
    match tool {
        "claude" => CLAUDE,
        "codex" => CODEX,
        "copilot" => COPILOT,
        "opencode" => OPENCODE,
        _ => CLAUDE,
    }
}

impl Theme {
    pub fn primary_style(&self) -> Style {
        Style::default().fg(Color::Indexed(self.primary))
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(Color::Indexed(self.text))
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(Color::Indexed(self.dim))
    }

    pub fn bright_style(&self) -> Style {
        Style::default().fg(Color::Indexed(self.bright))
    }
}

pub fn neutral_text_style() -> Style {
    Style::default().fg(Color::Indexed(NEUTRAL_TEXT))
}

pub fn neutral_dim_style() -> Style {
    Style::default().fg(Color::Indexed(NEUTRAL_DIM))
}

/// Renders the 256-color foreground escape for a palette index.
pub fn ansi_fg(index: u8) -> String {
    format!("\x1b[38;5;{index}m")
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
