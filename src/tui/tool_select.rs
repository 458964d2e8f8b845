use crossterm::event::KeyCode;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::aitool::{AiTool, display_name};
use crate::outcome::{MultiToolOutcome, SelectToolOutcome};
use crate::theme::{Theme, neutral_dim_style, neutral_text_style, theme_for_tool};
use crate::tui::frame::{centered_rect, draw_box, spread_line};
use crate::tui::{Effect, Event, Model, is_cancel};

const BOX_WIDTH: u16 = 44;

fn tool_line(tool: &AiTool, hovered: bool, checked: Option<bool>, theme: &Theme) -> Line<'static> {
    let marker = if hovered { "▸ " } else { "  " };
    let check = match checked {
        Some(true) => "[x] ",
        Some(false) => "[ ] ",
        None => "",
    };
    let name_style = if hovered {
        theme_for_tool(&tool.id).primary_style()
    } else if tool.installed {
        neutral_text_style()
    } else {
        neutral_dim_style()
    };
    let status = if tool.installed {
        "installed"
    } else {
        "not installed"
    };
    let status_style = if tool.installed {
        theme.dim_style()
    } else {
        neutral_dim_style()
    };
    let left = vec![
        Span::styled(marker.to_string(), theme.primary_style()),
        Span::raw(check.to_string()),
        Span::styled(display_name(&tool.id).to_string(), name_style),
    ];
    let right = vec![Span::styled(format!("{status} "), status_style)];
    spread_line(left, right, BOX_WIDTH.saturating_sub(2) as usize, 2)
}

/// Single-select AI tool picker. Enter selects the hovered tool only when it
/// is installed; uninstalled rows stay put.
pub struct ToolSelect {
    tools: Vec<AiTool>,
    cursor: usize,
    theme: Theme,
    outcome: Option<SelectToolOutcome>,
}

impl ToolSelect {
    pub fn new(tools: Vec<AiTool>, theme: Theme) -> Self {
        Self {
            tools,
            cursor: 0,
            theme,
            outcome: None,
        }
    }

    pub fn outcome(&self) -> SelectToolOutcome {
        self.outcome.clone().unwrap_or(SelectToolOutcome {
            ai_tool: None,
            selected: false,
        })
    }

    fn move_cursor(&mut self, delta: isize) {
        let n = self.tools.len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor as isize + delta).rem_euclid(n as isize) as usize;
    }
}

impl Model for ToolSelect {
    fn update(&mut self, event: Event) -> Vec<Effect> {
        let Event::Key(key) = event else {
            return Vec::new();
        };
        if is_cancel(&key) {
            self.outcome = Some(SelectToolOutcome {
                ai_tool: None,
                selected: false,
            });
            return vec![Effect::Quit];
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Enter => {
                if let Some(tool) = self.tools.get(self.cursor)
                    && tool.installed
                {
                    self.outcome = Some(SelectToolOutcome {
                        ai_tool: Some(tool.id.clone()),
                        selected: true,
                    });
                    return vec![Effect::Quit];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn view(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let height = (6 + self.tools.len() as u16).min(area.height);
        let box_area = centered_rect(area, BOX_WIDTH, height);
        let inner = draw_box(frame, box_area, "Select AI Tool", &self.theme);

        let mut lines = vec![Line::default()];
        for (i, tool) in self.tools.iter().enumerate() {
            lines.push(tool_line(tool, i == self.cursor, None, &self.theme));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " ↑↓ navigate • Enter select • Esc cancel",
            neutral_dim_style(),
        )));
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Multi-select AI tool picker. Space toggles installed tools, Enter confirms
/// the checked set, Esc walks away without changes.
pub struct MultiToolSelect {
    tools: Vec<AiTool>,
    checked: Vec<bool>,
    cursor: usize,
    theme: Theme,
    outcome: Option<MultiToolOutcome>,
}

impl MultiToolSelect {
    pub fn new(tools: Vec<AiTool>, preselected: &[String], theme: Theme) -> Self {
        let checked = tools
            .iter()
            .map(|t| t.installed && preselected.iter().any(|p| p == &t.id))
            .collect();
        Self {
            tools,
            checked,
            cursor: 0,
            theme,
            outcome: None,
        }
    }

    pub fn outcome(&self) -> MultiToolOutcome {
        self.outcome.clone().unwrap_or(MultiToolOutcome {
            tools: None,
            confirmed: false,
        })
    }

    pub fn checked_ids(&self) -> Vec<String> {
        self.tools
            .iter()
            .zip(&self.checked)
            .filter(|(_, c)| **c)
            .map(|(t, _)| t.id.clone())
            .collect()
    }

    fn move_cursor(&mut self, delta: isize) {
        let n = self.tools.len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor as isize + delta).rem_euclid(n as isize) as usize;
    }

    fn toggle(&mut self) {
        if let Some(tool) = self.tools.get(self.cursor)
            && tool.installed
        {
            self.checked[self.cursor] = !self.checked[self.cursor];
        }
    }
}

impl Model for MultiToolSelect {
    fn update(&mut self, event: Event) -> Vec<Effect> {
        let Event::Key(key) = event else {
            return Vec::new();
        };
        if is_cancel(&key) {
            self.outcome = Some(MultiToolOutcome {
                tools: None,
                confirmed: false,
            });
            return vec![Effect::Quit];
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Char(' ') => self.toggle(),
            KeyCode::Enter => {
                self.outcome = Some(MultiToolOutcome {
                    tools: Some(self.checked_ids()),
                    confirmed: true,
                });
                return vec![Effect::Quit];
            }
            _ => {}
        }
        Vec::new()
    }

    fn view(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let height = (6 + self.tools.len() as u16).min(area.height);
        let box_area = centered_rect(area, BOX_WIDTH, height);
        let inner = draw_box(frame, box_area, "Select AI Tools", &self.theme);

        let mut lines = vec![Line::default()];
        for (i, tool) in self.tools.iter().enumerate() {
            lines.push(tool_line(
                tool,
                i == self.cursor,
                Some(self.checked[i]),
                &self.theme,
            ));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Space toggle • Enter confirm • Esc cancel",
            neutral_dim_style(),
        )));
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
#[path = "../tests/tui/tool_select_tests.rs"]
mod tests;
