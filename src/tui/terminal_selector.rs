use crossterm::event::KeyCode;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::outcome::SelectTerminalOutcome;
use crate::terminal::Terminal;
use crate::theme::{Theme, neutral_dim_style, neutral_text_style};
use crate::tui::frame::{centered_rect, draw_box, spread_line};
use crate::tui::{Effect, Event, Model, is_cancel};

const BOX_WIDTH: u16 = 56;

const INSTALLED_COLOR: u8 = 114;
const CURRENT_COLOR: u8 = 220;
const NOT_INSTALLED_COLOR: u8 = 241;

/// Fixed list of supported terminals with install state. Enter selects an
/// installed terminal; Enter or `i` on an uninstalled one requests install.
pub struct TerminalSelector {
    terminals: Vec<Terminal>,
    current: String,
    cursor: usize,
    theme: Theme,
    outcome: Option<SelectTerminalOutcome>,
}

impl TerminalSelector {
    pub fn new(terminals: Vec<Terminal>, current: &str, theme: Theme) -> Self {
        Self {
            terminals,
            current: current.to_string(),
            cursor: 0,
            theme,
            outcome: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn outcome(&self) -> SelectTerminalOutcome {
        self.outcome
            .clone()
            .unwrap_or_else(SelectTerminalOutcome::cancelled)
    }

    fn move_cursor(&mut self, delta: i32) {
        let n = self.terminals.len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor as i64 + delta as i64).rem_euclid(n as i64) as usize;
    }

    fn request_install(&mut self) -> Vec<Effect> {
        let Some(t) = self.terminals.get(self.cursor) else {
            return Vec::new();
        };
        self.outcome = Some(SelectTerminalOutcome::install(t.id, t.cask_name));
        vec![Effect::Quit]
    }

    fn select(&mut self) -> Vec<Effect> {
        let Some(t) = self.terminals.get(self.cursor) else {
            return Vec::new();
        };
        if t.installed {
            self.outcome = Some(SelectTerminalOutcome::selected(t.id));
            vec![Effect::Quit]
        } else {
            self.request_install()
        }
    }
}

impl Model for TerminalSelector {
    fn update(&mut self, event: Event) -> Vec<Effect> {
        let Event::Key(key) = event else {
            return Vec::new();
        };
        if is_cancel(&key) {
            self.outcome = Some(SelectTerminalOutcome::cancelled());
            return vec![Effect::Quit];
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Enter => return self.select(),
            KeyCode::Char('i') => {
                if self.terminals.get(self.cursor).is_some_and(|t| !t.installed) {
                    return self.request_install();
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn view(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let height = (4 + self.terminals.len() as u16 + 2).min(area.height);
        let box_area = centered_rect(area, BOX_WIDTH, height);
        let inner = draw_box(frame, box_area, "Select Terminal", &self.theme);
        let inner_width = inner.width.saturating_sub(1) as usize;

        let mut lines: Vec<Line> = Vec::new();
        for (i, t) in self.terminals.iter().enumerate() {
            let selected = i == self.cursor;
            let name_style = if selected {
                self.theme.primary_style()
            } else {
                neutral_text_style()
            };
            let marker = if selected { "▸" } else { " " };
            let left = vec![
                Span::raw(" "),
                Span::styled(marker.to_string(), name_style),
                Span::raw(" "),
                Span::styled(t.display_name.to_string(), name_style),
            ];

            let mut right = Vec::new();
            if t.installed {
                right.push(Span::styled(
                    "✓ installed".to_string(),
                    Style::default().fg(Color::Indexed(INSTALLED_COLOR)),
                ));
                if !self.current.is_empty() && t.id == self.current {
                    right.push(Span::raw("  "));
                    right.push(Span::styled(
                        "★ current".to_string(),
                        Style::default().fg(Color::Indexed(CURRENT_COLOR)),
                    ));
                }
            } else {
                right.push(Span::styled(
                    "○ not installed".to_string(),
                    Style::default().fg(Color::Indexed(NOT_INSTALLED_COLOR)),
                ));
            }
            right.push(Span::raw(" "));

            lines.push(spread_line(left, right, inner_width, 2));
        }

        lines.push(Line::default());
        let action_hint = if self.terminals.get(self.cursor).is_some_and(|t| t.installed) {
            "Enter select"
        } else {
            "Enter install"
        };
        lines.push(Line::from(Span::styled(
            format!(" ↑/↓ navigate • {action_hint} • Esc cancel"),
            neutral_dim_style(),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
#[path = "../tests/tui/terminal_selector_tests.rs"]
mod tests;
