use crossterm::event::KeyCode;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::outcome::ConfigMenuOutcome;
use crate::theme::{Theme, neutral_dim_style, neutral_text_style};
use crate::tui::frame::{centered_rect, draw_box, spread_line};
use crate::tui::{Effect, Event, Model, is_cancel};

const BOX_WIDTH: u16 = 56;

/// One configuration menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigMenuItem {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub status: String,
}

/// The fixed configuration entries, in display order.
pub fn config_menu_items(terminal_name: &str, version: &str) -> Vec<ConfigMenuItem> {
    vec![
        ConfigMenuItem {
            title: "Terminals",
            description: "Add, remove, or switch terminal emulator",
            action: "manage-terminals",
            status: if terminal_name.is_empty() {
                "not set".to_string()
            } else {
                terminal_name.to_string()
            },
        },
        ConfigMenuItem {
            title: "Projects",
            description: "Add or delete saved projects",
            action: "manage-projects",
            status: String::new(),
        },
        ConfigMenuItem {
            title: "AI Tools",
            description: "Choose which assistants to offer",
            action: "select-ai-tools",
            status: String::new(),
        },
        ConfigMenuItem {
            title: "Display",
            description: "Ghost, tab title, and sound settings",
            action: "display-settings",
            status: String::new(),
        },
        ConfigMenuItem {
            title: "Reinstall / Update",
            description: "Re-run the installer",
            action: "reinstall",
            status: if version.is_empty() {
                String::new()
            } else {
                format!("v{version}")
            },
        },
        ConfigMenuItem {
            title: "Quit",
            description: "Leave the configuration menu",
            action: "quit",
            status: String::new(),
        },
    ]
}

/// The `config-menu` model: a fixed list, Enter selects, Esc quits.
pub struct ConfigMenu {
    items: Vec<ConfigMenuItem>,
    cursor: usize,
    theme: Theme,
    selected: Option<String>,
}

impl ConfigMenu {
    pub fn new(terminal_name: &str, version: &str, theme: Theme) -> Self {
        Self {
            items: config_menu_items(terminal_name, version),
            cursor: 0,
            theme,
            selected: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn outcome(&self) -> ConfigMenuOutcome {
        ConfigMenuOutcome {
            action: self.selected.clone().unwrap_or_else(|| "quit".to_string()),
        }
    }

    fn move_cursor(&mut self, delta: i32) {
        let n = self.items.len();
        self.cursor = (self.cursor as i64 + delta as i64).rem_euclid(n as i64) as usize;
    }
}

impl Model for ConfigMenu {
    fn update(&mut self, event: Event) -> Vec<Effect> {
        let Event::Key(key) = event else {
            return Vec::new();
        };
        if is_cancel(&key) {
            self.selected = Some("quit".to_string());
            return vec![Effect::Quit];
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Enter => {
                if let Some(item) = self.items.get(self.cursor) {
                    self.selected = Some(item.action.to_string());
                    return vec![Effect::Quit];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn view(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let height = (3 + 3 * self.items.len() as u16 + 2).min(area.height);
        let box_area = centered_rect(area, BOX_WIDTH, height);
        let inner = draw_box(frame, box_area, "Ghost Tab Configuration", &self.theme);
        let inner_width = inner.width.saturating_sub(1) as usize;

        let mut lines: Vec<Line> = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            let selected = i == self.cursor;
            let title_style = if selected {
                self.theme.primary_style()
            } else {
                neutral_text_style()
            };
            let marker = if selected { "▸" } else { " " };
            let left = vec![
                Span::raw(" "),
                Span::styled(marker.to_string(), title_style),
                Span::raw(" "),
                Span::styled(item.title.to_string(), title_style),
            ];
            let right = if item.status.is_empty() {
                Vec::new()
            } else {
                vec![
                    Span::styled(item.status.clone(), neutral_dim_style()),
                    Span::raw(" "),
                ]
            };
            lines.push(spread_line(left, right, inner_width, 2));
            lines.push(Line::from(Span::styled(
                format!("     {}", item.description),
                neutral_dim_style(),
            )));
            if i + 1 < self.items.len() {
                lines.push(Line::default());
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " ↑/↓ navigate • Enter select • Esc quit",
            neutral_dim_style(),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
#[path = "../tests/tui/config_menu_tests.rs"]
mod tests;
