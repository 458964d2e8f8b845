use crossterm::event::KeyCode;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::outcome::ConfirmOutcome;
use crate::theme::{Theme, neutral_dim_style, neutral_text_style};
use crate::tui::frame::{centered_rect, draw_box};
use crate::tui::{Effect, Event, Model, is_cancel};

/// A y/n question. Only y, n, Esc, and Ctrl+C do anything.
pub struct ConfirmDialog {
    message: String,
    theme: Theme,
    confirmed: Option<bool>,
}

impl ConfirmDialog {
    pub fn new(message: &str, theme: Theme) -> Self {
        Self {
            message: message.to_string(),
            theme,
            confirmed: None,
        }
    }

    pub fn outcome(&self) -> ConfirmOutcome {
        ConfirmOutcome {
            confirmed: self.confirmed.unwrap_or(false),
        }
    }

    pub fn decided(&self) -> bool {
        self.confirmed.is_some()
    }
}

impl Model for ConfirmDialog {
    fn update(&mut self, event: Event) -> Vec<Effect> {
        let Event::Key(key) = event else {
            return Vec::new();
        };
        if is_cancel(&key) {
            self.confirmed = Some(false);
            return vec![Effect::Quit];
        }
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.confirmed = Some(true);
                vec![Effect::Quit]
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.confirmed = Some(false);
                vec![Effect::Quit]
            }
            _ => Vec::new(),
        }
    }

    fn view(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let width = (self.message.chars().count() as u16 + 8).clamp(24, 60);
        let box_area = centered_rect(area, width, 7);
        let inner = draw_box(frame, box_area, "Confirm", &self.theme);

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                format!(" {}", self.message),
                neutral_text_style(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled(" y", self.theme.primary_style()),
                Span::styled(" yes  ", neutral_dim_style()),
                Span::styled("n", self.theme.primary_style()),
                Span::styled(" no", neutral_dim_style()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
#[path = "../tests/tui/confirm_tests.rs"]
mod tests;
