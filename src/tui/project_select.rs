use crossterm::event::KeyCode;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::outcome::SelectProjectOutcome;
use crate::paths::{shorten_home_path, truncate_middle};
use crate::project::Project;
use crate::theme::{Theme, neutral_dim_style, neutral_text_style};
use crate::tui::frame::{centered_rect, draw_box, spread_line};
use crate::tui::{Effect, Event, Model, is_cancel};

const BOX_WIDTH: u16 = 56;

/// Flat project picker for the `select-project` subcommand. One row per
/// project, name left and shortened path right.
pub struct ProjectSelect {
    projects: Vec<Project>,
    cursor: usize,
    theme: Theme,
    outcome: Option<SelectProjectOutcome>,
}

impl ProjectSelect {
    pub fn new(projects: Vec<Project>, theme: Theme) -> Self {
        Self {
            projects,
            cursor: 0,
            theme,
            outcome: None,
        }
    }

    pub fn outcome(&self) -> SelectProjectOutcome {
        self.outcome
            .clone()
            .unwrap_or_else(SelectProjectOutcome::cancelled)
    }

    fn move_cursor(&mut self, delta: isize) {
        let n = self.projects.len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor as isize + delta).rem_euclid(n as isize) as usize;
    }
}

impl Model for ProjectSelect {
    fn update(&mut self, event: Event) -> Vec<Effect> {
        let Event::Key(key) = event else {
            return Vec::new();
        };
        if is_cancel(&key) {
            self.outcome = Some(SelectProjectOutcome::cancelled());
            return vec![Effect::Quit];
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Enter => {
                if let Some(project) = self.projects.get(self.cursor) {
                    self.outcome = Some(SelectProjectOutcome {
                        project: Some(project.name.clone()),
                        path: Some(project.path.clone()),
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
        let height = (6 + self.projects.len() as u16).min(area.height);
        let box_area = centered_rect(area, BOX_WIDTH, height);
        let inner = draw_box(frame, box_area, "Select Project", &self.theme);
        let inner_width = inner.width as usize;

        let mut lines = vec![Line::default()];
        for (i, project) in self.projects.iter().enumerate() {
            let hovered = i == self.cursor;
            let marker = if hovered { "▸ " } else { "  " };
            let name_style = if hovered {
                self.theme.primary_style()
            } else {
                neutral_text_style()
            };
            let path = truncate_middle(
                &shorten_home_path(&project.path),
                inner_width.saturating_sub(project.name.chars().count() + 6),
            );
            lines.push(spread_line(
                vec![
                    Span::styled(marker.to_string(), self.theme.primary_style()),
                    Span::styled(project.name.clone(), name_style),
                ],
                vec![Span::styled(format!("{path} "), neutral_dim_style())],
                inner_width,
                2,
            ));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " ↑↓ navigate • Enter select • Esc cancel",
            neutral_dim_style(),
        )));
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
#[path = "../tests/tui/project_select_tests.rs"]
mod tests;
