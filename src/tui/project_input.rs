use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::outcome::AddProjectOutcome;
use crate::paths::validate_dir;
use crate::theme::{Theme, neutral_dim_style, neutral_text_style};
use crate::tui::autocomplete::{Autocomplete, PathProvider, SuggestionProvider};
use crate::tui::frame::{centered_rect, draw_box};
use crate::tui::{Effect, Event, Model, is_cancel, is_plain};

const BOX_WIDTH: u16 = 56;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Name,
    Path,
}

/// Two-step add-project wizard: a name, then a path with directory
/// autocomplete. Validation errors show inline and never terminate.
pub struct ProjectInput {
    step: Step,
    name: String,
    path: String,
    error: Option<String>,
    autocomplete: Autocomplete,
    theme: Theme,
    outcome: Option<AddProjectOutcome>,
}

impl ProjectInput {
    pub fn new(theme: Theme) -> Self {
        Self::with_provider(Box::new(PathProvider), theme)
    }

    /// Test seam: any provider instead of the filesystem one.
    pub fn with_provider(provider: Box<dyn SuggestionProvider>, theme: Theme) -> Self {
        Self {
            step: Step::Name,
            name: String::new(),
            path: String::new(),
            error: None,
            autocomplete: Autocomplete::new(provider, 8),
            theme,
            outcome: None,
        }
    }

    pub fn outcome(&self) -> AddProjectOutcome {
        self.outcome
            .clone()
            .unwrap_or_else(AddProjectOutcome::cancelled)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn on_path_step(&self) -> bool {
        self.step == Step::Path
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn suggestions_visible(&self) -> bool {
        self.autocomplete.visible()
    }

    fn cancel(&mut self) -> Vec<Effect> {
        self.outcome = Some(AddProjectOutcome::cancelled());
        vec![Effect::Quit]
    }

    fn submit_name(&mut self) {
        if self.name.trim().is_empty() {
            self.error = Some("Project name cannot be empty".to_string());
            return;
        }
        self.error = None;
        self.step = Step::Path;
        self.autocomplete.set_input(&self.path);
        self.autocomplete.refresh();
    }

    fn accept_suggestion(&mut self) {
        let suggestion = self.autocomplete.accept_selected();
        if suggestion.is_empty() {
            return;
        }
        self.path = suggestion;
        self.autocomplete.set_input(&self.path);
        self.autocomplete.refresh();
    }

    fn submit_path(&mut self) -> Vec<Effect> {
        match validate_dir(&self.path) {
            Ok(expanded) => {
                self.outcome = Some(AddProjectOutcome {
                    name: Some(self.name.trim().to_string()),
                    path: Some(expanded),
                    confirmed: true,
                });
                vec![Effect::Quit]
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Vec::new()
            }
        }
    }

    fn edit_path(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if is_plain(&key) => self.path.push(c),
            KeyCode::Backspace => {
                self.path.pop();
            }
            _ => return,
        }
        self.error = None;
        self.autocomplete.set_input(&self.path);
        self.autocomplete.refresh();
    }
}

impl Model for ProjectInput {
    fn update(&mut self, event: Event) -> Vec<Effect> {
        let Event::Key(key) = event else {
            return Vec::new();
        };

        match self.step {
            Step::Name => {
                if is_cancel(&key) {
                    return self.cancel();
                }
                match key.code {
                    KeyCode::Enter => self.submit_name(),
                    KeyCode::Backspace => {
                        self.name.pop();
                        self.error = None;
                    }
                    KeyCode::Char(c) if is_plain(&key) => {
                        self.name.push(c);
                        self.error = None;
                    }
                    _ => {}
                }
                Vec::new()
            }
            Step::Path => {
                if is_cancel(&key) {
                    // Esc first dismisses the dropdown, then cancels.
                    if key.code == KeyCode::Esc && self.autocomplete.visible() {
                        self.autocomplete.dismiss();
                        return Vec::new();
                    }
                    return self.cancel();
                }
                match key.code {
                    KeyCode::Enter => {
                        if self.autocomplete.visible() {
                            self.accept_suggestion();
                            Vec::new()
                        } else {
                            self.submit_path()
                        }
                    }
                    KeyCode::Tab => {
                        self.accept_suggestion();
                        Vec::new()
                    }
                    KeyCode::Up => {
                        self.autocomplete.move_up();
                        Vec::new()
                    }
                    KeyCode::Down => {
                        self.autocomplete.move_down();
                        Vec::new()
                    }
                    _ => {
                        self.edit_path(key);
                        Vec::new()
                    }
                }
            }
        }
    }

    fn view(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let suggestion_rows = if self.autocomplete.visible() {
            self.autocomplete.suggestions().len() as u16 + 1
        } else {
            0
        };
        let height = (9 + suggestion_rows).min(area.height);
        let box_area = centered_rect(area, BOX_WIDTH, height);
        let inner = draw_box(frame, box_area, "Add Project", &self.theme);

        let (label, value) = match self.step {
            Step::Name => ("Project name", &self.name),
            Step::Path => ("Project path", &self.path),
        };

        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(format!(" {label}:"), neutral_dim_style())),
            Line::from(vec![
                Span::raw(" "),
                Span::styled(value.clone(), neutral_text_style()),
                Span::styled("▌", self.theme.primary_style()),
            ]),
        ];

        if self.autocomplete.visible() {
            lines.push(Line::default());
            for (i, suggestion) in self.autocomplete.suggestions().iter().enumerate() {
                let style = if i == self.autocomplete.selected() {
                    self.theme.primary_style()
                } else {
                    neutral_dim_style()
                };
                lines.push(Line::from(Span::styled(format!("   {suggestion}"), style)));
            }
        }

        if let Some(error) = &self.error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!(" {error}"),
                self.theme.dim_style(),
            )));
        }

        lines.push(Line::default());
        let hint = match self.step {
            Step::Name => " Enter continue • Esc cancel",
            Step::Path => " Tab complete • Enter confirm • Esc cancel",
        };
        lines.push(Line::from(Span::styled(hint, neutral_dim_style())));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
#[path = "../tests/tui/project_input_tests.rs"]
mod tests;
