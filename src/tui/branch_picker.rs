use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::outcome::SelectBranchOutcome;
use crate::theme::{Theme, neutral_dim_style, neutral_text_style};
use crate::tui::frame::{centered_rect, draw_box};
use crate::tui::{Effect, Event, Model, Msg, is_cancel, is_plain};

const BOX_WIDTH: u16 = 56;

/// Feedback line shown under the list after a delete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub is_error: bool,
}

/// Filterable branch list with a delete sub-mode. Deletion runs as an
/// asynchronous effect; the picker stays responsive while it is in flight.
pub struct BranchPicker {
    all_branches: Vec<String>,
    filtered: Vec<String>,
    filtering: bool,
    filter_text: String,
    cursor: usize,
    offset: usize,
    delete_mode: bool,
    delete_selected: usize,
    delete_offset: usize,
    feedback: Option<Feedback>,
    project_path: String,
    theme: Theme,
    width: u16,
    height: u16,
    selected: Option<String>,
}

impl BranchPicker {
    pub fn new(branches: Vec<String>, project_path: &str, theme: Theme) -> Self {
        Self {
            filtered: branches.clone(),
            all_branches: branches,
            filtering: false,
            filter_text: String::new(),
            cursor: 0,
            offset: 0,
            delete_mode: false,
            delete_selected: 0,
            delete_offset: 0,
            feedback: None,
            project_path: project_path.to_string(),
            theme,
            width: 0,
            height: 0,
            selected: None,
        }
    }

    pub fn outcome(&self) -> SelectBranchOutcome {
        match &self.selected {
            Some(branch) => SelectBranchOutcome {
                branch: Some(branch.clone()),
                selected: true,
            },
            None => SelectBranchOutcome::cancelled(),
        }
    }

    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    pub fn branches(&self) -> &[String] {
        &self.all_branches
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn filtering(&self) -> bool {
        self.filtering
    }

    pub fn delete_mode(&self) -> bool {
        self.delete_mode
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    fn refilter(&mut self) {
        let needle = self.filter_text.to_lowercase();
        self.filtered = self
            .all_branches
            .iter()
            .filter(|b| needle.is_empty() || b.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        self.cursor = 0;
        self.offset = 0;
    }

    /// Visible row budget for the list. The normal chrome takes 9 rows, the
    /// delete view 8.
    fn visible_rows(&self) -> usize {
        let reserved = if self.delete_mode { 8 } else { 9 };
        (self.height as usize).saturating_sub(reserved).max(1)
    }

    fn clamp_scroll(&mut self) {
        let visible = self.visible_rows();
        let (cursor, offset) = if self.delete_mode {
            (self.delete_selected, &mut self.delete_offset)
        } else {
            (self.cursor, &mut self.offset)
        };
        if cursor < *offset {
            *offset = cursor;
        } else if cursor >= *offset + visible {
            *offset = cursor + 1 - visible;
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => {
                self.filtering = false;
                self.filter_text.clear();
                self.refilter();
            }
            KeyCode::Enter => return self.select_current(),
            KeyCode::Backspace => {
                self.filter_text.pop();
                self.refilter();
            }
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Char(c) if is_plain(&key) => {
                self.filter_text.push(c);
                self.refilter();
            }
            _ => {}
        }
        Vec::new()
    }

    fn move_cursor(&mut self, delta: i32) {
        if self.filtered.is_empty() {
            return;
        }
        let last = self.filtered.len() - 1;
        self.cursor = if delta < 0 {
            self.cursor.saturating_sub(1)
        } else {
            (self.cursor + 1).min(last)
        };
        self.clamp_scroll();
    }

    fn move_delete_cursor(&mut self, delta: i32) {
        let n = self.all_branches.len();
        if n == 0 {
            return;
        }
        self.delete_selected =
            (self.delete_selected as i64 + delta as i64).rem_euclid(n as i64) as usize;
        self.clamp_scroll();
    }

    fn select_current(&mut self) -> Vec<Effect> {
        if let Some(branch) = self.filtered.get(self.cursor) {
            self.selected = Some(branch.clone());
            return vec![Effect::Quit];
        }
        Vec::new()
    }

    fn handle_delete_key(&mut self, code: KeyCode) -> Vec<Effect> {
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.delete_mode = false;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_delete_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_delete_cursor(1),
            KeyCode::Enter => {
                if let Some(branch) = self.all_branches.get(self.delete_selected) {
                    return vec![Effect::DeleteBranch {
                        project_path: self.project_path.clone(),
                        branch: branch.clone(),
                    }];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn branch_deleted(&mut self, branch: String, err: Option<String>) {
        match err {
            Some(err) => {
                self.feedback = Some(Feedback {
                    text: format!("Failed to delete {branch}: {err}"),
                    is_error: true,
                });
            }
            None => {
                self.all_branches.retain(|b| b != &branch);
                self.refilter();
                self.delete_selected = self
                    .delete_selected
                    .min(self.all_branches.len().saturating_sub(1));
                self.delete_mode = false;
                self.feedback = Some(Feedback {
                    text: format!("Deleted {branch}"),
                    is_error: false,
                });
            }
        }
    }
}

impl Model for BranchPicker {
    fn update(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Resize(w, h) => {
                self.width = w;
                self.height = h;
                self.clamp_scroll();
                Vec::new()
            }
            Event::Msg(Msg::BranchDeleted { branch, err }) => {
                self.branch_deleted(branch, err);
                Vec::new()
            }
            Event::Msg(_) => Vec::new(),
            Event::Key(key) => {
                if self.filtering {
                    if is_cancel(&key) && key.code != KeyCode::Esc {
                        return vec![Effect::Quit];
                    }
                    return self.handle_filter_key(key);
                }
                if self.delete_mode {
                    if is_cancel(&key) && key.code != KeyCode::Esc {
                        return vec![Effect::Quit];
                    }
                    return self.handle_delete_key(key.code);
                }
                if is_cancel(&key) {
                    return vec![Effect::Quit];
                }
                match key.code {
                    KeyCode::Char('/') => {
                        self.filtering = true;
                        Vec::new()
                    }
                    KeyCode::Char('d') => {
                        self.delete_mode = true;
                        self.delete_selected = 0;
                        self.delete_offset = 0;
                        Vec::new()
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.move_cursor(-1);
                        Vec::new()
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.move_cursor(1);
                        Vec::new()
                    }
                    KeyCode::Enter => self.select_current(),
                    _ => Vec::new(),
                }
            }
        }
    }

    fn view(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let height = area.height.min(self.height.max(12));
        let box_area = centered_rect(area, BOX_WIDTH, height);
        let title = if self.delete_mode {
            "Delete Branch"
        } else {
            "Select Branch"
        };
        let inner = draw_box(frame, box_area, title, &self.theme);

        let mut lines: Vec<Line> = Vec::new();

        if self.delete_mode {
            lines.push(Line::from(Span::styled(
                " Pick a branch to delete",
                neutral_dim_style(),
            )));
            lines.push(Line::default());
            let visible = self.visible_rows();
            for (i, branch) in self
                .all_branches
                .iter()
                .enumerate()
                .skip(self.delete_offset)
                .take(visible)
            {
                lines.push(branch_row(branch, i == self.delete_selected, &self.theme));
            }
        } else {
            if self.filtering {
                lines.push(Line::from(vec![
                    Span::styled(" /", self.theme.primary_style()),
                    Span::styled(self.filter_text.clone(), neutral_text_style()),
                    Span::styled("▌", self.theme.primary_style()),
                ]));
            } else {
                lines.push(Line::from(Span::styled(
                    " / filter  d delete",
                    neutral_dim_style(),
                )));
            }
            lines.push(Line::default());
            let visible = self.visible_rows();
            for (i, branch) in self
                .filtered
                .iter()
                .enumerate()
                .skip(self.offset)
                .take(visible)
            {
                lines.push(branch_row(branch, i == self.cursor, &self.theme));
            }
        }

        if let Some(feedback) = &self.feedback {
            lines.push(Line::default());
            let style = if feedback.is_error {
                self.theme.dim_style()
            } else {
                self.theme.primary_style()
            };
            lines.push(Line::from(Span::styled(
                format!(" {}", feedback.text),
                style,
            )));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn branch_row<'a>(branch: &'a str, selected: bool, theme: &Theme) -> Line<'a> {
    if selected {
        Line::from(vec![
            Span::styled(" ▸ ", theme.primary_style()),
            Span::styled(branch, theme.primary_style()),
        ])
    } else {
        Line::from(vec![Span::raw("   "), Span::styled(branch, neutral_text_style())])
    }
}

#[cfg(test)]
#[path = "../tests/tui/branch_picker_tests.rs"]
mod tests;
