use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::outcome::SettingsOutcome;
use crate::theme::{Theme, neutral_dim_style, neutral_text_style};
use crate::tui::frame::{centered_rect, draw_box, spread_line};
use crate::tui::{Effect, Event, Model, is_cancel};

/// Sound cycle. The reverse order is authoritative (Off steps back to Tink);
/// the forward order is its exact inverse. The empty name renders as Off.
pub const SOUND_NAMES: [&str; 15] = [
    "", "Basso", "Blow", "Bottle", "Frog", "Funk", "Glass", "Hero", "Morse", "Ping", "Pop", "Purr",
    "Sosumi", "Submarine", "Tink",
];

const GHOST_DISPLAYS: [&str; 3] = ["animated", "static", "none"];
const TAB_TITLES: [&str; 2] = ["full", "project"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsRow {
    GhostDisplay,
    TabTitle,
    Sound,
    Back,
}

const ROWS: [SettingsRow; 4] = [
    SettingsRow::GhostDisplay,
    SettingsRow::TabTitle,
    SettingsRow::Sound,
    SettingsRow::Back,
];

pub fn ghost_display_label(mode: &str) -> &str {
    match mode {
        "animated" => "Animated",
        "static" => "Static",
        "none" => "None",
        other => other,
    }
}

pub fn tab_title_label(mode: &str) -> &str {
    match mode {
        "full" => "Project · Tool",
        "project" => "Project Only",
        other => other,
    }
}

pub fn sound_label(name: &str) -> &str {
    if name.is_empty() { "Off" } else { name }
}

/// The settings rows and their edit state. Embedded in MainMenu's settings
/// sub-mode and run standalone by the `settings-menu` subcommand.
pub struct SettingsState {
    pub cursor: usize,
    pub ghost_display: String,
    pub tab_title: String,
    pub sound_name: String,
    pub ghost_display_changed: bool,
    pub tab_title_changed: bool,
    pub sound_changed: bool,
}

/// What a settings key press asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    Exit,
}

impl SettingsState {
    pub fn new(ghost_display: &str, tab_title: &str, sound_name: &str) -> Self {
        Self {
            cursor: 0,
            ghost_display: ghost_display.to_string(),
            tab_title: tab_title.to_string(),
            sound_name: sound_name.to_string(),
            ghost_display_changed: false,
            tab_title_changed: false,
            sound_changed: false,
        }
    }

    pub fn focused(&self) -> SettingsRow {
        ROWS[self.cursor]
    }

    pub fn move_up(&mut self) {
        self.cursor = (self.cursor + ROWS.len() - 1) % ROWS.len();
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % ROWS.len();
    }

    pub fn cycle(&mut self, direction: i32) {
        match self.focused() {
            SettingsRow::GhostDisplay => {
                self.ghost_display = cycle_list(&GHOST_DISPLAYS, &self.ghost_display, direction);
                self.ghost_display_changed = true;
            }
            SettingsRow::TabTitle => {
                self.tab_title = cycle_list(&TAB_TITLES, &self.tab_title, direction);
                self.tab_title_changed = true;
            }
            SettingsRow::Sound => {
                self.cycle_sound(direction);
            }
            SettingsRow::Back => {}
        }
    }

    pub fn cycle_sound(&mut self, direction: i32) {
        self.sound_name = cycle_list(&SOUND_NAMES, &self.sound_name, direction);
        self.sound_changed = true;
    }

    /// Sound value for the Outcome: present only when it changed this session.
    pub fn sound_for_outcome(&self) -> Option<String> {
        self.sound_changed.then(|| self.sound_name.clone())
    }

    pub fn ghost_display_for_outcome(&self) -> Option<String> {
        self.ghost_display_changed
            .then(|| self.ghost_display.clone())
    }

    pub fn tab_title_for_outcome(&self) -> Option<String> {
        self.tab_title_changed.then(|| self.tab_title.clone())
    }

    /// Routes one key press. `Exit` means the caller should leave the
    /// settings view; values already live in this state.
    pub fn handle_key(&mut self, code: KeyCode) -> SettingsAction {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Left => self.cycle(-1),
            KeyCode::Right => self.cycle(1),
            KeyCode::Enter if self.focused() == SettingsRow::Back => return SettingsAction::Exit,
            KeyCode::Esc => return SettingsAction::Exit,
            _ => {}
        }
        SettingsAction::None
    }

    /// (label, value) pairs for rendering, in row order. Back has no value.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Ghost Display",
                format!("[{}]", ghost_display_label(&self.ghost_display)),
            ),
            ("Tab Title", format!("[{}]", tab_title_label(&self.tab_title))),
            ("Sound", format!("[{}]", sound_label(&self.sound_name))),
            ("Back", String::new()),
        ]
    }
}

fn cycle_list(list: &[&str], current: &str, direction: i32) -> String {
    let n = list.len() as i64;
    match list.iter().position(|v| *v == current) {
        Some(idx) => {
            let next = (idx as i64 + direction as i64).rem_euclid(n) as usize;
            list[next].to_string()
        }
        // Unknown (custom) value: step onto the list from either end.
        None => {
            if direction >= 0 {
                list[0].to_string()
            } else {
                list[list.len() - 1].to_string()
            }
        }
    }
}

/// Renders the settings rows into a framed box. Shared by MainMenu's settings
/// sub-mode and the standalone menu.
pub fn render_settings_box(
    frame: &mut ratatui::Frame,
    area: Rect,
    state: &SettingsState,
    theme: &Theme,
) {
    let width: u16 = 48;
    let height: u16 = 4 + 2 * ROWS.len() as u16;
    let box_area = centered_rect(area, width, height);
    let inner = draw_box(frame, box_area, "Settings", theme);
    let inner_width = inner.width.saturating_sub(2) as usize;

    let mut lines = Vec::new();
    lines.push(ratatui::text::Line::default());
    for (i, (label, value)) in state.rows().iter().enumerate() {
        let focused = i == state.cursor;
        let (marker, label_style, value_style) = if focused {
            ("▸ ", theme.primary_style(), theme.text_style())
        } else {
            ("  ", neutral_text_style(), neutral_dim_style())
        };
        let left = vec![
            Span::raw(" "),
            Span::styled(marker.to_string(), label_style),
            Span::styled(label.to_string(), label_style),
        ];
        let right = if value.is_empty() {
            Vec::new()
        } else {
            vec![Span::styled(value.clone(), value_style), Span::raw(" ")]
        };
        lines.push(spread_line(left, right, inner_width, 5));
        lines.push(ratatui::text::Line::default());
    }
    lines.push(ratatui::text::Line::from(Span::styled(
        " ↑/↓ navigate • ←/→ change • Esc back",
        neutral_dim_style(),
    )));

    frame.render_widget(ratatui::widgets::Paragraph::new(lines), inner);
}

/// Standalone model behind the `settings-menu` subcommand.
pub struct SettingsMenu {
    state: SettingsState,
    theme: Theme,
    outcome: Option<SettingsOutcome>,
}

impl SettingsMenu {
    pub fn new(ghost_display: &str, tab_title: &str, sound_name: &str, theme: Theme) -> Self {
        Self {
            state: SettingsState::new(ghost_display, tab_title, sound_name),
            theme,
            outcome: None,
        }
    }

    pub fn outcome(&self) -> SettingsOutcome {
        self.outcome.clone().unwrap_or(SettingsOutcome {
            ghost_display: None,
            tab_title: None,
            sound_name: None,
            confirmed: false,
        })
    }

    pub fn state(&self) -> &SettingsState {
        &self.state
    }
}

impl Model for SettingsMenu {
    fn update(&mut self, event: Event) -> Vec<Effect> {
        let Event::Key(key) = event else {
            return Vec::new();
        };

        if is_cancel(&key) {
            self.outcome = Some(SettingsOutcome {
                ghost_display: None,
                tab_title: None,
                sound_name: None,
                confirmed: false,
            });
            return vec![Effect::Quit];
        }

        if self.state.handle_key(key.code) == SettingsAction::Exit {
            self.outcome = Some(SettingsOutcome {
                ghost_display: Some(self.state.ghost_display.clone()),
                tab_title: Some(self.state.tab_title.clone()),
                sound_name: self.state.sound_for_outcome(),
                confirmed: true,
            });
            return vec![Effect::Quit];
        }
        Vec::new()
    }

    fn view(&self, frame: &mut ratatui::Frame) {
        render_settings_box(frame, frame.area(), &self.state, &self.theme);
    }
}

#[cfg(test)]
#[path = "../tests/tui/settings_tests.rs"]
mod tests;
