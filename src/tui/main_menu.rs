use std::collections::BTreeSet;

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::aitool::display_name;
use crate::outcome::MainMenuOutcome;
use crate::paths::{shorten_home_path, truncate_middle};
use crate::project::Project;
use crate::theme::{Theme, neutral_dim_style, neutral_text_style, theme_for_tool};
use crate::tui::frame::{draw_box, spread_line};
use crate::tui::settings::{SettingsAction, SettingsState, render_settings_box};
use crate::tui::{Effect, Event, Model, is_cancel, is_plain};

pub const MENU_WIDTH: u16 = 48;

const GHOST_WIDTH: u16 = 28;
const GHOST_HEIGHT: u16 = 15;
const SIDE_GAP: u16 = 3;

const GHOST_ART: [&str; 13] = [
    r"       .-''''-.       ",
    r"      /        \      ",
    r"     /  _    _  \     ",
    r"    |  (o)  (o)  |    ",
    r"    |            |    ",
    r"    |    ____    |    ",
    r"    |            |    ",
    r"    |            |    ",
    r"    |            |    ",
    r"    |            |    ",
    r"    |            |    ",
    r"    | /\  /\  /\ |    ",
    r"    \/  \/  \/  \/    ",
];

/// Fixed action rows after the projects, in order.
const ACTIONS: [(&str, char, &str, &str); 4] = [
    (
        "add-project",
        'a',
        "Add new project",
        "Save a project for quick access",
    ),
    (
        "delete-project",
        'd',
        "Delete a project",
        "Remove a saved project",
    ),
    (
        "open-once",
        'o',
        "Open once",
        "Pick a directory without saving",
    ),
    (
        "plain-terminal",
        'p',
        "Plain terminal",
        "Open a tab without an AI tool",
    ),
];

/// Where the ghost sits relative to the menu at the current terminal size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GhostPosition {
    Side,
    Above,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuLayout {
    pub ghost_position: GhostPosition,
    pub menu_width: u16,
    pub menu_height: u16,
}

/// One selectable row of the menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Project(usize),
    Worktree { project: usize, index: usize },
    AddWorktree(usize),
    Action(usize),
}

impl MenuItem {
    /// The project a row belongs to, if any.
    fn owning_project(self) -> Option<usize> {
        match self {
            MenuItem::Project(i) => Some(i),
            MenuItem::Worktree { project, .. } => Some(project),
            MenuItem::AddWorktree(i) => Some(i),
            MenuItem::Action(_) => None,
        }
    }
}

/// The unified main menu: projects (with expandable worktrees), fixed
/// actions, inline AI-tool cycling, and a nested settings sub-mode.
pub struct MainMenu {
    projects: Vec<Project>,
    ai_tools: Vec<String>,
    selected_ai: usize,
    cursor: usize,
    expanded: BTreeSet<usize>,
    settings_mode: bool,
    settings: SettingsState,
    update_version: String,
    theme: Theme,
    width: u16,
    height: u16,
    outcome: Option<MainMenuOutcome>,
}

impl MainMenu {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        projects: Vec<Project>,
        ai_tools: Vec<String>,
        current_ai: &str,
        ghost_display: &str,
        tab_title: &str,
        sound_name: &str,
        update_version: &str,
    ) -> Self {
        let selected_ai = ai_tools.iter().position(|t| t == current_ai).unwrap_or(0);
        let theme = theme_for_tool(ai_tools.get(selected_ai).map_or(current_ai, |t| t));
        Self {
            projects,
            ai_tools,
            selected_ai,
            cursor: 0,
            expanded: BTreeSet::new(),
            settings_mode: false,
            settings: SettingsState::new(ghost_display, tab_title, sound_name),
            update_version: update_version.to_string(),
            theme,
            width: 0,
            height: 0,
            outcome: None,
        }
    }

    pub fn outcome(&self) -> Option<&MainMenuOutcome> {
        self.outcome.as_ref()
    }

    pub fn current_tool(&self) -> &str {
        self.ai_tools
            .get(self.selected_ai)
            .map_or("", |t| t.as_str())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn settings_mode(&self) -> bool {
        self.settings_mode
    }

    pub fn settings_mut(&mut self) -> &mut SettingsState {
        &mut self.settings
    }

    pub fn expanded(&self) -> &BTreeSet<usize> {
        &self.expanded
    }

    /// The selectable rows in display order: each project, its worktrees and
    /// add-worktree row when expanded, then the fixed actions.
    pub fn items(&self) -> Vec<MenuItem> {
        let mut items = Vec::new();
        for (i, project) in self.projects.iter().enumerate() {
            items.push(MenuItem::Project(i));
            if self.expanded.contains(&i) {
                for w in 0..project.worktrees.len() {
                    items.push(MenuItem::Worktree {
                        project: i,
                        index: w,
                    });
                }
                items.push(MenuItem::AddWorktree(i));
            }
        }
        for a in 0..ACTIONS.len() {
            items.push(MenuItem::Action(a));
        }
        items
    }

    pub fn layout(&self) -> MenuLayout {
        let items = self.items().len() as u16;
        let separators = if self.projects.is_empty() { 0 } else { 1 };
        let menu_height = 7 + 2 * items + separators;

        let ghost_position = if self.width >= MENU_WIDTH + SIDE_GAP + GHOST_WIDTH + SIDE_GAP {
            GhostPosition::Side
        } else if self.height >= menu_height + GHOST_HEIGHT + 2 {
            GhostPosition::Above
        } else {
            GhostPosition::Hidden
        };

        MenuLayout {
            ghost_position,
            menu_width: MENU_WIDTH,
            menu_height,
        }
    }

    fn move_up(&mut self) {
        let total = self.items().len();
        self.cursor = (self.cursor + total - 1) % total;
    }

    fn move_down(&mut self) {
        let total = self.items().len();
        self.cursor = (self.cursor + 1) % total;
    }

    fn cycle_ai(&mut self, direction: i32) {
        let n = self.ai_tools.len();
        if n <= 1 {
            return;
        }
        self.selected_ai = (self.selected_ai as i64 + direction as i64).rem_euclid(n as i64) as usize;
        self.theme = theme_for_tool(&self.ai_tools[self.selected_ai]);
    }

    fn jump_to_project(&mut self, n: usize) {
        if n == 0 || n > self.projects.len() {
            return;
        }
        if let Some(idx) = self
            .items()
            .iter()
            .position(|item| *item == MenuItem::Project(n - 1))
        {
            self.cursor = idx;
        }
    }

    fn toggle_worktrees(&mut self) {
        let items = self.items();
        let Some(project) = items.get(self.cursor).and_then(|i| i.owning_project()) else {
            return;
        };
        if self.projects[project].worktrees.is_empty() {
            return;
        }
        if !self.expanded.remove(&project) {
            self.expanded.insert(project);
        }
        self.cursor = self.cursor.min(self.items().len() - 1);
    }

    fn base_outcome(&self, action: &str) -> MainMenuOutcome {
        MainMenuOutcome {
            action: action.to_string(),
            name: None,
            path: None,
            branch: None,
            ai_tool: self.current_tool().to_string(),
            ghost_display: self.settings.ghost_display_for_outcome(),
            tab_title: self.settings.tab_title_for_outcome(),
            sound_name: self.settings.sound_for_outcome(),
        }
    }

    fn finish(&mut self, outcome: MainMenuOutcome) -> Vec<Effect> {
        self.outcome = Some(outcome);
        vec![Effect::Quit]
    }

    fn finish_action(&mut self, action: &str) -> Vec<Effect> {
        let outcome = self.base_outcome(action);
        self.finish(outcome)
    }

    fn select_current(&mut self) -> Vec<Effect> {
        let items = self.items();
        let Some(item) = items.get(self.cursor).copied() else {
            return Vec::new();
        };
        match item {
            MenuItem::Project(i) => {
                let mut outcome = self.base_outcome("select-project");
                outcome.name = Some(self.projects[i].name.clone());
                outcome.path = Some(self.projects[i].path.clone());
                self.finish(outcome)
            }
            MenuItem::Worktree { project, index } => {
                let wt = self.projects[project].worktrees[index].clone();
                let mut outcome = self.base_outcome("select-worktree");
                outcome.name = Some(self.projects[project].name.clone());
                outcome.path = Some(wt.path);
                outcome.branch = Some(wt.branch);
                self.finish(outcome)
            }
            MenuItem::AddWorktree(project) => {
                let mut outcome = self.base_outcome("add-worktree");
                outcome.name = Some(self.projects[project].name.clone());
                outcome.path = Some(self.projects[project].path.clone());
                self.finish(outcome)
            }
            MenuItem::Action(a) => {
                let action = ACTIONS[a].0.to_string();
                self.finish_action(&action)
            }
        }
    }

    fn handle_char(&mut self, c: char) -> Vec<Effect> {
        match c {
            'j' => self.move_down(),
            'k' => self.move_up(),
            'w' | 'W' => self.toggle_worktrees(),
            's' | 'S' => self.settings_mode = true,
            'a' | 'A' => return self.finish_action("add-project"),
            'd' | 'D' => return self.finish_action("delete-project"),
            'o' | 'O' => return self.finish_action("open-once"),
            'p' | 'P' => return self.finish_action("plain-terminal"),
            '1'..='9' => self.jump_to_project(c as usize - '0' as usize),
            _ => {}
        }
        Vec::new()
    }
}

impl Model for MainMenu {
    fn update(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Resize(w, h) => {
                self.width = w;
                self.height = h;
                Vec::new()
            }
            Event::Key(key) => {
                if self.settings_mode {
                    if is_cancel(&key) && key.code != KeyCode::Esc {
                        return self.finish_action("quit");
                    }
                    if self.settings.handle_key(key.code) == SettingsAction::Exit {
                        self.settings_mode = false;
                    }
                    return Vec::new();
                }

                if is_cancel(&key) {
                    return self.finish_action("quit");
                }

                match key.code {
                    KeyCode::Up => self.move_up(),
                    KeyCode::Down => self.move_down(),
                    KeyCode::Left => self.cycle_ai(-1),
                    KeyCode::Right => self.cycle_ai(1),
                    KeyCode::Enter => return self.select_current(),
                    KeyCode::Char(c) if is_plain(&key) => return self.handle_char(c),
                    _ => {}
                }
                Vec::new()
            }
            Event::Msg(_) => Vec::new(),
        }
    }

    fn view(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();

        if self.settings_mode {
            render_settings_box(frame, area, &self.settings, &self.theme);
            return;
        }

        let layout = self.layout();
        let (ghost_area, menu_area) = place(area, layout);

        if let Some(ghost_area) = ghost_area {
            self.render_ghost(frame, ghost_area);
        }
        self.render_menu(frame, menu_area, layout);
    }
}

/// Splits the screen area into an optional ghost area and the menu area.
fn place(area: Rect, layout: MenuLayout) -> (Option<Rect>, Rect) {
    let menu_h = layout.menu_height.min(area.height);
    match layout.ghost_position {
        GhostPosition::Side => {
            let total_w = GHOST_WIDTH + SIDE_GAP + layout.menu_width;
            let x0 = area.x + area.width.saturating_sub(total_w) / 2;
            let y0 = area.y + area.height.saturating_sub(menu_h) / 2;
            let ghost = Rect {
                x: x0,
                y: y0 + menu_h.saturating_sub(GHOST_HEIGHT) / 2,
                width: GHOST_WIDTH,
                height: GHOST_HEIGHT.min(area.height),
            };
            let menu = Rect {
                x: x0 + GHOST_WIDTH + SIDE_GAP,
                y: y0,
                width: layout.menu_width.min(area.width),
                height: menu_h,
            };
            (Some(ghost), menu)
        }
        GhostPosition::Above => {
            let total_h = GHOST_HEIGHT + 2 + menu_h;
            let y0 = area.y + area.height.saturating_sub(total_h) / 2;
            let x_menu = area.x + area.width.saturating_sub(layout.menu_width) / 2;
            let ghost = Rect {
                x: area.x + area.width.saturating_sub(GHOST_WIDTH) / 2,
                y: y0,
                width: GHOST_WIDTH.min(area.width),
                height: GHOST_HEIGHT,
            };
            let menu = Rect {
                x: x_menu,
                y: y0 + GHOST_HEIGHT + 2,
                width: layout.menu_width.min(area.width),
                height: menu_h,
            };
            (Some(ghost), menu)
        }
        GhostPosition::Hidden => {
            let menu = Rect {
                x: area.x + area.width.saturating_sub(layout.menu_width) / 2,
                y: area.y + area.height.saturating_sub(menu_h) / 2,
                width: layout.menu_width.min(area.width),
                height: menu_h,
            };
            (None, menu)
        }
    }
}

impl MainMenu {
    fn render_ghost(&self, frame: &mut ratatui::Frame, area: Rect) {
        if self.settings.ghost_display == "none" {
            return;
        }
        let lines: Vec<Line> = GHOST_ART
            .iter()
            .map(|row| Line::from(Span::styled(*row, self.theme.bright_style())))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_menu(&self, frame: &mut ratatui::Frame, area: Rect, _layout: MenuLayout) {
        let inner = draw_box(frame, area, "", &self.theme);
        let inner_width = inner.width.saturating_sub(1) as usize;
        let items = self.items();

        let mut lines: Vec<Line> = Vec::new();

        // Title row: app name left, AI-tool cycler right-aligned with a
        // trailing space before the border.
        let tool_label = format!("◂ {} ▸", display_name(self.current_tool()));
        lines.push(spread_line(
            vec![Span::styled(
                " Ghost Tab",
                self.theme.primary_style().add_modifier(Modifier::BOLD),
            )],
            vec![
                Span::styled(tool_label, self.theme.text_style()),
                Span::raw(" "),
            ],
            inner_width,
            5,
        ));
        if !self.update_version.is_empty() {
            lines.push(Line::from(Span::styled(
                format!(" update available: v{}", self.update_version),
                neutral_dim_style(),
            )));
        } else {
            lines.push(Line::default());
        }

        let mut past_projects = false;
        for (idx, item) in items.iter().enumerate() {
            let selected = idx == self.cursor;
            if matches!(item, MenuItem::Action(_)) && !past_projects {
                past_projects = true;
                if !self.projects.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!(" {}", "─".repeat(inner_width.saturating_sub(2))),
                        self.theme.dim_style(),
                    )));
                }
            }
            let (main, detail) = self.item_lines(*item, selected, inner_width);
            lines.push(main);
            lines.push(detail);
        }

        lines.push(Line::from(Span::styled(
            format!(" {}", self.help_text()),
            neutral_dim_style(),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn item_lines(
        &self,
        item: MenuItem,
        selected: bool,
        inner_width: usize,
    ) -> (Line<'_>, Line<'_>) {
        let (text_style, dim_style) = if selected {
            (self.theme.primary_style(), self.theme.dim_style())
        } else {
            (neutral_text_style(), neutral_dim_style())
        };
        let marker = if selected { "▸" } else { " " };

        match item {
            MenuItem::Project(i) => {
                let project = &self.projects[i];
                let left = vec![
                    Span::raw(" "),
                    Span::styled(marker.to_string(), text_style),
                    Span::raw(" "),
                    Span::styled(format!("{} ", i + 1), dim_style),
                    Span::styled(project.name.clone(), text_style),
                ];
                let right = match project.worktrees.len() {
                    0 => Vec::new(),
                    1 => vec![Span::styled("1 worktree ".to_string(), dim_style)],
                    n => vec![Span::styled(format!("{n} worktrees "), dim_style)],
                };
                let main = spread_line(left, right, inner_width, 2);
                let path = truncate_middle(
                    &shorten_home_path(&project.path),
                    inner_width.saturating_sub(6),
                );
                let detail = Line::from(Span::styled(format!("     {path}"), dim_style));
                (main, detail)
            }
            MenuItem::Worktree { project, index } => {
                let wt = &self.projects[project].worktrees[index];
                let main = Line::from(vec![
                    Span::raw(" "),
                    Span::styled(marker.to_string(), text_style),
                    Span::raw(" "),
                    Span::styled("├─ ".to_string(), dim_style),
                    Span::styled(wt.branch.clone(), text_style),
                ]);
                let path =
                    truncate_middle(&shorten_home_path(&wt.path), inner_width.saturating_sub(9));
                let detail = Line::from(Span::styled(format!("        {path}"), dim_style));
                (main, detail)
            }
            MenuItem::AddWorktree(_) => {
                let main = Line::from(vec![
                    Span::raw(" "),
                    Span::styled(marker.to_string(), text_style),
                    Span::raw(" "),
                    Span::styled("└─ ".to_string(), dim_style),
                    Span::styled("+ Add worktree".to_string(), text_style),
                ]);
                (main, Line::default())
            }
            MenuItem::Action(a) => {
                let (_, shortcut, label, desc) = ACTIONS[a];
                let main = Line::from(vec![
                    Span::raw(" "),
                    Span::styled(marker.to_string(), text_style),
                    Span::raw(" "),
                    Span::styled(format!("{shortcut} "), dim_style),
                    Span::styled(label.to_string(), text_style),
                ]);
                let detail = Line::from(Span::styled(format!("     {desc}"), dim_style));
                (main, detail)
            }
        }
    }

    fn help_text(&self) -> String {
        let mut parts = vec!["↑↓ navigate".to_string()];
        if self.ai_tools.len() > 1 {
            parts.push("←→ AI tool".to_string());
        }
        parts.push("S settings".to_string());
        if self.projects.iter().any(|p| !p.worktrees.is_empty()) {
            parts.push("w worktrees".to_string());
        }
        parts.push("⏎ select".to_string());
        parts.join(" ")
    }
}

#[cfg(test)]
#[path = "../tests/tui/main_menu_tests.rs"]
mod tests;
