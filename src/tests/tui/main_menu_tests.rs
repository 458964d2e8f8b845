    use super::*;
    use crate::git::Worktree;
    use crate::tui::{ctrl, key};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn project(name: &str, path: &str) -> Project {
        Project::new(name, path)
    }

    fn project_with_worktrees(name: &str, path: &str, branches: &[&str]) -> Project {
        let mut p = Project::new(name, path);
        p.worktrees = branches
            .iter()
            .map(|b| Worktree {
                path: format!("{path}-wt/{b}"),
                branch: b.to_string(),
            })
            .collect();
        p
    }

    fn menu(projects: Vec<Project>, tools: &[&str], current: &str) -> MainMenu {
        let mut m = MainMenu::new(projects, strings(tools), current, "animated", "full", "", "");
        m.update(Event::Resize(100, 40));
        m
    }

    #[test]
    fn right_cycles_tool_and_enter_selects_project() {
        let mut m = menu(vec![project("p", "/p")], &["claude", "codex"], "claude");
        m.update(key(KeyCode::Right));
        let effects = m.update(key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::Quit]);
        let outcome = m.outcome().expect("outcome");
        assert_eq!(outcome.action, "select-project");
        assert_eq!(outcome.name.as_deref(), Some("p"));
        assert_eq!(outcome.path.as_deref(), Some("/p"));
        assert_eq!(outcome.ai_tool, "codex");
        assert_eq!(outcome.ghost_display, None);
        assert_eq!(outcome.sound_name, None);
    }

    #[test]
    fn tool_cycle_wraps_and_retints_theme() {
        let mut m = menu(vec![project("p", "/p")], &["claude", "codex"], "claude");
        m.update(key(KeyCode::Left));
        assert_eq!(m.current_tool(), "codex");
        m.update(key(KeyCode::Right));
        assert_eq!(m.current_tool(), "claude");
        assert_eq!(m.theme.name, "claude");
    }

    #[test]
    fn single_tool_does_not_cycle() {
        let mut m = menu(vec![project("p", "/p")], &["claude"], "claude");
        m.update(key(KeyCode::Right));
        assert_eq!(m.current_tool(), "claude");
    }

    #[test]
    fn items_are_projects_then_actions() {
        let m = menu(
            vec![project("a", "/a"), project("b", "/b")],
            &["claude"],
            "claude",
        );
        let items = m.items();
        assert_eq!(items.len(), 2 + 4);
        assert_eq!(items[0], MenuItem::Project(0));
        assert_eq!(items[2], MenuItem::Action(0));
    }

    #[test]
    fn expanding_inserts_worktrees_and_add_row() {
        let mut m = menu(
            vec![project_with_worktrees("p", "/p", &["feature/auth", "fix/cleanup"])],
            &["claude"],
            "claude",
        );
        m.update(key(KeyCode::Char('w')));
        let items = m.items();
        assert_eq!(items[0], MenuItem::Project(0));
        assert_eq!(items[1], MenuItem::Worktree { project: 0, index: 0 });
        assert_eq!(items[2], MenuItem::Worktree { project: 0, index: 1 });
        assert_eq!(items[3], MenuItem::AddWorktree(0));
    }

    #[test]
    fn toggle_on_project_without_worktrees_is_noop() {
        let mut m = menu(vec![project("p", "/p")], &["claude"], "claude");
        m.update(key(KeyCode::Char('w')));
        assert!(m.expanded().is_empty());
    }

    #[test]
    fn toggle_on_child_row_collapses_owner() {
        let mut m = menu(
            vec![project_with_worktrees("p", "/p", &["feature/auth"])],
            &["claude"],
            "claude",
        );
        m.update(key(KeyCode::Char('w')));
        m.update(key(KeyCode::Down));
        m.update(key(KeyCode::Char('w')));
        assert!(m.expanded().is_empty());
        // Cursor is clamped into the shrunken row set.
        assert!(m.cursor() < m.items().len());
    }

    #[test]
    fn enter_on_worktree_selects_it() {
        let mut m = menu(
            vec![project_with_worktrees("p", "/p", &["feature/auth"])],
            &["claude"],
            "claude",
        );
        m.update(key(KeyCode::Char('w')));
        m.update(key(KeyCode::Down));
        m.update(key(KeyCode::Enter));
        let outcome = m.outcome().expect("outcome");
        assert_eq!(outcome.action, "select-worktree");
        assert_eq!(outcome.name.as_deref(), Some("p"));
        assert_eq!(outcome.path.as_deref(), Some("/p-wt/feature/auth"));
        assert_eq!(outcome.branch.as_deref(), Some("feature/auth"));
    }

    #[test]
    fn enter_on_add_worktree_row() {
        let mut m = menu(
            vec![project_with_worktrees("p", "/p", &["feature/auth"])],
            &["claude"],
            "claude",
        );
        m.update(key(KeyCode::Char('w')));
        m.update(key(KeyCode::Down));
        m.update(key(KeyCode::Down));
        m.update(key(KeyCode::Enter));
        let outcome = m.outcome().expect("outcome");
        assert_eq!(outcome.action, "add-worktree");
        assert_eq!(outcome.path.as_deref(), Some("/p"));
        assert_eq!(outcome.branch, None);
    }

    #[test]
    fn action_shortcuts_finish_immediately() {
        for (c, action) in [
            ('a', "add-project"),
            ('d', "delete-project"),
            ('o', "open-once"),
            ('p', "plain-terminal"),
        ] {
            let mut m = menu(vec![project("p", "/p")], &["claude"], "claude");
            let effects = m.update(key(KeyCode::Char(c)));
            assert_eq!(effects, vec![Effect::Quit]);
            assert_eq!(m.outcome().expect("outcome").action, action);
        }
    }

    #[test]
    fn ctrl_chorded_letter_is_not_a_shortcut() {
        for c in ['a', 'd', 'o', 'p', 's', 'w'] {
            let mut m = menu(vec![project("p", "/p")], &["claude"], "claude");
            assert_eq!(m.update(ctrl(c)), Vec::new(), "Ctrl+{c} must be inert");
            assert!(m.outcome().is_none());
        }
    }

    #[test]
    fn digit_jumps_to_project() {
        let mut m = menu(
            vec![project("a", "/a"), project("b", "/b"), project("c", "/c")],
            &["claude"],
            "claude",
        );
        m.update(key(KeyCode::Char('3')));
        assert_eq!(m.cursor(), 2);
        m.update(key(KeyCode::Char('9')));
        assert_eq!(m.cursor(), 2);
    }

    #[test]
    fn navigation_wraps() {
        let mut m = menu(vec![project("p", "/p")], &["claude"], "claude");
        m.update(key(KeyCode::Up));
        assert_eq!(m.cursor(), 4);
        m.update(key(KeyCode::Down));
        assert_eq!(m.cursor(), 0);
        m.update(key(KeyCode::Char('j')));
        assert_eq!(m.cursor(), 1);
        m.update(key(KeyCode::Char('k')));
        assert_eq!(m.cursor(), 0);
    }

    #[test]
    fn esc_quits_with_quit_action() {
        let mut m = menu(vec![project("p", "/p")], &["claude", "codex"], "codex");
        let effects = m.update(key(KeyCode::Esc));
        assert_eq!(effects, vec![Effect::Quit]);
        let outcome = m.outcome().expect("outcome");
        assert_eq!(outcome.action, "quit");
        assert_eq!(outcome.ai_tool, "codex");
    }

    #[test]
    fn settings_mode_round_trip_carries_changes() {
        let mut m = menu(vec![project("p", "/p")], &["claude"], "claude");
        m.update(key(KeyCode::Char('s')));
        assert!(m.settings_mode());
        m.update(key(KeyCode::Right));
        m.update(key(KeyCode::Esc));
        assert!(!m.settings_mode());
        m.update(key(KeyCode::Enter));
        let outcome = m.outcome().expect("outcome");
        assert_eq!(outcome.action, "select-project");
        assert_eq!(outcome.ghost_display.as_deref(), Some("static"));
    }

    #[test]
    fn ctrl_c_inside_settings_quits_entirely() {
        let mut m = menu(vec![project("p", "/p")], &["claude"], "claude");
        m.update(key(KeyCode::Char('S')));
        let effects = m.update(ctrl('c'));
        assert_eq!(effects, vec![Effect::Quit]);
        assert_eq!(m.outcome().expect("outcome").action, "quit");
    }

    #[test]
    fn layout_side_at_82_columns() {
        let mut m = menu(vec![project("p", "/p")], &["claude"], "claude");
        m.update(Event::Resize(82, 10));
        assert_eq!(m.layout().ghost_position, GhostPosition::Side);
    }

    #[test]
    fn layout_above_when_narrow_but_tall() {
        let mut m = menu(vec![project("p", "/p")], &["claude"], "claude");
        // 1 project + 4 actions, one separator: height 7 + 10 + 1 = 18.
        m.update(Event::Resize(81, 35));
        assert_eq!(m.layout().menu_height, 18);
        assert_eq!(m.layout().ghost_position, GhostPosition::Above);
    }

    #[test]
    fn layout_hidden_when_small() {
        let mut m = menu(vec![project("p", "/p")], &["claude"], "claude");
        m.update(Event::Resize(81, 34));
        assert_eq!(m.layout().ghost_position, GhostPosition::Hidden);
    }

    #[test]
    fn layout_no_separator_without_projects() {
        let mut m = menu(Vec::new(), &["claude"], "claude");
        m.update(Event::Resize(81, 40));
        assert_eq!(m.layout().menu_height, 7 + 2 * 4);
    }

    #[test]
    fn help_text_mentions_worktrees_only_when_present() {
        let m = menu(vec![project("p", "/p")], &["claude"], "claude");
        assert!(!m.help_text().contains("worktrees"));
        let m = menu(
            vec![project_with_worktrees("p", "/p", &["x"])],
            &["claude"],
            "claude",
        );
        assert!(m.help_text().contains("w worktrees"));
    }

    #[test]
    fn help_text_mentions_tool_cycling_only_with_choices() {
        let m = menu(vec![project("p", "/p")], &["claude"], "claude");
        assert!(!m.help_text().contains("AI tool"));
        let m = menu(vec![project("p", "/p")], &["claude", "codex"], "claude");
        assert!(m.help_text().contains("←→ AI tool"));
    }
