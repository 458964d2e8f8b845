    use super::*;
    use crate::theme::theme_for_tool;
    use crate::tui::{ctrl, key};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn picker(branches: &[&str]) -> BranchPicker {
        let mut p = BranchPicker::new(strings(branches), "/repo", theme_for_tool("claude"));
        p.update(Event::Resize(80, 24));
        p
    }

    fn type_str(p: &mut BranchPicker, s: &str) {
        for c in s.chars() {
            p.update(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn filter_narrows_case_insensitively() {
        let mut p = picker(&["fix/cleanup", "feature/auth", "main"]);
        p.update(key(KeyCode::Char('/')));
        assert!(p.filtering());
        type_str(&mut p, "fix");
        assert_eq!(p.filtered(), strings(&["fix/cleanup"]));
        assert_eq!(p.cursor(), 0);
    }

    #[test]
    fn filter_matches_substring_anywhere() {
        let mut p = picker(&["fix/cleanup", "feature/auth"]);
        p.update(key(KeyCode::Char('/')));
        type_str(&mut p, "AUTH");
        assert_eq!(p.filtered(), strings(&["feature/auth"]));
    }

    #[test]
    fn backspace_widens_filter() {
        let mut p = picker(&["fix/cleanup", "feature/auth"]);
        p.update(key(KeyCode::Char('/')));
        type_str(&mut p, "fix");
        p.update(key(KeyCode::Backspace));
        p.update(key(KeyCode::Backspace));
        p.update(key(KeyCode::Backspace));
        assert_eq!(p.filtered().len(), 2);
    }

    #[test]
    fn esc_clears_filter_and_leaves_filter_mode() {
        let mut p = picker(&["fix/cleanup", "feature/auth"]);
        p.update(key(KeyCode::Char('/')));
        type_str(&mut p, "fix");
        p.update(key(KeyCode::Esc));
        assert!(!p.filtering());
        assert_eq!(p.filtered().len(), 2);
        // A second Esc cancels the picker.
        assert_eq!(p.update(key(KeyCode::Esc)), vec![Effect::Quit]);
        assert!(!p.outcome().selected);
    }

    #[test]
    fn enter_in_filter_mode_selects() {
        let mut p = picker(&["fix/cleanup", "feature/auth"]);
        p.update(key(KeyCode::Char('/')));
        type_str(&mut p, "feat");
        let effects = p.update(key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::Quit]);
        assert_eq!(p.outcome().branch.as_deref(), Some("feature/auth"));
    }

    #[test]
    fn cursor_does_not_wrap() {
        let mut p = picker(&["a", "b"]);
        p.update(key(KeyCode::Up));
        assert_eq!(p.cursor(), 0);
        p.update(key(KeyCode::Down));
        p.update(key(KeyCode::Down));
        p.update(key(KeyCode::Down));
        assert_eq!(p.cursor(), 1);
    }

    #[test]
    fn enter_selects_current_branch() {
        let mut p = picker(&["fix/cleanup", "feature/auth"]);
        p.update(key(KeyCode::Char('j')));
        let effects = p.update(key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::Quit]);
        let outcome = p.outcome();
        assert!(outcome.selected);
        assert_eq!(outcome.branch.as_deref(), Some("feature/auth"));
    }

    #[test]
    fn delete_mode_requests_async_deletion() {
        let mut p = picker(&["feature/auth", "fix/cleanup"]);
        p.update(key(KeyCode::Char('d')));
        assert!(p.delete_mode());
        let effects = p.update(key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![Effect::DeleteBranch {
                project_path: "/repo".to_string(),
                branch: "feature/auth".to_string(),
            }]
        );
    }

    #[test]
    fn successful_delete_removes_branch_and_exits_delete_mode() {
        let mut p = picker(&["feature/auth", "fix/cleanup"]);
        p.update(key(KeyCode::Char('d')));
        p.update(key(KeyCode::Enter));
        p.update(Event::Msg(Msg::BranchDeleted {
            branch: "feature/auth".to_string(),
            err: None,
        }));
        assert!(!p.delete_mode());
        assert_eq!(p.branches(), strings(&["fix/cleanup"]));
        let feedback = p.feedback().expect("feedback");
        assert_eq!(feedback.text, "Deleted feature/auth");
        assert!(!feedback.is_error);
    }

    #[test]
    fn failed_delete_reports_error_and_stays() {
        let mut p = picker(&["feature/auth", "fix/cleanup"]);
        p.update(key(KeyCode::Char('d')));
        p.update(key(KeyCode::Enter));
        p.update(Event::Msg(Msg::BranchDeleted {
            branch: "feature/auth".to_string(),
            err: Some("branch is checked out".to_string()),
        }));
        assert!(p.delete_mode());
        assert_eq!(p.branches().len(), 2);
        let feedback = p.feedback().expect("feedback");
        assert!(feedback.is_error);
        assert_eq!(
            feedback.text,
            "Failed to delete feature/auth: branch is checked out"
        );
    }

    #[test]
    fn delete_mode_navigation_wraps() {
        let mut p = picker(&["a", "b", "c"]);
        p.update(key(KeyCode::Char('d')));
        p.update(key(KeyCode::Char('k')));
        let effects = p.update(key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![Effect::DeleteBranch {
                project_path: "/repo".to_string(),
                branch: "c".to_string(),
            }]
        );
    }

    #[test]
    fn q_leaves_delete_mode() {
        let mut p = picker(&["a", "b"]);
        p.update(key(KeyCode::Char('d')));
        p.update(key(KeyCode::Char('q')));
        assert!(!p.delete_mode());
    }

    #[test]
    fn ctrl_c_in_delete_mode_quits() {
        let mut p = picker(&["a"]);
        p.update(key(KeyCode::Char('d')));
        assert_eq!(p.update(ctrl('c')), vec![Effect::Quit]);
        assert!(!p.outcome().selected);
    }

    #[test]
    fn ctrl_c_in_filter_mode_cancels() {
        let mut p = picker(&["fix/cleanup", "feature/auth"]);
        p.update(key(KeyCode::Char('/')));
        type_str(&mut p, "fi");
        assert_eq!(p.update(ctrl('c')), vec![Effect::Quit]);
        // The chord must not land in the filter text as a literal c.
        assert_eq!(p.filtered(), strings(&["fix/cleanup"]));
        assert!(!p.outcome().selected);
    }

    #[test]
    fn ctrl_chord_does_not_type_into_filter() {
        let mut p = picker(&["fix/cleanup", "feature/auth"]);
        p.update(key(KeyCode::Char('/')));
        type_str(&mut p, "fi");
        assert_eq!(p.update(ctrl('x')), Vec::new());
        assert_eq!(p.filtered(), strings(&["fix/cleanup"]));
    }
