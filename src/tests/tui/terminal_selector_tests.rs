    use super::*;
    use crate::terminal::supported_terminals;
    use crate::theme::theme_for_tool;
    use crate::tui::key;

    fn terminals(installed: &[&str]) -> Vec<Terminal> {
        let mut all = supported_terminals();
        for t in &mut all {
            t.installed = installed.contains(&t.id);
        }
        all
    }

    fn selector(installed: &[&str], current: &str) -> TerminalSelector {
        TerminalSelector::new(terminals(installed), current, theme_for_tool("claude"))
    }

    #[test]
    fn enter_selects_installed_terminal() {
        let mut s = selector(&["ghostty"], "");
        let effects = s.update(key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::Quit]);
        let outcome = s.outcome();
        assert!(outcome.selected);
        assert_eq!(outcome.terminal.as_deref(), Some("ghostty"));
        assert_eq!(outcome.action, None);
    }

    #[test]
    fn enter_on_uninstalled_requests_install() {
        let mut s = selector(&["ghostty"], "ghostty");
        // kitty is the last row.
        s.update(key(KeyCode::Up));
        let effects = s.update(key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::Quit]);
        let outcome = s.outcome();
        assert!(!outcome.selected);
        assert_eq!(outcome.action.as_deref(), Some("install"));
        assert_eq!(outcome.terminal.as_deref(), Some("kitty"));
        assert_eq!(outcome.cask.as_deref(), Some("kitty"));
    }

    #[test]
    fn i_requests_install_on_uninstalled_only() {
        let mut s = selector(&["ghostty"], "");
        assert!(s.update(key(KeyCode::Char('i'))).is_empty());
        s.update(key(KeyCode::Down));
        let effects = s.update(key(KeyCode::Char('i')));
        assert_eq!(effects, vec![Effect::Quit]);
        let outcome = s.outcome();
        assert_eq!(outcome.action.as_deref(), Some("install"));
        assert_eq!(outcome.terminal.as_deref(), Some("iterm2"));
    }

    #[test]
    fn navigation_wraps() {
        let mut s = selector(&[], "");
        s.update(key(KeyCode::Up));
        assert_eq!(s.cursor(), 3);
        s.update(key(KeyCode::Char('j')));
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn esc_cancels() {
        let mut s = selector(&["ghostty"], "");
        assert_eq!(s.update(key(KeyCode::Esc)), vec![Effect::Quit]);
        let outcome = s.outcome();
        assert!(!outcome.selected);
        assert_eq!(outcome.terminal, None);
        assert_eq!(outcome.action, None);
    }

    #[test]
    fn no_decision_is_cancelled_shape() {
        let s = selector(&[], "");
        assert!(!s.outcome().selected);
    }
