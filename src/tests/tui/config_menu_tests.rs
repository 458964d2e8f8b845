    use super::*;
    use crate::theme::theme_for_tool;
    use crate::tui::{ctrl, key};

    fn menu() -> ConfigMenu {
        ConfigMenu::new("Ghostty", "1.2.3", theme_for_tool("claude"))
    }

    #[test]
    fn six_fixed_actions_in_order() {
        let actions: Vec<&str> = config_menu_items("", "")
            .iter()
            .map(|i| i.action)
            .collect();
        assert_eq!(
            actions,
            [
                "manage-terminals",
                "manage-projects",
                "select-ai-tools",
                "display-settings",
                "reinstall",
                "quit",
            ]
        );
    }

    #[test]
    fn terminal_status_shows_name_or_not_set() {
        let items = config_menu_items("Ghostty", "");
        assert_eq!(items[0].status, "Ghostty");
        let items = config_menu_items("", "");
        assert_eq!(items[0].status, "not set");
    }

    #[test]
    fn version_status_is_prefixed() {
        let items = config_menu_items("", "1.2.3");
        assert_eq!(items[4].status, "v1.2.3");
        let items = config_menu_items("", "");
        assert_eq!(items[4].status, "");
    }

    #[test]
    fn enter_selects_highlighted_action() {
        let mut m = menu();
        let effects = m.update(key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::Quit]);
        assert_eq!(m.outcome().action, "manage-terminals");
    }

    #[test]
    fn navigation_wraps() {
        let mut m = menu();
        m.update(key(KeyCode::Up));
        assert_eq!(m.cursor(), 5);
        m.update(key(KeyCode::Char('j')));
        assert_eq!(m.cursor(), 0);
        m.update(key(KeyCode::Char('k')));
        assert_eq!(m.cursor(), 5);
    }

    #[test]
    fn esc_means_quit() {
        let mut m = menu();
        m.update(key(KeyCode::Down));
        assert_eq!(m.update(key(KeyCode::Esc)), vec![Effect::Quit]);
        assert_eq!(m.outcome().action, "quit");
    }

    #[test]
    fn ctrl_c_means_quit() {
        let mut m = menu();
        assert_eq!(m.update(ctrl('c')), vec![Effect::Quit]);
        assert_eq!(m.outcome().action, "quit");
    }

    #[test]
    fn no_selection_defaults_to_quit() {
        assert_eq!(menu().outcome().action, "quit");
    }
