    use super::*;

    fn fixed(suggestions: &'static [&'static str]) -> Autocomplete {
        Autocomplete::new(
            Box::new(move |_: &str| suggestions.iter().map(|s| s.to_string()).collect()),
            8,
        )
    }

    #[test]
    fn refresh_shows_dropdown_when_matches_exist() {
        let mut ac = fixed(&["a", "b"]);
        ac.set_input("x");
        ac.refresh();
        assert!(ac.visible());
        assert_eq!(ac.suggestions().len(), 2);
        assert_eq!(ac.selected(), 0);
    }

    #[test]
    fn refresh_hides_dropdown_when_empty() {
        let mut ac = fixed(&[]);
        ac.set_input("x");
        ac.refresh();
        assert!(!ac.visible());
    }

    #[test]
    fn refresh_resets_selection() {
        let mut ac = fixed(&["a", "b", "c"]);
        ac.refresh();
        ac.move_down();
        ac.move_down();
        assert_eq!(ac.selected(), 2);
        ac.refresh();
        assert_eq!(ac.selected(), 0);
    }

    #[test]
    fn refresh_caps_at_max_results() {
        let mut ac = Autocomplete::new(
            Box::new(|_: &str| (0..20).map(|i| format!("s{i}")).collect::<Vec<_>>()),
            8,
        );
        ac.refresh();
        assert_eq!(ac.suggestions().len(), 8);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut ac = fixed(&["a", "b", "c"]);
        ac.refresh();
        ac.move_up();
        assert_eq!(ac.selected(), 2);
        ac.move_down();
        assert_eq!(ac.selected(), 0);
    }

    #[test]
    fn accept_returns_highlighted_suggestion() {
        let mut ac = fixed(&["alpha", "beta"]);
        ac.refresh();
        ac.move_down();
        assert_eq!(ac.accept_selected(), "beta");
    }

    #[test]
    fn accept_without_suggestions_is_empty() {
        let ac = fixed(&[]);
        assert_eq!(ac.accept_selected(), "");
    }

    #[test]
    fn dismiss_hides_and_clears() {
        let mut ac = fixed(&["a"]);
        ac.refresh();
        ac.dismiss();
        assert!(!ac.visible());
        assert!(ac.suggestions().is_empty());
    }

    fn setup_dirs() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("alpha")).expect("mkdir");
        std::fs::create_dir(dir.path().join("Beta")).expect("mkdir");
        std::fs::create_dir(dir.path().join(".hidden")).expect("mkdir");
        std::fs::write(dir.path().join("gamma.txt"), "x").expect("write");
        dir
    }

    #[test]
    fn path_provider_lists_subdirectories() {
        let dir = setup_dirs();
        let input = format!("{}/", dir.path().display());
        let got = PathProvider.suggest(&input);
        assert_eq!(got, vec![format!("{input}Beta/"), format!("{input}alpha/")]);
    }

    #[test]
    fn path_provider_skips_dotted_and_files() {
        let dir = setup_dirs();
        let input = format!("{}/", dir.path().display());
        let got = PathProvider.suggest(&input);
        assert!(got.iter().all(|s| !s.contains(".hidden")));
        assert!(got.iter().all(|s| !s.contains("gamma")));
    }

    #[test]
    fn path_provider_matches_basename_case_insensitively() {
        let dir = setup_dirs();
        let input = format!("{}/bet", dir.path().display());
        let got = PathProvider.suggest(&input);
        assert_eq!(got, vec![format!("{}/Beta/", dir.path().display())]);
    }

    #[test]
    fn path_provider_unreadable_dir_is_empty() {
        assert!(PathProvider.suggest("/no/such/dir/").is_empty());
    }

    #[test]
    fn path_provider_appends_trailing_slash() {
        let dir = setup_dirs();
        let input = format!("{}/alp", dir.path().display());
        let got = PathProvider.suggest(&input);
        assert!(got.iter().all(|s| s.ends_with('/')));
    }
