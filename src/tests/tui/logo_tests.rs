    use super::*;
    use crate::tui::key;
    use crossterm::event::KeyCode;

    #[test]
    fn init_schedules_frame_and_expiry_ticks() {
        let mut logo = Logo::new();
        let effects = logo.init();
        assert_eq!(
            effects,
            vec![
                Effect::Tick {
                    after: FRAME_INTERVAL,
                    msg: Msg::LogoFrame,
                },
                Effect::Tick {
                    after: LIFETIME,
                    msg: Msg::LogoExpired,
                },
            ]
        );
    }

    #[test]
    fn frame_tick_advances_and_rearms() {
        let mut logo = Logo::new();
        let effects = logo.update(Event::Msg(Msg::LogoFrame));
        assert_eq!(logo.frame_index(), 1);
        assert_eq!(
            effects,
            vec![Effect::Tick {
                after: FRAME_INTERVAL,
                msg: Msg::LogoFrame,
            }]
        );
    }

    #[test]
    fn frames_wrap_around() {
        let mut logo = Logo::new();
        logo.update(Event::Msg(Msg::LogoFrame));
        logo.update(Event::Msg(Msg::LogoFrame));
        assert_eq!(logo.frame_index(), 0);
    }

    #[test]
    fn expiry_quits() {
        let mut logo = Logo::new();
        assert_eq!(logo.update(Event::Msg(Msg::LogoExpired)), vec![Effect::Quit]);
    }

    #[test]
    fn any_key_quits() {
        let mut logo = Logo::new();
        assert_eq!(logo.update(key(KeyCode::Char('x'))), vec![Effect::Quit]);
    }

    #[test]
    fn frame_tick_after_quit_does_not_rearm() {
        let mut logo = Logo::new();
        logo.update(Event::Msg(Msg::LogoExpired));
        assert!(logo.update(Event::Msg(Msg::LogoFrame)).is_empty());
    }

    #[test]
    fn resize_is_ignored() {
        let mut logo = Logo::new();
        assert!(logo.update(Event::Resize(80, 24)).is_empty());
    }
