use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::{Effect, Event, Model, Msg};

const FRAME_INTERVAL: Duration = Duration::from_millis(200);
const LIFETIME: Duration = Duration::from_secs(2);

const FRAMES: [&str; 2] = [
    r"   ____  _               _     _____     _
  / ___|| |__   ___  ___| |_  |_   _|_ _| |__
 | |  _ | '_ \ / _ \/ __| __|   | |/ _  | '_ \
 | |_| || | | | (_) \__ \ |_    | | (_| | |_) |
  \____||_| |_|\___/|___/\__|   |_|\__,_|_.__/",
    r"
   ____  _               _     _____     _
  / ___|| |__   ___  ___| |_  |_   _|_ _| |__
 | |  _ | '_ \ / _ \/ __| __|   | |/ _  | '_ \
 | |_| || | | | (_) \__ \ |_    | | (_| | |_) |
  \____||_| |_|\___/|___/\__|   |_|\__,_|_.__/",
];

/// Splash screen: alternates two art frames every 200 ms and quits on any
/// key or after two seconds.
pub struct Logo {
    frame: usize,
    quitting: bool,
}

impl Logo {
    pub fn new() -> Self {
        Self {
            frame: 0,
            quitting: false,
        }
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }
}

impl Default for Logo {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for Logo {
    fn init(&mut self) -> Vec<Effect> {
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
    }

    fn update(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Msg(Msg::LogoFrame) => {
                self.frame = (self.frame + 1) % FRAMES.len();
                if self.quitting {
                    Vec::new()
                } else {
                    vec![Effect::Tick {
                        after: FRAME_INTERVAL,
                        msg: Msg::LogoFrame,
                    }]
                }
            }
            Event::Msg(Msg::LogoExpired) | Event::Key(_) => {
                self.quitting = true;
                vec![Effect::Quit]
            }
            _ => Vec::new(),
        }
    }

    fn view(&self, frame: &mut ratatui::Frame) {
        if self.quitting {
            return;
        }
        let art = FRAMES[self.frame].trim_matches('\n');
        let lines: Vec<Line> = art.lines().map(Line::from).collect();
        let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        let height = lines.len() as u16;

        let area = frame.area();
        let target = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width: width.min(area.width),
            height: height.min(area.height),
        };
        let style = Style::default()
            .fg(Color::Indexed(170))
            .add_modifier(Modifier::BOLD);
        frame.render_widget(Paragraph::new(lines).style(style), target);
    }
}

#[cfg(test)]
#[path = "../tests/tui/logo_tests.rs"]
mod tests;
