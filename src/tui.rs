use std::fs::{File, OpenOptions};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::git::{GitProbe, SystemGit};

pub mod autocomplete;
pub mod branch_picker;
pub mod config_menu;
pub mod confirm;
pub mod frame;
pub mod logo;
pub mod main_menu;
pub mod project_input;
pub mod project_select;
pub mod settings;
pub mod terminal_selector;
pub mod tool_select;

/// An input delivered to a model. Keys and resizes come from the terminal;
/// `Msg` carries replies from effects the runner executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Msg(Msg),
}

/// Asynchronous replies posted back into the event loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    LogoFrame,
    LogoExpired,
    BranchDeleted { branch: String, err: Option<String> },
}

/// A side effect a model asks the runner to perform. Models stay pure; the
/// runner interprets these after each update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Quit,
    Tick { after: Duration, msg: Msg },
    DeleteBranch { project_path: String, branch: String },
}

/// The contract every interactive model implements.
pub trait Model {
    fn init(&mut self) -> Vec<Effect> {
        Vec::new()
    }
    fn update(&mut self, event: Event) -> Vec<Effect>;
    fn view(&self, frame: &mut ratatui::Frame);
}

/// Restores the terminal on every exit path, including panics. The alternate
/// screen and raw mode are released in reverse acquisition order.
struct TtyGuard {
    tty: File,
}

impl Drop for TtyGuard {
    fn drop(&mut self) {
        execute!(self.tty, LeaveAlternateScreen).ok();
        disable_raw_mode().ok();
    }
}

/// Runs a model to completion on the controlling TTY. Stdin and stdout stay
/// untouched: the TUI draws to /dev/tty on the alternate screen, keeping
/// stdout free for the Outcome record.
pub fn run_model(model: &mut dyn Model) -> Result<()> {
    let tty = OpenOptions::new()
        .read(true)
        .write(true)
        .open("/dev/tty")
        .context("open /dev/tty")?;

    enable_raw_mode().context("enable raw mode")?;
    let mut guard = TtyGuard {
        tty: tty.try_clone().context("clone tty handle")?,
    };
    execute!(guard.tty, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(tty);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let (tx, rx) = mpsc::channel::<Msg>();
    let mut pending = model.init();

    if let Ok(size) = terminal.size() {
        pending.extend(model.update(Event::Resize(size.width, size.height)));
    }

    let mut done = false;
    loop {
        for effect in std::mem::take(&mut pending) {
            dispatch(effect, &tx, &mut done);
        }
        if done {
            break;
        }

        terminal.draw(|f| model.view(f)).context("draw")?;

        if event::poll(Duration::from_millis(50)).context("poll events")? {
            match event::read().context("read event")? {
                CtEvent::Key(k) if k.kind == KeyEventKind::Press => {
                    pending.extend(model.update(Event::Key(k)));
                }
                CtEvent::Resize(w, h) => {
                    pending.extend(model.update(Event::Resize(w, h)));
                }
                _ => {}
            }
        }

        // Replies that arrive after Quit die with the channel.
        while let Ok(msg) = rx.try_recv() {
            pending.extend(model.update(Event::Msg(msg)));
        }
    }

    terminal.show_cursor().ok();
    Ok(())
}

fn dispatch(effect: Effect, tx: &mpsc::Sender<Msg>, done: &mut bool) {
    match effect {
        Effect::Quit => *done = true,
        Effect::Tick { after, msg } => {
            let tx = tx.clone();
            thread::spawn(move || {
                thread::sleep(after);
                tx.send(msg).ok();
            });
        }
        Effect::DeleteBranch {
            project_path,
            branch,
        } => {
            let tx = tx.clone();
            thread::spawn(move || {
                let err = SystemGit.delete_branch(&project_path, &branch).err();
                tx.send(Msg::BranchDeleted { branch, err }).ok();
            });
        }
    }
}

/// Key event without modifiers, for handlers and tests.
pub fn key(code: crossterm::event::KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, crossterm::event::KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(
        crossterm::event::KeyCode::Char(c),
        crossterm::event::KeyModifiers::CONTROL,
    ))
}

/// True for Esc or Ctrl+C, the universal cancel chord.
pub fn is_cancel(key: &KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};
    matches!(key.code, KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// True when a character key carries no modifiers beyond Shift, so it can be
/// treated as typed text or a letter shortcut. Ctrl and Alt chords are
/// reserved for chord handling and must not reach character handlers.
pub fn is_plain(key: &KeyEvent) -> bool {
    key.modifiers
        .difference(crossterm::event::KeyModifiers::SHIFT)
        .is_empty()
}
