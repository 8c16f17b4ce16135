use crate::app::{App, AppEvent, AppMode};
use crate::ui::keymap::key_to_event;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Run until the app enters `AppMode::Quit`.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let poll_timeout = app.config().tick;

        loop {
            app.tick(Instant::now());
            self.render_frame(app)?;

            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            if !event::poll(poll_timeout)? {
                continue;
            }

            let app_event = match event::read()? {
                // Windows reports both press and release
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    key_to_event(app.mode(), key)
                }
                Event::Paste(text) if app.mode() == AppMode::Editing => AppEvent::Paste(text),
                Event::Paste(text) if app.mode() == AppMode::Command => {
                    for c in text.chars().filter(|c| !c.is_control()) {
                        app.handle_event(AppEvent::CommandChar(c));
                    }
                    AppEvent::None
                }
                _ => AppEvent::None,
            };

            app.handle_event(app_event);
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.render_state();
        self.terminal
            .draw(|frame| view::draw(frame, &render_state))?;
        Ok(())
    }
}
