//! TUI runner - manages TUI lifecycle and rendering

use crate::errors::Result;
use crate::tui::events::{elements, map_key, map_paste, Command, Cursor, Element};
use crate::tui::state::{ScreenKey, TuiState};
use crate::wizard::{Wizard, WizardEvent, WizardRuntime};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableBracketedPaste, EnableBracketedPaste},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

/// Options for TUI initialization
#[derive(Clone, Default)]
pub struct TuiOptions {
    pub on_quit: Option<Arc<dyn Fn() + Send + Sync>>,
}

/// Main TUI runner
pub struct TuiRunner {
    runtime: WizardRuntime,
    state: TuiState,
    options: TuiOptions,
    scroll_offset: usize,
}

impl TuiRunner {
    pub fn new(runtime: WizardRuntime, options: TuiOptions) -> Self {
        Self {
            runtime,
            state: TuiState::new(),
            options,
            scroll_offset: 0,
        }
    }

    /// Run the TUI (blocking call)
    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_tui_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        if let Some(ref on_quit) = self.options.on_quit {
            on_quit();
        }

        result
    }

    async fn run_tui_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        use ratatui::layout::{Constraint, Direction, Layout};

        loop {
            let wizard = self.runtime.snapshot().await;
            self.state = self.state.clone().with_screen(ScreenKey::of(&wizard));
            let elements = elements(&wizard);
            let selected = self.state.selection(elements.len());

            terminal.draw(|f| {
                // Header (5 lines), Main (flex), Footer (4 lines)
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(5),
                        Constraint::Min(0),
                        Constraint::Length(4),
                    ])
                    .split(f.area());

                crate::tui::widgets::render_header(f, chunks[0], &wizard);
                if self.state.show_logs {
                    crate::tui::widgets::render_logs_pane(f, chunks[1], &self.state, self.scroll_offset);
                } else {
                    crate::tui::widgets::render_body(f, chunks[1], &wizard, &elements, selected);
                    crate::tui::widgets::render_modal(f, chunks[1], &wizard, &elements, selected);
                }
                crate::tui::widgets::render_footer(f, chunks[2], &wizard, &self.state);
            })?;

            // Handle events (with timeout)
            if !crossterm::event::poll(Duration::from_millis(100))? {
                continue;
            }
            let element = selected.and_then(|i| elements.get(i));
            let command = match crossterm::event::read()? {
                crossterm::event::Event::Key(key)
                    if key.kind == crossterm::event::KeyEventKind::Press =>
                {
                    if self.state.show_logs {
                        self.scroll_logs(key.code)
                    } else {
                        map_key(key, element, &wizard)
                    }
                }
                crossterm::event::Event::Paste(text) => map_paste(&text, element),
                _ => Command::Nothing,
            };

            if self.apply(command, &wizard, &elements).await? {
                return Ok(());
            }
        }
    }

    /// Carry out a command; returns true when the user asked to quit
    async fn apply(&mut self, command: Command, wizard: &Wizard, elements: &[Element]) -> Result<bool> {
        match command {
            Command::Quit => return Ok(true),
            Command::ToggleLogs => {
                self.state = self.state.clone().with_show_logs(!self.state.show_logs);
            }
            Command::Act { events, cursor } => {
                for event in events {
                    self.log_event(&event, wizard);
                    self.runtime.send(event).await?;
                }
                match cursor {
                    Cursor::Next => self.state.select_next(elements.len()),
                    Cursor::Previous => self.state.select_previous(elements.len()),
                    Cursor::Stay => {}
                }
            }
            Command::Nothing => {}
        }
        Ok(false)
    }

    fn log_event(&mut self, event: &WizardEvent, wizard: &Wizard) {
        let line = match event {
            // Keystrokes would flood the log
            WizardEvent::SetField { .. } | WizardEvent::OtpTyped { .. } | WizardEvent::OtpBackspace { .. } => {
                return
            }
            WizardEvent::FieldBlurred(_) | WizardEvent::OtpFocused(_) => return,
            other => format!("{:?} on {}", other, wizard.current_page()),
        };
        self.state = self.state.clone().with_log(line);
    }

    /// Keys while the log pane is shown
    fn scroll_logs(&mut self, code: crossterm::event::KeyCode) -> Command {
        match code {
            crossterm::event::KeyCode::Char('q') => return Command::Quit,
            crossterm::event::KeyCode::Char('l') => return Command::ToggleLogs,
            crossterm::event::KeyCode::PageUp | crossterm::event::KeyCode::Up => {
                self.scroll_offset += 1
            }
            crossterm::event::KeyCode::PageDown | crossterm::event::KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1)
            }
            crossterm::event::KeyCode::Char('g') => self.scroll_offset = self.state.logs.len(),
            crossterm::event::KeyCode::Char('G') => self.scroll_offset = 0,
            _ => {}
        }
        Command::Nothing
    }
}
