//! TUI state management
//!
//! The wizard owns everything the user sees; this is only the terminal's
//! own state: which element has the cursor and the activity log.

use chrono::{DateTime, Utc};

use crate::domain::{Form, Page};
use crate::wizard::{ModalId, Wizard};

/// What is on screen, used to reset the cursor when it changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenKey {
    pub page: Page,
    pub form: Form,
    pub step: usize,
    pub modals: Vec<ModalId>,
    pub room_form_open: bool,
}

impl ScreenKey {
    pub fn of(wizard: &Wizard) -> Self {
        Self {
            page: wizard.current_page(),
            form: wizard.current_form(),
            step: wizard.current_step(),
            modals: wizard.modals().open_modals(),
            room_form_open: wizard.room_form().is_open(),
        }
    }
}

/// Main TUI state
#[derive(Debug, Clone)]
pub struct TuiState {
    /// Index of the selected element on the current screen
    pub selected: usize,
    pub screen: Option<ScreenKey>,
    pub start_time: DateTime<Utc>,
    pub logs: Vec<String>,
    pub show_logs: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    const MAX_LOGS: usize = 500;

    pub fn new() -> Self {
        Self {
            selected: 0,
            screen: None,
            start_time: Utc::now(),
            logs: Vec::new(),
            show_logs: false,
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new TuiState with the selection moved to `index`
    pub fn with_selected(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    /// Return a new TuiState tracking `screen`, resetting the cursor if it changed
    pub fn with_screen(mut self, screen: ScreenKey) -> Self {
        if self.screen.as_ref() != Some(&screen) {
            self.selected = 0;
            self.screen = Some(screen);
        }
        self
    }

    /// Return a new TuiState with a single log appended
    pub fn with_log(mut self, log: String) -> Self {
        let stamp = Utc::now().format("%H:%M:%S");
        self.logs.push(format!("{} {}", stamp, log));
        if self.logs.len() > Self::MAX_LOGS {
            self.logs.remove(0);
        }
        self
    }

    /// Return a new TuiState with show_logs toggled
    pub fn with_show_logs(mut self, show: bool) -> Self {
        self.show_logs = show;
        self
    }

    // ===== CURSOR =====

    /// Move the cursor forward, wrapping over `count` elements
    pub fn select_next(&mut self, count: usize) {
        if count == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % count;
    }

    /// Move the cursor back, wrapping over `count` elements
    pub fn select_previous(&mut self, count: usize) {
        if count == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + count - 1) % count;
    }

    /// Selection clamped to the elements actually on screen
    pub fn selection(&self, count: usize) -> Option<usize> {
        (count > 0).then(|| self.selected.min(count - 1))
    }
}
