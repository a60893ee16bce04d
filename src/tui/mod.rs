//! Terminal User Interface (TUI) module
//!
//! Drives the onboarding wizard from the keyboard.

pub mod events;
pub mod runner;
pub mod state;
pub mod widgets;


// Re-export commonly used types
pub use events::{elements, map_key, map_paste, Command, Cursor, Element};
pub use runner::{TuiOptions, TuiRunner};
pub use state::{ScreenKey, TuiState};
