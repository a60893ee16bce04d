//! OTP entry cells and the resend countdown

use serde::Serialize;

/// Fixed row of single-character cells with one focused cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpInput {
    cells: Vec<Option<char>>,
    focus: usize,
}

impl OtpInput {
    pub fn new(length: usize) -> Self {
        Self {
            cells: vec![None; length.max(1)],
            focus: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    pub fn set_focus(&mut self, index: usize) {
        if index < self.cells.len() {
            self.focus = index;
        }
    }

    /// Fill `index` with `ch` and move focus to the next cell, if any
    pub fn type_char(&mut self, index: usize, ch: char) {
        let Some(cell) = self.cells.get_mut(index) else {
            return;
        };
        *cell = Some(ch);
        let last = self.cells.len() - 1;
        self.focus = if index < last { index + 1 } else { index };
    }

    /// Backspace in `index`.
    ///
    /// An empty cell moves focus one cell back; a filled cell is cleared.
    pub fn backspace(&mut self, index: usize) {
        let Some(cell) = self.cells.get_mut(index) else {
            return;
        };
        if cell.is_none() && index > 0 {
            self.focus = index - 1;
        } else {
            *cell = None;
            self.focus = index;
        }
    }

    /// Spread pasted text over the cells from the first one.
    ///
    /// Only ASCII digits are kept; extras are dropped. Focus jumps to the
    /// last cell only when the paste filled every cell.
    pub fn paste(&mut self, text: &str) {
        let chars: Vec<char> = text
            .chars()
            .filter(char::is_ascii_digit)
            .take(self.cells.len())
            .collect();
        for (cell, ch) in self.cells.iter_mut().zip(&chars) {
            *cell = Some(*ch);
        }
        if chars.len() == self.cells.len() {
            self.focus = self.cells.len() - 1;
        }
    }

    /// Characters of the filled cells, in order
    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
        self.focus = 0;
    }
}

/// Outcome of one countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick from a countdown that has since restarted or stopped
    Stale,
    Running(u32),
    Finished,
}

/// Seconds until the OTP may be resent.
///
/// Every `start` opens a new generation; ticks carry the generation they
/// were scheduled for so a restarted countdown never double-decrements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OtpCountdown {
    remaining: u32,
    generation: u64,
    running: bool,
}

impl OtpCountdown {
    pub fn start(&mut self, seconds: u32) -> u64 {
        self.generation += 1;
        self.remaining = seconds;
        self.running = seconds > 0;
        self.generation
    }

    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if !self.running || generation != self.generation {
            return TickOutcome::Stale;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            TickOutcome::Finished
        } else {
            TickOutcome::Running(self.remaining)
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn resend_enabled(&self) -> bool {
        !self.running
    }

    /// Countdown text next to the resend link, empty when stopped
    pub fn display(&self) -> String {
        if self.running {
            format!("({}s)", self.remaining)
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_advances_focus() {
        let mut otp = OtpInput::new(6);
        otp.type_char(0, '1');
        assert_eq!(otp.focus(), 1);
        otp.type_char(5, '6');
        assert_eq!(otp.focus(), 5);
        assert_eq!(otp.code(), "16");
    }

    #[test]
    fn test_backspace_on_empty_cell_moves_back() {
        let mut otp = OtpInput::new(6);
        otp.type_char(0, '1');
        otp.backspace(1);
        assert_eq!(otp.focus(), 0);
        assert_eq!(otp.cell(0), Some('1'));

        otp.backspace(0);
        assert_eq!(otp.cell(0), None);
        assert_eq!(otp.focus(), 0);
    }

    #[test]
    fn test_paste_full_code() {
        let mut otp = OtpInput::new(6);
        otp.paste("123456789");
        assert_eq!(otp.code(), "123456");
        assert_eq!(otp.focus(), 5);
    }

    #[test]
    fn test_paste_skips_non_digits() {
        let mut otp = OtpInput::new(6);
        otp.paste("12-34 56");
        assert_eq!(otp.code(), "123456");

        let mut letters = OtpInput::new(6);
        letters.paste("abcdef");
        assert_eq!(letters.code(), "");
        assert_eq!(letters.focus(), 0);
    }

    #[test]
    fn test_partial_paste_keeps_focus() {
        let mut otp = OtpInput::new(6);
        otp.paste("123");
        assert_eq!(otp.code(), "123");
        assert_eq!(otp.focus(), 0);
    }

    #[test]
    fn test_gap_makes_code_short() {
        let mut otp = OtpInput::new(6);
        for (i, ch) in "123456".chars().enumerate() {
            otp.type_char(i, ch);
        }
        otp.backspace(2);
        assert_eq!(otp.code(), "12456");
        otp.clear();
        assert!(otp.is_empty());
    }

    #[test]
    fn test_countdown_runs_to_zero() {
        let mut countdown = OtpCountdown::default();
        let generation = countdown.start(2);
        assert_eq!(countdown.display(), "(2s)");
        assert!(!countdown.resend_enabled());

        assert_eq!(countdown.tick(generation), TickOutcome::Running(1));
        assert_eq!(countdown.tick(generation), TickOutcome::Finished);
        assert!(countdown.resend_enabled());
        assert_eq!(countdown.display(), "");
        assert_eq!(countdown.tick(generation), TickOutcome::Stale);
    }

    #[test]
    fn test_restart_ignores_old_generation() {
        let mut countdown = OtpCountdown::default();
        let first = countdown.start(30);
        countdown.tick(first);
        let second = countdown.start(30);

        assert_eq!(countdown.tick(first), TickOutcome::Stale);
        assert_eq!(countdown.remaining(), 30);
        assert_eq!(countdown.tick(second), TickOutcome::Running(29));
    }

    // ===== PROPERTIES =====

    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Key {
        Type(usize, char),
        Backspace(usize),
    }

    fn any_key() -> impl Strategy<Value = Key> {
        prop_oneof![
            (0usize..8, prop::char::range('0', '9')).prop_map(|(i, c)| Key::Type(i, c)),
            (0usize..8).prop_map(Key::Backspace),
        ]
    }

    proptest! {
        /// Property: a full-length paste fills every cell in order and focuses the last
        #[test]
        fn test_full_paste_distributes(code in "[0-9]{6}") {
            let mut otp = OtpInput::new(6);
            otp.paste(&code);
            prop_assert_eq!(otp.code(), code);
            prop_assert_eq!(otp.focus(), 5);
        }

        /// Property: focus never leaves the row, whatever is typed or erased
        #[test]
        fn test_focus_stays_in_row(keys in prop::collection::vec(any_key(), 0..40)) {
            let mut otp = OtpInput::new(6);
            for key in keys {
                match key {
                    Key::Type(index, ch) => otp.type_char(index, ch),
                    Key::Backspace(index) => otp.backspace(index),
                }
                prop_assert!(otp.focus() < otp.len());
                prop_assert!(otp.code().len() <= otp.len());
            }
        }
    }
}
