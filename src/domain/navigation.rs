//! Step controller
//!
//! Owns the current onboarding step and the derived visual state: which
//! step content is shown, the progress indicators, and the connectors
//! between them.

use serde::Serialize;

use crate::errors::{HostboardError, Result};

use super::states::TOTAL_STEPS;

/// Visual state of one progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepIndicator {
    Pending,
    Active,
    Completed,
}

/// Current step plus everything rendered from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepController {
    current: usize,
    total: usize,
    /// Step content visibility, index 0 is step 1
    contents: Vec<bool>,
    indicators: Vec<StepIndicator>,
    /// Connector `i` joins step `i + 1` and step `i + 2`
    connectors: Vec<bool>,
}

impl Default for StepController {
    fn default() -> Self {
        Self::new(TOTAL_STEPS)
    }
}

impl StepController {
    /// Create a controller positioned on step 1.
    ///
    /// `total` is clamped to at least one step.
    pub fn new(total: usize) -> Self {
        let total = total.max(1);
        let mut controller = Self {
            current: 1,
            total,
            contents: vec![false; total],
            indicators: vec![StepIndicator::Pending; total],
            connectors: vec![false; total - 1],
        };
        controller.render();
        controller
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn contents(&self) -> &[bool] {
        &self.contents
    }

    pub fn indicators(&self) -> &[StepIndicator] {
        &self.indicators
    }

    pub fn connectors(&self) -> &[bool] {
        &self.connectors
    }

    /// Whether the content region of the 1-based `step` is shown
    pub fn is_content_active(&self, step: usize) -> bool {
        step.checked_sub(1)
            .and_then(|index| self.contents.get(index))
            .copied()
            .unwrap_or(false)
    }

    /// Move to step `n`.
    ///
    /// Steps outside `[1, total]` leave every field untouched and return
    /// `StepOutOfRange`.
    pub fn go_to_step(&mut self, n: usize) -> Result<()> {
        if n < 1 || n > self.total {
            return Err(HostboardError::StepOutOfRange {
                step: n,
                total: self.total,
            });
        }
        self.current = n;
        self.render();
        Ok(())
    }

    /// Advance one step; no-op on the last step.
    pub fn next_step(&mut self) -> bool {
        if self.current >= self.total {
            return false;
        }
        let next = self.current + 1;
        self.go_to_step(next).is_ok()
    }

    /// Go back one step; no-op on the first step.
    pub fn previous_step(&mut self) -> bool {
        if self.current <= 1 {
            return false;
        }
        let previous = self.current - 1;
        self.go_to_step(previous).is_ok()
    }

    fn render(&mut self) {
        let n = self.current;
        for (index, active) in self.contents.iter_mut().enumerate() {
            *active = index + 1 == n;
        }
        for (index, indicator) in self.indicators.iter_mut().enumerate() {
            let step = index + 1;
            *indicator = if step < n {
                StepIndicator::Completed
            } else if step == n {
                StepIndicator::Active
            } else {
                StepIndicator::Pending
            };
        }
        for (index, completed) in self.connectors.iter_mut().enumerate() {
            *completed = index + 1 < n;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_on_first_step() {
        let steps = StepController::default();
        assert_eq!(steps.current(), 1);
        assert_eq!(steps.total(), 6);
        assert!(steps.is_content_active(1));
        assert_eq!(steps.indicators()[0], StepIndicator::Active);
        assert!(steps.connectors().iter().all(|c| !c));
        assert_eq!(steps.connectors().len(), 5);
    }

    #[test]
    fn test_go_to_step_three() {
        let mut steps = StepController::default();
        steps.go_to_step(3).unwrap();

        assert_eq!(steps.current(), 3);
        assert_eq!(
            steps.indicators(),
            &[
                StepIndicator::Completed,
                StepIndicator::Completed,
                StepIndicator::Active,
                StepIndicator::Pending,
                StepIndicator::Pending,
                StepIndicator::Pending,
            ]
        );
        assert_eq!(steps.connectors(), &[true, true, false, false, false]);
        assert_eq!(steps.contents(), &[false, false, true, false, false, false]);
    }

    #[test]
    fn test_go_to_last_step_completes_all_connectors() {
        let mut steps = StepController::default();
        steps.go_to_step(6).unwrap();
        assert!(steps.connectors().iter().all(|c| *c));
        assert_eq!(steps.indicators()[5], StepIndicator::Active);
    }

    #[test]
    fn test_going_back_clears_completion() {
        let mut steps = StepController::default();
        steps.go_to_step(5).unwrap();
        steps.go_to_step(2).unwrap();
        assert_eq!(steps.indicators()[2], StepIndicator::Pending);
        assert_eq!(steps.connectors(), &[true, false, false, false, false]);
    }

    #[test]
    fn test_out_of_range_is_rejected_without_change() {
        let mut steps = StepController::default();
        steps.go_to_step(4).unwrap();
        let before = steps.clone();

        let err = steps.go_to_step(0).unwrap_err();
        assert_eq!(err.code(), "STEP_OUT_OF_RANGE");
        assert!(steps.go_to_step(7).is_err());
        assert_eq!(steps, before);
    }

    #[test]
    fn test_next_and_previous_stop_at_bounds() {
        let mut steps = StepController::default();
        assert!(!steps.previous_step());
        assert!(steps.next_step());
        assert_eq!(steps.current(), 2);
        steps.go_to_step(6).unwrap();
        assert!(!steps.next_step());
        assert!(steps.previous_step());
        assert_eq!(steps.current(), 5);
    }
}
