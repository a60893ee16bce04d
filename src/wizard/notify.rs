//! Transient toast notifications

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
}

/// Single toast slot.
///
/// A newer message replaces the current one and restarts its display
/// window; the hide timer of an older message is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifier {
    toast: Option<Toast>,
    generation: u64,
}

impl Notifier {
    /// Show `message`, returning the generation its hide timer must carry
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let message = message.into();
        tracing::debug!(%severity, %message, "toast");
        self.generation += 1;
        self.toast = Some(Toast { message, severity });
        self.generation
    }

    /// Hide the toast if `generation` is still the latest one
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.toast.is_none() {
            return false;
        }
        self.toast = None;
        true
    }

    pub fn current(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.toast.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_and_expire() {
        let mut notifier = Notifier::default();
        let generation = notifier.notify("Draft saved successfully!", Severity::Success);
        let toast = notifier.current().unwrap();
        assert_eq!(toast.message, "Draft saved successfully!");
        assert_eq!(toast.severity, Severity::Success);

        assert!(notifier.expire(generation));
        assert!(!notifier.is_visible());
    }

    #[test]
    fn test_older_timer_cannot_hide_newer_message() {
        let mut notifier = Notifier::default();
        let first = notifier.notify("one", Severity::Info);
        let second = notifier.notify("two", Severity::Error);

        assert!(!notifier.expire(first));
        assert_eq!(notifier.current().unwrap().message, "two");
        assert!(notifier.expire(second));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::default(), Severity::Info);
    }
}
