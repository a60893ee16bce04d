//! Timer-backed backend
//!
//! Every action sleeps for its configured delay and then succeeds, unless
//! its kind is listed in `fail_actions`.

use std::collections::HashSet;

use async_trait::async_trait;

use super::request::{ActionOutcome, ActionRequest};
use super::Backend;
use crate::errors::{HostboardError, Result};
use crate::schemas::{ActionDelays, ActionKind, Config};

/// Shown in the property modal when the search carried no city
const FALLBACK_LOCATION: &str = "Location";

/// Backend that answers after a fixed delay
#[derive(Debug, Clone, Default)]
pub struct SimulatedBackend {
    delays: ActionDelays,
    failing: HashSet<ActionKind>,
}

impl SimulatedBackend {
    pub fn new(delays: ActionDelays) -> Self {
        Self {
            delays,
            failing: HashSet::new(),
        }
    }

    /// Build from the loaded configuration, including injected failures
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.delays.clone()).with_failures(config.fail_actions.iter().copied())
    }

    /// Make every action of the given kinds fail after its delay
    pub fn with_failures(mut self, kinds: impl IntoIterator<Item = ActionKind>) -> Self {
        self.failing.extend(kinds);
        self
    }

    fn outcome_for(request: &ActionRequest) -> ActionOutcome {
        match request {
            ActionRequest::FindProperty { name, city } => ActionOutcome::PropertyMatch {
                name: name.trim().to_string(),
                location: if city.trim().is_empty() {
                    FALLBACK_LOCATION.to_string()
                } else {
                    city.trim().to_string()
                },
            },
            ActionRequest::UploadDocument { kind } => ActionOutcome::DocumentStored {
                file_name: kind.file_name(),
            },
            _ => ActionOutcome::Completed,
        }
    }
}

#[async_trait]
impl Backend for SimulatedBackend {
    async fn perform(&self, request: &ActionRequest) -> Result<ActionOutcome> {
        let kind = request.kind();
        let delay = self.delays.for_kind(kind);
        tracing::debug!(action = %kind, delay_ms = delay.as_millis() as u64, "simulating backend call");

        tokio::time::sleep(delay).await;

        if self.failing.contains(&kind) {
            tracing::warn!(action = %kind, "simulated failure");
            return Err(HostboardError::ActionFailed {
                action: kind.title().to_string(),
                reason: "the service is unavailable, please try again".to_string(),
            });
        }

        Ok(Self::outcome_for(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::DocumentKind;
    use std::time::Duration;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_configured_delay() {
        let backend = SimulatedBackend::default();
        let started = Instant::now();

        let outcome = backend
            .perform(&ActionRequest::SendOtp { email: "a@b.com".into() })
            .await
            .unwrap();

        assert_eq!(outcome, ActionOutcome::Completed);
        assert_eq!(started.elapsed(), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_find_property_uses_search_values() {
        let backend = SimulatedBackend::default();
        let outcome = backend
            .perform(&ActionRequest::FindProperty {
                name: "Sea View Inn".into(),
                city: "Goa".into(),
            })
            .await
            .unwrap();
        assert_eq!(
            outcome,
            ActionOutcome::PropertyMatch {
                name: "Sea View Inn".into(),
                location: "Goa".into()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_find_property_without_city_falls_back() {
        let backend = SimulatedBackend::default();
        let outcome = backend
            .perform(&ActionRequest::FindProperty {
                name: "Sea View Inn".into(),
                city: " ".into(),
            })
            .await
            .unwrap();
        assert!(matches!(
            outcome,
            ActionOutcome::PropertyMatch { ref location, .. } if location == "Location"
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_returns_file_name() {
        let backend = SimulatedBackend::default();
        let started = Instant::now();
        let outcome = backend
            .perform(&ActionRequest::UploadDocument {
                kind: DocumentKind::Registration,
            })
            .await
            .unwrap();
        assert_eq!(
            outcome,
            ActionOutcome::DocumentStored {
                file_name: "registration_doc.pdf".into()
            }
        );
        assert_eq!(started.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_injected_failure() {
        let backend = SimulatedBackend::default().with_failures([ActionKind::VerifyBank]);
        let err = backend
            .perform(&ActionRequest::VerifyBank {
                ifsc: "HDFC0001234".into(),
                account_number: "1234".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "ACTION_FAILED");
        assert!(err.to_string().starts_with("Bank verification failed"));
    }

    #[test]
    fn test_from_config_reads_failures() {
        let mut config = Config::default();
        config.fail_actions = vec![ActionKind::SendOtp];
        let backend = SimulatedBackend::from_config(&config);
        assert!(backend.failing.contains(&ActionKind::SendOtp));
    }
}
