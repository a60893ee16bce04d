//! Interactive controls and their visual state

use std::collections::BTreeMap;

use serde::Serialize;

use crate::backend::ActionRequest;
use crate::schemas::{DocumentKind, VerifyTarget};

/// Control that triggers a backend action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ControlId {
    SendOtp,
    Signup,
    VerifyOtp,
    FindProperty,
    /// "Confirm" and "enter manually" in the property modal share one slot
    PropertyMatch,
    Verify(VerifyTarget),
    VerifyBank,
    UploadDocument(DocumentKind),
    SubmitProperty,
}

impl ControlId {
    /// Control whose pending state tracks `request`
    pub fn for_request(request: &ActionRequest) -> Self {
        match request {
            ActionRequest::SendOtp { .. } => ControlId::SendOtp,
            ActionRequest::VerifyOtp { .. } => ControlId::VerifyOtp,
            ActionRequest::Signup { .. } => ControlId::Signup,
            ActionRequest::FindProperty { .. } => ControlId::FindProperty,
            ActionRequest::ConfirmProperty | ActionRequest::ManualEntry => ControlId::PropertyMatch,
            ActionRequest::Verify { target } => ControlId::Verify(*target),
            ActionRequest::VerifyBank { .. } => ControlId::VerifyBank,
            ActionRequest::UploadDocument { kind } => ControlId::UploadDocument(*kind),
            ActionRequest::SubmitProperty { .. } => ControlId::SubmitProperty,
        }
    }

    pub fn resting_label(&self) -> &'static str {
        match self {
            ControlId::SendOtp => "Send Verification Code",
            ControlId::Signup => "Create Account",
            ControlId::VerifyOtp => "Verify & Login",
            ControlId::FindProperty => "Find My Property",
            ControlId::PropertyMatch => "Yes, this is my property",
            ControlId::Verify(_) => "Verify",
            ControlId::VerifyBank => "Verify Bank Account",
            ControlId::UploadDocument(_) => "Click to upload",
            ControlId::SubmitProperty => "Submit Property",
        }
    }

    pub fn pending_label(&self) -> &'static str {
        match self {
            ControlId::SendOtp => "Sending...",
            ControlId::Signup => "Creating...",
            ControlId::VerifyOtp | ControlId::Verify(_) | ControlId::VerifyBank => "Verifying...",
            ControlId::FindProperty => "Searching...",
            ControlId::PropertyMatch => "Loading...",
            ControlId::UploadDocument(_) => "Uploading...",
            ControlId::SubmitProperty => "Submitting...",
        }
    }

    /// Label once the control's effect is permanent, if it has one
    pub fn verified_label(&self) -> Option<&'static str> {
        match self {
            ControlId::Verify(_) => Some("✓ Verified"),
            ControlId::VerifyBank => Some("Bank Account Verified"),
            ControlId::UploadDocument(_) => Some("Document Uploaded"),
            _ => None,
        }
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControlId::SendOtp => write!(f, "send_otp"),
            ControlId::Signup => write!(f, "signup"),
            ControlId::VerifyOtp => write!(f, "verify_otp"),
            ControlId::FindProperty => write!(f, "find_property"),
            ControlId::PropertyMatch => write!(f, "property_match"),
            ControlId::Verify(target) => write!(f, "verify_{}", target),
            ControlId::VerifyBank => write!(f, "verify_bank"),
            ControlId::UploadDocument(kind) => write!(f, "upload_{}", kind),
            ControlId::SubmitProperty => write!(f, "submit_property"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlState {
    pub label: String,
    pub disabled: bool,
    pub pending: bool,
    pub verified: bool,
}

impl ControlState {
    fn resting(id: ControlId) -> Self {
        Self {
            label: id.resting_label().to_string(),
            disabled: false,
            pending: false,
            verified: false,
        }
    }
}

/// Visual state of every control that has left its resting state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    states: BTreeMap<ControlId, ControlState>,
}

impl Controls {
    pub fn get(&self, id: ControlId) -> ControlState {
        self.states
            .get(&id)
            .cloned()
            .unwrap_or_else(|| ControlState::resting(id))
    }

    pub fn is_verified(&self, id: ControlId) -> bool {
        self.states.get(&id).map(|s| s.verified).unwrap_or(false)
    }

    /// Disable the control and show its progress label
    pub fn set_pending(&mut self, id: ControlId) {
        let state = self.states.entry(id).or_insert_with(|| ControlState::resting(id));
        state.label = id.pending_label().to_string();
        state.disabled = true;
        state.pending = true;
    }

    /// Back to the resting label, keeping a verified control verified
    pub fn restore(&mut self, id: ControlId) {
        let verified = self.is_verified(id);
        if verified {
            self.mark_verified(id, None);
        } else {
            self.states.remove(&id);
        }
    }

    /// Lock the control in its verified state for the rest of the session.
    ///
    /// `detail` replaces the default verified label (e.g. an uploaded file name).
    pub fn mark_verified(&mut self, id: ControlId, detail: Option<&str>) {
        let previous = self.states.get(&id).map(|s| s.label.clone());
        let label = match (detail, id.verified_label()) {
            (Some(detail), Some(base)) => format!("{} ({})", base, detail),
            (None, Some(base)) if self.is_verified(id) => previous.unwrap_or_else(|| base.to_string()),
            (None, Some(base)) => base.to_string(),
            (_, None) => id.resting_label().to_string(),
        };
        self.states.insert(
            id,
            ControlState {
                label,
                disabled: true,
                pending: false,
                verified: true,
            },
        );
    }

    /// Forget every listed control, returning them to rest
    pub fn reset(&mut self, ids: impl IntoIterator<Item = ControlId>) {
        for id in ids {
            self.states.remove(&id);
        }
    }

    /// Controls not in their resting state, for snapshots
    pub fn changed(&self) -> impl Iterator<Item = (&ControlId, &ControlState)> {
        self.states.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_resting() {
        let controls = Controls::default();
        let state = controls.get(ControlId::FindProperty);
        assert_eq!(state.label, "Find My Property");
        assert!(!state.disabled);
        assert!(!state.pending);
    }

    #[test]
    fn test_pending_then_restore() {
        let mut controls = Controls::default();
        controls.set_pending(ControlId::SendOtp);
        let state = controls.get(ControlId::SendOtp);
        assert_eq!(state.label, "Sending...");
        assert!(state.disabled && state.pending);

        controls.restore(ControlId::SendOtp);
        assert_eq!(controls.get(ControlId::SendOtp).label, "Send Verification Code");
        assert!(!controls.get(ControlId::SendOtp).disabled);
    }

    #[test]
    fn test_verified_survives_restore() {
        let mut controls = Controls::default();
        let id = ControlId::UploadDocument(DocumentKind::Pan);
        controls.mark_verified(id, Some("pan_doc.pdf"));
        controls.restore(id);

        let state = controls.get(id);
        assert!(state.verified);
        assert_eq!(state.label, "Document Uploaded (pan_doc.pdf)");
    }

    #[test]
    fn test_verify_labels() {
        let mut controls = Controls::default();
        controls.mark_verified(ControlId::Verify(VerifyTarget::Email), None);
        controls.mark_verified(ControlId::VerifyBank, None);
        assert_eq!(controls.get(ControlId::Verify(VerifyTarget::Email)).label, "✓ Verified");
        assert_eq!(controls.get(ControlId::VerifyBank).label, "Bank Account Verified");
    }

    #[test]
    fn test_control_for_request() {
        assert_eq!(
            ControlId::for_request(&ActionRequest::ManualEntry),
            ControlId::PropertyMatch
        );
        assert_eq!(
            ControlId::for_request(&ActionRequest::ConfirmProperty),
            ControlId::PropertyMatch
        );
        assert_eq!(
            ControlId::for_request(&ActionRequest::UploadDocument { kind: DocumentKind::Gst }),
            ControlId::UploadDocument(DocumentKind::Gst)
        );
    }
}
