//! Requests sent to the backend and the outcomes they produce

use serde::{Deserialize, Serialize};

use crate::schemas::{ActionKind, DocumentKind, VerifyTarget};

/// Input of a backend action, captured when the action is triggered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionRequest {
    SendOtp { email: String },
    VerifyOtp { email: String, code: String },
    Signup { name: String, email: String, phone: String },
    FindProperty { name: String, city: String },
    ConfirmProperty,
    ManualEntry,
    Verify { target: VerifyTarget },
    VerifyBank { ifsc: String, account_number: String },
    UploadDocument { kind: DocumentKind },
    SubmitProperty { property_name: String },
}

impl ActionRequest {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionRequest::SendOtp { .. } => ActionKind::SendOtp,
            ActionRequest::VerifyOtp { .. } => ActionKind::VerifyOtp,
            ActionRequest::Signup { .. } => ActionKind::Signup,
            ActionRequest::FindProperty { .. } => ActionKind::FindProperty,
            ActionRequest::ConfirmProperty => ActionKind::ConfirmProperty,
            ActionRequest::ManualEntry => ActionKind::ManualEntry,
            ActionRequest::Verify { .. } => ActionKind::VerifyContact,
            ActionRequest::VerifyBank { .. } => ActionKind::VerifyBank,
            ActionRequest::UploadDocument { .. } => ActionKind::UploadDocument,
            ActionRequest::SubmitProperty { .. } => ActionKind::SubmitProperty,
        }
    }
}

/// Successful result of a backend action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Nothing to report beyond success
    Completed,
    /// Listing found for a property search
    PropertyMatch { name: String, location: String },
    /// Document accepted and stored under `file_name`
    DocumentStored { file_name: String },
}

/// A dispatched request, identified so late completions can be recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTicket {
    pub id: u64,
    pub request: ActionRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_kinds() {
        assert_eq!(
            ActionRequest::SendOtp { email: "a@b.com".into() }.kind(),
            ActionKind::SendOtp
        );
        assert_eq!(
            ActionRequest::Verify { target: VerifyTarget::Phone }.kind(),
            ActionKind::VerifyContact
        );
        assert_eq!(ActionRequest::ManualEntry.kind(), ActionKind::ManualEntry);
    }

    #[test]
    fn test_request_serialization_is_tagged() {
        let json = serde_json::to_value(ActionRequest::UploadDocument {
            kind: DocumentKind::Gst,
        })
        .unwrap();
        assert_eq!(json["action"], "upload_document");
        assert_eq!(json["kind"], "gst");
    }
}
