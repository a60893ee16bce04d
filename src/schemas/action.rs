//! Action schema - the catalogue of simulated backend calls

use serde::{Deserialize, Serialize};

/// Kind of a simulated backend action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    SendOtp,
    VerifyOtp,
    Signup,
    FindProperty,
    ConfirmProperty,
    ManualEntry,
    VerifyContact,
    VerifyBank,
    UploadDocument,
    SubmitProperty,
}

impl ActionKind {
    /// Human readable name used in notifications
    pub fn title(&self) -> &'static str {
        match self {
            ActionKind::SendOtp => "Send OTP",
            ActionKind::VerifyOtp => "Verify OTP",
            ActionKind::Signup => "Signup",
            ActionKind::FindProperty => "Find property",
            ActionKind::ConfirmProperty => "Confirm property",
            ActionKind::ManualEntry => "Manual entry",
            ActionKind::VerifyContact => "Verification",
            ActionKind::VerifyBank => "Bank verification",
            ActionKind::UploadDocument => "Document upload",
            ActionKind::SubmitProperty => "Submission",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::SendOtp => "send_otp",
            ActionKind::VerifyOtp => "verify_otp",
            ActionKind::Signup => "signup",
            ActionKind::FindProperty => "find_property",
            ActionKind::ConfirmProperty => "confirm_property",
            ActionKind::ManualEntry => "manual_entry",
            ActionKind::VerifyContact => "verify_contact",
            ActionKind::VerifyBank => "verify_bank",
            ActionKind::UploadDocument => "upload_document",
            ActionKind::SubmitProperty => "submit_property",
        };
        write!(f, "{}", name)
    }
}

/// Contact detail verified from the property details step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyTarget {
    Email,
    Phone,
}

impl std::fmt::Display for VerifyTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyTarget::Email => write!(f, "email"),
            VerifyTarget::Phone => write!(f, "phone"),
        }
    }
}
