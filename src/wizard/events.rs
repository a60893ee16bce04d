//! Inputs to the wizard and the side effects it asks its runtime for

use std::time::Duration;

use crate::backend::{ActionOutcome, ActionTicket};
use crate::domain::{Form, Page};
use crate::schemas::{DocumentKind, VerifyTarget};

use super::app::DashboardTab;
use super::fields::{FieldId, Toggle};
use super::lists::RoomCardAction;
use super::modal::ModalId;

/// Everything that can happen to the wizard: user input, backend
/// completions and timer expiries
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    // Navigation
    ShowPage(Page),
    ShowForm(Form),
    GoToStep(usize),
    NextStep,
    PreviousStep,

    // Inputs
    SetField { field: FieldId, value: String },
    SetToggle { toggle: Toggle, on: bool },
    FieldBlurred(FieldId),

    // Login page
    SendOtp,
    Signup,
    VerifyOtp,
    ResendOtp,
    OtpTyped { index: usize, ch: char },
    OtpBackspace { index: usize },
    OtpPasted(String),
    /// Cursor moved onto an OTP cell
    OtpFocused(usize),

    // Dashboard
    SelectTab(DashboardTab),
    AddProperty,

    // Onboarding chrome
    BackToDashboard,
    ConfirmLeave,
    CancelLeave,
    SaveDraft,

    // Step 1
    FindProperty,
    ConfirmProperty,
    ManualEntry,
    DismissModal(ModalId),

    // Step 2
    ToggleAmenity(String),
    AddImage { source: String },
    /// Hero image drop zone; there is no file picker behind it
    HeroImageClicked,
    Verify(VerifyTarget),

    // Step 3
    OpenRoomForm,
    CloseRoomForm,
    SaveRoom,
    RoomCard { index: usize, action: RoomCardAction },

    // Step 5
    VerifyBank,
    UploadDocument(DocumentKind),

    // Step 6 and success page
    SubmitProperty,
    AddAnotherProperty,
    GoToDashboard,

    // Runtime feedback
    ActionCompleted {
        ticket: ActionTicket,
        result: std::result::Result<ActionOutcome, String>,
    },
    CountdownTick { generation: u64 },
    ToastExpired { generation: u64 },
}

/// Work the wizard cannot do synchronously
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the request on the backend and report back with `ActionCompleted`
    Dispatch(ActionTicket),
    /// Tick once per second with `CountdownTick`, replacing any running ticker
    StartCountdown { generation: u64 },
    StopCountdown { generation: u64 },
    /// Send `ToastExpired` after the given delay
    HideToastAfter { generation: u64, after: Duration },
}
