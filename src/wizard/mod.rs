//! Onboarding wizard state, event handling and async runtime

mod app;
mod auth;
mod controls;
mod events;
mod fields;
mod lists;
mod modal;
mod notify;
mod onboarding;
mod otp;
mod runtime;


pub use app::{DashboardTab, Focus, Wizard, WizardSnapshot};
pub use controls::{ControlId, ControlState};
pub use events::{Effect, WizardEvent};
pub use fields::{bank_name_for_ifsc, fields_on_form, fields_on_step, FieldId, Toggle};
pub use lists::{image_count_label, RoomCardAction};
pub use modal::{ModalId, PropertyMatch, LEAVE_CONFIRM_TEXT};
pub use notify::{Severity, Toast};
pub use otp::{OtpCountdown, OtpInput};
pub use runtime::WizardRuntime;
