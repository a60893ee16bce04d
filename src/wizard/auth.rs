//! Login page: email login, signup and OTP verification

use crate::backend::ActionRequest;
use crate::domain::{validate_login, validate_otp_code, validate_signup, Form, Page};

use super::app::{Focus, Wizard};
use super::fields::{FieldId, Toggle};
use super::notify::Severity;

impl Wizard {
    pub(super) fn send_otp(&mut self) {
        let email = self.fields.get(FieldId::LoginEmail).trim().to_string();
        if let Some(reason) = validate_login(&email).reason {
            self.notify(reason, Severity::Error);
            return;
        }
        self.dispatch(ActionRequest::SendOtp { email });
    }

    pub(super) fn signup(&mut self) {
        let name = self.fields.get(FieldId::SignupName).trim().to_string();
        let email = self.fields.get(FieldId::SignupEmail).trim().to_string();
        let phone = self.fields.get(FieldId::SignupPhone).trim().to_string();
        let terms = self.fields.is_on(Toggle::AcceptTerms);
        if let Some(reason) = validate_signup(&name, &email, &phone, terms).reason {
            self.notify(reason, Severity::Error);
            return;
        }
        self.dispatch(ActionRequest::Signup { name, email, phone });
    }

    pub(super) fn verify_otp(&mut self) {
        let code = self.otp.code();
        if let Some(reason) = validate_otp_code(&code, self.otp.len()).reason {
            self.notify(reason, Severity::Error);
            return;
        }
        let email = self.otp_email();
        self.dispatch(ActionRequest::VerifyOtp { email, code });
    }

    /// Resend is only offered once the countdown has run out
    pub(super) fn resend_otp(&mut self) {
        if !self.countdown.resend_enabled() {
            tracing::debug!(remaining = self.countdown.remaining(), "resend not yet available");
            return;
        }
        self.notify("OTP sent again!", Severity::Success);
        self.start_countdown();
    }

    pub(super) fn otp_typed(&mut self, index: usize, ch: char) {
        self.otp.type_char(index, ch);
        self.focus = Some(Focus::OtpCell(self.otp.focus()));
    }

    pub(super) fn otp_backspace(&mut self, index: usize) {
        self.otp.backspace(index);
        self.focus = Some(Focus::OtpCell(self.otp.focus()));
    }

    pub(super) fn otp_pasted(&mut self, text: &str) {
        self.otp.paste(text);
        self.focus = Some(Focus::OtpCell(self.otp.focus()));
    }

    pub(super) fn otp_focused(&mut self, index: usize) {
        self.otp.set_focus(index);
        self.focus = Some(Focus::OtpCell(self.otp.focus()));
    }

    /// Code sent to `email`: switch to the OTP form and start the countdown
    pub(super) fn otp_sent(&mut self, email: String) {
        tracing::info!(%email, "verification code sent");
        self.fields.set(FieldId::LoginEmail, email);
        self.otp.clear();
        self.show_form(Form::Otp);
        self.start_countdown();
    }

    pub(super) fn otp_verified(&mut self, email: String) {
        tracing::info!(%email, "logged in");
        self.logged_in_as = Some(email);
        self.stop_countdown();
        self.otp.clear();
        self.notify("Login successful!", Severity::Success);
        self.show(Page::Dashboard);
    }

    /// Address the code was sent to; signup stores its email as the login email
    fn otp_email(&self) -> String {
        self.fields.get(FieldId::LoginEmail).trim().to_string()
    }
}
