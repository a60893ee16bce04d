//! Config schema - Configuration for hostboard

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::action::ActionKind;
use crate::errors::{HostboardError, Result};

/// Fixed delays of the simulated backend, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionDelays {
    pub send_otp_ms: u64,
    pub verify_otp_ms: u64,
    pub signup_ms: u64,
    pub find_property_ms: u64,
    /// Used for both "confirm property" and "manual entry"
    pub confirm_property_ms: u64,
    pub verify_contact_ms: u64,
    pub verify_bank_ms: u64,
    pub upload_document_ms: u64,
    pub submit_property_ms: u64,
}

impl Default for ActionDelays {
    fn default() -> Self {
        ActionDelays {
            send_otp_ms: 1500,
            verify_otp_ms: 1500,
            signup_ms: 1500,
            find_property_ms: 2000,
            confirm_property_ms: 500,
            verify_contact_ms: 1500,
            verify_bank_ms: 2000,
            upload_document_ms: 500,
            submit_property_ms: 2000,
        }
    }
}

impl ActionDelays {
    /// Delay applied before an action of the given kind completes
    pub fn for_kind(&self, kind: ActionKind) -> Duration {
        let ms = match kind {
            ActionKind::SendOtp => self.send_otp_ms,
            ActionKind::VerifyOtp => self.verify_otp_ms,
            ActionKind::Signup => self.signup_ms,
            ActionKind::FindProperty => self.find_property_ms,
            ActionKind::ConfirmProperty | ActionKind::ManualEntry => self.confirm_property_ms,
            ActionKind::VerifyContact => self.verify_contact_ms,
            ActionKind::VerifyBank => self.verify_bank_ms,
            ActionKind::UploadDocument => self.upload_document_ms,
            ActionKind::SubmitProperty => self.submit_property_ms,
        };
        Duration::from_millis(ms)
    }
}

/// One-time-password settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtpConfig {
    /// Number of single-character cells
    pub code_length: usize,

    /// Seconds before "resend" becomes available
    pub countdown_seconds: u32,
}

impl Default for OtpConfig {
    fn default() -> Self {
        OtpConfig {
            code_length: 6,
            countdown_seconds: 30,
        }
    }
}

/// Main configuration for hostboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Simulated backend delays
    #[serde(default)]
    pub delays: ActionDelays,

    /// How long a notification stays visible
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// OTP cells and countdown
    #[serde(default)]
    pub otp: OtpConfig,

    /// Images required before the gallery counts as complete
    #[serde(default = "default_image_minimum")]
    pub image_minimum: usize,

    /// Actions the simulated backend should fail
    #[serde(default)]
    pub fail_actions: Vec<ActionKind>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_toast_duration_ms() -> u64 {
    3000
}

fn default_image_minimum() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            delays: ActionDelays::default(),
            toast_duration_ms: 3000,
            otp: OtpConfig::default(),
            image_minimum: 10,
            fail_actions: Vec::new(),
        }
    }
}

impl Config {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Reject values the wizard cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.otp.code_length == 0 {
            return Err(HostboardError::ConfigError(
                "otp.code_length must be at least 1".to_string(),
            ));
        }
        if self.otp.countdown_seconds == 0 {
            return Err(HostboardError::ConfigError(
                "otp.countdown_seconds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
