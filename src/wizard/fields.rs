//! Form inputs the user can type into or toggle

use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::Form;

lazy_static::lazy_static! {
    static ref IFSC_REGEX: Regex = Regex::new(r"^([A-Z]{4})0[A-Z0-9]{6}$").unwrap();
}

/// Text input identified by a stable name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    LoginEmail,
    SignupName,
    SignupEmail,
    SignupPhone,
    PropertyName,
    City,
    PropertyType,
    Address,
    ContactEmail,
    ContactPhone,
    ChannelManagerName,
    ImageSource,
    RoomName,
    RoomAdults,
    RoomBed,
    RoomSize,
    RoomPrice,
    RoomInventory,
    RoomMealPlan,
    CheckIn,
    CheckOut,
    Cancellation,
    IfscCode,
    BankName,
    AccountNumber,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::LoginEmail => "Email",
            FieldId::SignupName => "Full name",
            FieldId::SignupEmail => "Email",
            FieldId::SignupPhone => "Phone",
            FieldId::PropertyName => "Property name",
            FieldId::City => "City",
            FieldId::PropertyType => "Property type",
            FieldId::Address => "Address",
            FieldId::ContactEmail => "Contact email",
            FieldId::ContactPhone => "Contact phone",
            FieldId::ChannelManagerName => "Channel manager",
            FieldId::ImageSource => "Image file",
            FieldId::RoomName => "Room name",
            FieldId::RoomAdults => "Max adults",
            FieldId::RoomBed => "Bed type",
            FieldId::RoomSize => "Size (sqm)",
            FieldId::RoomPrice => "Base price",
            FieldId::RoomInventory => "Inventory",
            FieldId::RoomMealPlan => "Meal plan",
            FieldId::CheckIn => "Check-in time",
            FieldId::CheckOut => "Check-out time",
            FieldId::Cancellation => "Cancellation policy",
            FieldId::IfscCode => "IFSC code",
            FieldId::BankName => "Bank name",
            FieldId::AccountNumber => "Account number",
        }
    }
}

/// Checkbox or yes/no radio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    AcceptTerms,
    ChannelManager,
    FinalTerms,
}

impl Toggle {
    pub fn label(&self) -> &'static str {
        match self {
            Toggle::AcceptTerms => "I accept the Terms & Conditions",
            Toggle::ChannelManager => "I use a channel manager",
            Toggle::FinalTerms => "I confirm the details and accept the Terms & Conditions",
        }
    }
}

/// Inputs shown on a login-page form, in tab order
pub fn fields_on_form(form: Form) -> &'static [FieldId] {
    match form {
        Form::Login => &[FieldId::LoginEmail],
        Form::Signup => &[FieldId::SignupName, FieldId::SignupEmail, FieldId::SignupPhone],
        Form::Otp => &[],
    }
}

/// Inputs shown on an onboarding step, in tab order
pub fn fields_on_step(step: usize) -> &'static [FieldId] {
    match step {
        1 => &[FieldId::PropertyName, FieldId::City],
        2 => &[
            FieldId::PropertyType,
            FieldId::Address,
            FieldId::ContactEmail,
            FieldId::ContactPhone,
            FieldId::ChannelManagerName,
            FieldId::ImageSource,
        ],
        3 => &[
            FieldId::RoomName,
            FieldId::RoomAdults,
            FieldId::RoomBed,
            FieldId::RoomSize,
            FieldId::RoomPrice,
            FieldId::RoomInventory,
            FieldId::RoomMealPlan,
        ],
        4 => &[FieldId::CheckIn, FieldId::CheckOut, FieldId::Cancellation],
        5 => &[FieldId::IfscCode, FieldId::BankName, FieldId::AccountNumber],
        _ => &[],
    }
}

/// Current values of every input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: BTreeMap<FieldId, String>,
    toggles: BTreeSet<Toggle>,
}

impl FormFields {
    /// Value of a field; empty when never set
    pub fn get(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn clear(&mut self, fields: &[FieldId]) {
        for field in fields {
            self.values.remove(field);
        }
    }

    pub fn is_on(&self, toggle: Toggle) -> bool {
        self.toggles.contains(&toggle)
    }

    pub fn set_toggle(&mut self, toggle: Toggle, on: bool) {
        if on {
            self.toggles.insert(toggle);
        } else {
            self.toggles.remove(&toggle);
        }
    }
}

/// Bank name for an IFSC code, from its four-letter bank prefix.
///
/// Codes are eleven characters: bank prefix, a literal `0`, branch code.
pub fn bank_name_for_ifsc(code: &str) -> Option<&'static str> {
    let code = code.trim().to_uppercase();
    let prefix = IFSC_REGEX.captures(&code)?.get(1)?.as_str().to_string();
    match prefix.as_str() {
        "HDFC" => Some("HDFC Bank Ltd."),
        "ICIC" => Some("ICICI Bank Ltd."),
        "SBIN" => Some("State Bank of India"),
        "UTIB" => Some("Axis Bank Ltd."),
        "KKBK" => Some("Kotak Mahindra Bank Ltd."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_field_is_empty() {
        let fields = FormFields::default();
        assert_eq!(fields.get(FieldId::LoginEmail), "");
        assert!(!fields.is_on(Toggle::AcceptTerms));
    }

    #[test]
    fn test_set_and_clear() {
        let mut fields = FormFields::default();
        fields.set(FieldId::RoomName, "Deluxe");
        fields.set(FieldId::RoomBed, "King");
        fields.clear(&[FieldId::RoomName]);
        assert_eq!(fields.get(FieldId::RoomName), "");
        assert_eq!(fields.get(FieldId::RoomBed), "King");
    }

    #[test]
    fn test_toggles() {
        let mut fields = FormFields::default();
        fields.set_toggle(Toggle::FinalTerms, true);
        assert!(fields.is_on(Toggle::FinalTerms));
        fields.set_toggle(Toggle::FinalTerms, false);
        assert!(!fields.is_on(Toggle::FinalTerms));
    }

    #[test]
    fn test_bank_name_for_ifsc() {
        assert_eq!(bank_name_for_ifsc("HDFC0001234"), Some("HDFC Bank Ltd."));
        assert_eq!(bank_name_for_ifsc(" sbin0004567 "), Some("State Bank of India"));
        assert_eq!(bank_name_for_ifsc("HDFC001234"), None);
        assert_eq!(bank_name_for_ifsc("ZZZZ0001234"), None);
    }

    #[test]
    fn test_every_step_field_list_is_unique() {
        for step in 1..=6 {
            let fields = fields_on_step(step);
            let unique: BTreeSet<_> = fields.iter().collect();
            assert_eq!(unique.len(), fields.len());
        }
    }
}
