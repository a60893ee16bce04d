//! Page, form and step definitions
//!
//! The onboarding wizard follows a linear progression of six steps:
//! find property → details → rooms → policies → documents → review

use crate::errors::HostboardError;

/// Top-level page. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Login,
    Dashboard,
    Onboarding,
    Success,
}

/// Every registered page, in display order.
pub const PAGES: &[Page] = &[Page::Login, Page::Dashboard, Page::Onboarding, Page::Success];

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Page::Login => write!(f, "login"),
            Page::Dashboard => write!(f, "dashboard"),
            Page::Onboarding => write!(f, "onboarding"),
            Page::Success => write!(f, "success"),
        }
    }
}

impl std::str::FromStr for Page {
    type Err = HostboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PAGES
            .iter()
            .copied()
            .find(|page| page.to_string() == s)
            .ok_or_else(|| HostboardError::UnknownPage(s.to_string()))
    }
}

/// Form shown inside the login page. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Login,
    Signup,
    Otp,
}

/// Every registered form.
pub const FORMS: &[Form] = &[Form::Login, Form::Signup, Form::Otp];

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Form::Login => write!(f, "login"),
            Form::Signup => write!(f, "signup"),
            Form::Otp => write!(f, "otp"),
        }
    }
}

impl std::str::FromStr for Form {
    type Err = HostboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FORMS
            .iter()
            .copied()
            .find(|form| form.to_string() == s)
            .ok_or_else(|| HostboardError::UnknownForm(s.to_string()))
    }
}

/// Progress-indicator labels, indexed by step number minus one.
///
/// The length of this table is the total number of wizard steps.
pub const WIZARD_STEPS: &[&str] = &[
    "Find Property",
    "Property Details",
    "Rooms & Rates",
    "Policies",
    "Documents",
    "Review & Submit",
];

/// Total number of onboarding steps.
pub const TOTAL_STEPS: usize = WIZARD_STEPS.len();

/// Title of a 1-based step, or `None` when out of range.
pub fn get_step_title(step: usize) -> Option<&'static str> {
    step.checked_sub(1).and_then(|index| WIZARD_STEPS.get(index).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_round_trip_names() {
        for page in PAGES {
            let parsed: Page = page.to_string().parse().unwrap();
            assert_eq!(parsed, *page);
        }
    }

    #[test]
    fn test_unknown_page_is_error() {
        let err = "settings".parse::<Page>().unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_PAGE");
        assert!(err.to_string().contains("settings"));
    }

    #[test]
    fn test_unknown_form_is_error() {
        assert_eq!("otp".parse::<Form>().unwrap(), Form::Otp);
        let err = "reset".parse::<Form>().unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_FORM");
    }

    #[test]
    fn test_total_steps() {
        assert_eq!(TOTAL_STEPS, 6);
        assert_eq!(get_step_title(1), Some("Find Property"));
        assert_eq!(get_step_title(6), Some("Review & Submit"));
        assert_eq!(get_step_title(0), None);
        assert_eq!(get_step_title(7), None);
    }
}
