//! Domain logic for pages, forms and wizard steps

mod navigation;
mod states;
mod validation;
mod views;


pub use navigation::{StepController, StepIndicator};
pub use states::{get_step_title, Form, Page, FORMS, PAGES, TOTAL_STEPS, WIZARD_STEPS};
pub use validation::{
    otp_incomplete_message, validate_login, validate_otp_code, validate_property_search,
    validate_signup, validate_submission, ValidationResult, MSG_EMAIL_REQUIRED,
    MSG_PROPERTY_NAME_REQUIRED, MSG_SIGNUP_FIELDS_REQUIRED, MSG_TERMS_REQUIRED,
};
pub use views::ViewRegistry;
